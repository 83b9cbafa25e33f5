// ==========================================
// 家禽杂交预测系统 - 目录数据质量校验器
// ==========================================
// 职责: 逐条校验品种记录 + 同批次主键检查
// 级别: Error 阻断导入; Warning 仅记录; Conflict 重复 id（后者覆盖前者）
// ==========================================

use crate::domain::breed::BreedTraitRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const RATING_MIN: u8 = 1;
const RATING_MAX: u8 = 5;

// ==========================================
// DqLevel - 数据质量级别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DqLevel {
    Error,    // 错误（阻断导入）
    Warning,  // 警告（允许导入）
    Conflict, // 冲突（重复 id）
}

// ==========================================
// DqViolation - 数据质量违规记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DqViolation {
    pub index: usize,             // 记录在目录数组中的位置
    pub breed_id: Option<String>, // 品种 id（非空时）
    pub level: DqLevel,
    pub field: String,
    pub message: String,
}

// ==========================================
// CatalogValidator - 目录校验器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogValidator;

impl CatalogValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验整批记录
    pub fn validate(&self, records: &[BreedTraitRecord]) -> Vec<DqViolation> {
        let mut violations = self.validate_primary_key(records);
        for (index, record) in records.iter().enumerate() {
            violations.extend(self.validate_record(index, record));
        }
        violations
    }

    /// 校验主键（id 非空且唯一）
    pub fn validate_primary_key(&self, records: &[BreedTraitRecord]) -> Vec<DqViolation> {
        let mut violations = Vec::new();
        let mut seen_ids = HashSet::new();

        for (index, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                violations.push(DqViolation {
                    index,
                    breed_id: None,
                    level: DqLevel::Error,
                    field: "id".to_string(),
                    message: "主键缺失".to_string(),
                });
                continue;
            }

            if !seen_ids.insert(record.id.as_str()) {
                violations.push(DqViolation {
                    index,
                    breed_id: Some(record.id.clone()),
                    level: DqLevel::Conflict,
                    field: "id".to_string(),
                    message: "重复品种 id（后者覆盖前者）".to_string(),
                });
            }
        }

        violations
    }

    /// 校验单条记录的字段
    pub fn validate_record(&self, index: usize, record: &BreedTraitRecord) -> Vec<DqViolation> {
        let mut check = RecordCheck::new(index, record);

        if record.name.trim().is_empty() {
            check.error("name", "品种名称为空".to_string());
        }
        if record.description.trim().is_empty() {
            check.warning("description", "品种描述为空".to_string());
        }

        let production = &record.production_traits;
        check.min_max(
            "productionTraits.eggProduction",
            production.egg_production_min as f64,
            production.egg_production_max as f64,
        );
        check.non_negative("productionTraits.eggSizeOz", production.egg_size_oz);
        check.non_negative("productionTraits.meatWeight", production.meat_weight);
        check.non_negative("productionTraits.feedConversion", production.feed_conversion);

        let behavior = &record.behavior_traits;
        check.rating("behaviorTraits.coldHardiness", behavior.cold_hardiness);
        check.rating("behaviorTraits.heatTolerance", behavior.heat_tolerance);
        check.rating("behaviorTraits.diseaseResistance", behavior.disease_resistance);

        let pricing = &record.pricing;
        check.price_band("pricing.dayOldChick", pricing.day_old_chick_min, pricing.day_old_chick_max);
        check.price_band(
            "pricing.startedPullet",
            pricing.started_pullet_min,
            pricing.started_pullet_max,
        );
        check.price_band(
            "pricing.breedingQuality",
            pricing.breeding_quality_min,
            pricing.breeding_quality_max,
        );
        if let (Some(min), Some(max)) = (pricing.show_quality_min, pricing.show_quality_max) {
            check.price_band("pricing.showQuality", min, max);
        }
        if pricing.rarity_premium.is_nan() || pricing.rarity_premium <= 0.0 {
            check.error(
                "pricing.rarityPremium",
                format!("稀缺溢价必须为正数: {}", pricing.rarity_premium),
            );
        }

        check.violations
    }
}

// 单条记录的违规收集器
struct RecordCheck<'a> {
    index: usize,
    record: &'a BreedTraitRecord,
    violations: Vec<DqViolation>,
}

impl<'a> RecordCheck<'a> {
    fn new(index: usize, record: &'a BreedTraitRecord) -> Self {
        Self {
            index,
            record,
            violations: Vec::new(),
        }
    }

    fn error(&mut self, field: &str, message: String) {
        self.push(DqLevel::Error, field, message);
    }

    fn warning(&mut self, field: &str, message: String) {
        self.push(DqLevel::Warning, field, message);
    }

    fn push(&mut self, level: DqLevel, field: &str, message: String) {
        let breed_id = if self.record.id.trim().is_empty() {
            None
        } else {
            Some(self.record.id.clone())
        };
        self.violations.push(DqViolation {
            index: self.index,
            breed_id,
            level,
            field: field.to_string(),
            message,
        });
    }

    fn non_negative(&mut self, field: &str, value: f64) {
        if !value.is_finite() || value < 0.0 {
            self.error(field, format!("数值不能为负: {}", value));
        }
    }

    fn min_max(&mut self, field: &str, min: f64, max: f64) {
        if min > max {
            self.error(field, format!("下限大于上限: {} > {}", min, max));
        }
    }

    fn price_band(&mut self, field: &str, min: f64, max: f64) {
        self.non_negative(&format!("{}Min", field), min);
        self.non_negative(&format!("{}Max", field), max);
        self.min_max(field, min, max);
    }

    fn rating(&mut self, field: &str, value: u8) {
        if !(RATING_MIN..=RATING_MAX).contains(&value) {
            self.error(
                field,
                format!("评分超出范围 [{}, {}]: {}", RATING_MIN, RATING_MAX, value),
            );
        }
    }
}
