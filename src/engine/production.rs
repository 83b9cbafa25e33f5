// ==========================================
// 家禽杂交预测系统 - 生产性状预测
// ==========================================
// 规则: 双亲算术平均 + 固定系数
// - 产蛋量: 平均 × 1.15 取整（基础产量内含 15% 杂种优势,与 HybridVigor 分开报告）
// - 料肉比: 平均 × 0.9
// - 开产周龄: 平均 × 0.95 取整
// ==========================================

use crate::domain::breed::{BreedTraitRecord, ProductionTraits};
use crate::engine::ordinal;

pub const EGG_PRODUCTION_FACTOR: f64 = 1.15;
pub const FEED_CONVERSION_FACTOR: f64 = 0.9;
pub const MATURITY_FACTOR: f64 = 0.95;

fn mean(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProductionTraitPredictor;

impl ProductionTraitPredictor {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(&self, parent_a: &BreedTraitRecord, parent_b: &BreedTraitRecord) -> ProductionTraits {
        let a = &parent_a.production_traits;
        let b = &parent_b.production_traits;

        let boosted = |x: u32, y: u32| {
            (mean(x as f64, y as f64) * EGG_PRODUCTION_FACTOR).round() as u32
        };

        ProductionTraits {
            egg_production_min: boosted(a.egg_production_min, b.egg_production_min),
            egg_production_max: boosted(a.egg_production_max, b.egg_production_max),
            egg_size_oz: mean(a.egg_size_oz, b.egg_size_oz),
            meat_weight: mean(a.meat_weight, b.meat_weight),
            feed_conversion: mean(a.feed_conversion, b.feed_conversion) * FEED_CONVERSION_FACTOR,
            broodiness: ordinal::blend(a.broodiness, b.broodiness),
            maturity_weeks: (mean(a.maturity_weeks as f64, b.maturity_weeks as f64)
                * MATURITY_FACTOR)
                .round() as u32,
        }
    }
}
