// ==========================================
// 家禽杂交预测系统 - 品种目录导入器
// ==========================================
// 职责: JSON 目录 → 校验后的品种记录
// 流程: 解析 → DQ 校验 → 去重（后者覆盖前者）
// 红线: 任一 Error 级违规阻断整批导入
// ==========================================

use crate::domain::breed::BreedTraitRecord;
use crate::importer::dq_validator::{CatalogValidator, DqLevel, DqViolation};
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// 随程序发布的默认品种目录
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/breeds.json");

// ==========================================
// ImportReport - 导入报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub batch_id: String,
    pub total_records: usize,         // 解析出的记录数
    pub accepted: usize,              // 去重后保留的记录数
    pub duplicates: usize,            // 被覆盖的重复记录数
    pub warnings: usize,              // Warning 级违规数
    pub violations: Vec<DqViolation>, // 违规明细（不含 Error,出现 Error 时直接失败）
    pub elapsed_ms: u64,
}

/// 导入结果: 记录 + 报告
#[derive(Debug, Clone)]
pub struct ImportedCatalog {
    pub records: Vec<BreedTraitRecord>,
    pub report: ImportReport,
}

// ==========================================
// CatalogImporter - 目录导入器
// ==========================================
#[derive(Debug, Default, Clone)]
pub struct CatalogImporter {
    validator: CatalogValidator,
}

impl CatalogImporter {
    pub fn new() -> Self {
        Self {
            validator: CatalogValidator::new(),
        }
    }

    /// 导入内置目录
    pub fn import_embedded(&self) -> ImportResult<ImportedCatalog> {
        self.import_str(EMBEDDED_CATALOG)
    }

    /// 从 JSON 文件导入
    pub fn import_file<P: AsRef<Path>>(&self, path: P) -> ImportResult<ImportedCatalog> {
        let path = path.as_ref();
        info!(path = %path.display(), "开始导入品种目录文件");
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        self.import_str(&content)
    }

    /// 从 JSON 字符串导入
    pub fn import_str(&self, json: &str) -> ImportResult<ImportedCatalog> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        // === 步骤 1: 解析 ===
        let parsed: Vec<BreedTraitRecord> = serde_json::from_str(json)?;
        let total_records = parsed.len();
        debug!(batch_id = %batch_id, total_records, "目录解析完成");

        if parsed.is_empty() {
            return Err(ImportError::EmptyCatalog);
        }

        // === 步骤 2: DQ 校验 ===
        let violations = self.validator.validate(&parsed);
        let error_count = violations
            .iter()
            .filter(|v| v.level == DqLevel::Error)
            .count();
        if error_count > 0 {
            for violation in violations.iter().filter(|v| v.level == DqLevel::Error) {
                warn!(
                    index = violation.index,
                    breed_id = ?violation.breed_id,
                    field = %violation.field,
                    message = %violation.message,
                    "目录记录校验失败"
                );
            }
            return Err(ImportError::ValidationFailed {
                error_count,
                violations,
            });
        }

        for violation in &violations {
            warn!(
                index = violation.index,
                breed_id = ?violation.breed_id,
                level = ?violation.level,
                message = %violation.message,
                "目录记录告警"
            );
        }

        // === 步骤 3: 去重 ===
        let records = Self::dedupe_last_wins(parsed);
        let duplicates = total_records - records.len();
        let warnings = violations
            .iter()
            .filter(|v| v.level == DqLevel::Warning)
            .count();

        let report = ImportReport {
            batch_id,
            total_records,
            accepted: records.len(),
            duplicates,
            warnings,
            violations,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            batch_id = %report.batch_id,
            accepted = report.accepted,
            duplicates = report.duplicates,
            "品种目录导入完成"
        );

        Ok(ImportedCatalog { records, report })
    }

    /// 按 id 去重: 保留首次出现的位置,内容取最后一次出现
    fn dedupe_last_wins(records: Vec<BreedTraitRecord>) -> Vec<BreedTraitRecord> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut unique: Vec<BreedTraitRecord> = Vec::with_capacity(records.len());

        for record in records {
            match positions.get(&record.id) {
                Some(&pos) => unique[pos] = record,
                None => {
                    positions.insert(record.id.clone(), unique.len());
                    unique.push(record);
                }
            }
        }

        unique
    }
}
