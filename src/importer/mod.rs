// ==========================================
// 家禽杂交预测系统 - 导入层
// ==========================================
// 职责: 外部品种目录导入,生成只读品种记录
// 支持: 内置 JSON 目录, JSON 文件
// ==========================================

// 模块声明
pub mod catalog_importer;
pub mod dq_validator;
pub mod error;

// 重导出核心类型
pub use catalog_importer::{CatalogImporter, ImportReport, ImportedCatalog, EMBEDDED_CATALOG};
pub use dq_validator::{CatalogValidator, DqLevel, DqViolation};
pub use error::{ImportError, ImportResult};
