// ==========================================
// 家禽杂交预测系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含预测逻辑
// ==========================================
// 职责: 品种目录查找 + 预测缓存存取
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

pub mod breed_catalog;
pub mod error;
pub mod prediction_cache;
pub mod sqlite_prediction_cache;

// 重导出核心仓储
pub use breed_catalog::{BreedCatalog, InMemoryBreedCatalog};
pub use error::{RepositoryError, RepositoryResult};
pub use prediction_cache::{CachedPrediction, InMemoryPredictionCache, PredictionCache};
pub use sqlite_prediction_cache::SqlitePredictionCache;
