// ==========================================
// 家禽杂交预测系统 - 核心库
// ==========================================
// 技术栈: Rust + axum + SQLite
// 系统定位: 品种杂交预测（表型 / 生产 / 行为 / 价格）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 品种记录与预测结果
pub mod domain;

// 数据仓储层 - 品种目录与预测缓存
pub mod repository;

// 引擎层 - 杂交预测规则
pub mod engine;

// 导入层 - 品种目录 JSON
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 性能计时
pub mod perf;

// API 层 - 业务接口
pub mod api;

// 应用层 - 装配与 HTTP
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    AbilityLevel, BodySize, Broodiness, BreedCategory, CombType, ConservationStatus, Dominance,
    Temperament,
};

// 领域实体
pub use domain::{BreedTraitRecord, CrossPairKey, CrossPredictionResult, HybridVigor};

// 引擎
pub use engine::{calculate_cross, CrossPredictor};

// API
pub use api::{BreedApi, CrossApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "家禽杂交预测系统";
