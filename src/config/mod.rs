// ==========================================
// 家禽杂交预测系统 - 配置层
// ==========================================
// 职责: 运行配置管理（环境变量 → 类型化配置）
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{
    config_keys, defaults, AppConfig, CacheBackend, ConfigError, ConfigManager, ConfigResult,
};
