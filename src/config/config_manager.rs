// ==========================================
// 家禽杂交预测系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、快照
// 来源: 环境变量 (from_env) 或显式键值对 (from_pairs)
// 红线: 非法取值报错,不静默回退默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },

    #[error("配置快照序列化失败: {0}")]
    SnapshotError(#[from] serde_json::Error),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// CacheBackend - 预测缓存后端
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    Memory, // 进程内
    Sqlite, // SQLite 文件
    Off,    // 不缓存
}

impl CacheBackend {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Some(CacheBackend::Memory),
            "sqlite" => Some(CacheBackend::Sqlite),
            "off" | "none" => Some(CacheBackend::Off),
            _ => None,
        }
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheBackend::Memory => write!(f, "memory"),
            CacheBackend::Sqlite => write!(f, "sqlite"),
            CacheBackend::Off => write!(f, "off"),
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: BTreeMap<String, String>,
}

impl ConfigManager {
    /// 从环境变量读取全部已知配置键
    pub fn from_env() -> Self {
        let values = config_keys::ALL
            .iter()
            .filter_map(|key| std::env::var(key).ok().map(|v| (key.to_string(), v)))
            .collect();
        Self { values }
    }

    /// 从显式键值对创建（测试 / 嵌入使用）
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }

    /// 读取配置值（空白视为未设置）
    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// 读取配置值，带默认值
    pub fn get_config_or_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_config_value(key).unwrap_or(default)
    }

    /// 获取已设置配置的快照（JSON格式）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(&self.values)?)
    }
}

// ==========================================
// AppConfig - 类型化配置快照
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_path: Option<String>, // None → 内置目录
    pub cache_backend: CacheBackend,
    pub db_path: Option<String>, // None → 用户数据目录
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            catalog_path: None,
            cache_backend: CacheBackend::Memory,
            db_path: None,
            locale: defaults::LOCALE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(manager: &ConfigManager) -> ConfigResult<Self> {
        let port = match manager.get_config_value(config_keys::PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: config_keys::PORT.to_string(),
                value: raw.to_string(),
                message: e.to_string(),
            })?,
            None => defaults::PORT,
        };

        let cache_backend = match manager.get_config_value(config_keys::CACHE) {
            Some(raw) => CacheBackend::from_str(raw).ok_or_else(|| ConfigError::InvalidValue {
                key: config_keys::CACHE.to_string(),
                value: raw.to_string(),
                message: "期望 memory / sqlite / off".to_string(),
            })?,
            None => CacheBackend::Memory,
        };

        let locale = manager.get_config_or_default(config_keys::LOCALE, defaults::LOCALE);
        if !defaults::SUPPORTED_LOCALES.contains(&locale) {
            return Err(ConfigError::InvalidValue {
                key: config_keys::LOCALE.to_string(),
                value: locale.to_string(),
                message: format!("支持的语言: {}", defaults::SUPPORTED_LOCALES.join(", ")),
            });
        }

        Ok(Self {
            host: manager
                .get_config_or_default(config_keys::HOST, defaults::HOST)
                .to_string(),
            port,
            catalog_path: manager
                .get_config_value(config_keys::CATALOG_PATH)
                .map(str::to_string),
            cache_backend,
            db_path: manager.get_config_value(config_keys::DB_PATH).map(str::to_string),
            locale: locale.to_string(),
        })
    }

    /// 监听地址 host:port
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 服务监听
    pub const PORT: &str = "PORT";
    pub const HOST: &str = "POULTRY_CROSS_HOST";

    // 数据来源
    pub const CATALOG_PATH: &str = "POULTRY_CROSS_CATALOG_PATH";

    // 预测缓存
    pub const CACHE: &str = "POULTRY_CROSS_CACHE";
    pub const DB_PATH: &str = "POULTRY_CROSS_DB_PATH";

    // 界面语言
    pub const LOCALE: &str = "POULTRY_CROSS_LOCALE";

    pub const ALL: &[&str] = &[PORT, HOST, CATALOG_PATH, CACHE, DB_PATH, LOCALE];
}

pub mod defaults {
    pub const PORT: u16 = 5000;
    pub const HOST: &str = "0.0.0.0";
    pub const LOCALE: &str = "en";
    pub const SUPPORTED_LOCALES: &[&str] = &["en", "zh-CN"];
}
