// ==========================================
// 家禽杂交预测系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 装配: 配置 → 目录导入 → 缓存后端 → API
// ==========================================

use std::sync::Arc;
use tracing::{info, warn};

use crate::api::{ApiResult, BreedApi, CrossApi};
use crate::config::config_manager::{AppConfig, CacheBackend};
use crate::importer::CatalogImporter;
use crate::repository::{
    BreedCatalog, InMemoryBreedCatalog, InMemoryPredictionCache, PredictionCache,
    SqlitePredictionCache,
};

/// 应用状态
///
/// 包含所有API实例和共享资源,在 HTTP 层中以 `Arc<AppState>` 共享
pub struct AppState {
    /// 启动时的配置快照
    pub config: AppConfig,

    /// 品种目录（只读）
    pub catalog: Arc<dyn BreedCatalog>,

    /// 预测缓存（CACHE=off 时为 None）
    pub cache: Option<Arc<dyn PredictionCache>>,

    /// 品种API
    pub breed_api: Arc<BreedApi>,

    /// 杂交API
    pub cross_api: Arc<CrossApi>,
}

impl AppState {
    /// 按配置装配应用状态
    ///
    /// # 返回
    /// - Err(ApiError::ValidationError): 目录存在 Error 级违规
    /// - Err(ApiError::ImportError): 目录文件缺失或无法解析
    /// - Err(ApiError::DatabaseConnectionError): SQLite 缓存无法打开
    pub fn from_config(config: &AppConfig) -> ApiResult<Self> {
        let importer = CatalogImporter::new();
        let imported = match &config.catalog_path {
            Some(path) => importer.import_file(path)?,
            None => importer.import_embedded()?,
        };

        info!(
            batch_id = %imported.report.batch_id,
            accepted = imported.report.accepted,
            duplicates = imported.report.duplicates,
            warnings = imported.report.warnings,
            "品种目录加载完成"
        );

        let catalog: Arc<dyn BreedCatalog> = Arc::new(InMemoryBreedCatalog::new(imported.records));
        let cache = Self::build_cache(config)?;

        Ok(Self::from_parts(config.clone(), catalog, cache))
    }

    /// 由已构建的目录与缓存装配（测试与嵌入场景使用）
    pub fn from_parts(
        config: AppConfig,
        catalog: Arc<dyn BreedCatalog>,
        cache: Option<Arc<dyn PredictionCache>>,
    ) -> Self {
        let breed_api = Arc::new(BreedApi::new(catalog.clone()));
        let cross_api = Arc::new(CrossApi::new(catalog.clone(), cache.clone()));

        Self {
            config,
            catalog,
            cache,
            breed_api,
            cross_api,
        }
    }

    fn build_cache(config: &AppConfig) -> ApiResult<Option<Arc<dyn PredictionCache>>> {
        match config.cache_backend {
            CacheBackend::Off => {
                warn!("预测缓存已关闭");
                Ok(None)
            }
            CacheBackend::Memory => Ok(Some(Arc::new(InMemoryPredictionCache::new()))),
            CacheBackend::Sqlite => {
                let db_path = config.db_path.clone().unwrap_or_else(get_default_db_path);
                info!(db_path = %db_path, "使用 SQLite 预测缓存");
                Ok(Some(Arc::new(SqlitePredictionCache::new(&db_path)?)))
            }
        }
    }
}

/// 默认缓存数据库路径
///
/// 优先使用用户数据目录,取不到时回退到当前目录
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    let mut path = PathBuf::from("./poultry_cross.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("poultry-cross");
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("poultry_cross.db");
        }
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_default_db_path() {
        let path = get_default_db_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".db"));
    }

    #[test]
    fn test_from_config_uses_embedded_catalog() {
        let state = AppState::from_config(&AppConfig::default()).unwrap();
        assert_eq!(state.catalog.len().unwrap(), 30);
        assert!(state.cache.is_some());
    }

    #[test]
    fn test_cache_off_disables_cache() {
        let config = AppConfig {
            cache_backend: CacheBackend::Off,
            ..AppConfig::default()
        };
        let state = AppState::from_config(&config).unwrap();
        assert!(state.cache.is_none());
    }

    #[test]
    fn test_missing_catalog_file_is_import_error() {
        let config = AppConfig {
            catalog_path: Some("/nonexistent/breeds.json".to_string()),
            ..AppConfig::default()
        };
        let err = AppState::from_config(&config).err().unwrap();
        assert_eq!(err.code(), "IMPORT_ERROR");
    }
}
