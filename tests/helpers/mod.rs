// ==========================================
// 集成测试公共辅助
// ==========================================

#![allow(dead_code)]

pub mod breed_builder;

use std::sync::Arc;

use poultry_cross::app::AppState;
use poultry_cross::config::AppConfig;
use poultry_cross::domain::breed::BreedTraitRecord;
use poultry_cross::importer::CatalogImporter;
use poultry_cross::repository::{
    BreedCatalog, InMemoryBreedCatalog, InMemoryPredictionCache, PredictionCache,
};

pub use breed_builder::BreedBuilder;

/// 内置目录（30 个品种）
pub fn embedded_catalog() -> Arc<dyn BreedCatalog> {
    let imported = CatalogImporter::new()
        .import_embedded()
        .expect("内置目录应能导入");
    Arc::new(InMemoryBreedCatalog::new(imported.records))
}

/// 由给定记录构建目录
pub fn catalog_of(records: Vec<BreedTraitRecord>) -> Arc<dyn BreedCatalog> {
    Arc::new(InMemoryBreedCatalog::new(records))
}

/// 内置目录 + 内存缓存的应用状态
pub fn memory_state() -> (Arc<AppState>, Arc<InMemoryPredictionCache>) {
    let cache = Arc::new(InMemoryPredictionCache::new());
    let state = AppState::from_parts(
        AppConfig::default(),
        embedded_catalog(),
        Some(cache.clone() as Arc<dyn PredictionCache>),
    );
    (Arc::new(state), cache)
}
