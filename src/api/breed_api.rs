// ==========================================
// 家禽杂交预测系统 - 品种 API
// ==========================================
// 职责: 品种目录查询（只读）
// ==========================================

use std::sync::Arc;
use tracing::debug;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::breed::BreedTraitRecord;
use crate::i18n::t;
use crate::repository::breed_catalog::BreedCatalog;

// ==========================================
// BreedApi - 品种 API
// ==========================================
pub struct BreedApi {
    catalog: Arc<dyn BreedCatalog>,
}

impl BreedApi {
    /// 创建新的BreedApi实例
    pub fn new(catalog: Arc<dyn BreedCatalog>) -> Self {
        Self { catalog }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 全部品种（按名称排序）
    pub fn list_breeds(&self) -> ApiResult<Vec<BreedTraitRecord>> {
        Ok(self.catalog.list_breeds()?)
    }

    /// 按 id 查询单个品种
    ///
    /// # 返回
    /// - Err(ApiError::NotFound): 品种不存在
    pub fn get_breed(&self, id: &str) -> ApiResult<BreedTraitRecord> {
        self.catalog
            .get_breed_by_id(id)?
            .ok_or_else(|| ApiError::NotFound(t("breed.not_found")))
    }

    /// 搜索品种
    ///
    /// # 返回
    /// - Err(ApiError::InvalidInput): 关键词为空
    pub fn search_breeds(&self, query: &str) -> ApiResult<Vec<BreedTraitRecord>> {
        if query.trim().is_empty() {
            return Err(ApiError::InvalidInput(t("breed.search_query_required")));
        }
        let breeds = self.catalog.search_breeds(query)?;
        debug!(query = %query, count = breeds.len(), "品种搜索完成");
        Ok(breeds)
    }

    /// 按类别查询（未知类别返回空列表）
    pub fn list_by_category(&self, category: &str) -> ApiResult<Vec<BreedTraitRecord>> {
        Ok(self.catalog.list_breeds_by_category(category)?)
    }

    /// 目录中出现的全部类别
    pub fn list_categories(&self) -> ApiResult<Vec<String>> {
        Ok(self.catalog.categories()?)
    }
}
