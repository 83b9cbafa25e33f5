// ==========================================
// 家禽杂交预测系统 - 杂交 API
// ==========================================
// 流程: 校验请求 → 查缓存 → 解析亲本 → 预测 → 写缓存
// 缓存: 可选; 读写失败只记录告警,不影响预测结果
// ==========================================

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::api::dto::{CrossCalculationRequest, CrossCalculationResponse, CrossPrediction};
use crate::api::error::{ApiError, ApiResult};
use crate::domain::breed::BreedTraitRecord;
use crate::domain::prediction::{CrossPairKey, CrossPredictionResult};
use crate::engine::CrossPredictor;
use crate::i18n::{t, t_with_args};
use crate::perf::PerfGuard;
use crate::repository::breed_catalog::BreedCatalog;
use crate::repository::prediction_cache::PredictionCache;

// ==========================================
// CrossApi - 杂交 API
// ==========================================
pub struct CrossApi {
    catalog: Arc<dyn BreedCatalog>,
    cache: Option<Arc<dyn PredictionCache>>,
    predictor: CrossPredictor,
}

impl CrossApi {
    /// 创建新的CrossApi实例
    ///
    /// # 参数
    /// - catalog: 品种目录
    /// - cache: 预测缓存（None 表示不缓存）
    pub fn new(catalog: Arc<dyn BreedCatalog>, cache: Option<Arc<dyn PredictionCache>>) -> Self {
        Self {
            catalog,
            cache,
            predictor: CrossPredictor::new(),
        }
    }

    /// 计算杂交预测
    ///
    /// # 返回
    /// - Err(ApiError::InvalidInput): 亲本 id 为空
    /// - Err(ApiError::NotFound): 任一亲本不存在
    #[instrument(skip(self, request), fields(
        parent_a = %request.parent_a_id,
        parent_b = %request.parent_b_id
    ))]
    pub fn calculate(&self, request: &CrossCalculationRequest) -> ApiResult<CrossPrediction> {
        Self::validate_request(request)?;

        let key = CrossPairKey::new(&request.parent_a_id, &request.parent_b_id);

        if let Some(cached) = self.cached_result(&key) {
            let (parent_a, parent_b) = self.resolve_parents(request)?;
            info!(pair_key = %key, "命中预测缓存");
            return Ok(CrossPrediction {
                parent_a: (&parent_a).into(),
                parent_b: (&parent_b).into(),
                offspring: cached,
                cached: true,
            });
        }

        let (parent_a, parent_b) = self.resolve_parents(request)?;

        let offspring = {
            let _perf = PerfGuard::new("calculate_cross");
            self.predictor.calculate_cross(&parent_a, &parent_b)
        };

        self.store_result(&request.parent_a_id, &request.parent_b_id, &offspring);

        Ok(CrossPrediction {
            parent_a: (&parent_a).into(),
            parent_b: (&parent_b).into(),
            offspring,
            cached: false,
        })
    }

    /// 计算并包装为响应信封
    pub fn respond(&self, request: &CrossCalculationRequest) -> CrossCalculationResponse {
        Self::into_envelope(self.calculate(request))
    }

    /// 计算结果统一转为响应信封（失败时记录告警）
    pub fn into_envelope(outcome: ApiResult<CrossPrediction>) -> CrossCalculationResponse {
        match outcome {
            Ok(prediction) => CrossCalculationResponse::ok(prediction),
            Err(err) => {
                warn!(error = %err, code = err.code(), "杂交计算失败");
                CrossCalculationResponse::failure(Self::envelope_message(&err))
            }
        }
    }

    /// 信封中返回给调用方的本地化消息
    pub fn envelope_message(err: &ApiError) -> String {
        match err {
            ApiError::NotFound(_) => t("cross.parents_not_found"),
            ApiError::InvalidInput(_) | ApiError::ValidationError(_) => t("cross.invalid_request"),
            _ => t("cross.calculation_failed"),
        }
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    fn validate_request(request: &CrossCalculationRequest) -> ApiResult<()> {
        for (field, value) in [
            ("parentAId", &request.parent_a_id),
            ("parentBId", &request.parent_b_id),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::InvalidInput(t_with_args(
                    "cross.parent_id_required",
                    &[("field", field)],
                )));
            }
        }
        Ok(())
    }

    fn resolve_parents(
        &self,
        request: &CrossCalculationRequest,
    ) -> ApiResult<(BreedTraitRecord, BreedTraitRecord)> {
        let parent_a = self.catalog.get_breed_by_id(&request.parent_a_id)?;
        let parent_b = self.catalog.get_breed_by_id(&request.parent_b_id)?;

        match (parent_a, parent_b) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(ApiError::NotFound(t("cross.parents_not_found"))),
        }
    }

    fn cached_result(&self, key: &CrossPairKey) -> Option<CrossPredictionResult> {
        let cache = self.cache.as_ref()?;
        match cache.get(key) {
            Ok(hit) => hit.map(|cached| cached.result),
            Err(e) => {
                warn!(pair_key = %key, error = %e, "读取预测缓存失败");
                None
            }
        }
    }

    fn store_result(&self, parent_a_id: &str, parent_b_id: &str, result: &CrossPredictionResult) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };
        if let Err(e) = cache.put(parent_a_id, parent_b_id, result) {
            warn!(parent_a = %parent_a_id, parent_b = %parent_b_id, error = %e, "写入预测缓存失败");
        }
    }
}
