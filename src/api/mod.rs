// ==========================================
// 家禽杂交预测系统 - API层
// ==========================================
// 职责: 业务接口,连接 HTTP 层与目录 / 缓存 / 引擎
// ==========================================

pub mod breed_api;
pub mod cross_api;
pub mod dto;
pub mod error;

pub use breed_api::BreedApi;
pub use cross_api::CrossApi;
pub use dto::{
    BreedSearchQuery, CrossCalculationRequest, CrossCalculationResponse, CrossPrediction,
    ErrorResponse, ParentSummary,
};
pub use error::{ApiError, ApiResult};
