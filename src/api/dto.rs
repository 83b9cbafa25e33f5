// ==========================================
// 家禽杂交预测系统 - API 数据传输对象
// ==========================================
// 序列化格式: camelCase
// ==========================================

use crate::api::error::ApiError;
use crate::domain::breed::{BreedTraitRecord, PhysicalTraits, Pricing};
use crate::domain::prediction::CrossPredictionResult;
use serde::{Deserialize, Serialize};

// ==========================================
// 杂交计算请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossCalculationRequest {
    pub parent_a_id: String,
    pub parent_b_id: String,
}

impl CrossCalculationRequest {
    pub fn new(parent_a_id: impl Into<String>, parent_b_id: impl Into<String>) -> Self {
        Self {
            parent_a_id: parent_a_id.into(),
            parent_b_id: parent_b_id.into(),
        }
    }
}

// ==========================================
// 亲本摘要
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentSummary {
    pub id: String,
    pub name: String,
    pub physical_traits: PhysicalTraits,
    pub pricing: Pricing,
}

impl From<&BreedTraitRecord> for ParentSummary {
    fn from(record: &BreedTraitRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            physical_traits: record.physical_traits.clone(),
            pricing: record.pricing.clone(),
        }
    }
}

// ==========================================
// 杂交预测（亲本摘要 + 子代）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossPrediction {
    pub parent_a: ParentSummary,
    pub parent_b: ParentSummary,
    pub offspring: CrossPredictionResult,
    pub cached: bool, // 是否来自缓存
}

// ==========================================
// 杂交计算响应信封
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossCalculationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<CrossPrediction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CrossCalculationResponse {
    pub fn ok(prediction: CrossPrediction) -> Self {
        Self {
            success: true,
            prediction: Some(prediction),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            prediction: None,
            error: Some(message.into()),
        }
    }
}

// ==========================================
// 品种搜索参数
// ==========================================
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BreedSearchQuery {
    pub q: Option<String>,
}

// ==========================================
// 错误响应
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}
