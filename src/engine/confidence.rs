// ==========================================
// 家禽杂交预测系统 - 置信度估算
// ==========================================
// 基准 0.8
// 每个 common 亲本 +0.1; 任一外来品种 -0.2; 同类别 +0.1
// 最终截断到 [0.3, 1.0]
// ==========================================

use crate::domain::breed::BreedTraitRecord;
use crate::domain::types::ConservationStatus;

pub const BASE_CONFIDENCE: f64 = 0.8;
pub const MIN_CONFIDENCE: f64 = 0.3;
pub const MAX_CONFIDENCE: f64 = 1.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct ConfidenceEstimator;

impl ConfidenceEstimator {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate(&self, parent_a: &BreedTraitRecord, parent_b: &BreedTraitRecord) -> f64 {
        let mut confidence = BASE_CONFIDENCE;

        if parent_a.conservation_status == ConservationStatus::Common {
            confidence += 0.1;
        }
        if parent_b.conservation_status == ConservationStatus::Common {
            confidence += 0.1;
        }
        if parent_a.is_exotic || parent_b.is_exotic {
            confidence -= 0.2;
        }
        if parent_a.category == parent_b.category {
            confidence += 0.1;
        }

        confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
    }
}
