// ==========================================
// 家禽杂交预测系统 - 引擎层
// ==========================================
// 职责: 双亲性状记录 → 子代预测（纯计算）
// 红线: 引擎不访问目录 / 缓存 / 配置
// ==========================================

pub mod behavior;
pub mod confidence;
pub mod cross_predictor;
pub mod genetics;
pub mod hybrid_vigor;
pub mod ordinal;
pub mod physical;
pub mod pricing;
pub mod production;

#[cfg(test)]
pub(crate) mod test_support;

// 重导出核心引擎
pub use behavior::BehaviorTraitPredictor;
pub use confidence::ConfidenceEstimator;
pub use cross_predictor::{calculate_cross, CrossPredictor};
pub use genetics::{egg_color_score, GeneticBreakdownCalculator};
pub use hybrid_vigor::HybridVigorEstimator;
pub use physical::PhysicalTraitPredictor;
pub use pricing::CrossPricingEstimator;
pub use production::ProductionTraitPredictor;
