// ==========================================
// 家禽杂交预测系统 - 领域模型层
// ==========================================
// 职责: 定义品种记录、有序性状枚举、预测结果
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod breed;
pub mod prediction;
pub mod types;

// 重导出核心类型
pub use breed::{BehaviorTraits, BreedTraitRecord, GeneticTrait, PhysicalTraits, Pricing, ProductionTraits};
pub use prediction::{CrossPairKey, CrossPredictionResult, GeneticTraitCalculation, HybridVigor};
pub use types::{
    AbilityLevel, BodySize, Broodiness, BreedCategory, CombType, ConservationStatus, Dominance,
    OrdinalScale, Temperament,
};
