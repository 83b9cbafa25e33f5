// ==========================================
// 家禽杂交预测系统 - 杂交预测结果
// ==========================================
// 职责: 定义预测引擎的派生输出（每次预测新建，不共享）
// ==========================================

use crate::domain::breed::{BehaviorTraits, PhysicalTraits, Pricing, ProductionTraits};
use serde::{Deserialize, Serialize};
use std::fmt;

// 遗传分解中各性状的名称
pub const TRAIT_FEATHER_COLOR: &str = "Feather Color (E-locus)";
pub const TRAIT_COMB_TYPE: &str = "Comb Type";
pub const TRAIT_SKIN_COLOR: &str = "Skin Color";
pub const TRAIT_EGG_COLOR: &str = "Egg Color";
pub const TRAIT_BODY_SIZE: &str = "Body Size";

// ==========================================
// GeneticTraitCalculation - 单个性状的遗传分解
// ==========================================
/// probability 是固定的启发式置信度，不是孟德尔概率
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticTraitCalculation {
    #[serde(rename = "trait")]
    pub trait_name: String,
    pub parent_a_contribution: String,
    pub parent_b_contribution: String,
    pub dominant_expression: String,
    pub probability: f64,
}

// ==========================================
// HybridVigor - 杂种优势
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridVigor {
    pub egg_production_boost: f64,
    pub growth_rate_boost: f64,
    pub disease_resistance_boost: f64,
    pub feed_conversion_improvement: f64,
}

// ==========================================
// CrossPredictionResult - 杂交预测结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossPredictionResult {
    pub physical_traits: PhysicalTraits,
    pub production_traits: ProductionTraits,
    pub behavior_traits: BehaviorTraits,
    pub genetic_breakdown: Vec<GeneticTraitCalculation>,
    pub hybrid_vigor: HybridVigor,
    pub estimated_pricing: Pricing,
    pub confidence_score: f64,
}

impl CrossPredictionResult {
    /// 按性状名称查找遗传分解项
    pub fn breakdown_for(&self, trait_name: &str) -> Option<&GeneticTraitCalculation> {
        self.genetic_breakdown
            .iter()
            .find(|calc| calc.trait_name == trait_name)
    }
}

// ==========================================
// CrossPairKey - 无序亲本对缓存键
// ==========================================
/// A×B 与 B×A 生成同一个键（两个 id 按字典序排序）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrossPairKey {
    lo: String,
    hi: String,
}

impl CrossPairKey {
    pub fn new(parent_a_id: &str, parent_b_id: &str) -> Self {
        if parent_a_id <= parent_b_id {
            Self {
                lo: parent_a_id.to_string(),
                hi: parent_b_id.to_string(),
            }
        } else {
            Self {
                lo: parent_b_id.to_string(),
                hi: parent_a_id.to_string(),
            }
        }
    }

    /// 字典序较小的亲本 id
    pub fn lo(&self) -> &str {
        &self.lo
    }

    /// 字典序较大的亲本 id
    pub fn hi(&self) -> &str {
        &self.hi
    }

    pub fn as_string(&self) -> String {
        format!("{}_{}", self.lo, self.hi)
    }
}

impl fmt::Display for CrossPairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.lo, self.hi)
    }
}
