// ==========================================
// 家禽杂交预测系统 - 品种性状记录
// ==========================================
// 职责: 定义品种目录中的记录结构（只读）
// 序列化格式: camelCase（与目录 JSON 一致）
// ==========================================

use crate::domain::types::{
    AbilityLevel, BodySize, Broodiness, BreedCategory, CombType, ConservationStatus, Dominance,
    Temperament,
};
use serde::{Deserialize, Serialize};

// ==========================================
// BreedTraitRecord - 品种性状记录
// ==========================================
/// 品种目录中的一条记录
///
/// 进程启动时从目录加载一次，之后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedTraitRecord {
    pub id: String,
    pub name: String,
    pub category: BreedCategory,
    pub origin: String,
    #[serde(default)]
    pub description: String,
    pub conservation_status: ConservationStatus,
    pub physical_traits: PhysicalTraits,
    pub production_traits: ProductionTraits,
    pub behavior_traits: BehaviorTraits,
    #[serde(default)]
    pub genetic_traits: Vec<GeneticTrait>,
    pub pricing: Pricing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_exotic: bool,
}

// ==========================================
// PhysicalTraits - 外观性状
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalTraits {
    pub feather_color: String,
    pub comb_type: CombType,
    pub body_size: BodySize,
    pub leg_color: String,
    pub skin_color: String,
    pub egg_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

// ==========================================
// ProductionTraits - 生产性状
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionTraits {
    pub egg_production_min: u32, // 年产蛋量下限（枚）
    pub egg_production_max: u32, // 年产蛋量上限（枚）
    pub egg_size_oz: f64,        // 蛋重（盎司）
    pub meat_weight: f64,        // 体重（磅）
    pub feed_conversion: f64,    // 料肉比（越低越好）
    pub broodiness: Broodiness,
    pub maturity_weeks: u32, // 开产周龄
}

// ==========================================
// BehaviorTraits - 行为与适应性状
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorTraits {
    pub temperament: Temperament,
    pub cold_hardiness: u8,     // 1-5
    pub heat_tolerance: u8,     // 1-5
    pub foraging: AbilityLevel,
    pub confinement_tolerance: AbilityLevel,
    pub disease_resistance: u8, // 1-5
}

// ==========================================
// Pricing - 价格区间
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub day_old_chick_min: f64,
    pub day_old_chick_max: f64,
    pub started_pullet_min: f64,
    pub started_pullet_max: f64,
    pub breeding_quality_min: f64,
    pub breeding_quality_max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_quality_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_quality_max: Option<f64>,
    #[serde(default = "default_rarity_premium")]
    pub rarity_premium: f64,
}

fn default_rarity_premium() -> f64 {
    1.0
}

// ==========================================
// GeneticTrait - 目录中的已知基因位点
// ==========================================
/// 目录附带的位点说明，仅供展示，不参与杂交计算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticTrait {
    pub gene: String,
    pub allele1: String,
    pub allele2: String,
    pub dominance: Dominance,
    pub expression: String,
}
