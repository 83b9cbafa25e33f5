// ==========================================
// 家禽杂交预测系统 - 领域类型定义
// ==========================================
// 职责: 品种记录中的枚举字段（类别 / 保种等级 / 冠型 / 体型 / 有序性状）
// 红线: 有序性状是"等级制",等级值固定为 1..N
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 有序量表 (Ordinal Scale)
// ==========================================
// 体型 / 就巢性 / 性情 / 觅食能力 / 圈养耐受 共用
pub trait OrdinalScale: Copy + 'static {
    /// 按等级升序排列的全部取值
    const LEVELS: &'static [Self];

    /// 等级值（从 1 开始）
    fn rank(self) -> u8;
}

// ==========================================
// 品种类别 (Breed Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreedCategory {
    Layer,       // 蛋用
    DualPurpose, // 兼用
    Meat,        // 肉用
    Ornamental,  // 观赏
    Egg,         // 蛋用（旧口径）
    Dual,        // 兼用（旧口径）
}

impl BreedCategory {
    /// 从字符串解析类别（未知值返回 None）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "layer" => Some(BreedCategory::Layer),
            "dual-purpose" => Some(BreedCategory::DualPurpose),
            "meat" => Some(BreedCategory::Meat),
            "ornamental" => Some(BreedCategory::Ornamental),
            "egg" => Some(BreedCategory::Egg),
            "dual" => Some(BreedCategory::Dual),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BreedCategory::Layer => "layer",
            BreedCategory::DualPurpose => "dual-purpose",
            BreedCategory::Meat => "meat",
            BreedCategory::Ornamental => "ornamental",
            BreedCategory::Egg => "egg",
            BreedCategory::Dual => "dual",
        }
    }
}

impl fmt::Display for BreedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 保种等级 (Conservation Status)
// ==========================================
// 顺序: Common < Uncommon / Watch < Rare < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConservationStatus {
    Common,
    Uncommon,
    Watch,
    Rare,
    Critical,
}

impl ConservationStatus {
    /// 稀有度等级（Uncommon 与 Watch 同级）
    pub fn rarity_rank(self) -> u8 {
        match self {
            ConservationStatus::Common => 1,
            ConservationStatus::Uncommon | ConservationStatus::Watch => 2,
            ConservationStatus::Rare => 3,
            ConservationStatus::Critical => 4,
        }
    }
}

impl fmt::Display for ConservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConservationStatus::Common => write!(f, "common"),
            ConservationStatus::Uncommon => write!(f, "uncommon"),
            ConservationStatus::Watch => write!(f, "watch"),
            ConservationStatus::Rare => write!(f, "rare"),
            ConservationStatus::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 冠型 (Comb Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CombType {
    Single,
    Rose,
    Pea,
    Walnut,
    Buttercup,
    VShaped,
}

impl fmt::Display for CombType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombType::Single => write!(f, "single"),
            CombType::Rose => write!(f, "rose"),
            CombType::Pea => write!(f, "pea"),
            CombType::Walnut => write!(f, "walnut"),
            CombType::Buttercup => write!(f, "buttercup"),
            CombType::VShaped => write!(f, "v-shaped"),
        }
    }
}

// ==========================================
// 体型 (Body Size)
// ==========================================
// 顺序: Small < Medium < Large < Giant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodySize {
    Small,
    Medium,
    Large,
    Giant,
}

impl OrdinalScale for BodySize {
    const LEVELS: &'static [Self] = &[
        BodySize::Small,
        BodySize::Medium,
        BodySize::Large,
        BodySize::Giant,
    ];

    fn rank(self) -> u8 {
        match self {
            BodySize::Small => 1,
            BodySize::Medium => 2,
            BodySize::Large => 3,
            BodySize::Giant => 4,
        }
    }
}

impl fmt::Display for BodySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodySize::Small => write!(f, "small"),
            BodySize::Medium => write!(f, "medium"),
            BodySize::Large => write!(f, "large"),
            BodySize::Giant => write!(f, "giant"),
        }
    }
}

// ==========================================
// 就巢性 (Broodiness)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Broodiness {
    Low,
    Moderate,
    High,
}

impl OrdinalScale for Broodiness {
    const LEVELS: &'static [Self] = &[Broodiness::Low, Broodiness::Moderate, Broodiness::High];

    fn rank(self) -> u8 {
        match self {
            Broodiness::Low => 1,
            Broodiness::Moderate => 2,
            Broodiness::High => 3,
        }
    }
}

impl fmt::Display for Broodiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Broodiness::Low => write!(f, "low"),
            Broodiness::Moderate => write!(f, "moderate"),
            Broodiness::High => write!(f, "high"),
        }
    }
}

// ==========================================
// 性情 (Temperament)
// ==========================================
// 顺序: Docile < Calm < Active < Aggressive < Flighty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperament {
    Docile,
    Calm,
    Active,
    Aggressive,
    Flighty,
}

impl OrdinalScale for Temperament {
    const LEVELS: &'static [Self] = &[
        Temperament::Docile,
        Temperament::Calm,
        Temperament::Active,
        Temperament::Aggressive,
        Temperament::Flighty,
    ];

    fn rank(self) -> u8 {
        match self {
            Temperament::Docile => 1,
            Temperament::Calm => 2,
            Temperament::Active => 3,
            Temperament::Aggressive => 4,
            Temperament::Flighty => 5,
        }
    }
}

impl fmt::Display for Temperament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperament::Docile => write!(f, "docile"),
            Temperament::Calm => write!(f, "calm"),
            Temperament::Active => write!(f, "active"),
            Temperament::Aggressive => write!(f, "aggressive"),
            Temperament::Flighty => write!(f, "flighty"),
        }
    }
}

// ==========================================
// 能力等级 (Ability Level)
// ==========================================
// 觅食能力与圈养耐受共用: Poor < Moderate < Excellent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityLevel {
    Poor,
    Moderate,
    Excellent,
}

impl OrdinalScale for AbilityLevel {
    const LEVELS: &'static [Self] = &[
        AbilityLevel::Poor,
        AbilityLevel::Moderate,
        AbilityLevel::Excellent,
    ];

    fn rank(self) -> u8 {
        match self {
            AbilityLevel::Poor => 1,
            AbilityLevel::Moderate => 2,
            AbilityLevel::Excellent => 3,
        }
    }
}

impl fmt::Display for AbilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbilityLevel::Poor => write!(f, "poor"),
            AbilityLevel::Moderate => write!(f, "moderate"),
            AbilityLevel::Excellent => write!(f, "excellent"),
        }
    }
}

// ==========================================
// 显性关系 (Dominance)
// ==========================================
// 目录中 geneticTraits 的显性描述，仅用于展示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dominance {
    Dominant,
    Recessive,
    Codominant,
    Incomplete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ranked_in_order() {
        fn check<T: OrdinalScale>() {
            for (idx, level) in T::LEVELS.iter().enumerate() {
                assert_eq!(level.rank() as usize, idx + 1);
            }
        }
        check::<BodySize>();
        check::<Broodiness>();
        check::<Temperament>();
        check::<AbilityLevel>();
    }

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&BreedCategory::DualPurpose).unwrap();
        assert_eq!(json, "\"dual-purpose\"");
        assert_eq!(BreedCategory::from_str("Dual-Purpose"), Some(BreedCategory::DualPurpose));
        assert_eq!(BreedCategory::from_str("exotic"), None);
    }

    #[test]
    fn test_comb_type_v_shaped() {
        let comb: CombType = serde_json::from_str("\"v-shaped\"").unwrap();
        assert_eq!(comb, CombType::VShaped);
        assert_eq!(comb.to_string(), "v-shaped");
    }

    #[test]
    fn test_unknown_body_size_rejected() {
        let parsed: Result<BodySize, _> = serde_json::from_str("\"bantam\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_conservation_rarity_rank() {
        assert!(ConservationStatus::Common.rarity_rank() < ConservationStatus::Watch.rarity_rank());
        assert_eq!(
            ConservationStatus::Uncommon.rarity_rank(),
            ConservationStatus::Watch.rarity_rank()
        );
        assert!(ConservationStatus::Rare.rarity_rank() < ConservationStatus::Critical.rarity_rank());
    }
}
