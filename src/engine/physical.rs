// ==========================================
// 家禽杂交预测系统 - 外观性状预测
// ==========================================
// 输入: 双亲记录 + 遗传分解结果
// 输出: 子代 PhysicalTraits
// 注意: 蛋色由原始文本独立推导,不复用遗传分解中的蛋色项,两者可能不一致
// ==========================================

use crate::domain::breed::{BreedTraitRecord, PhysicalTraits};
use crate::domain::prediction::{
    GeneticTraitCalculation, TRAIT_BODY_SIZE, TRAIT_COMB_TYPE, TRAIT_FEATHER_COLOR,
    TRAIT_SKIN_COLOR,
};
use crate::domain::types::{BodySize, CombType};

pub const HYBRID_PATTERN: &str = "Variable hybrid expression";

fn expression_of<'a>(genetics: &'a [GeneticTraitCalculation], trait_name: &str) -> &'a str {
    genetics
        .iter()
        .find(|calc| calc.trait_name == trait_name)
        .map(|calc| calc.dominant_expression.as_str())
        .unwrap_or("")
}

// ==========================================
// PhysicalTraitPredictor - 外观性状预测器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct PhysicalTraitPredictor;

impl PhysicalTraitPredictor {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(
        &self,
        parent_a: &BreedTraitRecord,
        parent_b: &BreedTraitRecord,
        genetics: &[GeneticTraitCalculation],
    ) -> PhysicalTraits {
        let feather_color = if expression_of(genetics, TRAIT_FEATHER_COLOR).contains("Black") {
            "Black with possible secondary colors"
        } else {
            "Mixed red/gold base with variable patterns"
        };

        let skin_color = if expression_of(genetics, TRAIT_SKIN_COLOR).contains("Yellow") {
            "Yellow"
        } else {
            "White"
        };

        PhysicalTraits {
            feather_color: feather_color.to_string(),
            comb_type: Self::comb_from_expression(expression_of(genetics, TRAIT_COMB_TYPE)),
            body_size: Self::size_from_expression(expression_of(genetics, TRAIT_BODY_SIZE)),
            leg_color: Self::blend_leg_color(
                &parent_a.physical_traits.leg_color,
                &parent_b.physical_traits.leg_color,
            ),
            skin_color: skin_color.to_string(),
            egg_color: Self::predict_egg_color(
                &parent_a.physical_traits.egg_color,
                &parent_b.physical_traits.egg_color,
            )
            .to_string(),
            pattern: Some(HYBRID_PATTERN.to_string()),
        }
    }

    /// 从冠型分解结果读取冠型（未命中 → 单冠）
    pub fn comb_from_expression(expression: &str) -> CombType {
        if expression.contains("Walnut") {
            CombType::Walnut
        } else if expression.contains("Rose") {
            CombType::Rose
        } else if expression.contains("Pea") {
            CombType::Pea
        } else {
            CombType::Single
        }
    }

    /// 从体型分解结果读取体型
    ///
    /// 只识别 Large / Medium / Giant,其余（包括 Small）一律 → Medium
    pub fn size_from_expression(expression: &str) -> BodySize {
        if expression.contains("Large") {
            BodySize::Large
        } else if expression.contains("Medium") {
            BodySize::Medium
        } else if expression.contains("Giant") {
            BodySize::Giant
        } else {
            BodySize::Medium
        }
    }

    /// 腿色: 相同 → 原样; 任一含 yellow → 黄; 其他 → 中间色
    pub fn blend_leg_color(color_a: &str, color_b: &str) -> String {
        if color_a == color_b {
            return color_a.to_string();
        }
        if color_a.to_lowercase().contains("yellow") || color_b.to_lowercase().contains("yellow") {
            return "Yellow to light yellow".to_string();
        }
        "Intermediate coloring".to_string()
    }

    /// 蛋色（直接由原始文本推导）
    pub fn predict_egg_color(color_a: &str, color_b: &str) -> &'static str {
        let a = color_a.to_lowercase();
        let b = color_b.to_lowercase();

        if (a.contains("blue") && b.contains("brown")) || (a.contains("brown") && b.contains("blue"))
        {
            return "Green to olive";
        }
        if a.contains("blue") || b.contains("blue") {
            return "Blue to light blue";
        }
        if a.contains("brown") || b.contains("brown") {
            return "Light to medium brown";
        }
        "White to cream"
    }
}
