// ==========================================
// 家禽杂交预测系统 - 遗传分解计算器
// ==========================================
// 红线: 单位点简化规则,不是群体遗传模拟
// 红线: 性状文本按子串匹配（不区分大小写）,不得"改进"匹配规则
// ==========================================
// 职责: 羽色 / 冠型 / 肤色 / 蛋色 / 体型 五个位点的基因型说明与显性结果
// 输出顺序: 羽色, 冠型, 肤色, [蛋色], 体型
// ==========================================

use crate::domain::breed::BreedTraitRecord;
use crate::domain::prediction::{
    GeneticTraitCalculation, TRAIT_BODY_SIZE, TRAIT_COMB_TYPE, TRAIT_EGG_COLOR,
    TRAIT_FEATHER_COLOR, TRAIT_SKIN_COLOR,
};
use crate::domain::types::{BodySize, CombType, OrdinalScale};
use crate::engine::ordinal;

// ==========================================
// 冠型位点 (R / P)
// ==========================================
/// 冠型对应的 (玫瑰冠 R, 豆冠 P) 位点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombAlleles {
    pub rose: bool,
    pub pea: bool,
}

impl CombAlleles {
    pub fn of(comb: CombType) -> Self {
        let (rose, pea) = match comb {
            CombType::Single => (false, false),
            CombType::Rose => (true, false),
            CombType::Pea => (false, true),
            CombType::Walnut => (true, true),
            CombType::Buttercup => (true, false),
            CombType::VShaped => (false, false),
        };
        Self { rose, pea }
    }

    fn genotype(self) -> String {
        format!(
            "{}{}",
            if self.rose { 'R' } else { 'r' },
            if self.pea { 'P' } else { 'p' }
        )
    }
}

// ==========================================
// 蛋色评分
// ==========================================
/// 蛋色文本评分: 蓝 2, 绿/橄榄 3, 褐/巧克力 1, 其他（白）0
///
/// 匹配顺序固定: 先蓝,后绿/橄榄,再褐。含 "blue" 的混合描述一律记 2
pub fn egg_color_score(egg_color: &str) -> u8 {
    let lower = egg_color.to_lowercase();
    if lower.contains("blue") {
        2
    } else if lower.contains("green") || lower.contains("olive") {
        3
    } else if lower.contains("brown") || lower.contains("chocolate") {
        1
    } else {
        0
    }
}

fn egg_color_genotype(egg_color: &str) -> &'static str {
    let lower = egg_color.to_lowercase();
    if lower.contains("blue") {
        "O (Blue)"
    } else if lower.contains("brown") {
        "Br (Brown)"
    } else if lower.contains("green") {
        "O + Br (Blue + Brown)"
    } else {
        "o (White)"
    }
}

fn contains_ignore_case(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(needle)
}

// ==========================================
// GeneticBreakdownCalculator - 遗传分解计算器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneticBreakdownCalculator;

impl GeneticBreakdownCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 计算全部位点的遗传分解
    ///
    /// 蛋色仅在两亲本原始蛋色文本不同时计算
    pub fn calculate(
        &self,
        parent_a: &BreedTraitRecord,
        parent_b: &BreedTraitRecord,
    ) -> Vec<GeneticTraitCalculation> {
        let mut calculations = Vec::with_capacity(5);

        calculations.push(self.feather_color(parent_a, parent_b));
        calculations.push(self.comb_type(parent_a, parent_b));
        calculations.push(self.skin_color(parent_a, parent_b));

        if parent_a.physical_traits.egg_color != parent_b.physical_traits.egg_color {
            calculations.push(self.egg_color(parent_a, parent_b));
        }

        calculations.push(self.body_size(parent_a, parent_b));

        calculations
    }

    /// 羽色（E 位点）: 含 "black" 视为扩展黑 E,黑色对红/金底色显性
    pub fn feather_color(
        &self,
        parent_a: &BreedTraitRecord,
        parent_b: &BreedTraitRecord,
    ) -> GeneticTraitCalculation {
        let a_black = contains_ignore_case(&parent_a.physical_traits.feather_color, "black");
        let b_black = contains_ignore_case(&parent_b.physical_traits.feather_color, "black");

        let dominant_expression = match (a_black, b_black) {
            (true, true) => "Black feathers (homozygous dominant)",
            (true, false) | (false, true) => "Black feathers (heterozygous)",
            (false, false) => "Non-black base color expression",
        };

        let label = |black: bool| {
            if black {
                "E (Extended Black)"
            } else {
                "e+ (Red/Gold base)"
            }
        };

        GeneticTraitCalculation {
            trait_name: TRAIT_FEATHER_COLOR.to_string(),
            parent_a_contribution: label(a_black).to_string(),
            parent_b_contribution: label(b_black).to_string(),
            dominant_expression: dominant_expression.to_string(),
            // 三个分支恒为 1.0
            probability: 1.0,
        }
    }

    /// 冠型: 优先级 胡桃冠(双亲 RP) > 胡桃冠(混合) > 玫瑰冠 > 豆冠 > 单冠
    pub fn comb_type(
        &self,
        parent_a: &BreedTraitRecord,
        parent_b: &BreedTraitRecord,
    ) -> GeneticTraitCalculation {
        let a = CombAlleles::of(parent_a.physical_traits.comb_type);
        let b = CombAlleles::of(parent_b.physical_traits.comb_type);

        let any_rose = a.rose || b.rose;
        let any_pea = a.pea || b.pea;

        let (dominant_expression, probability) = if a.rose && a.pea && b.rose && b.pea {
            ("Walnut comb (RR PP)", 1.0)
        } else if any_rose && any_pea {
            ("Walnut comb (R_ P_)", 0.75)
        } else if any_rose {
            ("Rose comb (R_ pp)", if any_pea { 0.25 } else { 0.75 })
        } else if any_pea {
            ("Pea comb (rr P_)", 0.75)
        } else {
            ("Single comb (rr pp)", 1.0)
        };

        GeneticTraitCalculation {
            trait_name: TRAIT_COMB_TYPE.to_string(),
            parent_a_contribution: a.genotype(),
            parent_b_contribution: b.genotype(),
            dominant_expression: dominant_expression.to_string(),
            probability,
        }
    }

    /// 肤色: 含 "yellow" 视为黄肤 Y,黄色显性
    pub fn skin_color(
        &self,
        parent_a: &BreedTraitRecord,
        parent_b: &BreedTraitRecord,
    ) -> GeneticTraitCalculation {
        let a_yellow = contains_ignore_case(&parent_a.physical_traits.skin_color, "yellow");
        let b_yellow = contains_ignore_case(&parent_b.physical_traits.skin_color, "yellow");

        let dominant_expression = match (a_yellow, b_yellow) {
            (true, true) => "Yellow skin (dominant)",
            (true, false) | (false, true) => "Yellow skin (heterozygous)",
            (false, false) => "White skin (recessive)",
        };

        let label = |yellow: bool| if yellow { "Y (Yellow)" } else { "y (White)" };

        GeneticTraitCalculation {
            trait_name: TRAIT_SKIN_COLOR.to_string(),
            parent_a_contribution: label(a_yellow).to_string(),
            parent_b_contribution: label(b_yellow).to_string(),
            dominant_expression: dominant_expression.to_string(),
            probability: 1.0,
        }
    }

    /// 蛋色: 蓝 + 褐 → 绿/橄榄; 最高分为蓝 → 蓝; 任一为褐 → 褐; 其余 → 白
    pub fn egg_color(
        &self,
        parent_a: &BreedTraitRecord,
        parent_b: &BreedTraitRecord,
    ) -> GeneticTraitCalculation {
        let a_score = egg_color_score(&parent_a.physical_traits.egg_color);
        let b_score = egg_color_score(&parent_b.physical_traits.egg_color);
        let max_score = a_score.max(b_score);

        let dominant_expression = if max_score >= 2 {
            if (a_score, b_score) == (1, 2) || (a_score, b_score) == (2, 1) {
                "Green/olive eggs (blue + brown)"
            } else if max_score == 2 {
                "Blue egg expression (dominant over white/brown)"
            } else {
                // 绿/橄榄亲本（3 分）: 不构成蓝+褐组合
                "Brown egg expression"
            }
        } else if a_score == 1 || b_score == 1 {
            "Brown egg expression (dominant over white)"
        } else {
            "White eggs"
        };

        GeneticTraitCalculation {
            trait_name: TRAIT_EGG_COLOR.to_string(),
            parent_a_contribution: egg_color_genotype(&parent_a.physical_traits.egg_color)
                .to_string(),
            parent_b_contribution: egg_color_genotype(&parent_b.physical_traits.egg_color)
                .to_string(),
            dominant_expression: dominant_expression.to_string(),
            probability: 0.75,
        }
    }

    /// 体型: 等级 1-4 取平均后分桶
    pub fn body_size(
        &self,
        parent_a: &BreedTraitRecord,
        parent_b: &BreedTraitRecord,
    ) -> GeneticTraitCalculation {
        let a_size = parent_a.physical_traits.body_size;
        let b_size = parent_b.physical_traits.body_size;

        let dominant_expression = match ordinal::blend(a_size, b_size) {
            BodySize::Small => "Small body size",
            BodySize::Medium => "Medium body size",
            BodySize::Large => "Large body size",
            BodySize::Giant => "Giant body size",
        };

        GeneticTraitCalculation {
            trait_name: TRAIT_BODY_SIZE.to_string(),
            parent_a_contribution: format!("{} ({})", a_size, a_size.rank()),
            parent_b_contribution: format!("{} ({})", b_size, b_size.rank()),
            dominant_expression: dominant_expression.to_string(),
            probability: 0.8,
        }
    }
}
