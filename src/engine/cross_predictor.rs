// ==========================================
// 家禽杂交预测系统 - 杂交预测编排
// ==========================================
// 红线: 纯函数,无 I/O,无共享状态,同样输入必得同样输出
// 红线: 亲本解析由调用方完成,本模块不访问目录
// ==========================================
// 流程: 遗传分解 → 外观(依赖分解) → 生产 / 行为 / 杂种优势 / 价格 / 置信度
// ==========================================

use crate::domain::breed::BreedTraitRecord;
use crate::domain::prediction::CrossPredictionResult;
use crate::engine::behavior::BehaviorTraitPredictor;
use crate::engine::confidence::ConfidenceEstimator;
use crate::engine::genetics::GeneticBreakdownCalculator;
use crate::engine::hybrid_vigor::HybridVigorEstimator;
use crate::engine::physical::PhysicalTraitPredictor;
use crate::engine::pricing::CrossPricingEstimator;
use crate::engine::production::ProductionTraitPredictor;
use tracing::{debug, instrument};

// ==========================================
// CrossPredictor - 杂交预测器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct CrossPredictor {
    genetics: GeneticBreakdownCalculator,
    physical: PhysicalTraitPredictor,
    production: ProductionTraitPredictor,
    behavior: BehaviorTraitPredictor,
    vigor: HybridVigorEstimator,
    pricing: CrossPricingEstimator,
    confidence: ConfidenceEstimator,
}

impl CrossPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 计算一次杂交预测
    ///
    /// 亲本顺序有意义（分解中的 A / B 贡献不对称）
    #[instrument(skip(self, parent_a, parent_b), fields(
        parent_a = %parent_a.id,
        parent_b = %parent_b.id
    ))]
    pub fn calculate_cross(
        &self,
        parent_a: &BreedTraitRecord,
        parent_b: &BreedTraitRecord,
    ) -> CrossPredictionResult {
        let genetic_breakdown = self.genetics.calculate(parent_a, parent_b);
        let physical_traits = self.physical.predict(parent_a, parent_b, &genetic_breakdown);

        let result = CrossPredictionResult {
            physical_traits,
            production_traits: self.production.predict(parent_a, parent_b),
            behavior_traits: self.behavior.predict(parent_a, parent_b),
            genetic_breakdown,
            hybrid_vigor: self.vigor.estimate(parent_a, parent_b),
            estimated_pricing: self.pricing.estimate(parent_a, parent_b),
            confidence_score: self.confidence.estimate(parent_a, parent_b),
        };

        debug!(
            breakdown_count = result.genetic_breakdown.len(),
            confidence = result.confidence_score,
            "杂交预测完成"
        );

        result
    }
}

/// 便捷入口
pub fn calculate_cross(parent_a: &BreedTraitRecord, parent_b: &BreedTraitRecord) -> CrossPredictionResult {
    CrossPredictor::new().calculate_cross(parent_a, parent_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::{TRAIT_COMB_TYPE, TRAIT_EGG_COLOR};
    use crate::domain::types::CombType;
    use crate::engine::test_support::sample_breed;

    #[test]
    fn test_result_is_deterministic() {
        let a = sample_breed("a");
        let mut b = sample_breed("b");
        b.physical_traits.egg_color = "Blue".to_string();

        let first = calculate_cross(&a, &b);
        let second = calculate_cross(&a, &b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_breakdown_order_and_egg_color_presence() {
        let a = sample_breed("a");
        let mut b = sample_breed("b");

        let same_egg = calculate_cross(&a, &b);
        assert_eq!(same_egg.genetic_breakdown.len(), 4);
        assert!(same_egg.breakdown_for(TRAIT_EGG_COLOR).is_none());

        b.physical_traits.egg_color = "White".to_string();
        let different_egg = calculate_cross(&a, &b);
        let names: Vec<&str> = different_egg
            .genetic_breakdown
            .iter()
            .map(|calc| calc.trait_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Feather Color (E-locus)",
                "Comb Type",
                "Skin Color",
                "Egg Color",
                "Body Size"
            ]
        );
    }

    #[test]
    fn test_parent_order_changes_contributions() {
        let mut a = sample_breed("a");
        a.physical_traits.comb_type = CombType::Rose;
        let b = sample_breed("b");

        let ab = calculate_cross(&a, &b);
        let ba = calculate_cross(&b, &a);
        let comb_ab = ab.breakdown_for(TRAIT_COMB_TYPE).unwrap();
        let comb_ba = ba.breakdown_for(TRAIT_COMB_TYPE).unwrap();
        assert_eq!(comb_ab.parent_a_contribution, "Rp");
        assert_eq!(comb_ba.parent_a_contribution, "rp");
        assert_eq!(comb_ab.dominant_expression, comb_ba.dominant_expression);
    }
}
