// ==========================================
// 家禽杂交预测系统 - 杂种优势估算
// ==========================================
// 步骤1: 遗传距离 [0, 1]
//   产地不同 +0.3, 类别不同 +0.2
//   冠型 / 体型 / 羽色 各不同 +0.1
//   产蛋下限差 / 1000 (封顶 0.2)
// 步骤2: 各项优势 = min(上限, 距离 × 系数)
// ==========================================

use crate::domain::breed::BreedTraitRecord;
use crate::domain::prediction::HybridVigor;

const ORIGIN_WEIGHT: f64 = 0.3;
const CATEGORY_WEIGHT: f64 = 0.2;
const PHYSICAL_WEIGHT: f64 = 0.1;
const EGG_GAP_DIVISOR: f64 = 1000.0;
const EGG_GAP_CAP: f64 = 0.2;

/// (上限, 系数)
pub const EGG_PRODUCTION_BOOST: (f64, f64) = (0.25, 0.15);
pub const GROWTH_RATE_BOOST: (f64, f64) = (0.20, 0.12);
pub const DISEASE_RESISTANCE_BOOST: (f64, f64) = (0.30, 0.18);
pub const FEED_CONVERSION_IMPROVEMENT: (f64, f64) = (0.15, 0.10);

#[derive(Debug, Default, Clone, Copy)]
pub struct HybridVigorEstimator;

impl HybridVigorEstimator {
    pub fn new() -> Self {
        Self
    }

    /// 两亲本的遗传距离
    pub fn genetic_distance(&self, parent_a: &BreedTraitRecord, parent_b: &BreedTraitRecord) -> f64 {
        let mut distance = 0.0;

        if parent_a.origin != parent_b.origin {
            distance += ORIGIN_WEIGHT;
        }
        if parent_a.category != parent_b.category {
            distance += CATEGORY_WEIGHT;
        }

        let pa = &parent_a.physical_traits;
        let pb = &parent_b.physical_traits;
        if pa.comb_type != pb.comb_type {
            distance += PHYSICAL_WEIGHT;
        }
        if pa.body_size != pb.body_size {
            distance += PHYSICAL_WEIGHT;
        }
        if pa.feather_color != pb.feather_color {
            distance += PHYSICAL_WEIGHT;
        }

        let egg_gap = (parent_a.production_traits.egg_production_min as f64
            - parent_b.production_traits.egg_production_min as f64)
            .abs();
        distance += (egg_gap / EGG_GAP_DIVISOR).min(EGG_GAP_CAP);

        distance.min(1.0)
    }

    pub fn estimate(&self, parent_a: &BreedTraitRecord, parent_b: &BreedTraitRecord) -> HybridVigor {
        Self::from_distance(self.genetic_distance(parent_a, parent_b))
    }

    pub fn from_distance(distance: f64) -> HybridVigor {
        let boost = |(ceiling, factor): (f64, f64)| (distance * factor).min(ceiling);

        HybridVigor {
            egg_production_boost: boost(EGG_PRODUCTION_BOOST),
            growth_rate_boost: boost(GROWTH_RATE_BOOST),
            disease_resistance_boost: boost(DISEASE_RESISTANCE_BOOST),
            feed_conversion_improvement: boost(FEED_CONVERSION_IMPROVEMENT),
        }
    }
}
