// ==========================================
// 家禽杂交预测系统 - 杂交价格估算
// ==========================================
// 规则: 双亲下限平均 × 折扣系数 → 低价; 低价 × 区间倍数 → 高价（各自取整）
// 杂交鸡稀缺溢价固定 0.8（低于任一纯种亲本）
// ==========================================

use crate::domain::breed::{BreedTraitRecord, Pricing};

pub const CROSS_RARITY_PREMIUM: f64 = 0.8;

/// (折扣系数, 区间倍数)
const DAY_OLD_CHICK: (f64, f64) = (0.7, 1.5);
const STARTED_PULLET: (f64, f64) = (0.8, 1.3);
const BREEDING_QUALITY: (f64, f64) = (0.6, 1.5);

fn price_band(min_a: f64, min_b: f64, (discount, spread): (f64, f64)) -> (f64, f64) {
    let base = (min_a + min_b) / 2.0 * discount;
    (base.round(), (base * spread).round())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CrossPricingEstimator;

impl CrossPricingEstimator {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate(&self, parent_a: &BreedTraitRecord, parent_b: &BreedTraitRecord) -> Pricing {
        let a = &parent_a.pricing;
        let b = &parent_b.pricing;

        let (day_old_chick_min, day_old_chick_max) =
            price_band(a.day_old_chick_min, b.day_old_chick_min, DAY_OLD_CHICK);
        let (started_pullet_min, started_pullet_max) =
            price_band(a.started_pullet_min, b.started_pullet_min, STARTED_PULLET);
        let (breeding_quality_min, breeding_quality_max) =
            price_band(a.breeding_quality_min, b.breeding_quality_min, BREEDING_QUALITY);

        Pricing {
            day_old_chick_min,
            day_old_chick_max,
            started_pullet_min,
            started_pullet_max,
            breeding_quality_min,
            breeding_quality_max,
            show_quality_min: None,
            show_quality_max: None,
            rarity_premium: CROSS_RARITY_PREMIUM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::sample_breed;

    #[test]
    fn test_price_bands() {
        let mut a = sample_breed("a");
        let mut b = sample_breed("b");
        a.pricing.day_old_chick_min = 4.0;
        b.pricing.day_old_chick_min = 8.0;
        a.pricing.started_pullet_min = 20.0;
        b.pricing.started_pullet_min = 30.0;
        a.pricing.breeding_quality_min = 50.0;
        b.pricing.breeding_quality_min = 70.0;
        a.pricing.show_quality_min = Some(100.0);

        let pricing = CrossPricingEstimator::new().estimate(&a, &b);

        // 6 * 0.7 = 4.2 → 4; 4.2 * 1.5 = 6.3 → 6
        assert_eq!(pricing.day_old_chick_min, 4.0);
        assert_eq!(pricing.day_old_chick_max, 6.0);
        // 25 * 0.8 = 20; 20 * 1.3 = 26
        assert_eq!(pricing.started_pullet_min, 20.0);
        assert_eq!(pricing.started_pullet_max, 26.0);
        // 60 * 0.6 = 36; 36 * 1.5 = 54
        assert_eq!(pricing.breeding_quality_min, 36.0);
        assert_eq!(pricing.breeding_quality_max, 54.0);

        assert_eq!(pricing.show_quality_min, None);
        assert_eq!(pricing.show_quality_max, None);
        assert_eq!(pricing.rarity_premium, CROSS_RARITY_PREMIUM);
    }

    #[test]
    fn test_max_rounds_from_unrounded_base() {
        let mut a = sample_breed("a");
        let mut b = sample_breed("b");
        a.pricing.day_old_chick_min = 3.0;
        b.pricing.day_old_chick_min = 3.0;

        let pricing = CrossPricingEstimator::new().estimate(&a, &b);
        // 3 * 0.7 = 2.1 → 2; 2.1 * 1.5 = 3.15 → 3
        assert_eq!(pricing.day_old_chick_min, 2.0);
        assert_eq!(pricing.day_old_chick_max, 3.0);
    }
}
