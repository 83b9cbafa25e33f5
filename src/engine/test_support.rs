// ==========================================
// 引擎单元测试公共样例
// ==========================================

use crate::domain::breed::{
    BehaviorTraits, BreedTraitRecord, PhysicalTraits, Pricing, ProductionTraits,
};
use crate::domain::types::{
    AbilityLevel, BodySize, Broodiness, BreedCategory, CombType, ConservationStatus, Temperament,
};

/// 创建一条中规中矩的测试品种记录（两条同名样例仅 id 不同）
pub(crate) fn sample_breed(id: &str) -> BreedTraitRecord {
    BreedTraitRecord {
        id: id.to_string(),
        name: format!("Sample {}", id),
        category: BreedCategory::Layer,
        origin: "England".to_string(),
        description: "Sample breed for engine tests".to_string(),
        conservation_status: ConservationStatus::Common,
        physical_traits: PhysicalTraits {
            feather_color: "Buff".to_string(),
            comb_type: CombType::Single,
            body_size: BodySize::Large,
            leg_color: "White".to_string(),
            skin_color: "White".to_string(),
            egg_color: "Brown".to_string(),
            pattern: None,
        },
        production_traits: ProductionTraits {
            egg_production_min: 200,
            egg_production_max: 280,
            egg_size_oz: 2.0,
            meat_weight: 7.0,
            feed_conversion: 2.5,
            broodiness: Broodiness::Moderate,
            maturity_weeks: 22,
        },
        behavior_traits: BehaviorTraits {
            temperament: Temperament::Calm,
            cold_hardiness: 4,
            heat_tolerance: 3,
            foraging: AbilityLevel::Moderate,
            confinement_tolerance: AbilityLevel::Excellent,
            disease_resistance: 4,
        },
        genetic_traits: Vec::new(),
        pricing: Pricing {
            day_old_chick_min: 4.0,
            day_old_chick_max: 6.0,
            started_pullet_min: 20.0,
            started_pullet_max: 30.0,
            breeding_quality_min: 40.0,
            breeding_quality_max: 60.0,
            show_quality_min: None,
            show_quality_max: None,
            rarity_premium: 1.0,
        },
        image_url: None,
        is_exotic: false,
    }
}
