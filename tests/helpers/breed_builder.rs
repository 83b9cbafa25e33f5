// ==========================================
// 测试数据构建器 - 品种记录
// ==========================================

use poultry_cross::domain::breed::{
    BehaviorTraits, BreedTraitRecord, PhysicalTraits, Pricing, ProductionTraits,
};
use poultry_cross::domain::types::{
    AbilityLevel, BodySize, Broodiness, BreedCategory, CombType, ConservationStatus, Temperament,
};

// ==========================================
// BreedTraitRecord 构建器
// ==========================================

pub struct BreedBuilder {
    record: BreedTraitRecord,
}

#[allow(dead_code)]
impl BreedBuilder {
    /// 默认值: 英国产大型单冠褐壳蛋兼用鸡
    pub fn new(id: &str) -> Self {
        Self {
            record: BreedTraitRecord {
                id: id.to_string(),
                name: id.to_string(),
                category: BreedCategory::Dual,
                origin: "England".to_string(),
                description: format!("Test breed {}", id),
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
                    egg_production_min: 180,
                    egg_production_max: 250,
                    egg_size_oz: 2.0,
                    meat_weight: 8.0,
                    feed_conversion: 3.0,
                    broodiness: Broodiness::Moderate,
                    maturity_weeks: 24,
                },
                behavior_traits: BehaviorTraits {
                    temperament: Temperament::Docile,
                    cold_hardiness: 4,
                    heat_tolerance: 3,
                    foraging: AbilityLevel::Moderate,
                    confinement_tolerance: AbilityLevel::Excellent,
                    disease_resistance: 4,
                },
                genetic_traits: Vec::new(),
                pricing: Pricing {
                    day_old_chick_min: 4.0,
                    day_old_chick_max: 8.0,
                    started_pullet_min: 20.0,
                    started_pullet_max: 35.0,
                    breeding_quality_min: 50.0,
                    breeding_quality_max: 100.0,
                    show_quality_min: None,
                    show_quality_max: None,
                    rarity_premium: 1.0,
                },
                image_url: None,
                is_exotic: false,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn category(mut self, category: BreedCategory) -> Self {
        self.record.category = category;
        self
    }

    pub fn origin(mut self, origin: &str) -> Self {
        self.record.origin = origin.to_string();
        self
    }

    pub fn conservation(mut self, status: ConservationStatus) -> Self {
        self.record.conservation_status = status;
        self
    }

    pub fn feather_color(mut self, color: &str) -> Self {
        self.record.physical_traits.feather_color = color.to_string();
        self
    }

    pub fn comb(mut self, comb: CombType) -> Self {
        self.record.physical_traits.comb_type = comb;
        self
    }

    pub fn body_size(mut self, size: BodySize) -> Self {
        self.record.physical_traits.body_size = size;
        self
    }

    pub fn leg_color(mut self, color: &str) -> Self {
        self.record.physical_traits.leg_color = color.to_string();
        self
    }

    pub fn skin_color(mut self, color: &str) -> Self {
        self.record.physical_traits.skin_color = color.to_string();
        self
    }

    pub fn egg_color(mut self, color: &str) -> Self {
        self.record.physical_traits.egg_color = color.to_string();
        self
    }

    pub fn egg_production(mut self, min: u32, max: u32) -> Self {
        self.record.production_traits.egg_production_min = min;
        self.record.production_traits.egg_production_max = max;
        self
    }

    pub fn temperament(mut self, temperament: Temperament) -> Self {
        self.record.behavior_traits.temperament = temperament;
        self
    }

    pub fn ratings(mut self, cold: u8, heat: u8, disease: u8) -> Self {
        self.record.behavior_traits.cold_hardiness = cold;
        self.record.behavior_traits.heat_tolerance = heat;
        self.record.behavior_traits.disease_resistance = disease;
        self
    }

    pub fn exotic(mut self, is_exotic: bool) -> Self {
        self.record.is_exotic = is_exotic;
        self
    }

    pub fn build(self) -> BreedTraitRecord {
        self.record
    }
}
