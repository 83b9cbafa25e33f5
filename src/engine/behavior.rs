// ==========================================
// 家禽杂交预测系统 - 行为性状预测
// ==========================================
// 规则:
// - 耐寒 / 耐热: 平均取整
// - 抗病: min(5, 平均 × 1.1 取整)
// - 性情 / 觅食 / 圈养耐受: 有序等级平均后分桶
// ==========================================

use crate::domain::breed::{BehaviorTraits, BreedTraitRecord};
use crate::engine::ordinal;

pub const DISEASE_RESISTANCE_FACTOR: f64 = 1.1;
pub const MAX_RATING: u8 = 5;

fn rounded_mean(a: u8, b: u8) -> u8 {
    ((a as f64 + b as f64) / 2.0).round() as u8
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BehaviorTraitPredictor;

impl BehaviorTraitPredictor {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(&self, parent_a: &BreedTraitRecord, parent_b: &BreedTraitRecord) -> BehaviorTraits {
        let a = &parent_a.behavior_traits;
        let b = &parent_b.behavior_traits;

        let disease_resistance = ((a.disease_resistance as f64 + b.disease_resistance as f64) / 2.0
            * DISEASE_RESISTANCE_FACTOR)
            .round()
            .min(MAX_RATING as f64) as u8;

        BehaviorTraits {
            temperament: ordinal::blend(a.temperament, b.temperament),
            cold_hardiness: rounded_mean(a.cold_hardiness, b.cold_hardiness),
            heat_tolerance: rounded_mean(a.heat_tolerance, b.heat_tolerance),
            foraging: ordinal::blend(a.foraging, b.foraging),
            confinement_tolerance: ordinal::blend(a.confinement_tolerance, b.confinement_tolerance),
            disease_resistance,
        }
    }
}
