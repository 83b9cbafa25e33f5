// ==========================================
// 杂交预测引擎集成测试
// ==========================================
// 场景: 杂种优势 / 冠型 / 蛋壳色 / 置信度 / 确定性
// ==========================================

mod helpers;

use helpers::BreedBuilder;
use poultry_cross::domain::prediction::{
    TRAIT_BODY_SIZE, TRAIT_COMB_TYPE, TRAIT_EGG_COLOR, TRAIT_FEATHER_COLOR, TRAIT_SKIN_COLOR,
};
use poultry_cross::domain::types::{BodySize, BreedCategory, CombType, ConservationStatus};
use poultry_cross::engine::{calculate_cross, CrossPredictor, HybridVigorEstimator};

const EPS: f64 = 1e-9;

#[test]
fn test_identical_parents_have_no_hybrid_vigor() {
    let a = BreedBuilder::new("a").build();
    let b = BreedBuilder::new("b").build();

    let result = calculate_cross(&a, &b);

    assert_eq!(HybridVigorEstimator::new().genetic_distance(&a, &b), 0.0);
    assert_eq!(result.hybrid_vigor.egg_production_boost, 0.0);
    assert_eq!(result.hybrid_vigor.growth_rate_boost, 0.0);
    assert_eq!(result.hybrid_vigor.disease_resistance_boost, 0.0);
    assert_eq!(result.hybrid_vigor.feed_conversion_improvement, 0.0);
}

#[test]
fn test_rose_by_pea_gives_walnut() {
    let a = BreedBuilder::new("a").comb(CombType::Rose).build();
    let b = BreedBuilder::new("b").comb(CombType::Pea).build();

    let result = calculate_cross(&a, &b);
    let comb = result.breakdown_for(TRAIT_COMB_TYPE).unwrap();

    assert_eq!(comb.dominant_expression, "Walnut comb (R_ P_)");
    assert!((comb.probability - 0.75).abs() < EPS);
    assert_eq!(result.physical_traits.comb_type, CombType::Walnut);
}

#[test]
fn test_blue_by_brown_gives_green_olive() {
    let a = BreedBuilder::new("a").egg_color("Blue").build();
    let b = BreedBuilder::new("b").egg_color("Brown").build();

    let result = calculate_cross(&a, &b);
    let egg = result.breakdown_for(TRAIT_EGG_COLOR).unwrap();

    assert_eq!(egg.dominant_expression, "Green/olive eggs (blue + brown)");
    assert!((egg.probability - 0.75).abs() < EPS);
    assert_eq!(result.physical_traits.egg_color, "Green to olive");
}

#[test]
fn test_egg_color_paths_can_disagree() {
    // 遗传分解把 chocolate 计为褐壳,外观预测只认 "brown" 子串
    let a = BreedBuilder::new("a").egg_color("Blue").build();
    let b = BreedBuilder::new("b").egg_color("Chocolate").build();

    let result = calculate_cross(&a, &b);

    assert_eq!(
        result.breakdown_for(TRAIT_EGG_COLOR).unwrap().dominant_expression,
        "Green/olive eggs (blue + brown)"
    );
    assert_eq!(result.physical_traits.egg_color, "Blue to light blue");
}

#[test]
fn test_exotic_same_category_confidence() {
    let a = BreedBuilder::new("a")
        .category(BreedCategory::Layer)
        .conservation(ConservationStatus::Common)
        .exotic(true)
        .build();
    let b = BreedBuilder::new("b")
        .category(BreedCategory::Layer)
        .conservation(ConservationStatus::Common)
        .build();

    let result = calculate_cross(&a, &b);
    assert!((result.confidence_score - 0.9).abs() < EPS);
}

#[test]
fn test_rare_exotic_parents_lower_confidence() {
    let a = BreedBuilder::new("a")
        .category(BreedCategory::Ornamental)
        .conservation(ConservationStatus::Critical)
        .exotic(true)
        .build();
    let b = BreedBuilder::new("b")
        .category(BreedCategory::Meat)
        .conservation(ConservationStatus::Rare)
        .exotic(true)
        .build();

    let result = calculate_cross(&a, &b);
    assert!((result.confidence_score - 0.6).abs() < EPS);
    assert!(result.confidence_score >= 0.3);
}

#[test]
fn test_egg_production_gap_term_is_capped() {
    let a = BreedBuilder::new("a").egg_production(300, 320).build();
    let b = BreedBuilder::new("b").egg_production(50, 80).build();

    let distance = HybridVigorEstimator::new().genetic_distance(&a, &b);
    assert!((distance - 0.2).abs() < EPS);

    let result = calculate_cross(&a, &b);
    assert!((result.hybrid_vigor.egg_production_boost - 0.03).abs() < EPS);
}

#[test]
fn test_breakdown_order_and_optional_egg_entry() {
    let a = BreedBuilder::new("a").build();
    let b = BreedBuilder::new("b").build();

    let same_eggs = calculate_cross(&a, &b);
    let names: Vec<&str> = same_eggs
        .genetic_breakdown
        .iter()
        .map(|calc| calc.trait_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![TRAIT_FEATHER_COLOR, TRAIT_COMB_TYPE, TRAIT_SKIN_COLOR, TRAIT_BODY_SIZE]
    );

    let b = BreedBuilder::new("b").egg_color("White").build();
    let diff_eggs = calculate_cross(&a, &b);
    assert_eq!(diff_eggs.genetic_breakdown.len(), 5);
    assert_eq!(diff_eggs.genetic_breakdown[3].trait_name, TRAIT_EGG_COLOR);
}

#[test]
fn test_prediction_is_order_sensitive() {
    let a = BreedBuilder::new("a").feather_color("Black").build();
    let b = BreedBuilder::new("b").feather_color("Buff").build();

    let ab = calculate_cross(&a, &b);
    let ba = calculate_cross(&b, &a);

    let color_ab = ab.breakdown_for(TRAIT_FEATHER_COLOR).unwrap();
    let color_ba = ba.breakdown_for(TRAIT_FEATHER_COLOR).unwrap();
    assert_ne!(color_ab.parent_a_contribution, color_ba.parent_a_contribution);
    assert_eq!(color_ab.parent_a_contribution, color_ba.parent_b_contribution);
    assert_eq!(color_ab.dominant_expression, color_ba.dominant_expression);
}

#[test]
fn test_prediction_is_deterministic() {
    let a = BreedBuilder::new("a")
        .origin("China")
        .body_size(BodySize::Small)
        .skin_color("Yellow")
        .build();
    let b = BreedBuilder::new("b").body_size(BodySize::Giant).build();

    let predictor = CrossPredictor::new();
    let first = predictor.calculate_cross(&a, &b);
    for _ in 0..10 {
        assert_eq!(predictor.calculate_cross(&a, &b), first);
    }
}

#[test]
fn test_small_by_giant_buckets_to_medium() {
    // (1 + 4) / 2 = 2.5 → medium
    let a = BreedBuilder::new("a").body_size(BodySize::Small).build();
    let b = BreedBuilder::new("b").body_size(BodySize::Giant).build();

    let result = calculate_cross(&a, &b);
    assert_eq!(result.physical_traits.body_size, BodySize::Medium);
}

#[test]
fn test_production_and_pricing_formulas() {
    let a = BreedBuilder::new("a").egg_production(200, 280).build();
    let b = BreedBuilder::new("b").egg_production(120, 200).build();

    let result = calculate_cross(&a, &b);

    // round(160 × 1.15) = 184, round(240 × 1.15) = 276
    assert_eq!(result.production_traits.egg_production_min, 184);
    assert_eq!(result.production_traits.egg_production_max, 276);
    assert!((result.production_traits.feed_conversion - 2.7).abs() < EPS);
    // round(24 × 0.95) = 23
    assert_eq!(result.production_traits.maturity_weeks, 23);

    // 4 × 0.7 = 2.8 → 3, 4 × 0.7 × 1.5 = 4.2 → 4
    assert_eq!(result.estimated_pricing.day_old_chick_min, 3.0);
    assert_eq!(result.estimated_pricing.day_old_chick_max, 4.0);
    assert!((result.estimated_pricing.rarity_premium - 0.8).abs() < EPS);
}

#[test]
fn test_mixed_blue_catalog_breed_egg_color() {
    // easter-egger: "Blue, green, pink, olive" 按蓝壳计分
    let catalog = helpers::embedded_catalog();
    let easter_egger = catalog.get_breed_by_id("easter-egger").unwrap().unwrap();
    let plymouth_rock = catalog.get_breed_by_id("plymouth-rock").unwrap().unwrap();
    let sebright = catalog.get_breed_by_id("sebright").unwrap().unwrap();

    let with_brown = calculate_cross(&easter_egger, &plymouth_rock);
    assert_eq!(
        with_brown.breakdown_for(TRAIT_EGG_COLOR).unwrap().dominant_expression,
        "Green/olive eggs (blue + brown)"
    );
    assert_eq!(with_brown.physical_traits.egg_color, "Green to olive");

    let with_white = calculate_cross(&easter_egger, &sebright);
    assert_eq!(
        with_white.breakdown_for(TRAIT_EGG_COLOR).unwrap().dominant_expression,
        "Blue egg expression (dominant over white/brown)"
    );
    assert_eq!(with_white.physical_traits.egg_color, "Blue to light blue");
}
