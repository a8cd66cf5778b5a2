use super::common::*;
use crate::pipeline::domain::{GarmentType, UserProfile, ValidationStep};
use crate::pipeline::validators::run_validator;

#[test]
fn occasion_mismatches_stay_advisory() {
    let mut items = casual_outfit();
    items[0].tags = vec!["athletic".to_string()];
    items[0].style = vec!["sporty".to_string()];
    items[0].occasion = vec!["gym".to_string()];
    let mut context = context(70.0);
    context.occasion = Some("formal".to_string());

    let result = run_validator(ValidationStep::OccasionAppropriateness, &items, &context);

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result
        .warnings
        .iter()
        .any(|warning| warning.contains("athletic")));
}

#[test]
fn occasion_matching_reads_the_garment_category() {
    let mut slip_dress = item("dress-1", "Slip dress", GarmentType::Dress);
    slip_dress.tags = vec!["trendy".to_string()];
    slip_dress.style = vec!["trendy".to_string()];
    slip_dress.occasion = vec!["party".to_string()];
    let mut context = context(70.0);
    context.occasion = Some("athletic".to_string());

    let result = run_validator(ValidationStep::OccasionAppropriateness, &[slip_dress], &context);

    assert!(result.is_valid);
    assert!(result
        .warnings
        .iter()
        .any(|warning| warning.contains("Slip dress") && warning.contains("clashes")));
}

#[test]
fn unrecognized_occasions_warn_about_nothing() {
    let items = casual_outfit();
    let mut context = context(70.0);
    context.occasion = Some("moon-landing".to_string());

    let result = run_validator(ValidationStep::OccasionAppropriateness, &items, &context);

    assert!(result.is_valid);
    assert!(result.warnings.is_empty());
}

#[test]
fn weather_flags_light_fabrics_in_the_cold() {
    let items = vec![with_material(
        item("top-1", "Linen shirt", GarmentType::Shirt),
        "linen",
    )];
    let context = context(40.0);

    let result = run_validator(ValidationStep::WeatherCompatibility, &items, &context);

    assert!(result.is_valid);
    assert!(result.warnings.iter().any(|warning| warning.contains("linen")));
}

#[test]
fn weather_flags_suede_in_the_rain() {
    let items = vec![with_material(
        item("shoes-1", "Suede boots", GarmentType::Boots),
        "suede",
    )];
    let mut context = context(60.0);
    context.weather.condition = "rainy".to_string();

    let result = run_validator(ValidationStep::WeatherCompatibility, &items, &context);

    assert!(result.warnings.iter().any(|warning| warning.contains("rain")));
}

#[test]
fn style_conflicts_and_spread_both_warn() {
    let mut items = casual_outfit();
    items[0].style = vec!["grunge".to_string()];
    items[1].style = vec!["preppy".to_string()];
    items[2].style = vec!["vintage".to_string(), "romantic".to_string()];
    let mut context = context(70.0);
    context.style = Some("formal".to_string());

    let result = run_validator(ValidationStep::StyleCohesion, &items, &context);

    assert!(result.is_valid);
    assert!(result.warnings.iter().any(|warning| warning.contains("grunge")));
    assert!(result
        .warnings
        .iter()
        .any(|warning| warning.contains("distinct styles")));
}

#[test]
fn body_type_avoid_tags_warn() {
    let mut items = casual_outfit();
    items[0].tags.push("bodycon".to_string());
    let mut context = context(70.0);
    context.user_profile = Some(UserProfile {
        body_type: Some("apple".to_string()),
        ..UserProfile::default()
    });

    let result = run_validator(ValidationStep::BodyTypeCompatibility, &items, &context);

    assert!(result.is_valid);
    assert!(result
        .warnings
        .iter()
        .any(|warning| warning.contains("bodycon")));
}

#[test]
fn completeness_warns_below_minimum_and_for_missing_categories() {
    let items = Vec::new();
    let context = context(70.0);

    let result = run_validator(ValidationStep::FormCompleteness, &items, &context);

    assert!(result.is_valid);
    assert!(result
        .warnings
        .iter()
        .any(|warning| warning.contains("at least 2")));
    assert!(result
        .warnings
        .iter()
        .any(|warning| warning.contains("missing a top")));
}

#[test]
fn layer_count_warns_for_formal_single_layer() {
    let items = casual_outfit();
    let mut context = context(70.0);
    context.occasion = Some("formal".to_string());

    let result = run_validator(ValidationStep::LayerCount, &items, &context);

    assert!(result.is_valid);
    assert!(result
        .warnings
        .iter()
        .any(|warning| warning.contains("at least two layers")));
}

#[test]
fn layering_compliance_reports_structural_errors() {
    let items = vec![item("top-1", "Tank top", GarmentType::TankTop)];
    let context = context(20.0);

    let result = run_validator(ValidationStep::LayeringCompliance, &items, &context);

    assert!(!result.is_valid);
    assert!(!result.errors.is_empty());
    assert!(!result.warnings.is_empty());
}

#[test]
fn color_conflicts_warn() {
    let mut items = casual_outfit();
    items[0] = with_colors(items[0].clone(), &["red"]);
    items[1] = with_colors(items[1].clone(), &["green"]);
    let context = context(70.0);

    let result = run_validator(ValidationStep::ColorHarmony, &items, &context);

    assert!(result.is_valid);
    assert!(result
        .warnings
        .iter()
        .any(|warning| warning.contains("red") && warning.contains("green")));
}

#[test]
fn duplicate_ids_are_structural() {
    let first = item("same-id", "Blue tee", GarmentType::TShirt);
    let second = item("same-id", "Blue tee", GarmentType::TShirt);
    let context = context(70.0);

    let result = run_validator(ValidationStep::Deduplication, &[first, second], &context);

    assert!(!result.is_valid);
    assert!(result
        .errors
        .iter()
        .any(|error| error.contains("duplicate")));
    // Two tops also collide on category, advisory only.
    assert!(result
        .warnings
        .iter()
        .any(|warning| warning.contains("top")));
}

#[test]
fn balanced_casual_outfit_is_clean() {
    let items = casual_outfit();
    let context = context(75.0);

    for step in [
        ValidationStep::OccasionAppropriateness,
        ValidationStep::WeatherCompatibility,
        ValidationStep::StyleCohesion,
        ValidationStep::BodyTypeCompatibility,
        ValidationStep::FormCompleteness,
        ValidationStep::LayerCount,
        ValidationStep::LayeringCompliance,
        ValidationStep::ColorHarmony,
        ValidationStep::Deduplication,
    ] {
        let result = run_validator(step, &items, &context);
        assert!(result.is_valid, "{} should pass", step.label());
        assert!(
            result.errors.is_empty(),
            "{} produced errors: {:?}",
            step.label(),
            result.errors
        );
    }
}
