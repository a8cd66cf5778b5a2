use std::sync::Arc;

use super::common::*;
use crate::config::PipelineConfig;
use crate::pipeline::domain::GarmentType;
use crate::pipeline::layering::validate_layering;
use crate::pipeline::scoring::{Grade, ScoringContext, ScoringEngine};
use crate::pipeline::validators::assess_palette;

fn scoring_context(with_user: bool) -> ScoringContext {
    ScoringContext::from_pipeline(&context(75.0), with_user.then(user))
}

fn engine<A: crate::pipeline::analytics::WardrobeAnalytics>(analytics: A) -> ScoringEngine<A> {
    ScoringEngine::new(Arc::new(analytics), &PipelineConfig::default())
}

#[tokio::test]
async fn sub_scores_and_total_stay_in_bounds() {
    let items = casual_outfit();
    let layering = validate_layering(&items, 75.0);
    let palette = assess_palette(&items);
    let analytics = MemoryAnalytics::default()
        .with_record("top-1", plain_record(0))
        .with_record("bottom-1", plain_record(5));

    let breakdown = engine(analytics)
        .score(&items, &scoring_context(true), &layering, &palette)
        .await;

    for score in [
        breakdown.composition_score,
        breakdown.layering_score,
        breakdown.color_score,
        breakdown.material_score,
        breakdown.style_score,
        breakdown.wardrobe_intelligence_score,
        breakdown.total_score,
    ] {
        assert!((0.0..=100.0).contains(&score), "out of bounds: {score}");
    }
}

#[tokio::test]
async fn balanced_casual_outfit_scores_high_on_composition() {
    let items = casual_outfit();
    let layering = validate_layering(&items, 75.0);
    let palette = assess_palette(&items);

    let breakdown = engine(MemoryAnalytics::default())
        .score(&items, &scoring_context(true), &layering, &palette)
        .await;

    assert!(
        breakdown.composition_score >= 80.0,
        "composition was {}",
        breakdown.composition_score
    );
}

#[tokio::test]
async fn under_layered_cold_outfit_loses_layering_points() {
    let items = vec![item("top-1", "Tank top", GarmentType::TankTop)];
    let layering = validate_layering(&items, 20.0);
    let palette = assess_palette(&items);

    let breakdown = engine(MemoryAnalytics::default())
        .score(&items, &scoring_context(true), &layering, &palette)
        .await;

    assert!(breakdown.layering_score < 100.0);
}

#[tokio::test]
async fn wear_count_monotonicity_holds_between_extremes() {
    let items = casual_outfit();
    let layering = validate_layering(&items, 75.0);
    let palette = assess_palette(&items);
    let context = scoring_context(true);

    let fresh = engine(
        MemoryAnalytics::default()
            .with_record("top-1", plain_record(0))
            .with_record("bottom-1", plain_record(0))
            .with_record("shoes-1", plain_record(0)),
    )
    .score(&items, &context, &layering, &palette)
    .await;

    let worn = engine(
        MemoryAnalytics::default()
            .with_record("top-1", plain_record(12))
            .with_record("bottom-1", plain_record(12))
            .with_record("shoes-1", plain_record(12)),
    )
    .score(&items, &context, &layering, &palette)
    .await;

    assert!(fresh.wardrobe_intelligence_score > worn.wardrobe_intelligence_score);
}

#[tokio::test]
async fn unavailable_analytics_degrade_to_neutral() {
    let items = casual_outfit();
    let layering = validate_layering(&items, 75.0);
    let palette = assess_palette(&items);

    let breakdown = engine(UnavailableAnalytics)
        .score(&items, &scoring_context(true), &layering, &palette)
        .await;

    assert_eq!(breakdown.wardrobe_intelligence_score, 50.0);
}

#[tokio::test]
async fn anonymous_requests_score_neutral_intelligence() {
    let items = casual_outfit();
    let layering = validate_layering(&items, 75.0);
    let palette = assess_palette(&items);

    let breakdown = engine(MemoryAnalytics::default())
        .score(&items, &scoring_context(false), &layering, &palette)
        .await;

    assert_eq!(breakdown.wardrobe_intelligence_score, 50.0);
}

#[tokio::test]
async fn scoring_is_deterministic() {
    let items = casual_outfit();
    let layering = validate_layering(&items, 75.0);
    let palette = assess_palette(&items);
    let context = scoring_context(true);
    let engine = engine(
        MemoryAnalytics::default()
            .with_record("top-1", plain_record(2))
            .with_record("shoes-1", plain_record(9)),
    );

    let first = engine.score(&items, &context, &layering, &palette).await;
    let second = engine.score(&items, &context, &layering, &palette).await;

    assert_eq!(first, second);
}

#[test]
fn grades_follow_the_ten_step_scale() {
    assert_eq!(Grade::from_total(95.0), Grade::APlus);
    assert_eq!(Grade::from_total(90.0), Grade::APlus);
    assert_eq!(Grade::from_total(89.99), Grade::A);
    assert_eq!(Grade::from_total(80.0), Grade::AMinus);
    assert_eq!(Grade::from_total(72.5), Grade::B);
    assert_eq!(Grade::from_total(60.0), Grade::CPlus);
    assert_eq!(Grade::from_total(50.0), Grade::CMinus);
    assert_eq!(Grade::from_total(49.99), Grade::D);
    assert_eq!(Grade::APlus.label(), "A+");
    assert_eq!(Grade::CMinus.label(), "C-");
}
