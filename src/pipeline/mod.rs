//! Outfit validation and scoring.
//!
//! Leaves first: the classification tables map garment types to their
//! categories and warmth; the layering engine derives the acceptable
//! outfit shape from the ambient temperature; nine validators check a
//! candidate set against the request context; the orchestrator schedules
//! them and aggregates one [`PipelineResult`]; the scoring engine turns
//! the same inputs plus wardrobe history into a [`ScoreBreakdown`].

pub mod analytics;
pub mod classification;
pub mod domain;
pub mod layering;
pub mod orchestrator;
pub mod scoring;
pub mod validators;

#[cfg(test)]
mod tests;

pub use analytics::{
    AnalyticsCache, AnalyticsError, ItemAnalytics, ItemInsight, OutfitEngagement,
    WardrobeAnalytics,
};
pub use classification::{
    can_layer, core_category, layer_level, max_layers, warmth_factor, CoreCategory, LayerLevel,
    WarmthFactor,
};
pub use domain::{
    ClothingItem, Color, GarmentType, ItemId, ItemMetadata, PipelineContext, PipelineResult,
    Season, StepSummary, TargetCounts, UserId, UserProfile, ValidationResult, ValidationStep,
    WeatherContext,
};
pub use layering::{
    layering_rule, validate_layering, LayeringError, LayeringOutcome, LayeringRule,
    LayeringWarning,
};
pub use orchestrator::{ValidationPipeline, ValidatorFault};
pub use scoring::{Grade, ScoreBreakdown, ScoringContext, ScoringEngine};
pub use validators::{assess_palette, PaletteOutcome, PaletteTemperature};
