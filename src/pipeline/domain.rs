use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::classification::CoreCategory;

/// Identifier wrapper for wardrobe items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);

/// Identifier wrapper for wardrobe owners.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Closed enumeration of garment types assigned at item creation.
///
/// Unrecognized values deserialize to [`GarmentType::Other`], which the
/// classification tables treat with fail-open defaults so an unknown garment
/// can never crash a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentType {
    Shirt,
    TShirt,
    Blouse,
    Sweater,
    Hoodie,
    TankTop,
    Cardigan,
    Jeans,
    Pants,
    Shorts,
    Skirt,
    Leggings,
    Dress,
    Jacket,
    Coat,
    Blazer,
    Vest,
    Sneakers,
    Boots,
    Sandals,
    Heels,
    Flats,
    Hat,
    Scarf,
    Belt,
    Bag,
    Jewelry,
    Sunglasses,
    #[serde(other)]
    Other,
}

/// A named color with its hex and RGB representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub name: String,
    pub hex: String,
    pub rgb: [u8; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// Free-form item attributes; absent values are explicit, never missing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    pub material: Option<String>,
    pub fit: Option<String>,
    pub gender_target: Option<String>,
}

/// Read-only view of a wardrobe item handed to the pipeline.
///
/// Owned by the wardrobe collaborator; the pipeline never mutates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub garment_type: GarmentType,
    pub tags: Vec<String>,
    pub style: Vec<String>,
    pub dominant_colors: Vec<Color>,
    pub matching_colors: Vec<Color>,
    pub occasion: Vec<String>,
    pub season: Vec<Season>,
    pub metadata: ItemMetadata,
}

/// Ambient weather for the validation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherContext {
    pub temperature_f: f64,
    pub condition: String,
}

/// Subset of the user profile the pipeline reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub body_type: Option<String>,
    pub skin_tone: Option<String>,
    pub style_preferences: Vec<String>,
    pub gender: Option<String>,
}

/// Completeness targets for the candidate set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetCounts {
    pub min_items: usize,
    pub max_items: usize,
    pub required_categories: Vec<CoreCategory>,
}

impl Default for TargetCounts {
    fn default() -> Self {
        Self {
            min_items: 2,
            max_items: 8,
            required_categories: vec![CoreCategory::Top, CoreCategory::Bottom, CoreCategory::Shoes],
        }
    }
}

/// Immutable per-request context, constructed once per validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineContext {
    pub occasion: Option<String>,
    pub style: Option<String>,
    pub mood: Option<String>,
    pub weather: WeatherContext,
    pub user_profile: Option<UserProfile>,
    pub target_counts: TargetCounts,
}

impl PipelineContext {
    /// A context with mild weather and default targets, for callers that
    /// only care about a subset of the checks.
    pub fn with_weather(weather: WeatherContext) -> Self {
        Self {
            occasion: None,
            style: None,
            mood: None,
            weather,
            user_profile: None,
            target_counts: TargetCounts::default(),
        }
    }
}

/// Identity of one of the nine validation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStep {
    OccasionAppropriateness,
    WeatherCompatibility,
    StyleCohesion,
    BodyTypeCompatibility,
    FormCompleteness,
    LayerCount,
    LayeringCompliance,
    ColorHarmony,
    Deduplication,
}

impl ValidationStep {
    pub const fn label(self) -> &'static str {
        match self {
            ValidationStep::OccasionAppropriateness => "occasion_appropriateness",
            ValidationStep::WeatherCompatibility => "weather_compatibility",
            ValidationStep::StyleCohesion => "style_cohesion",
            ValidationStep::BodyTypeCompatibility => "body_type_compatibility",
            ValidationStep::FormCompleteness => "form_completeness",
            ValidationStep::LayerCount => "layer_count",
            ValidationStep::LayeringCompliance => "layering_compliance",
            ValidationStep::ColorHarmony => "color_harmony",
            ValidationStep::Deduplication => "deduplication",
        }
    }
}

/// Output of a single validator invocation, immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub step: ValidationStep,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub metadata: BTreeMap<String, serde_json::Value>,
    pub duration: Duration,
}

impl ValidationResult {
    pub(crate) fn new(
        step: ValidationStep,
        errors: Vec<String>,
        warnings: Vec<String>,
        metadata: BTreeMap<String, serde_json::Value>,
        duration: Duration,
    ) -> Self {
        Self {
            step,
            is_valid: errors.is_empty(),
            errors,
            warnings,
            metadata,
            duration,
        }
    }
}

/// Per-step rollup exposed alongside the flattened error/warning lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSummary {
    pub is_valid: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub duration: Duration,
}

/// Aggregated output of a full validation run.
///
/// `total_duration` is the sum of per-step durations. Four steps run
/// concurrently, so this is a work-accounting metric, not wall-clock
/// latency; downstream consumers rely on the summed semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub step_results: Vec<ValidationResult>,
    pub step_summary: BTreeMap<ValidationStep, StepSummary>,
    pub total_duration: Duration,
    pub steps_executed: usize,
    pub success_rate: f64,
}

impl PipelineResult {
    pub(crate) fn aggregate(step_results: Vec<ValidationResult>) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut step_summary = BTreeMap::new();
        let mut total_duration = Duration::ZERO;
        let mut valid_steps = 0usize;

        for result in &step_results {
            errors.extend(result.errors.iter().cloned());
            warnings.extend(result.warnings.iter().cloned());
            total_duration += result.duration;
            if result.is_valid {
                valid_steps += 1;
            }
            step_summary.insert(
                result.step,
                StepSummary {
                    is_valid: result.is_valid,
                    error_count: result.errors.len(),
                    warning_count: result.warnings.len(),
                    duration: result.duration,
                },
            );
        }

        let steps_executed = step_results.len();
        let success_rate = if steps_executed == 0 {
            0.0
        } else {
            valid_steps as f64 / steps_executed as f64
        };

        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            step_results,
            step_summary,
            total_duration,
            steps_executed,
            success_rate,
        }
    }
}
