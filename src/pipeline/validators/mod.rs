//! The nine validation steps.
//!
//! Every validator shares one contract: it reads an immutable view of the
//! candidate items and the request context, touches no other state, and
//! produces exactly one [`ValidationResult`] with its wall-clock duration
//! recorded. Severity is asymmetric on purpose: stylistic concerns stay
//! advisory, structural ones block.

mod assembly;
mod color;
mod context;
pub(crate) mod rules;

pub use color::{assess_palette, PaletteOutcome, PaletteTemperature};

use std::collections::BTreeMap;
use std::time::Instant;

use super::domain::{ClothingItem, PipelineContext, ValidationResult, ValidationStep};

/// Raw validator output before timing and validity are attached.
pub(crate) struct Findings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Findings {
    pub(crate) fn advisory(warnings: Vec<String>) -> Self {
        Self {
            errors: Vec::new(),
            warnings,
            metadata: BTreeMap::new(),
        }
    }

    pub(crate) fn with_metadata(mut self, key: &str, value: serde_json::Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }
}

/// Execute one validation step against the candidate set.
pub(crate) fn run_validator(
    step: ValidationStep,
    items: &[ClothingItem],
    context: &PipelineContext,
) -> ValidationResult {
    let started = Instant::now();
    let findings = match step {
        ValidationStep::OccasionAppropriateness => context::check_occasion(items, context),
        ValidationStep::WeatherCompatibility => context::check_weather(items, context),
        ValidationStep::StyleCohesion => context::check_style_cohesion(items, context),
        ValidationStep::BodyTypeCompatibility => context::check_body_type(items, context),
        ValidationStep::FormCompleteness => assembly::check_completeness(items, context),
        ValidationStep::LayerCount => assembly::check_layer_count(items, context),
        ValidationStep::LayeringCompliance => assembly::check_layering_compliance(items, context),
        ValidationStep::ColorHarmony => color::check_color_harmony(items, context),
        ValidationStep::Deduplication => assembly::check_deduplication(items, context),
    };

    ValidationResult::new(
        step,
        findings.errors,
        findings.warnings,
        findings.metadata,
        started.elapsed(),
    )
}
