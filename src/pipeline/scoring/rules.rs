//! The five locally computed sub-scores. Each starts from a base, applies
//! additive and subtractive deltas from the rule tables, and is clamped to
//! `[0, 100]` before weighting.

use std::collections::BTreeSet;

use crate::pipeline::classification::core_category;
use crate::pipeline::domain::{ClothingItem, TargetCounts};
use crate::pipeline::layering::{satisfies_category, LayeringError, LayeringOutcome, LayeringWarning};
use crate::pipeline::validators::{PaletteOutcome, PaletteTemperature};

use super::ScoringContext;

fn clamp(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// 40 points for required-category coverage, a band bonus for item count,
/// and 10 per distinct category capped at 30.
pub(super) fn composition_score(items: &[ClothingItem], targets: &TargetCounts) -> f64 {
    let present: Vec<_> = items
        .iter()
        .map(|item| core_category(item.garment_type))
        .collect();

    let required = &targets.required_categories;
    let coverage = if required.is_empty() {
        1.0
    } else {
        let satisfied = required
            .iter()
            .filter(|category| satisfies_category(&present, **category))
            .count();
        satisfied as f64 / required.len() as f64
    };
    let mut score = 40.0 * coverage;

    score += match items.len() {
        3..=6 => 30.0,
        2..=7 => 20.0,
        _ => 10.0,
    };

    let distinct: BTreeSet<_> = present.iter().copied().collect();
    score += (distinct.len() as f64 * 10.0).min(30.0);

    clamp(score)
}

/// Starts at 100 and charges for each layering concern; small bonus for a
/// layer count that sits in the comfortable range.
pub(super) fn layering_score(outcome: &LayeringOutcome) -> f64 {
    let mut score = 100.0;

    for error in &outcome.errors {
        if let LayeringError::TooFewLayers { .. } = error {
            score -= 8.0;
        }
    }
    for warning in &outcome.warnings {
        match warning {
            LayeringWarning::WarmthMismatch { .. } => score -= 15.0,
            LayeringWarning::TooManyLayers { .. } => score -= 10.0,
            LayeringWarning::HeavyCombination { .. } => score -= 12.0,
        }
    }

    match outcome.layer_count {
        2..=3 => score += 5.0,
        1 => score += 2.0,
        _ => {}
    }

    clamp(score)
}

/// Rewards a tight palette and a coherent temperature.
pub(super) fn color_score(palette: &PaletteOutcome) -> f64 {
    let mut score = 100.0;

    match palette.unique_colors.len() {
        0 => score -= 30.0,
        1 => score += 10.0,
        2..=4 => score += 15.0,
        n if n > 6 => score -= 10.0,
        _ => {}
    }

    score += match palette.temperature {
        PaletteTemperature::Warm | PaletteTemperature::Cool => 10.0,
        PaletteTemperature::Neutral => 8.0,
        PaletteTemperature::Mixed => 5.0,
    };

    clamp(score)
}

static LUXURY_MATERIALS: &[&str] = &["silk", "cashmere", "leather", "velvet", "satin"];
static NATURAL_MATERIALS: &[&str] = &["cotton", "linen", "wool", "silk", "cashmere", "denim"];

fn material_in(material: &str, table: &[&str]) -> bool {
    table.iter().any(|entry| entry.eq_ignore_ascii_case(material))
}

/// Classifies the overall material mix; items without a declared material
/// are simply left out of the classification.
pub(super) fn material_score(items: &[ClothingItem]) -> f64 {
    let mut score = 100.0;

    let materials: Vec<&str> = items
        .iter()
        .filter_map(|item| item.metadata.material.as_deref())
        .collect();
    if materials.is_empty() {
        return clamp(score);
    }

    let luxury = materials
        .iter()
        .filter(|material| material_in(material, LUXURY_MATERIALS))
        .count();
    let natural = materials
        .iter()
        .filter(|material| material_in(material, NATURAL_MATERIALS))
        .count();

    if luxury * 2 >= materials.len() {
        score += 15.0;
    } else if natural * 2 >= materials.len() {
        score += 10.0;
    }
    if luxury > 0 && natural > 0 {
        score += 5.0;
    }

    clamp(score)
}

/// Item-count caps and floors per requested style.
static STYLE_COUNT_RULES: &[(&str, Option<usize>, Option<usize>, f64)] = &[
    // (style, max items, min items, penalty)
    ("minimalist", Some(4), None, 15.0),
    ("maximalist", None, Some(5), 15.0),
    ("elegant", Some(5), None, 10.0),
];

/// Unique-color caps per requested mood.
static MOOD_COLOR_CAPS: &[(&str, usize, f64)] = &[
    ("calm", 3, 10.0),
    ("serene", 3, 10.0),
    ("romantic", 4, 10.0),
];

pub(super) fn style_score(
    items: &[ClothingItem],
    palette: &PaletteOutcome,
    context: &ScoringContext,
) -> f64 {
    let mut score = 100.0;

    if let Some(style) = context.style.as_deref() {
        for (name, max_items, min_items, penalty) in STYLE_COUNT_RULES {
            if !name.eq_ignore_ascii_case(style) {
                continue;
            }
            if let Some(max) = max_items {
                if items.len() > *max {
                    score -= penalty;
                }
            }
            if let Some(min) = min_items {
                if items.len() < *min {
                    score -= penalty;
                }
            }
        }
    }

    if let Some(mood) = context.mood.as_deref() {
        for (name, max_colors, penalty) in MOOD_COLOR_CAPS {
            if name.eq_ignore_ascii_case(mood) && palette.unique_colors.len() > *max_colors {
                score -= penalty;
            }
        }
    }

    clamp(score)
}
