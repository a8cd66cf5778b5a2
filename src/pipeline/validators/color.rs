//! Color harmony: the palette assessment shared by the validator and the
//! scoring engine, plus the advisory harmony check itself.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::rules;
use super::Findings;
use crate::pipeline::domain::{ClothingItem, PipelineContext};

/// Rough palette temperature used for the color sub-score bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteTemperature {
    Warm,
    Cool,
    Neutral,
    Mixed,
}

static WARM_COLORS: &[&str] = &[
    "red", "orange", "yellow", "pink", "coral", "brown", "burgundy", "gold", "rust",
];
static COOL_COLORS: &[&str] = &[
    "blue", "green", "purple", "teal", "navy", "mint", "lavender", "lime",
];

/// Palette view of the candidate set, consumed by the color sub-score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteOutcome {
    pub unique_colors: Vec<String>,
    pub conflicts: Vec<(String, String)>,
    pub temperature: PaletteTemperature,
}

/// Collect the dominant palette across the set and classify it.
pub fn assess_palette(items: &[ClothingItem]) -> PaletteOutcome {
    let unique: BTreeSet<String> = items
        .iter()
        .flat_map(|item| item.dominant_colors.iter())
        .map(|color| color.name.to_ascii_lowercase())
        .collect();
    let unique_colors: Vec<String> = unique.into_iter().collect();

    let mut conflicts = Vec::new();
    for (index, first) in unique_colors.iter().enumerate() {
        for second in unique_colors.iter().skip(index + 1) {
            if rules::colors_conflict(first, second) {
                conflicts.push((first.clone(), second.clone()));
            }
        }
    }

    let warm = unique_colors
        .iter()
        .filter(|name| WARM_COLORS.contains(&name.as_str()))
        .count();
    let cool = unique_colors
        .iter()
        .filter(|name| COOL_COLORS.contains(&name.as_str()))
        .count();

    let temperature = match (warm, cool) {
        (0, 0) => PaletteTemperature::Neutral,
        (_, 0) => PaletteTemperature::Warm,
        (0, _) => PaletteTemperature::Cool,
        _ => PaletteTemperature::Mixed,
    };

    PaletteOutcome {
        unique_colors,
        conflicts,
        temperature,
    }
}

pub(super) fn check_color_harmony(items: &[ClothingItem], _context: &PipelineContext) -> Findings {
    let palette = assess_palette(items);
    let mut warnings = Vec::new();

    for (first, second) in &palette.conflicts {
        warnings.push(format!(
            "{first} and {second} are complementary colors that clash as dominants"
        ));
    }
    if palette.unique_colors.len() > 4 {
        warnings.push(format!(
            "{} unique colors is busy for one outfit",
            palette.unique_colors.len()
        ));
    }

    Findings::advisory(warnings)
        .with_metadata("unique_colors", json!(palette.unique_colors.len()))
        .with_metadata("palette_temperature", json!(palette.temperature))
}
