use serde::{Deserialize, Serialize};

use super::classification::{can_layer, core_category, warmth_factor, CoreCategory, WarmthFactor};
use super::domain::{ClothingItem, GarmentType};

/// Acceptable layering shape for one ambient temperature band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayeringRule {
    pub min_layers: usize,
    pub max_layers: usize,
    pub required_categories: Vec<CoreCategory>,
    pub preferred_warmth: WarmthFactor,
}

/// Rule lookup over the six fixed temperature bands (°F).
pub fn layering_rule(temperature_f: f64) -> LayeringRule {
    if temperature_f < 32.0 {
        LayeringRule {
            min_layers: 3,
            max_layers: 5,
            required_categories: vec![
                CoreCategory::Top,
                CoreCategory::Bottom,
                CoreCategory::Outerwear,
            ],
            preferred_warmth: WarmthFactor::Heavy,
        }
    } else if temperature_f < 50.0 {
        LayeringRule {
            min_layers: 2,
            max_layers: 4,
            required_categories: vec![
                CoreCategory::Top,
                CoreCategory::Bottom,
                CoreCategory::Outerwear,
            ],
            preferred_warmth: WarmthFactor::Heavy,
        }
    } else if temperature_f < 65.0 {
        LayeringRule {
            min_layers: 2,
            max_layers: 3,
            required_categories: vec![CoreCategory::Top, CoreCategory::Bottom],
            preferred_warmth: WarmthFactor::Medium,
        }
    } else if temperature_f < 75.0 {
        LayeringRule {
            min_layers: 1,
            max_layers: 3,
            required_categories: vec![CoreCategory::Top, CoreCategory::Bottom],
            preferred_warmth: WarmthFactor::Medium,
        }
    } else if temperature_f < 85.0 {
        LayeringRule {
            min_layers: 1,
            max_layers: 2,
            required_categories: vec![CoreCategory::Top, CoreCategory::Bottom],
            preferred_warmth: WarmthFactor::Light,
        }
    } else {
        // The hottest band allows exactly one light layer.
        LayeringRule {
            min_layers: 1,
            max_layers: 1,
            required_categories: vec![CoreCategory::Top, CoreCategory::Bottom],
            preferred_warmth: WarmthFactor::Light,
        }
    }
}

/// Structural layering problem; blocks saving the outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayeringError {
    TooFewLayers { count: usize, minimum: usize },
    MissingCategory(CoreCategory),
}

impl LayeringError {
    pub fn summary(&self) -> String {
        match self {
            LayeringError::TooFewLayers { count, minimum } => format!(
                "only {count} layerable item(s) present; at least {minimum} required for this temperature"
            ),
            LayeringError::MissingCategory(category) => {
                format!("no {} present for this temperature", category.label())
            }
        }
    }
}

/// Advisory layering concern; never blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayeringWarning {
    TooManyLayers { count: usize, maximum: usize },
    WarmthMismatch { item: String, warmth: WarmthFactor, preferred: WarmthFactor },
    HeavyCombination { first: String, second: String },
}

impl LayeringWarning {
    pub fn summary(&self) -> String {
        match self {
            LayeringWarning::TooManyLayers { count, maximum } => {
                format!("{count} layerable items exceed the {maximum} suited to this temperature")
            }
            LayeringWarning::WarmthMismatch {
                item,
                warmth,
                preferred,
            } => format!(
                "'{item}' is {} where {} pieces suit this temperature",
                warmth.label(),
                preferred.label()
            ),
            LayeringWarning::HeavyCombination { first, second } => {
                format!("'{first}' and '{second}' are both heavy outer pieces")
            }
        }
    }
}

/// Outcome of checking a garment set against the temperature-derived rule,
/// including the explicit heavy-combination flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayeringOutcome {
    pub rule: LayeringRule,
    pub layer_count: usize,
    pub errors: Vec<LayeringError>,
    pub warnings: Vec<LayeringWarning>,
}

impl LayeringOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Whether a set of present categories satisfies a required category.
///
/// A dress covers both the top and bottom requirement.
pub(crate) fn satisfies_category(present: &[CoreCategory], required: CoreCategory) -> bool {
    if present.contains(&required) {
        return true;
    }
    matches!(required, CoreCategory::Top | CoreCategory::Bottom)
        && present.contains(&CoreCategory::Dress)
}

const HEAVY_COMBOS: &[(GarmentType, GarmentType)] = &[
    (GarmentType::Sweater, GarmentType::Jacket),
    (GarmentType::Sweater, GarmentType::Coat),
    (GarmentType::Jacket, GarmentType::Coat),
];

fn heavy_combinations(items: &[ClothingItem]) -> Vec<LayeringWarning> {
    let mut warnings = Vec::new();
    for (first, second) in HEAVY_COMBOS {
        let a = items.iter().find(|item| item.garment_type == *first);
        let b = items.iter().find(|item| item.garment_type == *second);
        if let (Some(a), Some(b)) = (a, b) {
            warnings.push(LayeringWarning::HeavyCombination {
                first: a.name.clone(),
                second: b.name.clone(),
            });
        }
    }
    warnings
}

/// Check a garment set against the rule for the given temperature.
///
/// Below-minimum layer counts and missing required categories are errors;
/// everything else stays advisory.
pub fn validate_layering(items: &[ClothingItem], temperature_f: f64) -> LayeringOutcome {
    let rule = layering_rule(temperature_f);

    let layer_count = items
        .iter()
        .filter(|item| can_layer(item.garment_type))
        .count();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if layer_count < rule.min_layers {
        errors.push(LayeringError::TooFewLayers {
            count: layer_count,
            minimum: rule.min_layers,
        });
    } else if layer_count > rule.max_layers {
        warnings.push(LayeringWarning::TooManyLayers {
            count: layer_count,
            maximum: rule.max_layers,
        });
    }

    let present: Vec<CoreCategory> = items
        .iter()
        .map(|item| core_category(item.garment_type))
        .collect();
    for required in &rule.required_categories {
        if !satisfies_category(&present, *required) {
            errors.push(LayeringError::MissingCategory(*required));
        }
    }

    // Warmth is checked for every garment, not just the ones that count as
    // layers; sandals in a freeze still deserve a flag.
    for item in items {
        let warmth = warmth_factor(item.garment_type);
        if warmth != rule.preferred_warmth {
            warnings.push(LayeringWarning::WarmthMismatch {
                item: item.name.clone(),
                warmth,
                preferred: rule.preferred_warmth,
            });
        }
    }

    warnings.extend(heavy_combinations(items));

    LayeringOutcome {
        rule,
        layer_count,
        errors,
        warnings,
    }
}
