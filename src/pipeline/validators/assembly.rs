//! Checks over the physical shape of the outfit: completeness against the
//! requested targets, layer counts for the temperature, compliance with the
//! layering rule, and duplicate detection. Deduplication is the one hard
//! gate here; a duplicate id is a structural error.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::json;

use super::Findings;
use crate::pipeline::classification::{can_layer, core_category, CoreCategory};
use crate::pipeline::domain::{ClothingItem, ItemId, PipelineContext};
use crate::pipeline::layering::{layering_rule, satisfies_category, validate_layering};

pub(super) fn check_completeness(items: &[ClothingItem], context: &PipelineContext) -> Findings {
    let mut warnings = Vec::new();
    let targets = &context.target_counts;

    if items.len() < targets.min_items {
        warnings.push(format!(
            "outfit has {} item(s); at least {} expected",
            items.len(),
            targets.min_items
        ));
    }
    if items.len() > targets.max_items {
        warnings.push(format!(
            "outfit has {} items; at most {} expected",
            items.len(),
            targets.max_items
        ));
    }

    let present: Vec<CoreCategory> = items
        .iter()
        .map(|item| core_category(item.garment_type))
        .collect();
    for required in &targets.required_categories {
        if !satisfies_category(&present, *required) {
            warnings.push(format!("outfit is missing a {}", required.label()));
        }
    }

    Findings::advisory(warnings).with_metadata("item_count", json!(items.len()))
}

pub(super) fn check_layer_count(items: &[ClothingItem], context: &PipelineContext) -> Findings {
    let mut warnings = Vec::new();

    let rule = layering_rule(context.weather.temperature_f);
    let layer_count = items
        .iter()
        .filter(|item| can_layer(item.garment_type))
        .count();

    if layer_count < rule.min_layers {
        warnings.push(format!(
            "{layer_count} layer(s) is light for {:.0}°F; {} or more suit it better",
            context.weather.temperature_f, rule.min_layers
        ));
    } else if layer_count > rule.max_layers {
        warnings.push(format!(
            "{layer_count} layers is a lot for {:.0}°F; {} at most suits it better",
            context.weather.temperature_f, rule.max_layers
        ));
    }

    match context.occasion.as_deref() {
        Some(occasion) if occasion.eq_ignore_ascii_case("formal") && layer_count < 2 => {
            warnings.push("formal occasions usually call for at least two layers".to_string());
        }
        Some(occasion) if occasion.eq_ignore_ascii_case("casual") && layer_count > 3 => {
            warnings.push("more than three layers reads heavy for a casual occasion".to_string());
        }
        _ => {}
    }

    Findings::advisory(warnings).with_metadata("layer_count", json!(layer_count))
}

pub(super) fn check_layering_compliance(
    items: &[ClothingItem],
    context: &PipelineContext,
) -> Findings {
    let outcome = validate_layering(items, context.weather.temperature_f);

    let errors = outcome
        .errors
        .iter()
        .map(|error| error.summary())
        .collect();
    let warnings = outcome
        .warnings
        .iter()
        .map(|warning| warning.summary())
        .collect();

    Findings {
        errors,
        warnings,
        metadata: BTreeMap::new(),
    }
    .with_metadata("layer_count", json!(outcome.layer_count))
    .with_metadata(
        "preferred_warmth",
        json!(outcome.rule.preferred_warmth.label()),
    )
}

pub(super) fn check_deduplication(items: &[ClothingItem], _context: &PipelineContext) -> Findings {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let mut seen: BTreeSet<&ItemId> = BTreeSet::new();
    for item in items {
        if !seen.insert(&item.id) {
            errors.push(format!(
                "duplicate item '{}' ({}) in the candidate set",
                item.name, item.id.0
            ));
        }
    }

    let mut per_category: BTreeMap<CoreCategory, usize> = BTreeMap::new();
    for item in items {
        *per_category
            .entry(core_category(item.garment_type))
            .or_default() += 1;
    }
    for (category, count) in &per_category {
        if *count > 1 {
            warnings.push(format!(
                "{count} items map to the {} category",
                category.label()
            ));
        }
    }

    Findings {
        errors,
        warnings,
        metadata: BTreeMap::new(),
    }
}
