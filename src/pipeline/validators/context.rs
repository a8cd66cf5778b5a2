//! Context-driven advisory checks: occasion, weather, style cohesion, and
//! body type. These four are independent of each other and run in the
//! orchestrator's parallel phase. All of them are warning-only by product
//! decision; none blocks a save.

use std::collections::BTreeSet;

use serde_json::json;

use super::rules;
use super::Findings;
use crate::pipeline::classification::core_category;
use crate::pipeline::domain::{ClothingItem, PipelineContext};

/// Every descriptor an item exposes for occasion/style matching: its core
/// category plus its tags, styles, and declared occasions.
fn item_descriptors(item: &ClothingItem) -> Vec<&str> {
    let mut descriptors: Vec<&str> = item
        .tags
        .iter()
        .chain(item.style.iter())
        .chain(item.occasion.iter())
        .map(String::as_str)
        .collect();
    descriptors.push(core_category(item.garment_type).label());
    descriptors
}

pub(super) fn check_occasion(items: &[ClothingItem], context: &PipelineContext) -> Findings {
    let mut warnings = Vec::new();

    let Some(occasion) = context.occasion.as_deref() else {
        return Findings::advisory(warnings);
    };
    let Some(rule) = rules::occasion_rule(occasion) else {
        return Findings::advisory(warnings)
            .with_metadata("occasion", json!({ "recognized": false }));
    };

    for item in items {
        let descriptors = item_descriptors(item);
        let forbidden: Vec<&str> = descriptors
            .iter()
            .copied()
            .filter(|descriptor| {
                rule.forbidden
                    .iter()
                    .any(|entry| entry.eq_ignore_ascii_case(descriptor))
            })
            .collect();
        if !forbidden.is_empty() {
            warnings.push(format!(
                "'{}' reads {} which clashes with a {} occasion",
                item.name,
                forbidden.join("/"),
                rule.occasion
            ));
            continue;
        }

        let preferred = descriptors.iter().any(|descriptor| {
            rule.preferred
                .iter()
                .any(|entry| entry.eq_ignore_ascii_case(descriptor))
        });
        if !preferred {
            warnings.push(format!(
                "'{}' shows none of the descriptors expected for a {} occasion",
                item.name, rule.occasion
            ));
        }
    }

    Findings::advisory(warnings).with_metadata("occasion", json!(rule.occasion))
}

pub(super) fn check_weather(items: &[ClothingItem], context: &PipelineContext) -> Findings {
    let mut warnings = Vec::new();
    let weather = &context.weather;
    let rainy = weather.condition.eq_ignore_ascii_case("rainy")
        || weather.condition.eq_ignore_ascii_case("rain");

    for item in items {
        let Some(material) = item.metadata.material.as_deref() else {
            continue;
        };

        if weather.temperature_f < 50.0
            && rules::material_in(material, rules::COLD_UNSUITABLE_MATERIALS)
        {
            warnings.push(format!(
                "'{}' is {material}, too light for {:.0}°F",
                item.name, weather.temperature_f
            ));
        }
        if weather.temperature_f > 80.0
            && rules::material_in(material, rules::HOT_UNSUITABLE_MATERIALS)
        {
            warnings.push(format!(
                "'{}' is {material}, too heavy for {:.0}°F",
                item.name, weather.temperature_f
            ));
        }
        if rainy && rules::material_in(material, rules::RAIN_UNSUITABLE_MATERIALS) {
            warnings.push(format!(
                "'{}' is {material}, which does not hold up in rain",
                item.name
            ));
        }
    }

    Findings::advisory(warnings).with_metadata(
        "weather",
        json!({ "temperature_f": weather.temperature_f, "condition": weather.condition }),
    )
}

pub(super) fn check_style_cohesion(items: &[ClothingItem], context: &PipelineContext) -> Findings {
    let mut warnings = Vec::new();

    let distinct: BTreeSet<String> = items
        .iter()
        .flat_map(|item| item.style.iter())
        .map(|style| style.to_ascii_lowercase())
        .collect();

    if let Some(requested) = context.style.as_deref() {
        for item in items {
            for style in &item.style {
                if rules::styles_conflict(requested, style) {
                    warnings.push(format!(
                        "'{}' is {style}, which conflicts with the requested {requested} style",
                        item.name
                    ));
                }
            }
        }
    }

    if distinct.len() > 3 {
        warnings.push(format!(
            "{} distinct styles in one outfit dilutes its direction",
            distinct.len()
        ));
    }

    Findings::advisory(warnings).with_metadata("distinct_styles", json!(distinct.len()))
}

pub(super) fn check_body_type(items: &[ClothingItem], context: &PipelineContext) -> Findings {
    let mut warnings = Vec::new();

    let body_type = context
        .user_profile
        .as_ref()
        .and_then(|profile| profile.body_type.as_deref());
    let Some(body_type) = body_type else {
        return Findings::advisory(warnings);
    };
    let Some(avoid) = rules::body_type_avoid_list(body_type) else {
        return Findings::advisory(warnings);
    };

    for item in items {
        for tag in &item.tags {
            if avoid.iter().any(|entry| entry.eq_ignore_ascii_case(tag)) {
                warnings.push(format!(
                    "'{}' is tagged {tag}, usually avoided for a {body_type} body type",
                    item.name
                ));
            }
        }
    }

    Findings::advisory(warnings).with_metadata("body_type", json!(body_type))
}
