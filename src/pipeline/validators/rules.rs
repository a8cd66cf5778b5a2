//! Named rule tables consulted by the validators.
//!
//! Hoisted into one place so product can tune them without touching the
//! validator logic, and so tests can reference the same constants.

/// Per-occasion preferred and forbidden descriptors, matched against an
/// item's core category, tags, styles, and declared occasions.
pub(crate) struct OccasionRule {
    pub occasion: &'static str,
    pub preferred: &'static [&'static str],
    pub forbidden: &'static [&'static str],
}

pub(crate) static OCCASION_RULES: &[OccasionRule] = &[
    OccasionRule {
        occasion: "formal",
        preferred: &["formal", "elegant", "business", "classic"],
        forbidden: &["athletic", "beachwear", "sleepwear", "distressed"],
    },
    OccasionRule {
        occasion: "business",
        preferred: &["business", "formal", "professional", "classic"],
        forbidden: &["athletic", "beachwear", "sleepwear"],
    },
    OccasionRule {
        occasion: "casual",
        preferred: &["casual", "everyday", "relaxed", "streetwear"],
        forbidden: &["sleepwear"],
    },
    OccasionRule {
        occasion: "athletic",
        preferred: &["athletic", "sporty", "activewear"],
        forbidden: &["formal", "delicate", "elegant", "dress"],
    },
    OccasionRule {
        occasion: "party",
        preferred: &["party", "trendy", "elegant", "glam"],
        forbidden: &["athletic", "sleepwear"],
    },
    OccasionRule {
        occasion: "wedding",
        preferred: &["formal", "elegant", "classic"],
        forbidden: &["casual", "athletic", "beachwear"],
    },
    OccasionRule {
        occasion: "beach",
        preferred: &["beachwear", "summer", "casual"],
        forbidden: &["formal", "business"],
    },
    OccasionRule {
        occasion: "date",
        preferred: &["elegant", "romantic", "stylish", "trendy"],
        forbidden: &["athletic", "sleepwear"],
    },
];

pub(crate) fn occasion_rule(occasion: &str) -> Option<&'static OccasionRule> {
    OCCASION_RULES
        .iter()
        .find(|rule| rule.occasion.eq_ignore_ascii_case(occasion))
}

/// Style pairs that read as contradictory in one outfit.
pub(crate) static STYLE_CONFLICTS: &[(&str, &str)] = &[
    ("minimalist", "maximalist"),
    ("formal", "athletic"),
    ("formal", "grunge"),
    ("bohemian", "business"),
    ("edgy", "preppy"),
    ("vintage", "futuristic"),
    ("romantic", "grunge"),
];

pub(crate) fn styles_conflict(a: &str, b: &str) -> bool {
    STYLE_CONFLICTS.iter().any(|(left, right)| {
        (left.eq_ignore_ascii_case(a) && right.eq_ignore_ascii_case(b))
            || (left.eq_ignore_ascii_case(b) && right.eq_ignore_ascii_case(a))
    })
}

/// Item tags each body type is generally advised to avoid.
pub(crate) static BODY_TYPE_AVOID: &[(&str, &[&str])] = &[
    ("apple", &["bodycon", "clingy", "cropped", "high-waisted-crop"]),
    ("pear", &["skinny", "tapered", "pencil"]),
    ("hourglass", &["boxy", "oversized", "shapeless"]),
    ("rectangle", &["shapeless", "straight-cut"]),
    ("inverted_triangle", &["shoulder-pads", "puffed-sleeves", "boat-neck"]),
];

pub(crate) fn body_type_avoid_list(body_type: &str) -> Option<&'static [&'static str]> {
    BODY_TYPE_AVOID
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(body_type))
        .map(|(_, tags)| *tags)
}

/// Complementary color pairs that clash when both appear as dominants.
pub(crate) static COLOR_CONFLICTS: &[(&str, &str)] = &[
    ("red", "green"),
    ("blue", "orange"),
    ("yellow", "purple"),
    ("pink", "lime"),
    ("teal", "coral"),
];

pub(crate) fn colors_conflict(a: &str, b: &str) -> bool {
    COLOR_CONFLICTS.iter().any(|(left, right)| {
        (left.eq_ignore_ascii_case(a) && right.eq_ignore_ascii_case(b))
            || (left.eq_ignore_ascii_case(b) && right.eq_ignore_ascii_case(a))
    })
}

/// Materials that read too light for cold weather.
pub(crate) static COLD_UNSUITABLE_MATERIALS: &[&str] = &["linen", "chiffon", "mesh", "rayon"];

/// Materials that read too heavy for hot weather.
pub(crate) static HOT_UNSUITABLE_MATERIALS: &[&str] =
    &["wool", "fleece", "leather", "velvet", "cashmere"];

/// Materials that do not hold up in rain.
pub(crate) static RAIN_UNSUITABLE_MATERIALS: &[&str] = &["suede", "silk", "velvet"];

pub(crate) fn material_in(material: &str, table: &[&str]) -> bool {
    table.iter().any(|entry| entry.eq_ignore_ascii_case(material))
}
