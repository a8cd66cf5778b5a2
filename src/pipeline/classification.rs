use serde::{Deserialize, Serialize};

use super::domain::GarmentType;

/// Coarse garment classification used to check outfit completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreCategory {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Shoes,
    Accessory,
}

impl CoreCategory {
    pub const fn label(self) -> &'static str {
        match self {
            CoreCategory::Top => "top",
            CoreCategory::Bottom => "bottom",
            CoreCategory::Dress => "dress",
            CoreCategory::Outerwear => "outerwear",
            CoreCategory::Shoes => "shoes",
            CoreCategory::Accessory => "accessory",
        }
    }
}

/// Position of a garment in a layered outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerLevel {
    Base,
    Inner,
    Middle,
    Outer,
}

/// Warmth classification checked against the ambient temperature bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarmthFactor {
    Light,
    Medium,
    Heavy,
}

impl WarmthFactor {
    pub const fn label(self) -> &'static str {
        match self {
            WarmthFactor::Light => "light",
            WarmthFactor::Medium => "medium",
            WarmthFactor::Heavy => "heavy",
        }
    }
}

/// Core category for a garment type. Unknown types fail open to accessory.
pub fn core_category(garment: GarmentType) -> CoreCategory {
    use GarmentType::*;
    match garment {
        Shirt | TShirt | Blouse | Sweater | Hoodie | TankTop | Cardigan => CoreCategory::Top,
        Jeans | Pants | Shorts | Skirt | Leggings => CoreCategory::Bottom,
        Dress => CoreCategory::Dress,
        Jacket | Coat | Blazer | Vest => CoreCategory::Outerwear,
        Sneakers | Boots | Sandals | Heels | Flats => CoreCategory::Shoes,
        Hat | Scarf | Belt | Bag | Jewelry | Sunglasses | Other => CoreCategory::Accessory,
    }
}

/// Layer position for a garment type. Unknown types default to base.
pub fn layer_level(garment: GarmentType) -> LayerLevel {
    use GarmentType::*;
    match garment {
        TankTop | TShirt => LayerLevel::Base,
        Shirt | Blouse | Dress => LayerLevel::Inner,
        Sweater | Hoodie | Cardigan | Blazer | Vest => LayerLevel::Middle,
        Jacket | Coat => LayerLevel::Outer,
        _ => LayerLevel::Base,
    }
}

/// Warmth factor for a garment type. Unknown types default to medium.
pub fn warmth_factor(garment: GarmentType) -> WarmthFactor {
    use GarmentType::*;
    match garment {
        TankTop | TShirt | Shorts | Skirt | Sandals => WarmthFactor::Light,
        Sweater | Hoodie | Jacket | Coat | Boots | Scarf => WarmthFactor::Heavy,
        _ => WarmthFactor::Medium,
    }
}

/// Whether the garment participates in layer counting.
pub fn can_layer(garment: GarmentType) -> bool {
    use GarmentType::*;
    matches!(
        garment,
        Shirt
            | TShirt
            | Blouse
            | Sweater
            | Hoodie
            | TankTop
            | Cardigan
            | Dress
            | Jacket
            | Coat
            | Blazer
            | Vest
    )
}

/// How many garments of this type can stack in one outfit.
pub fn max_layers(garment: GarmentType) -> usize {
    use GarmentType::*;
    match garment {
        TankTop | TShirt | Shirt | Blouse => 2,
        Sweater | Hoodie | Cardigan | Blazer | Vest => 2,
        Jacket | Coat => 1,
        _ => 1,
    }
}
