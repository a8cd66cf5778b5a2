use std::collections::HashMap;

use crate::pipeline::analytics::{
    AnalyticsError, ItemAnalytics, OutfitEngagement, WardrobeAnalytics,
};
use crate::pipeline::domain::{
    ClothingItem, Color, GarmentType, ItemId, ItemMetadata, PipelineContext, TargetCounts, UserId,
    WeatherContext,
};

pub(super) fn color(name: &str) -> Color {
    let hex = match name {
        "blue" => "#0000ff",
        "navy" => "#000080",
        "white" => "#ffffff",
        "red" => "#ff0000",
        "green" => "#00ff00",
        _ => "#808080",
    };
    Color {
        name: name.to_string(),
        hex: hex.to_string(),
        rgb: [0, 0, 0],
    }
}

pub(super) fn item(id: &str, name: &str, garment_type: GarmentType) -> ClothingItem {
    ClothingItem {
        id: ItemId(id.to_string()),
        name: name.to_string(),
        garment_type,
        tags: vec!["casual".to_string()],
        style: vec!["casual".to_string()],
        dominant_colors: vec![color("blue")],
        matching_colors: Vec::new(),
        occasion: vec!["casual".to_string()],
        season: Vec::new(),
        metadata: ItemMetadata {
            material: Some("cotton".to_string()),
            fit: None,
            gender_target: None,
        },
    }
}

pub(super) fn with_colors(mut item: ClothingItem, names: &[&str]) -> ClothingItem {
    item.dominant_colors = names.iter().map(|name| color(name)).collect();
    item
}

pub(super) fn with_material(mut item: ClothingItem, material: &str) -> ClothingItem {
    item.metadata.material = Some(material.to_string());
    item
}

/// One top, one bottom, one shoe, all consistently casual.
pub(super) fn casual_outfit() -> Vec<ClothingItem> {
    vec![
        with_colors(item("top-1", "Blue tee", GarmentType::TShirt), &["blue"]),
        with_colors(item("bottom-1", "Dark jeans", GarmentType::Jeans), &["navy"]),
        with_colors(
            item("shoes-1", "White sneakers", GarmentType::Sneakers),
            &["white"],
        ),
    ]
}

pub(super) fn context(temperature_f: f64) -> PipelineContext {
    PipelineContext {
        occasion: Some("casual".to_string()),
        style: Some("casual".to_string()),
        mood: None,
        weather: WeatherContext {
            temperature_f,
            condition: "clear".to_string(),
        },
        user_profile: None,
        target_counts: TargetCounts::default(),
    }
}

pub(super) fn user() -> UserId {
    UserId("user-1".to_string())
}

/// In-memory analytics collaborator for scoring tests.
#[derive(Default)]
pub(super) struct MemoryAnalytics {
    pub(super) records: HashMap<(UserId, ItemId), ItemAnalytics>,
    pub(super) outfits: HashMap<(UserId, ItemId), Vec<OutfitEngagement>>,
}

impl MemoryAnalytics {
    pub(super) fn with_record(mut self, item: &str, record: ItemAnalytics) -> Self {
        self.records
            .insert((user(), ItemId(item.to_string())), record);
        self
    }
}

impl WardrobeAnalytics for MemoryAnalytics {
    async fn item_analytics(
        &self,
        user: &UserId,
        item: &ItemId,
    ) -> Result<Option<ItemAnalytics>, AnalyticsError> {
        Ok(self.records.get(&(user.clone(), item.clone())).cloned())
    }

    async fn outfits_containing(
        &self,
        user: &UserId,
        item: &ItemId,
    ) -> Result<Vec<OutfitEngagement>, AnalyticsError> {
        Ok(self
            .outfits
            .get(&(user.clone(), item.clone()))
            .cloned()
            .unwrap_or_default())
    }
}

/// Analytics collaborator that always fails, for degradation tests.
pub(super) struct UnavailableAnalytics;

impl WardrobeAnalytics for UnavailableAnalytics {
    async fn item_analytics(
        &self,
        _user: &UserId,
        _item: &ItemId,
    ) -> Result<Option<ItemAnalytics>, AnalyticsError> {
        Err(AnalyticsError::Unavailable("store offline".to_string()))
    }

    async fn outfits_containing(
        &self,
        _user: &UserId,
        _item: &ItemId,
    ) -> Result<Vec<OutfitEngagement>, AnalyticsError> {
        Err(AnalyticsError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn plain_record(wear_count: u32) -> ItemAnalytics {
    ItemAnalytics {
        wear_count,
        is_favorite: false,
        last_worn: None,
        average_feedback_rating: None,
        style_preference_score: None,
    }
}
