//! Read-only seam to the wardrobe analytics collaborator.
//!
//! Only the wardrobe-intelligence sub-score talks to this store. Lookups
//! are batched once per scoring run and held in an explicit per-user cache
//! so one request's data never leaks into another user's run.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{ItemId, UserId};

/// Historical engagement signals for one wardrobe item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAnalytics {
    pub wear_count: u32,
    pub is_favorite: bool,
    pub last_worn: Option<NaiveDate>,
    pub average_feedback_rating: Option<f64>,
    pub style_preference_score: Option<f64>,
}

/// Engagement of one saved outfit that contains the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitEngagement {
    pub rating: Option<f64>,
    pub wear_count: u32,
    pub is_liked: bool,
    pub is_disliked: bool,
}

/// Analytics lookup failure. Scoring degrades to a neutral score instead of
/// surfacing one of these to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("analytics store unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction over the analytics collaborator so scoring can be
/// exercised in isolation.
#[allow(async_fn_in_trait)]
pub trait WardrobeAnalytics: Send + Sync {
    async fn item_analytics(
        &self,
        user: &UserId,
        item: &ItemId,
    ) -> Result<Option<ItemAnalytics>, AnalyticsError>;

    async fn outfits_containing(
        &self,
        user: &UserId,
        item: &ItemId,
    ) -> Result<Vec<OutfitEngagement>, AnalyticsError>;
}

/// Everything the intelligence scorer needs for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInsight {
    pub analytics: Option<ItemAnalytics>,
    pub outfits: Vec<OutfitEngagement>,
}

struct CacheEntry {
    inserted: Instant,
    insight: ItemInsight,
}

/// Keyed per user and item with a bounded TTL; read-mostly within a run.
pub struct AnalyticsCache {
    ttl: Duration,
    entries: Mutex<HashMap<(UserId, ItemId), CacheEntry>>,
}

impl AnalyticsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, user: &UserId, item: &ItemId) -> Option<ItemInsight> {
        let mut entries = self.entries.lock().expect("analytics cache poisoned");
        let key = (user.clone(), item.clone());
        let expired = match entries.get(&key) {
            Some(entry) if entry.inserted.elapsed() < self.ttl => {
                return Some(entry.insight.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.remove(&key);
        }
        None
    }

    pub fn put(&self, user: &UserId, item: &ItemId, insight: ItemInsight) {
        let mut entries = self.entries.lock().expect("analytics cache poisoned");
        // Writes double as the eviction point so stale entries from earlier
        // runs cannot accumulate in a long-lived engine.
        entries.retain(|_, entry| entry.inserted.elapsed() < self.ttl);
        entries.insert(
            (user.clone(), item.clone()),
            CacheEntry {
                inserted: Instant::now(),
                insight,
            },
        );
    }
}
