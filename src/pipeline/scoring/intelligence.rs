//! Wardrobe-intelligence sub-score: historical engagement signals per item,
//! averaged across the set.
//!
//! Analytics lookups are batched once per run through the per-user cache.
//! Any lookup failure or missing record degrades that item to a neutral 50;
//! this sub-score never surfaces an error.

use chrono::Utc;

use crate::pipeline::analytics::{
    AnalyticsCache, ItemAnalytics, ItemInsight, OutfitEngagement, WardrobeAnalytics,
};
use crate::pipeline::domain::{ClothingItem, UserId};

const NEUTRAL_ITEM_SCORE: f64 = 50.0;

pub(super) async fn intelligence_score<A>(
    analytics: &A,
    cache: &AnalyticsCache,
    items: &[ClothingItem],
    user: Option<&UserId>,
) -> f64
where
    A: WardrobeAnalytics,
{
    if items.is_empty() {
        return NEUTRAL_ITEM_SCORE;
    }
    let Some(user) = user else {
        return NEUTRAL_ITEM_SCORE;
    };

    // One prefetch pass over the set; every per-item read below hits the
    // cache instead of issuing its own query.
    for item in items {
        if cache.get(user, &item.id).is_some() {
            continue;
        }
        let insight = fetch_insight(analytics, user, item).await;
        cache.put(user, &item.id, insight);
    }

    let mut total = 0.0;
    for item in items {
        let insight = cache.get(user, &item.id).unwrap_or(ItemInsight {
            analytics: None,
            outfits: Vec::new(),
        });
        total += item_score(&insight);
    }
    total / items.len() as f64
}

async fn fetch_insight<A>(analytics: &A, user: &UserId, item: &ClothingItem) -> ItemInsight
where
    A: WardrobeAnalytics,
{
    let record = match analytics.item_analytics(user, &item.id).await {
        Ok(record) => record,
        Err(error) => {
            tracing::warn!(item = %item.id.0, %error, "analytics lookup failed; scoring neutrally");
            None
        }
    };
    let outfits = match analytics.outfits_containing(user, &item.id).await {
        Ok(outfits) => outfits,
        Err(error) => {
            tracing::warn!(item = %item.id.0, %error, "outfit lookup failed; skipping performance bonus");
            Vec::new()
        }
    };
    ItemInsight {
        analytics: record,
        outfits,
    }
}

fn item_score(insight: &ItemInsight) -> f64 {
    let Some(record) = &insight.analytics else {
        return NEUTRAL_ITEM_SCORE;
    };

    let mut score = NEUTRAL_ITEM_SCORE;

    if record.is_favorite {
        score += 25.0;
    }

    score += match record.wear_count {
        0 => 20.0,
        1..=3 => 15.0,
        4..=7 => 10.0,
        _ => 5.0,
    };

    score += recency_delta(record);

    if let Some(rating) = record.average_feedback_rating {
        score += match rating {
            r if r >= 4.5 => 15.0,
            r if r >= 4.0 => 10.0,
            r if r >= 3.0 => 5.0,
            r if r < 2.0 => -10.0,
            _ => 0.0,
        };
    }

    if let Some(preference) = record.style_preference_score {
        score += preference.clamp(0.0, 1.0) * 10.0;
    }

    score += performance_bonus(&insight.outfits);

    // Diversity: an item that barely appears in saved outfits gets a nudge.
    if insight.outfits.len() <= 1 {
        score += 5.0;
    }

    score.clamp(0.0, 100.0)
}

/// Worn yesterday costs the most; an item resting for over a month earns a
/// small bonus.
fn recency_delta(record: &ItemAnalytics) -> f64 {
    let Some(last_worn) = record.last_worn else {
        return 5.0;
    };
    let days = (Utc::now().date_naive() - last_worn).num_days();
    match days {
        d if d <= 1 => -15.0,
        d if d <= 3 => -10.0,
        d if d <= 7 => -5.0,
        d if d > 30 => 5.0,
        _ => 0.0,
    }
}

/// Up to +20 from how other outfits containing the item performed, with
/// consistency and wearability multipliers of 10% each.
fn performance_bonus(outfits: &[OutfitEngagement]) -> f64 {
    if outfits.is_empty() {
        return 0.0;
    }

    let rated: Vec<f64> = outfits.iter().filter_map(|outfit| outfit.rating).collect();
    let average_rating = if rated.is_empty() {
        0.0
    } else {
        rated.iter().sum::<f64>() / rated.len() as f64
    };

    let liked = outfits.iter().filter(|outfit| outfit.is_liked).count();
    let disliked = outfits.iter().filter(|outfit| outfit.is_disliked).count();
    let liked_share = liked as f64 / outfits.len() as f64;
    let disliked_share = disliked as f64 / outfits.len() as f64;

    let base = (average_rating / 5.0) * 12.0 + liked_share * 8.0 - disliked_share * 8.0;

    let total_wears: u32 = outfits.iter().map(|outfit| outfit.wear_count).sum();
    let mut multiplier = 1.0;
    if outfits.len() >= 3 {
        multiplier += 0.1;
    }
    if total_wears >= 5 {
        multiplier += 0.1;
    }

    (base * multiplier).clamp(0.0, 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(wear_count: u32) -> ItemAnalytics {
        ItemAnalytics {
            wear_count,
            is_favorite: false,
            last_worn: None,
            average_feedback_rating: None,
            style_preference_score: None,
        }
    }

    #[test]
    fn missing_analytics_scores_neutral() {
        let insight = ItemInsight {
            analytics: None,
            outfits: Vec::new(),
        };
        assert_eq!(item_score(&insight), NEUTRAL_ITEM_SCORE);
    }

    #[test]
    fn fresh_items_outscore_heavily_worn_ones() {
        let fresh = ItemInsight {
            analytics: Some(record(0)),
            outfits: Vec::new(),
        };
        let worn = ItemInsight {
            analytics: Some(record(12)),
            outfits: Vec::new(),
        };
        assert!(item_score(&fresh) > item_score(&worn));
    }

    #[test]
    fn performance_bonus_caps_at_twenty() {
        let outfits = vec![
            OutfitEngagement {
                rating: Some(5.0),
                wear_count: 4,
                is_liked: true,
                is_disliked: false,
            };
            4
        ];
        let bonus = performance_bonus(&outfits);
        assert!(bonus > 0.0);
        assert!(bonus <= 20.0);
    }
}
