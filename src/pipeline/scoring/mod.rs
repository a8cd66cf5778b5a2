//! Weighted outfit scoring.
//!
//! Six sub-scores, each clamped to `[0, 100]` before its fixed weight is
//! applied. The engine never fails: missing analytics degrade to a neutral
//! per-item score instead of propagating an error.

mod intelligence;
mod rules;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;

use super::analytics::{AnalyticsCache, WardrobeAnalytics};
use super::domain::{ClothingItem, PipelineContext, TargetCounts, UserId};
use super::layering::LayeringOutcome;
use super::validators::PaletteOutcome;

pub(crate) const COMPOSITION_WEIGHT: f64 = 0.20;
pub(crate) const LAYERING_WEIGHT: f64 = 0.15;
pub(crate) const COLOR_WEIGHT: f64 = 0.15;
pub(crate) const MATERIAL_WEIGHT: f64 = 0.10;
pub(crate) const STYLE_WEIGHT: f64 = 0.15;
pub(crate) const INTELLIGENCE_WEIGHT: f64 = 0.25;

/// Context for a scoring request; a pipeline context plus the wardrobe
/// owner whose history the intelligence sub-score reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringContext {
    pub user_id: Option<UserId>,
    pub occasion: Option<String>,
    pub style: Option<String>,
    pub mood: Option<String>,
    pub target_counts: TargetCounts,
}

impl ScoringContext {
    pub fn from_pipeline(context: &PipelineContext, user_id: Option<UserId>) -> Self {
        Self {
            user_id,
            occasion: context.occasion.clone(),
            style: context.style.clone(),
            mood: context.mood.clone(),
            target_counts: context.target_counts.clone(),
        }
    }
}

/// Ten-step letter scale over the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    D,
}

impl Grade {
    pub fn from_total(total: f64) -> Self {
        match total {
            t if t >= 90.0 => Grade::APlus,
            t if t >= 85.0 => Grade::A,
            t if t >= 80.0 => Grade::AMinus,
            t if t >= 75.0 => Grade::BPlus,
            t if t >= 70.0 => Grade::B,
            t if t >= 65.0 => Grade::BMinus,
            t if t >= 60.0 => Grade::CPlus,
            t if t >= 55.0 => Grade::C,
            t if t >= 50.0 => Grade::CMinus,
            _ => Grade::D,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::D => "D",
        }
    }
}

/// Prose bands keyed to the same thresholds as the grade.
fn interpretation(total: f64) -> &'static str {
    match total {
        t if t >= 90.0 => "An exceptional combination; everything works together.",
        t if t >= 80.0 => "A strong outfit with only minor room to improve.",
        t if t >= 70.0 => "A good outfit; a small adjustment would lift it.",
        t if t >= 60.0 => "A workable outfit with a few points of friction.",
        t if t >= 50.0 => "A mixed result; consider swapping a piece or two.",
        _ => "This combination needs rethinking before it is worn.",
    }
}

/// The six weighted sub-scores plus the clamped, rounded total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub composition_score: f64,
    pub layering_score: f64,
    pub color_score: f64,
    pub material_score: f64,
    pub style_score: f64,
    pub wardrobe_intelligence_score: f64,
    pub total_score: f64,
    pub grade: Grade,
    pub interpretation: &'static str,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Stateless scorer over an injected analytics collaborator.
pub struct ScoringEngine<A> {
    analytics: Arc<A>,
    cache: AnalyticsCache,
}

impl<A> ScoringEngine<A>
where
    A: WardrobeAnalytics,
{
    pub fn new(analytics: Arc<A>, config: &PipelineConfig) -> Self {
        Self {
            analytics,
            cache: AnalyticsCache::new(config.analytics_cache_ttl),
        }
    }

    /// Compute the weighted breakdown for a candidate set.
    ///
    /// Deterministic for identical inputs and analytics state; never
    /// returns an error to the caller.
    pub async fn score(
        &self,
        items: &[ClothingItem],
        context: &ScoringContext,
        layering: &LayeringOutcome,
        palette: &PaletteOutcome,
    ) -> ScoreBreakdown {
        let composition = rules::composition_score(items, &context.target_counts);
        let layering_score = rules::layering_score(layering);
        let color = rules::color_score(palette);
        let material = rules::material_score(items);
        let style = rules::style_score(items, palette, context);
        let intelligence = intelligence::intelligence_score(
            self.analytics.as_ref(),
            &self.cache,
            items,
            context.user_id.as_ref(),
        )
        .await;

        let total = composition * COMPOSITION_WEIGHT
            + layering_score * LAYERING_WEIGHT
            + color * COLOR_WEIGHT
            + material * MATERIAL_WEIGHT
            + style * STYLE_WEIGHT
            + intelligence * INTELLIGENCE_WEIGHT;
        let total = round2(total.clamp(0.0, 100.0));

        ScoreBreakdown {
            composition_score: round2(composition),
            layering_score: round2(layering_score),
            color_score: round2(color),
            material_score: round2(material),
            style_score: round2(style),
            wardrobe_intelligence_score: round2(intelligence),
            total_score: total,
            grade: Grade::from_total(total),
            interpretation: interpretation(total),
        }
    }
}
