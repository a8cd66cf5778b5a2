//! Outfit validation and scoring pipeline.
//!
//! The crate is a pure computation library: the HTTP layer hands it an
//! in-memory set of clothing items plus the request context, and receives a
//! fully aggregated [`pipeline::PipelineResult`] or
//! [`pipeline::ScoreBreakdown`] back. Persistence, routing, and billing live
//! elsewhere; the only outbound dependency is the read-only wardrobe
//! analytics collaborator behind [`pipeline::WardrobeAnalytics`].

pub mod config;
pub mod pipeline;
pub mod telemetry;

pub use config::{AppConfig, AppEnvironment, ConfigError, PipelineConfig};
pub use pipeline::{
    PipelineContext, PipelineResult, ScoreBreakdown, ScoringEngine, ValidationPipeline,
};
