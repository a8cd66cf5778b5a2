//! Schedules the nine validators and aggregates their results.
//!
//! A run moves through three phases: a parallel fan-out of the four
//! context checks, a fixed-order sequential phase, and a final
//! deduplication pass. A validator that panics or misses its deadline is
//! dropped with a logged warning; the run always completes and always
//! returns a well-formed [`PipelineResult`].

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{timeout_at, Instant};

use crate::config::PipelineConfig;

use super::domain::{ClothingItem, PipelineContext, PipelineResult, ValidationResult, ValidationStep};
use super::validators::run_validator;

/// Why a validator produced no result for this run.
///
/// Faults stay inside the orchestrator: the caller only ever sees genuine
/// structural problems in `PipelineResult.errors`, never internal failures.
#[derive(Debug, thiserror::Error)]
pub enum ValidatorFault {
    #[error("validator task panicked")]
    Panicked,
    #[error("validator missed its {0:?} deadline")]
    TimedOut(Duration),
}

/// These four read none of each other's output, so they fan out together.
const PARALLEL_STEPS: [ValidationStep; 4] = [
    ValidationStep::OccasionAppropriateness,
    ValidationStep::WeatherCompatibility,
    ValidationStep::StyleCohesion,
    ValidationStep::BodyTypeCompatibility,
];

/// Fixed execution order; a later step may read an earlier step's metadata.
const SEQUENTIAL_STEPS: [ValidationStep; 4] = [
    ValidationStep::FormCompleteness,
    ValidationStep::LayerCount,
    ValidationStep::LayeringCompliance,
    ValidationStep::ColorHarmony,
];

/// Orchestrator for a single validation request.
pub struct ValidationPipeline {
    config: PipelineConfig,
}

impl ValidationPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run every step against the candidate set and aggregate the results.
    ///
    /// Aggregation order is deterministic regardless of task completion
    /// timing: parallel results come back in launch order, then the
    /// sequential steps in execution order, then deduplication.
    pub async fn run(&self, items: Vec<ClothingItem>, context: PipelineContext) -> PipelineResult {
        let items = Arc::new(items);
        let context = Arc::new(context);
        let run_deadline = Instant::now() + self.config.run_timeout;

        let mut results: Vec<ValidationResult> = Vec::with_capacity(9);

        tracing::debug!(items = items.len(), "pipeline entering parallel phase");
        let handles: Vec<(ValidationStep, JoinHandle<ValidationResult>)> = PARALLEL_STEPS
            .into_iter()
            .map(|step| (step, spawn_validator(step, &items, &context)))
            .collect();
        for (step, handle) in handles {
            self.collect(step, handle, run_deadline, &mut results).await;
        }

        tracing::debug!("pipeline entering sequential phase");
        for step in SEQUENTIAL_STEPS {
            let handle = spawn_validator(step, &items, &context);
            self.collect(step, handle, run_deadline, &mut results).await;
        }

        tracing::debug!("pipeline entering dedup phase");
        let handle = spawn_validator(ValidationStep::Deduplication, &items, &context);
        self.collect(ValidationStep::Deduplication, handle, run_deadline, &mut results)
            .await;

        PipelineResult::aggregate(results)
    }

    async fn collect(
        &self,
        step: ValidationStep,
        handle: JoinHandle<ValidationResult>,
        run_deadline: Instant,
        results: &mut Vec<ValidationResult>,
    ) {
        match settle(handle, run_deadline, self.config.validator_timeout).await {
            Ok(result) => results.push(result),
            Err(fault) => {
                tracing::warn!(step = step.label(), %fault, "validator result dropped");
            }
        }
    }
}

fn spawn_validator(
    step: ValidationStep,
    items: &Arc<Vec<ClothingItem>>,
    context: &Arc<PipelineContext>,
) -> JoinHandle<ValidationResult> {
    let items = Arc::clone(items);
    let context = Arc::clone(context);
    tokio::spawn(async move { run_validator(step, &items, &context) })
}

async fn settle(
    mut handle: JoinHandle<ValidationResult>,
    run_deadline: Instant,
    validator_timeout: Duration,
) -> Result<ValidationResult, ValidatorFault> {
    let started = Instant::now();
    let deadline = (started + validator_timeout).min(run_deadline);
    match timeout_at(deadline, &mut handle).await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(_join_error)) => Err(ValidatorFault::Panicked),
        Err(_elapsed) => {
            handle.abort();
            // The run deadline may be nearer than the per-validator budget;
            // the fault reports whichever actually applied.
            Err(ValidatorFault::TimedOut(
                deadline.saturating_duration_since(started),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn timeout_reports_the_nearer_run_deadline() {
        let handle = tokio::spawn(std::future::pending::<ValidationResult>());
        let run_deadline = Instant::now() + Duration::from_millis(10);

        let fault = settle(handle, run_deadline, Duration::from_secs(2))
            .await
            .expect_err("pending task must time out");

        match fault {
            ValidatorFault::TimedOut(budget) => {
                assert_eq!(budget, Duration::from_millis(10));
            }
            ValidatorFault::Panicked => panic!("expected a timeout fault"),
        }
    }
}
