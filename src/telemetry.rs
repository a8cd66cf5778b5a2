//! Tracing setup for hosts embedding the pipeline.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::{AppEnvironment, TelemetryConfig};

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to install global subscriber: {0}")]
    Install(Box<dyn std::error::Error + Send + Sync>),
}

/// Directives applied when `RUST_LOG` is unset: the configured level for the
/// host, with this crate's target opened up outside production so validator
/// drops and phase markers are visible during development and CI.
fn default_directives(environment: AppEnvironment, config: &TelemetryConfig) -> String {
    match environment {
        AppEnvironment::Production => config.log_level.clone(),
        AppEnvironment::Development | AppEnvironment::Test => {
            format!("{},outfit_pipeline=debug", config.log_level)
        }
    }
}

/// Install the global subscriber used by the pipeline's tracing output.
///
/// `RUST_LOG` wins when set; otherwise the environment-derived directives
/// apply.
pub fn init(environment: AppEnvironment, config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directives = default_directives(environment, config);
            EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter {
                value: directives,
                source,
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Install)
}
