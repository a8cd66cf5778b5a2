use std::env;
use std::fmt;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the pipeline host.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub pipeline: PipelineConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let validator_timeout = duration_var("PIPELINE_VALIDATOR_TIMEOUT_MS", 2_000)?;
        let run_timeout = duration_var("PIPELINE_RUN_TIMEOUT_MS", 2_000)?;
        let cache_ttl_secs = env::var("PIPELINE_ANALYTICS_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidDuration {
                variable: "PIPELINE_ANALYTICS_CACHE_TTL_SECS",
            })?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            pipeline: PipelineConfig {
                validator_timeout,
                run_timeout,
                analytics_cache_ttl: Duration::from_secs(cache_ttl_secs),
            },
        })
    }
}

fn duration_var(name: &'static str, default_ms: u64) -> Result<Duration, ConfigError> {
    let millis = env::var(name)
        .unwrap_or_else(|_| default_ms.to_string())
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidDuration { variable: name })?;
    Ok(Duration::from_millis(millis))
}

/// Tuning knobs for a single pipeline run.
///
/// Timeouts bound each validator and the run as a whole; a step that misses
/// its deadline is dropped exactly like a panicked one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub validator_timeout: Duration,
    pub run_timeout: Duration,
    pub analytics_cache_ttl: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            validator_timeout: Duration::from_millis(2_000),
            run_timeout: Duration::from_millis(2_000),
            analytics_cache_ttl: Duration::from_secs(60),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidDuration { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDuration { variable } => {
                write!(f, "{variable} must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
