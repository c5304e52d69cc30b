//! Tracing/logging initialization.
//!
//! JSON (or pretty) lines with system timestamps, filtered by `RUST_LOG`.

use tracing_subscriber::fmt::time::SystemTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, ObservabilityConfig};
use crate::error::ObservabilityError;

/// Initialize tracing/logging for the process with the environment config.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let _ = try_init(&ObservabilityConfig::from_env());
}

/// Install the global subscriber described by `config`.
///
/// Directives from `RUST_LOG` that do not parse are replaced by
/// `config.default_filter` and reported with a warning once the subscriber is
/// up. Fails if `default_filter` itself does not parse or a subscriber is
/// already set.
pub fn try_init(config: &ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, rejected) = build_filter(env_directives.as_deref(), &config.default_filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_timer(SystemTime)
                    .with_target(false),
            )
            .try_init()?,
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_timer(SystemTime)
                    .with_target(false),
            )
            .try_init()?,
    }

    if let Some(rejected) = rejected {
        ::tracing::warn!(
            rejected = %rejected,
            fallback = %config.default_filter,
            "invalid RUST_LOG directives, using default filter"
        );
    }
    ::tracing::debug!(format = ?config.format, "tracing initialized");
    Ok(())
}

/// Pick the filter: `env_directives` when they parse, else `default_filter`.
///
/// The second element carries the rejected directives, if any.
fn build_filter(
    env_directives: Option<&str>,
    default_filter: &str,
) -> Result<(EnvFilter, Option<String>), ObservabilityError> {
    if let Some(directives) = env_directives {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return Ok((filter, None)),
            Err(_) => {
                let filter = EnvFilter::try_new(default_filter)?;
                return Ok((filter, Some(directives.to_string())));
            }
        }
    }
    Ok((EnvFilter::try_new(default_filter)?, None))
}
