use std::io;

use tracing_subscriber::{EnvFilter, prelude::*};

use crate::{
    config::{AppConfig, TracingConfig},
    error::AppResult,
};

/// Tracing subscriber setup.
pub struct Tracer;

impl Tracer {
    /// Installs the global subscriber described by `config.tracing`.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn install(config: &AppConfig) -> AppResult<()> {
        if config.tracing == TracingConfig::Off {
            return Ok(());
        }

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_filter(EnvFilter::from_default_env());

        tracing_subscriber::registry().with(layer).try_init()?;

        Ok(())
    }
}
