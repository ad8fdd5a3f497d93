use std::env;

use config::{Config, Environment, File};
use cookbook_catalog::options::CatalogOptions;
use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Distribution metadata configuration
    pub distribution: DistributionConfig,
    /// Catalog store settings
    #[serde(default)]
    pub catalog: CatalogOptions,
    /// Tracing configuration
    pub tracing: TracingConfig,
}

/// Distribution metadata configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DistributionConfig {
    /// Distribution name
    pub name: String,
    /// Distribution version
    pub version: Option<String>,
}

/// Tracing configuration.
///
/// Log output always goes to stderr so that results on stdout stay parseable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TracingConfig {
    /// No log output
    Off,
    /// Formatted log output on stderr, filtered by `RUST_LOG`
    Stderr,
}

const CONFIG_PATH_ENV: &str = "COOKBOOK_CONFIG_PATH";
const ENV_PREFIX: &str = "COOKBOOK";
const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

const DISTRIBUTION_NAME_KEY: &str = "distribution.name";
const DISTRIBUTION_VERSION_KEY: &str = "distribution.version";
const TRACING_KIND_KEY: &str = "tracing.kind";

impl AppConfig {
    /// Loads configuration from defaults, an optional file and the environment.
    ///
    /// The file is named by `COOKBOOK_CONFIG_PATH`. Environment variables use
    /// the `COOKBOOK` prefix with `__` as separator, for example
    /// `COOKBOOK__CATALOG__DUPLICATES=reject`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn load() -> AppResult<Self> {
        Self::load_from(env::var(CONFIG_PATH_ENV).ok().as_deref())
    }

    /// Loads configuration with an explicit optional file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn load_from(config_path: Option<&str>) -> AppResult<Self> {
        let mut config_builder = Config::builder()
            .set_default(DISTRIBUTION_NAME_KEY, NAME)?
            .set_default(DISTRIBUTION_VERSION_KEY, VERSION)?
            .set_default(TRACING_KIND_KEY, "stderr")?;

        if let Some(config_path) = config_path {
            config_builder = config_builder.add_source(File::with_name(config_path));
        }

        config_builder = config_builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        Ok(config_builder.build()?.try_deserialize()?)
    }
}
