//! Command-line driver for the cookbook catalog.
//!
//! Runs either the built-in demo scenario or a JSON script of operations
//! against one in-memory catalog, printing one line per operation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cookbook_catalog::store::CatalogStore;
use tracing::info;

use crate::{
    config::AppConfig,
    output::OutputFormat,
    script::Session,
    tracer::Tracer,
};

mod config;
mod error;
mod output;
mod script;
mod tracer;

/// Command-line interface configuration.
#[derive(Parser)]
#[command(name = "cookbook-cli")]
#[command(about = "Create and query an in-memory catalog of authors and recipe books")]
#[command(version)]
pub struct Cli {
    /// Print each result as a JSON line
    #[arg(long, short = 'J', env = "COOKBOOK_JSON")]
    pub json: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in cookbook scenario
    Demo,
    /// Run operations from a JSON script
    Run {
        /// Path to a JSON array of operations
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    Tracer::install(&config)?;
    info!(
        "Starting {} v{}",
        config.distribution.name,
        config.distribution.version.as_deref().unwrap_or("unknown"),
    );

    let operations = match &cli.command {
        Commands::Demo => script::demo_operations(),
        Commands::Run { path } => script::load(path)
            .with_context(|| format!("failed to load script {}", path.display()))?,
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let session = Session::new(CatalogStore::open(config.catalog));
    for operation in &operations {
        let outcome = session
            .execute(operation)
            .with_context(|| format!("operation `{}` failed", operation.name()))?;
        println!("{}", output::render(operation, &outcome, format)?);
    }

    Ok(())
}
