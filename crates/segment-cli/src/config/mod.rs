//! CLI configuration management.
//!
//! ```text
//! Cli
//! └── command
//!     ├── validate   <FILE> --dimensions <CATALOG> [limits]
//!     ├── summarize  <FILE> [--labels <LABELS>]
//!     └── convert    <FILE> [--format auto|nested] [--pretty]
//! ```
//!
//! Limits can also be provided via environment variables
//! (`FILTER_MAX_CONDITIONS`, `FILTER_MAX_DEPTH`).

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use segment_filter::FilterLimits;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::TRACING_TARGET;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "segment")]
#[command(about = "Validate, summarize and convert audience segment filters")]
#[command(version)]
pub struct Cli {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Checks a wire-format filter against a dimension catalog and limits.
    Validate {
        /// Wire-format filter file.
        file: PathBuf,

        /// Dimension catalog file (JSON list of dimension specs).
        #[arg(long, short = 'd', env = "SEGMENT_DIMENSIONS")]
        dimensions: PathBuf,

        /// Structural limits.
        #[clap(flatten)]
        limits: FilterLimits,
    },

    /// Prints a one-line description of a filter.
    Summarize {
        /// Wire-format filter file.
        file: PathBuf,

        /// Operator labels file (JSON object keyed by operator).
        #[arg(long, env = "SEGMENT_LABELS")]
        labels: Option<PathBuf>,
    },

    /// Re-emits a filter after a round trip through the editor tree.
    Convert {
        /// Wire-format filter file.
        file: PathBuf,

        /// Output shape.
        #[arg(long, value_enum, default_value = "auto")]
        format: OutputFormat,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

/// Wire shape produced by `convert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Flat triples when possible, nested otherwise.
    Auto,
    /// Always the nested shape.
    Nested,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    ///
    /// Logs go to stderr so command output on stdout stays machine-readable.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    /// Logs build information and the selected command at debug level.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            features = ?Self::enabled_features(),
            "Build information"
        );

        if let Command::Validate { limits, .. } = &self.command {
            tracing::debug!(
                target: TRACING_TARGET,
                max_conditions = limits.max_conditions,
                max_depth = limits.max_depth,
                "Filter limits"
            );
        }
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
