//! # fsearch
//!
//! Recursive file-content search. A small flag grammar is compiled into a
//! single `find ... -exec grep ...` invocation, which is then echoed,
//! executed, dumped, or captured into a viewer.
//!
//! ## Features
//!
//! - One-dash and two-dash flag spellings with short aliases
//! - Variadic `--exclude` that stops at the next known flag
//! - Commands spawned from argument vectors, never through a shell
//! - Dry-run, debug, quiet and editor-capture output modes
//!
//! ## Example
//!
//! ```no_run
//! use fsearch::{cli, config::Config, core::SearchPlan};
//!
//! let config = Config::default();
//! let request = cli::parse_args(["hello", "*.py", "--exclude", "vendor"], &config)?;
//! let plan = SearchPlan::from_request(&request, &config);
//! println!("{}", plan.describe());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
