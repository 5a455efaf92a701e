//! Tracing setup for the `helix` binary.
//!
//! The library crates only emit events; this module decides where they go.
//! Diagnostics always land on stderr so stdout stays clean for
//! `helix templates show` and `helix config show`.
//!
//! `-q` maps to ERROR, no flag to WARN, then `-v`/`-vv`/`-vvv` raise it to
//! INFO/DEBUG/TRACE. A set `RUST_LOG` replaces the whole filter.

use std::io::{self, IsTerminal as _};

use anyhow::Context as _;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crate targets that share the verbosity level.
const TARGETS: [&str; 3] = ["helix", "helix_core", "helix_adapters"];

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(args))));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .context("tracing subscriber already installed")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `helix=debug,helix_core=debug,...`; other crates stay at the default.
fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
