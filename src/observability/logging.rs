//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the CLI
//! - Pick the default filter from config, let `RUST_LOG` override it
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Compact format by default, pretty format for development
//! - Initializing twice is harmless (the second call is ignored)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::{LogFormat, LoggingConfig};

fn filter_for(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(&config.level))
}

/// Filter for a configured level, falling back to `info` when it does not parse.
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global fmt subscriber. Returns false if one was already set.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let registry = tracing_subscriber::registry().with(filter_for(config));

    let result = match config.format {
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };

    result.is_ok()
}
