//! Logging setup for the command-line application
//!
//! Logs go to standard error so that standard output only carries the rendered
//! scene. When `RUST_LOG` is unset a default filter is installed: `debug` for
//! this workspace in debug builds, `info` otherwise.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn default_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,track_scene=debug,track_scene_lib=debug"
    } else {
        "info"
    }
}

/// Initialize the global tracing subscriber
pub fn setup_logging() {
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new(default_filter()),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter);
    tracing_subscriber::registry().with(fmt_layer).init();

    if std::env::var("RUST_LOG").is_err() {
        tracing::debug!("RUST_LOG not set, using default filter: {}", default_filter());
    }
}

/// Log the application name and version
pub fn log_version_info() {
    tracing::info!(
        "{} {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );
}
