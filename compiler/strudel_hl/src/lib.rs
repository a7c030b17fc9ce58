//! Command-line driver for the Strudel highlighter.
//!
//! The binary in `main.rs` only dispatches; argument parsing, input reading
//! and output formatting live here.

use std::sync::Once;

pub mod commands;
mod error;

pub use commands::{HighlightCommand, OutputFormat, SourceArg};
pub use error::{CliError, Result};

static TRACING_INIT: Once = Once::new();

/// Install a stderr `tracing` subscriber, once per process.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=strudel_highlight=trace strudel-hl html song.strudel`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
