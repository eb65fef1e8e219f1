//! Tracing configuration.
//!
//! The subscriber is only installed when `TSGEN_LOG` (or `RUST_LOG`) is set,
//! so normal runs print nothing but the command's own output.
//!
//! ```bash
//! TSGEN_LOG=debug tsgen
//! TSGEN_LOG=tsclassgen_source=trace TSGEN_LOG_FORMAT=json tsgen list
//! ```

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Tracing output format, selected by `TSGEN_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    /// Flat text lines (default).
    Text,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("TSGEN_LOG_FORMAT").unwrap_or_default())
    }
}

/// `TSGEN_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("TSGEN_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global tracing subscriber, writing to stderr.
pub fn init_tracing() {
    if std::env::var_os("TSGEN_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = build_filter();

    match LogFormat::from_env() {
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
