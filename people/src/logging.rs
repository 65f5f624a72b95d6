//! Development-time tracing for the people CLI.
//!
//! # Output streams
//!
//! - **Command output** (`show`, `greet`, `compare`, `calc`): written to stdout
//!   by `cli`, always, and never filtered by `RUST_LOG`. Scripts parse it.
//! - **Diagnostics (this module)**: roster loading, person construction and
//!   `calc` dispatch events, written to stderr at the level `RUST_LOG` selects.
//! - **Errors**: `main` prints the error chain to stderr and exits with a code
//!   from `exit_codes`, independent of the tracing level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is unset or unparsable.
const DEFAULT_DIRECTIVES: &str = "warn";

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=people=debug cargo run -- show
/// ```
pub fn init() {
    let filter = build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}
