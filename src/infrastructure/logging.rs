//! Diagnostic logging
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - tokenize, replace and edit events
//! - `RUST_LOG=promptag::application=debug` - module-level filtering
//!
//! Logs go to stderr so stdout stays usable for prompt text.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber. Defaults to `warn` when RUST_LOG is unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: Could not initialize logging: {}", e);
    }
}
