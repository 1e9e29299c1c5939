// File: crates/demo/src/logging.rs
// Summary: tracing subscriber setup for the demo (stderr, filter from SNAKE_LOG).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// ```bash
/// SNAKE_LOG=debug cargo run -p snake-demo
/// ```
pub fn init() {
    // Default to info for the core crate, warn elsewhere
    let env_filter = EnvFilter::try_from_env("SNAKE_LOG").unwrap_or_else(|_| EnvFilter::new("snake_core=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}
