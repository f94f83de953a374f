//! Diagnostics for the starter binary.
//!
//! Stdout carries the program's output and nothing else. Diagnostics are
//! written to stderr through `tracing`, filtered by `RUST_LOG`, and stay
//! silent at the default `warn` level unless stdout fails.
//!
//! Events from the binary and the library are both emitted under
//! [`TARGET`], so one directive covers the whole program:
//!
//! ```bash
//! RUST_LOG=starter=debug cargo run
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Target for every event the starter emits.
pub const TARGET: &str = "starter";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .compact(),
        )
        .init();
}
