//! Minimal starter binary.
//!
//! Prints a greeting and the toolchain version, then exits with code 0.
//! Command-line arguments are never read.

use starter::{exit_codes, greeting, logging, version};
use tracing::{debug, warn};

fn main() {
    logging::init();
    debug!(
        target: logging::TARGET,
        pkg_version = version::PKG_VERSION,
        runtime_version = %version::runtime_version(),
        "starting"
    );

    let stdout = std::io::stdout();
    if let Err(err) = greeting::write_greeting(&mut stdout.lock()) {
        // Logged only; the exit code stays OK.
        warn!(target: logging::TARGET, "{:#}", err);
    }

    std::process::exit(exit_codes::OK);
}
