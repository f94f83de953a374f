//! Build-time version information.
//!
//! There is no interpreter to ask at run time, so the "runtime version" is
//! the compiler that produced this binary, captured by `build.rs`, plus the
//! target triple.

/// Output of `rustc --version` at build time, or `unknown`.
pub const RUSTC_VERSION: &str = env!("STARTER_RUSTC_VERSION");

/// Target triple the binary was built for.
pub const BUILD_TARGET: &str = env!("STARTER_BUILD_TARGET");

/// Package version from Cargo metadata.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version string reported on the second output line.
///
/// Format: `<rustc --version> [<target>]`, for example
/// `rustc 1.85.0 (4d91de4e4 2025-02-17) [x86_64-unknown-linux-gnu]`.
pub fn runtime_version() -> String {
    format!("{} [{}]", RUSTC_VERSION, BUILD_TARGET)
}
