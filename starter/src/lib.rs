//! Minimal project starter.
//!
//! The binary prints a greeting and the toolchain version it was built
//! with, then exits successfully. The pieces live here so the binary stays
//! a thin wrapper and the output can be tested against any writer:
//!
//! - **[`greeting`]**: the two output lines.
//! - **[`version`]**: build-time version information.
//! - **[`exit_codes`]**: the process exit code.
//! - **[`logging`]**: developer diagnostics on stderr.

pub mod exit_codes;
pub mod greeting;
pub mod logging;
pub mod version;
