//! The two lines the starter prints.

use std::io::Write;

use anyhow::{Context, Result};

use crate::version::runtime_version;

/// First output line.
pub const GREETING: &str = concat!("Hello from ", env!("CARGO_PKG_NAME"), "!");

/// Label in front of the version string on the second line.
pub const VERSION_LABEL: &str = "Rust version";

/// Format the second output line for `version`.
pub fn version_line(version: &str) -> String {
    format!("{}: {}", VERSION_LABEL, version)
}

/// Write the greeting and the version line to `out`, in that order.
///
/// Each line ends with `\n`. The writer is flushed before returning.
pub fn write_greeting<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", GREETING).context("write greeting line")?;
    writeln!(out, "{}", version_line(&runtime_version())).context("write version line")?;
    out.flush().context("flush stdout")?;
    Ok(())
}
