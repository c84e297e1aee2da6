pub(crate) mod compute;
pub(crate) mod config;
pub(crate) mod info;
pub(crate) mod resolve;
pub(crate) mod sensors;
pub(crate) mod verify;

use std::path::Path;

use serde::Serialize;

use smartmem_lib::ImageSummary;

use crate::CliError;

/// Print a value as pretty JSON on stdout (not through the logger, so
/// `--quiet` does not hide it).
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// File name for display, falling back to the full path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

/// Warn once when the image cannot supply both checksum ranges.
pub(crate) fn warn_if_short(path: &Path, summary: &ImageSummary) {
    if !summary.full_ranges {
        log::warn!(
            "{} is only {} bytes; the computed code cannot match a genuine Secure ID",
            display_name(path),
            summary.size,
        );
    }
}

#[cfg(test)]
#[path = "tests/log_capture.rs"]
pub(crate) mod log_capture;
