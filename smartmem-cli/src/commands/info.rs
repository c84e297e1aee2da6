use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use smartmem_lib::display::optional_code;
use smartmem_lib::util::format_bytes;
use smartmem_lib::{ImageSummary, load_image};

use crate::commands::{display_name, print_json};
use crate::{CliError, Outcome};

/// Run the info command.
pub(crate) fn run_info(path: &Path, json: bool) -> Result<Outcome, CliError> {
    let image = load_image(path)?;
    let summary = ImageSummary::from_image(&image);

    if json {
        print_json(&summary)?;
        return Ok(Outcome::Success);
    }

    log::info!(
        "{}",
        display_name(path).if_supports_color(Stdout, |t| t.bold())
    );
    log::info!("  Size:            {}", format_bytes(summary.size as u64));
    log::info!(
        "  Checksum ranges: {}",
        if summary.full_ranges {
            "present".if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            "INCOMPLETE".if_supports_color(Stdout, |t| t.yellow()).to_string()
        }
    );
    log::info!(
        "  HPT marker:      {}",
        if summary.has_marker {
            "found".if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            "not found".if_supports_color(Stdout, |t| t.dimmed()).to_string()
        }
    );
    log::info!("  Secure ID:       {}", optional_code(summary.secure_code));
    log::info!(
        "  Part number:     {}",
        summary.part_number.as_deref().unwrap_or("n/a")
    );
    crate::log_blank();
    Ok(Outcome::Success)
}
