use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use smartmem_lib::display::resolution_description;
use smartmem_lib::hpe::resolve;
use smartmem_lib::util::format_code;
use smartmem_lib::{ImageSummary, Resolution, SensorCatalog, load_image};

use crate::commands::{display_name, print_json, warn_if_short};
use crate::{CliError, Outcome};

#[derive(Serialize)]
struct ResolveReport<'a> {
    image: String,
    #[serde(flatten)]
    resolution: &'a Resolution,
}

/// Run the resolve command.
pub(crate) fn run_resolve(
    path: &Path,
    catalog: &SensorCatalog,
    json: bool,
) -> Result<Outcome, CliError> {
    let image = load_image(path)?;
    let summary = ImageSummary::from_image(&image);
    warn_if_short(path, &summary);

    let result = resolve(&image, catalog.candidates());

    if json {
        print_json(&ResolveReport {
            image: path.display().to_string(),
            resolution: &result,
        })?;
    } else {
        print_resolution(path, catalog, &result);
    }

    Ok(if result.is_found() {
        Outcome::Success
    } else {
        Outcome::Negative
    })
}

fn print_resolution(path: &Path, catalog: &SensorCatalog, result: &Resolution) {
    log::info!(
        "{}",
        display_name(path).if_supports_color(Stdout, |t| t.bold())
    );
    if let Some(code) = result.secure_code() {
        log::info!("  Secure ID:       {}", format_code(code));
        log::info!("  Candidates:      {}", catalog.len());
    }

    let verdict = resolution_description(result);
    match result {
        Resolution::Found {
            candidate,
            encryption_code,
            ..
        } => {
            log::info!(
                "  Sensor:          {}",
                candidate.label.if_supports_color(Stdout, |t| t.cyan())
            );
            log::info!("  Register 6:      0x{:04X}", candidate.registers.reg6);
            log::info!("  Register 7:      0x{:04X}", candidate.registers.reg7);
            log::info!("  Encryption ID:   {}", format_code(*encryption_code));
            log::info!(
                "  Result:          {}",
                verdict.if_supports_color(Stdout, |t| t.green())
            );
        }
        Resolution::NotFound { .. } => {
            log::info!(
                "  Result:          {}",
                verdict.if_supports_color(Stdout, |t| t.red())
            );
            log::info!("  Tip: add the module's sensor to the settings file (see 'smartmem config show')");
        }
        Resolution::NoReference => {
            log::info!(
                "  Result:          {}",
                verdict.if_supports_color(Stdout, |t| t.yellow())
            );
        }
    }
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
