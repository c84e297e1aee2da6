use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use smartmem_lib::display::{is_problem, optional_code, verification_description};
use smartmem_lib::util::format_code;
use smartmem_lib::{
    HpeScheme, ImageSummary, RegisterPair, SecureCodeScheme, Verification, VerifyStatus, load_image,
};

use crate::commands::{display_name, print_json, warn_if_short};
use crate::{CliError, Outcome};

#[derive(Serialize)]
struct VerifyReport<'a> {
    image: String,
    sensor: Option<&'a str>,
    registers: RegisterPair,
    status: VerifyStatus,
    #[serde(flatten)]
    verification: Verification,
}

/// Run the verify command.
pub(crate) fn run_verify(
    path: &Path,
    registers: RegisterPair,
    sensor: Option<&str>,
    json: bool,
) -> Result<Outcome, CliError> {
    let image = load_image(path)?;
    let summary = ImageSummary::from_image(&image);
    warn_if_short(path, &summary);

    let result = HpeScheme.verify(&image, registers);

    if json {
        print_json(&VerifyReport {
            image: path.display().to_string(),
            sensor,
            registers,
            status: result.status(),
            verification: result,
        })?;
    } else {
        print_verification(path, registers, sensor, &result);
    }

    Ok(if is_problem(&result) {
        Outcome::Negative
    } else {
        Outcome::Success
    })
}

fn print_verification(
    path: &Path,
    registers: RegisterPair,
    sensor: Option<&str>,
    result: &Verification,
) {
    log::info!(
        "{}",
        display_name(path).if_supports_color(Stdout, |t| t.bold())
    );
    match sensor {
        Some(label) => log::info!(
            "  Sensor:          {} ({})",
            label.if_supports_color(Stdout, |t| t.cyan()),
            registers
        ),
        None => log::info!("  Registers:       {}", registers),
    }
    log::info!("  Encryption ID:   {}", format_code(result.encryption_code));
    log::info!("  Secure ID:       {}", optional_code(result.secure_code));

    let verdict = verification_description(result);
    match result.status() {
        VerifyStatus::Match => log::info!(
            "  Result:          {}",
            verdict.if_supports_color(Stdout, |t| t.green())
        ),
        VerifyStatus::Mismatch => log::info!(
            "  Result:          {}",
            verdict.if_supports_color(Stdout, |t| t.red())
        ),
        VerifyStatus::NoReference => log::info!(
            "  Result:          {}",
            verdict.if_supports_color(Stdout, |t| t.yellow())
        ),
    }
}

#[cfg(test)]
#[path = "tests/verify_tests.rs"]
mod tests;
