use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use smartmem_lib::{SensorCatalog, Settings};

use crate::CliError;

/// Print the settings file path.
pub(crate) fn run_config_path(path: &Path) {
    println!("{}", path.display());
}

/// Show the settings file status and the effective catalog.
pub(crate) fn run_config_show(path: &Path) -> Result<(), CliError> {
    log::info!(
        "{}",
        "SmartMemory Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let settings = Settings::load(path)?;
    let catalog = SensorCatalog::from_settings(&settings)?;

    log::info!("  Sensors:");
    for (candidate, origin) in catalog.entries() {
        log::info!(
            "    {:<32} {}  {}",
            candidate.label,
            candidate.registers,
            origin.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if settings.sensors.is_empty() {
        crate::log_blank();
        log::info!("  To add a sensor, append to the settings file:");
        log::info!("");
        log::info!("    [[sensors]]");
        log::info!("    label = \"EMC1412 - Custom\"");
        log::info!("    reg6 = \"0x1234\"");
        log::info!("    reg7 = \"0x5678\"");
    }
    Ok(())
}
