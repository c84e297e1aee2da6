//! smartmem CLI
//!
//! Command-line interface for verifying HPE SmartMemory secure codes in
//! SPD dumps.

mod cli_types;
mod commands;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use smartmem_lib::{RegisterPair, SensorCatalog, load_catalog, resolve_settings_path};

use cli_types::{Cli, Commands, ConfigAction, RegisterArgs};
pub(crate) use error::CliError;

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Verified, resolved, or purely informational.
    Success,
    /// Ran fine, but the answer is "no": mismatch, no match, or no reference.
    Negative,
}

impl Outcome {
    fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Negative => ExitCode::from(2),
        }
    }
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Outcome, CliError> {
    let settings_path = resolve_settings_path(cli.settings);
    let catalog = || -> Result<SensorCatalog, CliError> { Ok(load_catalog(&settings_path)?) };

    match cli.command {
        Commands::Verify {
            image,
            registers,
            json,
        } => {
            let (pair, label) = select_registers(&registers, catalog)?;
            commands::verify::run_verify(&image, pair, label.as_deref(), json)
        }
        Commands::Resolve { image, json } => {
            commands::resolve::run_resolve(&image, &catalog()?, json)
        }
        Commands::Compute { image, reg6, reg7 } => {
            commands::compute::run_compute(&image, RegisterPair::new(reg6, reg7))
        }
        Commands::Info { image, json } => commands::info::run_info(&image, json),
        Commands::Sensors => {
            commands::sensors::run_sensors(&catalog()?);
            Ok(Outcome::Success)
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => {
                commands::config::run_config_path(&settings_path);
                Ok(Outcome::Success)
            }
            ConfigAction::Show => {
                commands::config::run_config_show(&settings_path)?;
                Ok(Outcome::Success)
            }
        },
    }
}

/// Turn `--sensor` or `--reg6/--reg7` into a register pair plus the sensor
/// label, if one was used.
fn select_registers(
    args: &RegisterArgs,
    catalog: impl FnOnce() -> Result<SensorCatalog, CliError>,
) -> Result<(RegisterPair, Option<String>), CliError> {
    match (&args.sensor, args.reg6, args.reg7) {
        (Some(query), _, _) => {
            let catalog = catalog()?;
            let candidate = catalog.find(query)?;
            Ok((candidate.registers, Some(candidate.label.to_string())))
        }
        (None, Some(reg6), Some(reg7)) => Ok((RegisterPair::new(reg6, reg7), None)),
        // clap enforces one of the two forms
        _ => unreachable!("register arguments validated by clap"),
    }
}
