//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use smartmem_lib::parse_register;

#[derive(Parser)]
#[command(name = "smartmem")]
#[command(about = "Verify HPE SmartMemory secure codes in SPD dumps", long_about = None)]
pub(crate) struct Cli {
    /// Settings file with extra sensors (defaults to $SMARTMEM_SETTINGS or ~/.config/smartmem/settings.toml)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// How to pick the register pair: a catalog sensor or explicit values.
#[derive(Args, Clone)]
#[group(required = true, multiple = true)]
pub(crate) struct RegisterArgs {
    /// Sensor label or unique part of it (e.g., stts2004, ablic)
    #[arg(short, long, conflicts_with_all = ["reg6", "reg7"])]
    pub sensor: Option<String>,

    /// Sensor register 6 in hex (e.g., 1C85 or 0x1C85)
    #[arg(long, value_parser = parse_register_arg, requires = "reg7")]
    pub reg6: Option<u16>,

    /// Sensor register 7 in hex
    #[arg(long, value_parser = parse_register_arg, requires = "reg6")]
    pub reg7: Option<u16>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check an image's Secure ID against a known sensor register pair
    Verify {
        /// SPD image file
        image: PathBuf,

        #[command(flatten)]
        registers: RegisterArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find which known sensor reproduces an image's Secure ID
    Resolve {
        /// SPD image file
        image: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the Encryption ID for an image and register pair
    Compute {
        /// SPD image file
        image: PathBuf,

        /// Sensor register 6 in hex
        #[arg(long, value_parser = parse_register_arg)]
        reg6: u16,

        /// Sensor register 7 in hex
        #[arg(long, value_parser = parse_register_arg)]
        reg7: u16,
    },

    /// Show the marker, Secure ID, and part number stored in an image
    Info {
        /// SPD image file
        image: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the sensors tried by `resolve`
    Sensors,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the settings file status and the effective sensor catalog
    Show,
}

fn parse_register_arg(s: &str) -> Result<u16, String> {
    parse_register(s).map_err(|e| e.to_string())
}
