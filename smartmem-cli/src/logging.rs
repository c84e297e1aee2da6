//! Logger setup: report lines go through `log::info!`, so the logger
//! decides what reaches the terminal and the optional log file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};

use crate::CliError;

/// Install the global logger.
///
/// `--verbose` enables debug output with timestamps, `--quiet` keeps only
/// warnings and errors, and `RUST_LOG` overrides both.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    builder.format(move |buf, record| {
        if verbose {
            return writeln!(
                buf,
                "[{} {:<5} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            );
        }
        match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(buf, "warning: {}", record.args()),
            Level::Error => writeln!(buf, "error: {}", record.args()),
            Level::Debug | Level::Trace => {
                writeln!(buf, "{}: {}", record.level().as_str().to_lowercase(), record.args())
            }
        }
    });

    let target = match logfile {
        Some(path) => {
            let file = File::create(path)?;
            env_logger::Target::Pipe(Box::new(TeeWriter { file }))
        }
        None => env_logger::Target::Stdout,
    };
    builder.target(target);

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

/// Writes to stdout unchanged and to a file with ANSI escapes removed.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}
