use std::path::Path;

use smartmem_lib::util::format_code;
use smartmem_lib::{HpeScheme, ImageSummary, RegisterPair, SecureCodeScheme, load_image};

use crate::commands::warn_if_short;
use crate::{CliError, Outcome};

/// Run the compute command: print only the Encryption ID.
pub(crate) fn run_compute(path: &Path, registers: RegisterPair) -> Result<Outcome, CliError> {
    let image = load_image(path)?;
    warn_if_short(path, &ImageSummary::from_image(&image));

    let code = HpeScheme.compute_code(&image, registers);
    log::debug!("{} with {}: {}", path.display(), registers, format_code(code));
    println!("{}", format_code(code));
    Ok(Outcome::Success)
}
