use smartmem_core::{Verification, checksum};

use crate::buffer::assemble;
use crate::catalog::SECRET;
use crate::secure_id::read_secure_id;

/// Compute the Encryption ID the firmware would derive for this image and
/// register pair.
pub fn encryption_id(image: &[u8], reg6: u16, reg7: u16) -> u32 {
    let buf = assemble(image, reg6, reg7, SECRET);
    checksum::compute_all(&buf)
}

/// Compare the computed Encryption ID with the Secure ID stored in the image.
///
/// When the image holds no Secure ID the result reports no reference and
/// `matches` is false; the computed code is still filled in.
pub fn verify(image: &[u8], reg6: u16, reg7: u16) -> Verification {
    let secure = read_secure_id(image);
    let code = encryption_id(image, reg6, reg7);
    let result = Verification::new(code, secure);

    match secure {
        Some(_) if result.matches => {
            log::debug!("{:04X}/{:04X}: 0x{:08X} matches", reg6, reg7, code);
        }
        Some(secure) => log::debug!(
            "{:04X}/{:04X}: 0x{:08X} != 0x{:08X} (diff 0x{:08X})",
            reg6,
            reg7,
            code,
            secure,
            result.diff
        ),
        None => log::debug!("no secure ID in {}-byte image", image.len()),
    }
    result
}

#[cfg(test)]
#[path = "tests/verify_tests.rs"]
mod tests;
