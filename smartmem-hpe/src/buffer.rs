//! Canonical 244-byte checksum input.
//!
//! Layout (buffer offsets):
//! - 0-129:   SPD 0x7E-0xFF
//! - 130-193: SPD 0x140-0x17F
//! - 194:     0x20
//! - 195-196: register 6, low byte first
//! - 197:     0x20
//! - 198-199: register 7, low byte first
//! - 200:     0x20
//! - 201-208: RCD placeholder `00 00 20 00 00 20 00 20`
//! - 209-243: secret

use crate::catalog::SECRET_LEN;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const BUFFER_SIZE: usize = 244;

pub const RANGE1_START: usize = 0x7E;
pub const RANGE1_END: usize = 0x100;
pub const RANGE1_SIZE: usize = RANGE1_END - RANGE1_START; // 130 bytes

pub const RANGE2_START: usize = 0x140;
pub const RANGE2_END: usize = 0x180;
pub const RANGE2_SIZE: usize = RANGE2_END - RANGE2_START; // 64 bytes

/// Bytes of SPD data at the head of the buffer (both ranges).
pub const DATA_SIZE: usize = RANGE1_SIZE + RANGE2_SIZE; // 194 bytes

/// Minimum image length for the two-range copy.
pub const MIN_FULL_IMAGE: usize = RANGE2_END;

const SEPARATOR: u8 = 0x20;

/// Unused register-clock-driver identifier block: vendor, device, revision
/// slots all zero, each followed by a separator.
pub const RCD_PLACEHOLDER: [u8; 8] = [0x00, 0x00, 0x20, 0x00, 0x00, 0x20, 0x00, 0x20];

pub const REG6_OFFSET: usize = DATA_SIZE + 1; // 195
pub const REG7_OFFSET: usize = REG6_OFFSET + 3; // 198
pub const RCD_OFFSET: usize = REG7_OFFSET + 3; // 201
pub const SECRET_OFFSET: usize = RCD_OFFSET + RCD_PLACEHOLDER.len(); // 209

const _: () = assert!(SECRET_OFFSET + SECRET_LEN == BUFFER_SIZE);

/// The fully assembled checksum input.
pub type CanonicalBuffer = [u8; BUFFER_SIZE];

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Build the canonical buffer for an image and register pair.
///
/// Images shorter than [`MIN_FULL_IMAGE`] cannot supply the second range;
/// for those, up to [`DATA_SIZE`] bytes from the start of the image are
/// copied instead and the remainder of the data region stays zero. The
/// resulting code will not match a genuine secure code, but the tail of the
/// buffer is laid out identically.
pub fn assemble(image: &[u8], reg6: u16, reg7: u16, secret: &[u8; SECRET_LEN]) -> CanonicalBuffer {
    let mut buf = [0u8; BUFFER_SIZE];

    if image.len() >= MIN_FULL_IMAGE {
        buf[..RANGE1_SIZE].copy_from_slice(&image[RANGE1_START..RANGE1_END]);
        buf[RANGE1_SIZE..DATA_SIZE].copy_from_slice(&image[RANGE2_START..RANGE2_END]);
    } else {
        let n = image.len().min(DATA_SIZE);
        log::debug!(
            "image is {} bytes, shorter than {} needed for both checksum ranges; \
             using the first {} bytes as-is",
            image.len(),
            MIN_FULL_IMAGE,
            n
        );
        buf[..n].copy_from_slice(&image[..n]);
    }

    buf[DATA_SIZE] = SEPARATOR;
    buf[REG6_OFFSET..REG6_OFFSET + 2].copy_from_slice(&reg6.to_le_bytes());
    buf[REG6_OFFSET + 2] = SEPARATOR;
    buf[REG7_OFFSET..REG7_OFFSET + 2].copy_from_slice(&reg7.to_le_bytes());
    buf[REG7_OFFSET + 2] = SEPARATOR;
    buf[RCD_OFFSET..SECRET_OFFSET].copy_from_slice(&RCD_PLACEHOLDER);
    buf[SECRET_OFFSET..].copy_from_slice(secret);

    log::trace!(
        "assembled {}-byte buffer for registers {:04X}/{:04X}",
        BUFFER_SIZE,
        reg6,
        reg7
    );
    buf
}

#[cfg(test)]
#[path = "tests/buffer_tests.rs"]
mod tests;
