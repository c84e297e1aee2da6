//! Fields read directly from the SPD image: the stored Secure ID, the HPT
//! marker in front of it, and the HPE part number.

use smartmem_core::util::read_ascii_fixed;

pub const MARKER_START: usize = 0x181;
pub const MARKER_END: usize = 0x184;
pub const MARKER: &[u8; 3] = b"HPT";

pub const SECURE_ID_START: usize = 0x184;
pub const SECURE_ID_END: usize = 0x188;

pub const PART_NUMBER_START: usize = 0x192;
pub const PART_NUMBER_LEN: usize = 9;

/// Read the 32-bit Secure ID stored little-endian at 0x184-0x187.
///
/// Returns `None` when the image is too short to hold it.
pub fn read_secure_id(image: &[u8]) -> Option<u32> {
    let bytes = image.get(SECURE_ID_START..SECURE_ID_END)?;
    let bytes: [u8; 4] = bytes.try_into().ok()?;
    Some(u32::from_le_bytes(bytes))
}

/// Check for the "HPT" marker at 0x181-0x183.
///
/// A capture that lost the leading 'H' still counts when 0x182-0x183 read
/// "PT". Advisory only; the marker is not checksum input.
pub fn has_marker(image: &[u8]) -> bool {
    let Some(marker) = image.get(MARKER_START..MARKER_END) else {
        return false;
    };
    marker == MARKER || marker[1..] == MARKER[1..]
}

/// Read the HPE part number (9 ASCII bytes at 0x192), if present and non-blank.
pub fn read_part_number(image: &[u8]) -> Option<String> {
    let raw = image.get(PART_NUMBER_START..PART_NUMBER_START + PART_NUMBER_LEN)?;
    let text = read_ascii_fixed(raw);
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
#[path = "tests/secure_id_tests.rs"]
mod tests;
