//! The keyed 32-bit checksum used by SmartMemory firmware to derive the
//! Encryption ID.
//!
//! This is NOT CRC-32 or CRC-32C. Each input byte is XORed into bits 8..15
//! of the register and then the register is clocked a full 32 times, so a
//! table-driven CRC library cannot stand in for it.

/// Generator polynomial of the firmware routine.
pub const POLYNOMIAL: u32 = 0xD582_8281;

/// Register value before the first byte is processed.
pub const INITIAL_VALUE: u32 = 0xFFFF_FFFF;

const TOP_BIT: u32 = 0x8000_0000;

/// Compute the checksum over the first `length` bytes of `buffer`.
///
/// `length` must not exceed `buffer.len()`; in release builds an oversized
/// length is clamped to the buffer.
pub fn compute(buffer: &[u8], length: usize) -> u32 {
    debug_assert!(
        length <= buffer.len(),
        "checksum length {} exceeds buffer of {} bytes",
        length,
        buffer.len()
    );
    let data = &buffer[..length.min(buffer.len())];

    let mut crc = INITIAL_VALUE;
    for &byte in data {
        crc ^= u32::from(byte) << 8;
        for _ in 0..32 {
            crc = if crc & TOP_BIT != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Compute the checksum over an entire buffer.
pub fn compute_all(buffer: &[u8]) -> u32 {
    compute(buffer, buffer.len())
}

#[cfg(test)]
#[path = "tests/checksum_tests.rs"]
mod tests;
