//! HPE SmartMemory secure-code scheme.
//!
//! HPE DDR4 modules store a 32-bit Secure ID at SPD offset 0x184. Server
//! firmware recomputes it (the "Encryption ID") from two SPD ranges, the
//! module's thermal-sensor registers 6 and 7, and a fixed secret, and
//! rejects the module on mismatch. This crate reproduces that computation
//! for diagnostic verification:
//!
//! - [`buffer`]: canonical 244-byte checksum input
//! - [`secure_id`]: stored Secure ID, HPT marker, part number
//! - [`verify`]: compare computed against stored
//! - [`resolve`]: find the sensor whose registers reproduce the stored code

pub mod buffer;
pub mod catalog;
pub mod resolve;
pub mod secure_id;
pub mod verify;

pub use buffer::{BUFFER_SIZE, CanonicalBuffer, assemble};
pub use catalog::{DEFAULT_SENSORS, SECRET};
pub use resolve::{resolve, resolve_with};
pub use secure_id::{has_marker, read_part_number, read_secure_id};
pub use verify::{encryption_id, verify};

use smartmem_core::{RegisterPair, SecureCodeScheme, Verification};

/// The HPE SmartMemory scheme as a [`SecureCodeScheme`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HpeScheme;

impl SecureCodeScheme for HpeScheme {
    fn name(&self) -> &'static str {
        "HPE SmartMemory"
    }

    fn read_secure_code(&self, image: &[u8]) -> Option<u32> {
        read_secure_id(image)
    }

    fn compute_code(&self, image: &[u8], registers: RegisterPair) -> u32 {
        encryption_id(image, registers.reg6, registers.reg7)
    }

    fn verify(&self, image: &[u8], registers: RegisterPair) -> Verification {
        verify(image, registers.reg6, registers.reg7)
    }
}
