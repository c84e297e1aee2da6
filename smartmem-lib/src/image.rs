//! Loading SPD images and summarizing the fields the scheme cares about.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use smartmem_core::SchemeError;
use smartmem_hpe::buffer::MIN_FULL_IMAGE;
use smartmem_hpe::{has_marker, read_part_number, read_secure_id};

/// Largest file accepted as an SPD image. DDR4 SPD is 512 bytes and DDR5
/// 1024; anything beyond this is not a dump.
pub const MAX_IMAGE_SIZE: u64 = 1024 * 1024;

/// Read an entire SPD image into memory.
///
/// Empty and short files are accepted; they verify as "no reference".
/// The size limit is enforced on the bytes actually read, so pipes and
/// device files are bounded too.
pub fn load_image(path: &Path) -> Result<Vec<u8>, SchemeError> {
    let mut image = Vec::new();
    File::open(path)?
        .take(MAX_IMAGE_SIZE + 1)
        .read_to_end(&mut image)?;
    if image.len() as u64 > MAX_IMAGE_SIZE {
        return Err(SchemeError::TooLarge {
            limit: MAX_IMAGE_SIZE,
        });
    }
    log::debug!("Loaded {} bytes from {}", image.len(), path.display());
    Ok(image)
}

/// Advisory facts about an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSummary {
    /// Image length in bytes
    pub size: usize,
    /// Whether both checksum ranges are present (length >= 0x180)
    pub full_ranges: bool,
    /// Whether the HPT marker is present at 0x181
    pub has_marker: bool,
    /// Secure ID stored at 0x184, if the image is long enough
    pub secure_code: Option<u32>,
    /// HPE part number at 0x192, if present
    pub part_number: Option<String>,
}

impl ImageSummary {
    pub fn from_image(image: &[u8]) -> Self {
        Self {
            size: image.len(),
            full_ranges: image.len() >= MIN_FULL_IMAGE,
            has_marker: has_marker(image),
            secure_code: read_secure_id(image),
            part_number: read_part_number(image),
        }
    }
}

#[cfg(test)]
#[path = "tests/image_tests.rs"]
mod tests;
