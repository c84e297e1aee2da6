//! Brute-force recovery of the sensor register pair.
//!
//! Candidates are tried strictly in catalog order and the search stops at
//! the first match, so when two entries would both match, the earlier one
//! is reported.

use smartmem_core::{Resolution, SecureCodeScheme, SensorCandidate};

use crate::HpeScheme;

/// Try each candidate against the image's secure code using `scheme`.
pub fn resolve_with(
    scheme: &dyn SecureCodeScheme,
    image: &[u8],
    catalog: &[SensorCandidate],
) -> Resolution {
    let Some(secure_code) = scheme.read_secure_code(image) else {
        log::debug!("{}: no secure code, nothing to resolve", scheme.name());
        return Resolution::NoReference;
    };

    log::debug!(
        "{}: checking {} candidates against 0x{:08X}",
        scheme.name(),
        catalog.len(),
        secure_code
    );

    for candidate in catalog {
        let result = scheme.verify(image, candidate.registers);
        if result.matches {
            log::debug!("[x] {}: 0x{:08X}", candidate.label, result.encryption_code);
            return Resolution::Found {
                candidate: candidate.clone(),
                encryption_code: result.encryption_code,
                secure_code,
            };
        }
        log::debug!(
            "[ ] {}: 0x{:08X} != 0x{:08X}",
            candidate.label,
            result.encryption_code,
            secure_code
        );
    }

    Resolution::NotFound {
        secure_code,
        tried: catalog.len(),
    }
}

/// Resolve against the HPE scheme.
pub fn resolve(image: &[u8], catalog: &[SensorCandidate]) -> Resolution {
    resolve_with(&HpeScheme, image, catalog)
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
