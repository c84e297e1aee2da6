//! Display helpers for verification and resolution results.
//!
//! Plain-text verdicts shared by every frontend; callers add color.

use smartmem_core::util::format_code;
use smartmem_core::{Resolution, Verification, VerifyStatus};

// ---------------------------------------------------------------------------
// Verification verdict
// ---------------------------------------------------------------------------

/// Plain-text description of a verification (no ANSI colors).
pub fn verification_description(result: &Verification) -> String {
    match result.status() {
        VerifyStatus::Match => "MATCH".into(),
        VerifyStatus::Mismatch => format!(
            "MISMATCH (diff {}, {} bit{})",
            format_code(result.diff),
            result.differing_bits(),
            if result.differing_bits() == 1 { "" } else { "s" }
        ),
        VerifyStatus::NoReference => "NO REFERENCE (image too short to hold a Secure ID)".into(),
    }
}

/// Whether a verification represents a problem (not a match).
pub fn is_problem(result: &Verification) -> bool {
    result.status() != VerifyStatus::Match
}

// ---------------------------------------------------------------------------
// Resolution verdict
// ---------------------------------------------------------------------------

/// Plain-text description of a resolution (no ANSI colors).
pub fn resolution_description(result: &Resolution) -> String {
    match result {
        Resolution::Found { candidate, .. } => {
            format!("FOUND {} ({})", candidate.label, candidate.registers)
        }
        Resolution::NotFound { secure_code, tried } => format!(
            "NOT FOUND (no {} candidate{} reproduce {})",
            tried,
            if *tried == 1 { "" } else { "s" },
            format_code(*secure_code)
        ),
        Resolution::NoReference => "NO REFERENCE (image too short to hold a Secure ID)".into(),
    }
}

/// Text shown for an optional code.
pub fn optional_code(code: Option<u32>) -> String {
    code.map(format_code).unwrap_or_else(|| "n/a".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartmem_core::{RegisterPair, SensorCandidate};

    #[test]
    fn test_verification_match() {
        let v = Verification::new(0x1234, Some(0x1234));
        assert_eq!(verification_description(&v), "MATCH");
        assert!(!is_problem(&v));
    }

    #[test]
    fn test_verification_mismatch() {
        let v = Verification::new(0x0000_0003, Some(0x0000_0000));
        assert_eq!(
            verification_description(&v),
            "MISMATCH (diff 0x00000003, 2 bits)"
        );
        let v = Verification::new(0x0000_0001, Some(0x0000_0000));
        assert_eq!(
            verification_description(&v),
            "MISMATCH (diff 0x00000001, 1 bit)"
        );
        assert!(is_problem(&v));
    }

    #[test]
    fn test_verification_no_reference() {
        let v = Verification::new(0x1234, None);
        assert!(verification_description(&v).starts_with("NO REFERENCE"));
        assert!(is_problem(&v));
    }

    #[test]
    fn test_resolution_descriptions() {
        let found = Resolution::Found {
            candidate: SensorCandidate::new("MCP98244 - Microchip", RegisterPair::new(0x54, 0x2201)),
            encryption_code: 1,
            secure_code: 1,
        };
        assert_eq!(
            resolution_description(&found),
            "FOUND MCP98244 - Microchip (0054/2201)"
        );

        let missing = Resolution::NotFound {
            secure_code: 0xDEADBEEF,
            tried: 4,
        };
        assert_eq!(
            resolution_description(&missing),
            "NOT FOUND (no 4 candidates reproduce 0xDEADBEEF)"
        );
        assert!(resolution_description(&Resolution::NoReference).starts_with("NO REFERENCE"));
    }

    #[test]
    fn test_optional_code() {
        assert_eq!(optional_code(Some(0xAB)), "0x000000AB");
        assert_eq!(optional_code(None), "n/a");
    }
}
