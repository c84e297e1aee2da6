//! Results of verifying and resolving a secure code.

use serde::Serialize;

use crate::SensorCandidate;

/// Outcome of comparing a computed Encryption ID with the stored Secure ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verification {
    /// Code computed from the image and register pair
    pub encryption_code: u32,
    /// Code stored in the image, if the image is long enough to hold one
    pub secure_code: Option<u32>,
    /// True only when a secure code is present and equals the computed one
    pub matches: bool,
    /// `encryption_code ^ secure_code`; zero when there is no secure code
    pub diff: u32,
}

/// Three-way summary of a [`Verification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyStatus {
    Match,
    Mismatch,
    /// The image carries no secure code to compare against.
    NoReference,
}

impl Verification {
    /// Compare a computed code against an optional stored one.
    pub fn new(encryption_code: u32, secure_code: Option<u32>) -> Self {
        match secure_code {
            Some(secure) => Self {
                encryption_code,
                secure_code: Some(secure),
                matches: encryption_code == secure,
                diff: encryption_code ^ secure,
            },
            None => Self {
                encryption_code,
                secure_code: None,
                matches: false,
                diff: 0,
            },
        }
    }

    pub fn status(&self) -> VerifyStatus {
        match (self.secure_code, self.matches) {
            (None, _) => VerifyStatus::NoReference,
            (Some(_), true) => VerifyStatus::Match,
            (Some(_), false) => VerifyStatus::Mismatch,
        }
    }

    /// Number of bits that differ between the computed and stored codes.
    pub fn differing_bits(&self) -> u32 {
        self.diff.count_ones()
    }
}

/// Outcome of searching a sensor catalog for the register pair that
/// reproduces an image's secure code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    /// The first candidate, in catalog order, whose code matched.
    Found {
        candidate: SensorCandidate,
        encryption_code: u32,
        secure_code: u32,
    },
    /// Every candidate was tried and none matched.
    NotFound { secure_code: u32, tried: usize },
    /// The image has no secure code, so nothing was tried.
    NoReference,
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }

    pub fn secure_code(&self) -> Option<u32> {
        match self {
            Resolution::Found { secure_code, .. } | Resolution::NotFound { secure_code, .. } => {
                Some(*secure_code)
            }
            Resolution::NoReference => None,
        }
    }
}
