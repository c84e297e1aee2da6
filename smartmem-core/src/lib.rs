//! Shared types for verifying memory-module secure codes.
//!
//! A secure-code scheme reads a 32-bit reference value stored in an SPD
//! image and reproduces it from the image plus a pair of thermal-sensor
//! register reads. This crate holds the pieces every scheme shares: the
//! checksum engine, register types, outcome types, and the
//! [`SecureCodeScheme`] trait.

pub mod checksum;
pub mod error;
pub mod outcome;
pub mod register;
pub mod util;

pub use error::SchemeError;
pub use outcome::{Resolution, Verification, VerifyStatus};
pub use register::{RegisterPair, SensorCandidate, parse_register};

/// Trait for a vendor scheme that derives a secure code from an SPD image.
///
/// Verification and catalog resolution are pure functions of the image and
/// register values.
pub trait SecureCodeScheme: Send + Sync {
    /// Short human-readable name of the scheme.
    fn name(&self) -> &'static str;

    /// Read the stored reference code, or `None` when the image is too
    /// short to contain one.
    fn read_secure_code(&self, image: &[u8]) -> Option<u32>;

    /// Compute the code the firmware would derive for `registers`.
    fn compute_code(&self, image: &[u8], registers: RegisterPair) -> u32;

    /// Compute the code for `registers` and compare it with the stored one.
    fn verify(&self, image: &[u8], registers: RegisterPair) -> Verification;
}
