//! Temperature-sensor register values and the candidates built from them.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SchemeError;

/// A pair of 16-bit sensor register reads (registers 6 and 7 of a
/// JC-42.4 thermal sensor) used as checksum input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegisterPair {
    /// Register 6: manufacturer ID
    pub reg6: u16,
    /// Register 7: device ID / revision
    pub reg7: u16,
}

impl RegisterPair {
    pub const fn new(reg6: u16, reg7: u16) -> Self {
        Self { reg6, reg7 }
    }

    /// Parse both registers from hex strings (see [`parse_register`]).
    pub fn parse(reg6: &str, reg7: &str) -> Result<Self, SchemeError> {
        Ok(Self::new(parse_register(reg6)?, parse_register(reg7)?))
    }
}

impl fmt::Display for RegisterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}/{:04X}", self.reg6, self.reg7)
    }
}

/// Parse a 16-bit register value written in hex.
///
/// Accepts an optional `0x`/`0X` prefix and 1-4 hex digits. Surrounding
/// whitespace is ignored.
pub fn parse_register(input: &str) -> Result<u16, SchemeError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || digits.len() > 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SchemeError::invalid_register(input));
    }
    u16::from_str_radix(digits, 16).map_err(|_| SchemeError::invalid_register(input))
}

/// A labelled register pair tried during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorCandidate {
    /// Human-readable sensor name, e.g. "STTS2004 - STMicroelectronics"
    pub label: Cow<'static, str>,
    /// Register values reported by that sensor
    pub registers: RegisterPair,
}

impl SensorCandidate {
    /// Build a candidate from static data, usable in `const` tables.
    pub const fn new_static(label: &'static str, reg6: u16, reg7: u16) -> Self {
        Self {
            label: Cow::Borrowed(label),
            registers: RegisterPair::new(reg6, reg7),
        }
    }

    pub fn new(label: impl Into<String>, registers: RegisterPair) -> Self {
        Self {
            label: Cow::Owned(label.into()),
            registers,
        }
    }
}

#[cfg(test)]
#[path = "tests/register_tests.rs"]
mod tests;
