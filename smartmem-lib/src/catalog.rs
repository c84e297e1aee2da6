//! The effective sensor catalog: built-in sensors followed by any from the
//! settings file.

use std::fmt;

use serde::Serialize;
use smartmem_core::{SchemeError, SensorCandidate};
use smartmem_hpe::DEFAULT_SENSORS;

use crate::settings::Settings;

/// Where a catalog entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorOrigin {
    BuiltIn,
    Settings,
}

impl fmt::Display for SensorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn => write!(f, "built-in"),
            Self::Settings => write!(f, "settings file"),
        }
    }
}

/// Ordered, read-only list of sensor candidates.
///
/// Built-in sensors always come first so they keep priority in
/// first-match-wins resolution.
#[derive(Debug, Clone)]
pub struct SensorCatalog {
    candidates: Vec<SensorCandidate>,
    origins: Vec<SensorOrigin>,
}

impl Default for SensorCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SensorCatalog {
    /// Catalog with only the shipped sensors.
    pub fn builtin() -> Self {
        Self {
            candidates: DEFAULT_SENSORS.to_vec(),
            origins: vec![SensorOrigin::BuiltIn; DEFAULT_SENSORS.len()],
        }
    }

    /// Built-in sensors plus those configured in `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, SchemeError> {
        let mut catalog = Self::builtin();
        catalog.extend(settings.sensor_candidates()?);
        Ok(catalog)
    }

    /// Append user candidates. Entries whose label duplicates an existing
    /// one (case-insensitive) are skipped.
    pub fn extend(&mut self, extra: impl IntoIterator<Item = SensorCandidate>) {
        for candidate in extra {
            if self.position_exact(&candidate.label).is_some() {
                log::warn!(
                    "Ignoring sensor '{}' from settings: label already in catalog",
                    candidate.label
                );
                continue;
            }
            self.candidates.push(candidate);
            self.origins.push(SensorOrigin::Settings);
        }
    }

    /// Candidates in resolution order.
    pub fn candidates(&self) -> &[SensorCandidate] {
        &self.candidates
    }

    /// Candidates paired with their origin.
    pub fn entries(&self) -> impl Iterator<Item = (&SensorCandidate, SensorOrigin)> {
        self.candidates.iter().zip(self.origins.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Look up a sensor by label.
    ///
    /// An exact (case-insensitive) label wins; otherwise `query` may be any
    /// unique case-insensitive substring, e.g. "stts2004" or "ablic".
    pub fn find(&self, query: &str) -> Result<&SensorCandidate, SchemeError> {
        if let Some(i) = self.position_exact(query) {
            return Ok(&self.candidates[i]);
        }

        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(SchemeError::unknown_sensor(query));
        }
        let hits: Vec<&SensorCandidate> = self
            .candidates
            .iter()
            .filter(|c| c.label.to_lowercase().contains(&needle))
            .collect();

        match hits.as_slice() {
            [] => Err(SchemeError::unknown_sensor(query)),
            [one] => Ok(*one),
            many => Err(SchemeError::AmbiguousSensor {
                query: query.to_string(),
                candidates: many.iter().map(|c| c.label.to_string()).collect(),
            }),
        }
    }

    fn position_exact(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        self.candidates
            .iter()
            .position(|c| c.label.eq_ignore_ascii_case(label))
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
