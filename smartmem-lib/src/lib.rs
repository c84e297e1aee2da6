//! Frontend-shared glue for SmartMemory secure-code verification.
//!
//! Re-exports the core types and the HPE scheme, and adds the pieces a
//! command-line or GUI frontend needs around them: the effective sensor
//! catalog, the settings file, image loading, and verdict text.

pub mod catalog;
pub mod display;
pub mod image;
pub mod settings;

pub use catalog::{SensorCatalog, SensorOrigin};
pub use image::{ImageSummary, load_image};
pub use settings::{Settings, resolve_settings_path};

pub use smartmem_core::util;
pub use smartmem_core::{
    RegisterPair, Resolution, SchemeError, SecureCodeScheme, SensorCandidate, Verification,
    VerifyStatus, checksum, parse_register,
};
pub use smartmem_hpe::{self as hpe, HpeScheme};

/// Load the effective catalog from the settings file at `path`.
pub fn load_catalog(path: &std::path::Path) -> Result<SensorCatalog, SchemeError> {
    let settings = Settings::load(path)?;
    SensorCatalog::from_settings(&settings)
}
