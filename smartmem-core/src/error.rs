use thiserror::Error;

/// Errors raised at the boundaries of code verification.
///
/// The checksum, verification, and resolution paths never fail; these
/// variants cover loading images, parsing user input, and reading settings.
#[derive(Debug, Error)]
pub enum SchemeError {
    /// I/O error while reading an image or settings file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A register value could not be parsed as a 16-bit hex number
    #[error("Invalid register value '{0}': expected 1-4 hex digits (e.g. 1C85 or 0x1C85)")]
    InvalidRegister(String),

    /// No catalog entry matches the requested sensor label
    #[error("Unknown sensor: {0}")]
    UnknownSensor(String),

    /// More than one catalog entry matches an abbreviated sensor label
    #[error("Ambiguous sensor '{query}': matches {}", candidates.join(", "))]
    AmbiguousSensor {
        query: String,
        candidates: Vec<String>,
    },

    /// The image file is larger than any SPD dump could be
    #[error("Image too large: more than {limit} bytes")]
    TooLarge { limit: u64 },

    /// The settings file exists but could not be understood
    #[error("Settings error: {0}")]
    Settings(String),
}

impl SchemeError {
    pub fn invalid_register(value: impl Into<String>) -> Self {
        Self::InvalidRegister(value.into())
    }

    pub fn unknown_sensor(label: impl Into<String>) -> Self {
        Self::UnknownSensor(label.into())
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
