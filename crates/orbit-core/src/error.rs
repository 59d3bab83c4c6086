//! Error types for orbitwalk

use thiserror::Error;

/// The main error type for orbitwalk operations
#[derive(Debug, Error)]
pub enum OrbitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Unknown key name: {0}")]
    UnknownKey(String),

    #[error("Physics error: {0}")]
    PhysicsError(String),

    #[error("Animation error: {0}")]
    AnimationError(String),

    #[error("Scene error: {0}")]
    SceneError(String),

    #[error("Script error: {0}")]
    ScriptError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Result type alias for orbitwalk operations
pub type Result<T> = std::result::Result<T, OrbitError>;

impl From<toml::de::Error> for OrbitError {
    fn from(err: toml::de::Error) -> Self {
        OrbitError::TomlParseError(err.to_string())
    }
}

impl OrbitError {
    /// Build a `ValueOutOfRange` error unless `min <= value <= max`
    pub fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(OrbitError::ValueOutOfRange {
                field: field.to_string(),
                min,
                max,
                value,
            })
        }
    }
}
