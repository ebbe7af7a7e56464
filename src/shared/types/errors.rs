use thiserror::Error;

/// Error returned by toll calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TollError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TollError {
    pub fn empty_passages() -> Self {
        Self::InvalidArgument("at least one passage timestamp is required".to_string())
    }
}

/// Result type for toll calculations
pub type TollResult<T> = Result<T, TollError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}
