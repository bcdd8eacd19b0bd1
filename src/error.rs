use thiserror::Error;

#[derive(Error, Debug)]
pub enum McTestError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

// Add conversion from anyhow::Error
impl From<anyhow::Error> for McTestError {
    fn from(err: anyhow::Error) -> Self {
        McTestError::Other(err.to_string())
    }
}

/// Result type for mctest crate
pub type Result<T> = std::result::Result<T, McTestError>;
