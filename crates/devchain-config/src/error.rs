use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Environment error: {0}")]
    EnvironmentError(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Invalid network id: {0}")]
    InvalidNetworkId(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
