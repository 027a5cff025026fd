use thiserror::Error;

/// Errors raised by the breeding engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BreedError {
    #[error("Cannot breed different species: {first} and {second}")]
    SpeciesMismatch { first: String, second: String },
}

/// Errors raised while loading breeding tunables
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, BreedError>;
