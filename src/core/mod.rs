pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, BreedingConfig};
pub use error::{BreedError, ConfigError};
