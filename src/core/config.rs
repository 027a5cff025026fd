//! Breeding configuration with documented constants
//!
//! The numbers that shape offspring live here. Defaults reproduce the
//! classic breeding rules; a TOML file can override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::types::{TRAIT_MAX, TRAIT_MIN};

/// Largest useful mutation half-width: the full trait span
///
/// Anything wider clamps to the trait bounds on every draw anyway.
pub const MAX_MUTATION_RANGE: f64 = (TRAIT_MAX - TRAIT_MIN) as f64;

/// Tunables for the breeding engine
///
/// Trait bounds are not configurable: every creature keeps its traits in
/// [`TRAIT_MIN`](crate::core::types::TRAIT_MIN)..=[`TRAIT_MAX`](crate::core::types::TRAIT_MAX).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedingConfig {
    // === TRAITS ===
    /// Half-width of the uniform mutation applied to each inherited trait
    ///
    /// At 1.0 an offspring trait lands within one point of the parental
    /// midpoint before rounding. Zero disables mutation entirely.
    pub mutation_range: f64,

    // === COLOR ===
    /// Probability that a blendable color pair produces its blend
    ///
    /// Only pairs listed in the blend table are eligible. At 0.2, roughly
    /// one in five Red x Blue offspring comes out Purple.
    pub blend_chance: f64,

    // === NAMES ===
    /// Minimum length (in characters) both parent names need for splicing
    ///
    /// Shorter names are concatenated with `short_name_suffix` instead.
    pub min_blend_name_len: usize,

    /// Suffix appended when parent names are too short to splice
    pub short_name_suffix: String,
}

impl Default for BreedingConfig {
    fn default() -> Self {
        Self {
            mutation_range: 1.0,
            blend_chance: 0.2,
            min_blend_name_len: 3,
            short_name_suffix: "Jr".to_string(),
        }
    }
}

impl BreedingConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=MAX_MUTATION_RANGE).contains(&self.mutation_range) {
            return Err(format!(
                "mutation_range ({}) must be within [0, {}]",
                self.mutation_range, MAX_MUTATION_RANGE
            ));
        }

        if !(0.0..=1.0).contains(&self.blend_chance) {
            return Err(format!(
                "blend_chance ({}) must be within [0, 1]",
                self.blend_chance
            ));
        }

        Ok(())
    }

    /// Parse a config from TOML text, falling back to defaults for missing keys
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BreedingConfig = toml::from_str(content)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

/// Load a breeding config from a TOML file on disk
pub fn load_config(path: &Path) -> Result<BreedingConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config = BreedingConfig::from_toml_str(&content)?;
    tracing::info!("Loaded breeding config from {}", path.display());
    Ok(config)
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<BreedingConfig> = OnceLock::new();

/// Get the global breeding config (initializes with defaults if not set)
pub fn config() -> &'static BreedingConfig {
    CONFIG.get_or_init(BreedingConfig::default)
}

/// Set the global breeding config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: BreedingConfig) -> Result<(), BreedingConfig> {
    CONFIG.set(config)
}
