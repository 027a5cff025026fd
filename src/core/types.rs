//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest value any trait can hold
pub const TRAIT_MIN: u8 = 1;

/// Highest value any trait can hold
pub const TRAIT_MAX: u8 = 10;

/// Unique identifier for creatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub Uuid);

impl CreatureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CreatureId {
    fn default() -> Self {
        Self::new()
    }
}

/// Generation counter; roots are generation 1
pub type Generation = i64;

/// The independently inherited numeric traits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitKind {
    Size,
    Strength,
    Intelligence,
}

impl TraitKind {
    pub const ALL: [TraitKind; 3] = [TraitKind::Size, TraitKind::Strength, TraitKind::Intelligence];

    pub fn name(&self) -> &'static str {
        match self {
            TraitKind::Size => "size",
            TraitKind::Strength => "strength",
            TraitKind::Intelligence => "intelligence",
        }
    }
}

/// Clamp a raw trait value into [TRAIT_MIN, TRAIT_MAX]
pub fn clamp_trait(value: i64) -> u8 {
    value.clamp(TRAIT_MIN as i64, TRAIT_MAX as i64) as u8
}
