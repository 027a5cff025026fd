//! Creature Breeding - creatures with inheritable traits
//!
//! Two creatures of the same species breed into an offspring whose traits
//! come from both parents with bounded random variation.

pub mod core;
pub mod entity;
pub mod genetics;
pub mod lineage;

pub use crate::core::error::{BreedError, ConfigError};
pub use entity::{Creature, CreatureRef, CreatureStats};
pub use genetics::{breed, breed_with_config, Breeder};
pub use lineage::{family_tree, render_family_tree};
