//! Two-parent breeding
//!
//! Species equality is the only hard precondition. Everything else about the
//! parents is accepted as-is; the offspring's traits are clamped by
//! construction.

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::{config, BreedingConfig};
use crate::core::error::{BreedError, ConfigError, Result};
use crate::core::types::TraitKind;
use crate::entity::{Creature, CreatureRef};
use crate::genetics::inheritance::{inherit_color, inherit_trait};
use crate::genetics::naming::offspring_name;

/// Breed two creatures using the global config
pub fn breed<R: Rng + ?Sized>(
    parent1: &CreatureRef,
    parent2: &CreatureRef,
    rng: &mut R,
) -> Result<Creature> {
    breed_with_config(parent1, parent2, config(), rng)
}

/// Breed two creatures with explicit tunables
///
/// Fails with [`BreedError::SpeciesMismatch`] before drawing any randomness
/// when the parents' species differ.
pub fn breed_with_config<R: Rng + ?Sized>(
    parent1: &CreatureRef,
    parent2: &CreatureRef,
    config: &BreedingConfig,
    rng: &mut R,
) -> Result<Creature> {
    if parent1.species() != parent2.species() {
        tracing::warn!(
            "Rejected breeding {} x {}: {} and {} are different species",
            parent1.name(),
            parent2.name(),
            parent1.species(),
            parent2.species()
        );
        return Err(BreedError::SpeciesMismatch {
            first: parent1.species().to_string(),
            second: parent2.species().to_string(),
        });
    }

    let name = offspring_name(parent1.name(), parent2.name(), config);
    let color = inherit_color(parent1.color(), parent2.color(), config, rng);

    // TraitKind::ALL fixes the draw order for seeded runs
    let [size, strength, intelligence] = TraitKind::ALL.map(|kind| {
        let (first, second) = (parent1.trait_value(kind), parent2.trait_value(kind));
        let value = inherit_trait(first, second, config, rng);
        tracing::trace!("Inherited {} {} from {} and {}", kind.name(), value, first, second);
        value
    });

    let generation = parent1.generation().max(parent2.generation()).saturating_add(1);

    let offspring = Creature::new(
        name,
        parent1.species(),
        color,
        i64::from(size),
        i64::from(strength),
        i64::from(intelligence),
    )
    .with_generation(generation)
    .with_parents(Arc::clone(parent1), Arc::clone(parent2));

    tracing::debug!(
        "Bred {} from {} x {} ({}, generation {})",
        offspring.name(),
        parent1.name(),
        parent2.name(),
        offspring.species(),
        offspring.generation()
    );

    Ok(offspring)
}

/// Breeding session that owns its tunables and random source
pub struct Breeder<R: Rng = ChaCha8Rng> {
    config: BreedingConfig,
    rng: R,
}

impl Breeder<ChaCha8Rng> {
    /// Deterministic breeder seeded from a u64
    pub fn from_seed(config: BreedingConfig, seed: u64) -> std::result::Result<Self, ConfigError> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Breeder<R> {
    /// Rejects configs that fail [`BreedingConfig::validate`]
    pub fn new(config: BreedingConfig, rng: R) -> std::result::Result<Self, ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &BreedingConfig {
        &self.config
    }

    /// Breed two parents, returning the offspring as a shareable handle
    pub fn breed(&mut self, parent1: &CreatureRef, parent2: &CreatureRef) -> Result<CreatureRef> {
        breed_with_config(parent1, parent2, &self.config, &mut self.rng).map(Arc::new)
    }
}
