//! Creature entity
//!
//! A creature is built once and never changes afterwards. Traits are clamped
//! into range at construction, so every creature (root or offspring) holds
//! valid trait values. Parents are shared `Arc` handles: one creature can be
//! a parent to many offspring, which makes lineage a DAG rather than a tree.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::types::{clamp_trait, CreatureId, Generation, TraitKind, TRAIT_MAX};

/// Shared, read-only handle to a creature
pub type CreatureRef = Arc<Creature>;

/// A creature with inheritable traits and optional lineage
#[derive(Debug)]
pub struct Creature {
    id: CreatureId,
    name: String,
    species: String,
    color: String,
    size: u8,
    strength: u8,
    intelligence: u8,
    generation: Generation,
    parents: Option<(CreatureRef, CreatureRef)>,
}

impl Creature {
    /// Create a root creature (generation 1, no parents)
    ///
    /// Out-of-range traits are clamped into [1, 10], never rejected.
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        color: impl Into<String>,
        size: i64,
        strength: i64,
        intelligence: i64,
    ) -> Self {
        Self {
            id: CreatureId::new(),
            name: name.into(),
            species: species.into(),
            color: color.into(),
            size: clamp_trait(size),
            strength: clamp_trait(strength),
            intelligence: clamp_trait(intelligence),
            generation: 1,
            parents: None,
        }
    }

    /// Override the generation; any integer is accepted as-is
    pub fn with_generation(mut self, generation: Generation) -> Self {
        self.generation = generation;
        self
    }

    /// Attach an ordered parent pair
    pub fn with_parents(mut self, first: CreatureRef, second: CreatureRef) -> Self {
        self.parents = Some((first, second));
        self
    }

    pub fn id(&self) -> CreatureId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn strength(&self) -> u8 {
        self.strength
    }

    pub fn intelligence(&self) -> u8 {
        self.intelligence
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Parents in the order they were supplied to breeding
    pub fn parents(&self) -> Option<(&CreatureRef, &CreatureRef)> {
        self.parents.as_ref().map(|(a, b)| (a, b))
    }

    /// True for creatures without recorded parents
    pub fn is_root(&self) -> bool {
        self.parents.is_none()
    }

    /// Look up a numeric trait by kind
    pub fn trait_value(&self, kind: TraitKind) -> u8 {
        match kind {
            TraitKind::Size => self.size,
            TraitKind::Strength => self.strength,
            TraitKind::Intelligence => self.intelligence,
        }
    }

    /// Snapshot of the creature's displayable attributes
    pub fn stats(&self) -> CreatureStats {
        CreatureStats {
            name: self.name.clone(),
            species: self.species.clone(),
            color: self.color.clone(),
            size: self.size,
            strength: self.strength,
            intelligence: self.intelligence,
            generation: self.generation,
        }
    }

    /// Short single-line form, e.g. for log output
    pub fn label(&self) -> String {
        format!(
            "Creature(name='{}', species='{}', generation={})",
            self.name, self.species, self.generation
        )
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Creature: {}", self.name)?;
        writeln!(f, "  Species: {}", self.species)?;
        writeln!(f, "  Color: {}", self.color)?;
        writeln!(f, "  Size: {}/{}", self.size, TRAIT_MAX)?;
        writeln!(f, "  Strength: {}/{}", self.strength, TRAIT_MAX)?;
        writeln!(f, "  Intelligence: {}/{}", self.intelligence, TRAIT_MAX)?;
        write!(f, "  Generation: {}", self.generation)?;
        if let Some((first, second)) = &self.parents {
            write!(f, "\n  Parents: {} & {}", first.name, second.name)?;
        }
        Ok(())
    }
}

/// Stable field snapshot of a creature, for display or serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureStats {
    pub name: String,
    pub species: String,
    pub color: String,
    pub size: u8,
    pub strength: u8,
    pub intelligence: u8,
    pub generation: Generation,
}

impl CreatureStats {
    /// Field name / rendered value pairs in a fixed order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("species", self.species.clone()),
            ("color", self.color.clone()),
            ("size", self.size.to_string()),
            ("strength", self.strength.to_string()),
            ("intelligence", self.intelligence.to_string()),
            ("generation", self.generation.to_string()),
        ]
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }
}
