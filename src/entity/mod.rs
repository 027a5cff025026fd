pub mod creature;

pub use creature::{Creature, CreatureRef, CreatureStats};
