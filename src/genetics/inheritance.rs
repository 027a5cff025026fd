//! Trait and color inheritance
//!
//! Numeric traits average the two parents and add a small uniform mutation.
//! Colors are inherited from one parent, except that a few ordered pairs can
//! occasionally blend into a third color.

use rand::Rng;

use crate::core::config::{BreedingConfig, MAX_MUTATION_RANGE};
use crate::core::types::clamp_trait;

// === COLOR BLENDING ===

/// Ordered (first parent, second parent) color pairs that can blend
///
/// Lookups are exact and case-sensitive. Same-color pairs never blend.
pub const BLEND_TABLE: [(&str, &str, &str); 6] = [
    ("Red", "Blue", "Purple"),
    ("Blue", "Red", "Purple"),
    ("Red", "Yellow", "Orange"),
    ("Yellow", "Red", "Orange"),
    ("Blue", "Yellow", "Green"),
    ("Yellow", "Blue", "Green"),
];

/// Blend result for an ordered color pair, if the pair is in the table
pub fn blend_colors(first: &str, second: &str) -> Option<&'static str> {
    BLEND_TABLE
        .iter()
        .find(|(a, b, _)| *a == first && *b == second)
        .map(|(_, _, blended)| *blended)
}

/// Pick the offspring color
///
/// One roll decides the blend branch; it only applies when the pair is in
/// the blend table. Otherwise a fair coin picks either parent's color.
pub fn inherit_color<R: Rng + ?Sized>(
    first: &str,
    second: &str,
    config: &BreedingConfig,
    rng: &mut R,
) -> String {
    let roll: f64 = rng.gen();
    if roll < config.blend_chance {
        if let Some(blended) = blend_colors(first, second) {
            return blended.to_string();
        }
    }

    if rng.gen_bool(0.5) {
        first.to_string()
    } else {
        second.to_string()
    }
}

// === NUMERIC TRAITS ===

/// Inherit one numeric trait
///
/// The parental midpoint (kept fractional) is shifted by a uniform draw from
/// [-mutation_range, mutation_range], rounded half away from zero, then
/// clamped into the trait range. The range itself is capped at the trait
/// span, and a NaN range means no mutation.
pub fn inherit_trait<R: Rng + ?Sized>(
    first: u8,
    second: u8,
    config: &BreedingConfig,
    rng: &mut R,
) -> u8 {
    let base = (f64::from(first) + f64::from(second)) / 2.0;

    let range = config.mutation_range.min(MAX_MUTATION_RANGE);
    let mutation = if range > 0.0 {
        rng.gen_range(-range..=range)
    } else {
        0.0
    };

    clamp_trait((base + mutation).round() as i64)
}
