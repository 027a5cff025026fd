//! Integration tests for breeding across generations
//!
//! These tests drive the public API the way the demo does:
//! - Multi-generation lines built from shared parents
//! - Family tree traversal over the resulting DAG
//! - Cross-species rejection
//! - Tunables loaded from TOML

use std::sync::Arc;

use creature_breeding::core::config::BreedingConfig;
use creature_breeding::genetics::breed_with_config;
use creature_breeding::lineage::{family_tree, render_family_tree, unique_ancestors};
use creature_breeding::{breed, BreedError, Breeder, Creature, CreatureRef};
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn phoenix(name: &str, color: &str, size: i64, strength: i64, intelligence: i64) -> CreatureRef {
    Arc::new(Creature::new(name, "Phoenix", color, size, strength, intelligence))
}

#[test]
fn test_three_generation_line() {
    let mut breeder = Breeder::from_seed(BreedingConfig::default(), 42).unwrap();

    let blaze = phoenix("Blaze", "Red", 7, 6, 9);
    let solar = phoenix("Solar", "Yellow", 6, 5, 9);
    let pyra = phoenix("Pyra", "Red", 8, 7, 8);

    // Solar is shared by both generation-2 offspring
    let first = breeder.breed(&blaze, &solar).unwrap();
    let second = breeder.breed(&solar, &pyra).unwrap();
    let third = breeder.breed(&first, &second).unwrap();

    assert_eq!(first.name(), "Bllar");
    assert_eq!(second.name(), "Sora");
    assert_eq!(first.generation(), 2);
    assert_eq!(second.generation(), 2);
    assert_eq!(third.generation(), 3);

    for creature in [&first, &second, &third] {
        assert_eq!(creature.species(), "Phoenix");
        for value in [creature.size(), creature.strength(), creature.intelligence()] {
            assert!((1..=10).contains(&value));
        }
    }

    let depths: Vec<usize> = family_tree(&third).map(|(_, depth)| depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 2, 1, 2, 2]);

    let names: Vec<&str> = family_tree(&third).map(|(c, _)| c.name()).collect();
    assert_eq!(&names[1..], &["Bllar", "Blaze", "Solar", "Sora", "Solar", "Pyra"]);

    // Solar appears twice in the walk but once among distinct ancestors
    assert_eq!(unique_ancestors(&third).len(), 5);
}

#[test]
fn test_family_tree_render_shape() {
    let mut breeder = Breeder::from_seed(BreedingConfig::default(), 7).unwrap();

    let thunder = Arc::new(Creature::new("Thunder", "Griffin", "Gold", 8, 8, 7));
    let storm = Arc::new(Creature::new("Storm", "Griffin", "Silver", 7, 9, 6));
    let azure = Arc::new(Creature::new("Azure", "Griffin", "Blue", 9, 7, 8));

    let a = breeder.breed(&thunder, &storm).unwrap();
    let b = breeder.breed(&storm, &azure).unwrap();
    let c = breeder.breed(&a, &b).unwrap();

    let rendered = render_family_tree(&c);
    let lines: Vec<&str> = rendered.lines().collect();

    // 7 creatures plus a "Parents:" marker for each of the 3 bred ones
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], format!("{} (Gen 3, Griffin)", c.name()));
    assert_eq!(lines[1], "├─ Parents:");
    assert_eq!(lines[2], format!("  {} (Gen 2, Griffin)", a.name()));
    assert_eq!(lines[3], "  ├─ Parents:");
    assert_eq!(lines[4], "    Thunder (Gen 1, Griffin)");
}

#[test]
fn test_species_mismatch_is_only_error() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let ember = Arc::new(Creature::new("Ember", "Dragon", "Red", 9, 8, 6));
    let sparkle = Arc::new(Creature::new("Sparkle", "Unicorn", "White", 7, 5, 9));
    let weird = Arc::new(Creature::new("", "Dragon", "", -50, 99, 0).with_generation(-7));

    let err = breed(&ember, &sparkle, &mut rng).unwrap_err();
    assert!(matches!(err, BreedError::SpeciesMismatch { .. }));
    assert_eq!(err.to_string(), "Cannot breed different species: Dragon and Unicorn");

    // Odd but same-species parents always breed
    let child = breed(&ember, &weird, &mut rng).unwrap();
    assert_eq!(child.generation(), 2);
    assert_eq!(child.name(), "EmberJr");
}

#[test]
fn test_forced_blends() {
    let config = BreedingConfig::default();

    let red = phoenix("Blaze", "Red", 5, 5, 5);
    let blue = phoenix("Azure", "Blue", 5, 5, 5);
    let yellow = phoenix("Solar", "Yellow", 5, 5, 5);

    let purple = breed_with_config(&red, &blue, &config, &mut StepRng::new(0, 0)).unwrap();
    assert_eq!(purple.color(), "Purple");

    let green = breed_with_config(&blue, &yellow, &config, &mut StepRng::new(0, 0)).unwrap();
    assert_eq!(green.color(), "Green");
}

#[test]
fn test_config_from_toml_changes_offspring() {
    let config = BreedingConfig::from_toml_str(
        r#"
mutation_range = 0.0
blend_chance = 1.0
short_name_suffix = "Minor"
"#,
    )
    .unwrap();

    let al = phoenix("Al", "Red", 3, 8, 10);
    let bo = phoenix("Bo", "Yellow", 6, 8, 10);

    let mut breeder = Breeder::from_seed(config, 11).unwrap();
    let child = breeder.breed(&al, &bo).unwrap();

    assert_eq!(child.name(), "AlBoMinor");
    assert_eq!(child.color(), "Orange");
    // 4.5 rounds up, the others are exact midpoints
    assert_eq!((child.size(), child.strength(), child.intelligence()), (5, 8, 10));
}
