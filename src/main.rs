//! Creature Breeding - Demo
//!
//! Walks through the breeding engine: a single dragon pairing, a
//! three-generation phoenix line with its family tree, a rejected
//! cross-species pairing, and a small griffin population.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use creature_breeding::core::config::{load_config, BreedingConfig};
use creature_breeding::core::error::ConfigError;
use creature_breeding::lineage::render_family_tree;
use creature_breeding::{Breeder, Creature, CreatureRef};
use tracing_subscriber::EnvFilter;

/// Creature breeding demo
#[derive(Parser, Debug)]
#[command(name = "creature_breeding")]
#[command(about = "Breed creatures and show how traits are inherited")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with breeding tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final offspring's stats as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), ConfigError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("creature_breeding=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => BreedingConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Breeding with seed {}", seed);

    let mut breeder = Breeder::from_seed(config, seed)?;

    banner("CREATURE BREEDING SYSTEM DEMO");
    println!();

    demo_basic(&mut breeder);
    demo_generations(&mut breeder);
    demo_species_mismatch(&mut breeder);
    let last = demo_population(&mut breeder);

    if args.json {
        if let Some(creature) = last {
            println!("{}", creature.stats().to_json());
        }
    }

    banner("DEMO COMPLETE");
    Ok(())
}

fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

fn section(title: &str) {
    println!("{}", title);
    println!("{}", "-".repeat(60));
}

fn root(
    name: &str,
    species: &str,
    color: &str,
    size: i64,
    strength: i64,
    intelligence: i64,
) -> CreatureRef {
    Arc::new(Creature::new(name, species, color, size, strength, intelligence))
}

fn print_brief(label: &str, creature: &Creature) {
    println!("{}: {}", label, creature.name());
    println!("  Color: {}", creature.color());
    println!(
        "  Stats: Size={}, Str={}, Int={}",
        creature.size(),
        creature.strength(),
        creature.intelligence()
    );
    println!();
}

fn demo_basic(breeder: &mut Breeder) {
    section("Example 1: Basic Dragon Breeding");

    let ember = root("Ember", "Dragon", "Red", 9, 8, 6);
    let frost = root("Frost", "Dragon", "Blue", 8, 7, 8);

    println!("Parent 1:\n{}\n", ember);
    println!("Parent 2:\n{}\n", frost);

    match breeder.breed(&ember, &frost) {
        Ok(offspring) => println!("Offspring:\n{}\n\n", offspring),
        Err(e) => println!("Error: {}\n\n", e),
    }
}

fn demo_generations(breeder: &mut Breeder) {
    section("Example 2: Multi-Generation Breeding");

    let blaze = root("Blaze", "Phoenix", "Red", 7, 6, 9);
    let solar = root("Solar", "Phoenix", "Yellow", 6, 5, 9);
    let pyra = root("Pyra", "Phoenix", "Red", 8, 7, 8);

    println!("Generation 1 Parents:");
    println!("  {} - {}", blaze.name(), blaze.species());
    println!("  {} - {}", solar.name(), solar.species());
    println!();

    let line = breeder.breed(&blaze, &solar).and_then(|first| {
        print_brief("Generation 2", &first);
        let second = breeder.breed(&solar, &pyra)?;
        print_brief("Generation 2 (second)", &second);
        let third = breeder.breed(&first, &second)?;
        print_brief("Generation 3", &third);
        Ok(third)
    });

    match line {
        Ok(gen3) => {
            println!("Family Tree of Generation 3:");
            print!("{}", render_family_tree(&gen3));
            println!("\n");
        }
        Err(e) => println!("Error: {}\n\n", e),
    }
}

fn demo_species_mismatch(breeder: &mut Breeder) {
    section("Example 3: Attempting to Breed Different Species");

    let ember = root("Ember", "Dragon", "Red", 9, 8, 6);
    let sparkle = root("Sparkle", "Unicorn", "White", 7, 5, 9);

    match breeder.breed(&ember, &sparkle) {
        Ok(offspring) => println!("Unexpected offspring: {}", offspring.label()),
        Err(e) => {
            println!("Error: {}", e);
            println!("✓ Correctly prevented breeding of different species");
        }
    }
    println!("\n");
}

fn demo_population(breeder: &mut Breeder) -> Option<CreatureRef> {
    section("Example 4: Building a Creature Population");

    let creatures = [
        root("Thunder", "Griffin", "Gold", 8, 8, 7),
        root("Storm", "Griffin", "Silver", 7, 9, 6),
        root("Azure", "Griffin", "Blue", 9, 7, 8),
    ];

    println!("Initial Population:");
    for creature in &creatures {
        println!("  {} ({} {})", creature.name(), creature.color(), creature.species());
    }
    println!();

    let result = breeder.breed(&creatures[0], &creatures[1]).and_then(|a| {
        let b = breeder.breed(&creatures[1], &creatures[2])?;
        let c = breeder.breed(&a, &b)?;
        Ok((a, b, c))
    });

    match result {
        Ok((a, b, c)) => {
            println!("New Generation:");
            for creature in [&a, &b, &c] {
                println!("  {} (Gen {})", creature.name(), creature.generation());
            }
            println!();
            println!("Final Creature Details:\n{}\n", c);
            Some(c)
        }
        Err(e) => {
            println!("Error: {}\n", e);
            None
        }
    }
}
