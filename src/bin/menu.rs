//! Runs one menu optimization and prints the recorded history as JSON.
//!
//! The configuration file is taken from `MENU_GA_CONFIG`; without it the defaults
//! apply with a size-3 tournament selector. `MENU_GA_SEED` overrides the configured
//! seed. Log verbosity follows `RUST_LOG` and defaults to `info`.

use anyhow::Result;
use menu_ga::config::Configuration;
use menu_ga::models::{Population, Selector};
use rand::{SeedableRng, rngs::StdRng};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn configuration() -> Result<Configuration> {
    let mut configuration = match env::var("MENU_GA_CONFIG") {
        Ok(path) => Configuration::from_path(&PathBuf::from(path))?,
        Err(_) => Configuration {
            selector: Some(Selector::tournament(3)?),
            ..Configuration::default()
        },
    };

    if let Ok(seed) = env::var("MENU_GA_SEED") {
        configuration.seed = Some(seed.parse()?);
    }

    Ok(configuration)
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let configuration = configuration()?;
    let evolution = configuration.evolution()?;
    let evaluator = configuration.evaluator()?;

    let mut rng = match configuration.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut population = Population::new(
        configuration.population_size,
        configuration.direction,
        &configuration.seeding,
        &evaluator,
        &mut rng,
    )?;
    population.evolve(&evolution, &mut rng)?;

    if let Some(best) = population.best() {
        info!(%best, "Best menu found");
    }

    println!("{}", serde_json::to_string_pretty(population.history())?);

    Ok(())
}
