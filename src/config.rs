//! Run configuration loaded from a JSON file.
//!
//! Every field is optional; missing fields fall back to the defaults of
//! [`Configuration::default`]. Only the selector has no default, so a file that
//! omits it is rejected when the [`Evolution`] is built.
//!
//! ```json
//! {
//!     "population_size": 50,
//!     "generations": 100,
//!     "selector": { "method": "tournament", "size": 3 },
//!     "crossover": "five_point",
//!     "mutation": { "kind": "multiple_bit_flip", "flips": 4 },
//!     "seed": 7
//! }
//! ```

use crate::data;
use crate::models::{
    Catalog, ConfigurationError, ConstraintSet, Crossover, Direction, Evolution, Mutation,
    PenaltyEvaluator, Seeding, Selector,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Io: could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration: {0}")]
    Configuration(#[from] ConfigurationError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub population_size: usize,
    pub direction: Direction,
    pub seeding: Seeding,
    pub generations: usize,
    pub selector: Option<Selector>,
    pub crossover: Crossover,
    pub crossover_probability: f64,
    pub mutation: Mutation,
    pub mutation_probability: f64,
    pub elitism: bool,
    pub seed: Option<u64>,
    /// JSON array of catalog items, the built-in menu when absent.
    pub catalog_path: Option<PathBuf>,
    /// JSON array of nutrient minimums, the built-in minimums when absent.
    pub constraints_path: Option<PathBuf>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            population_size: 50,
            direction: Direction::default(),
            seeding: Seeding::default(),
            generations: 100,
            selector: None,
            crossover: Crossover::OnePoint,
            crossover_probability: 0.9,
            mutation: Mutation::SingleBitFlip,
            mutation_probability: 0.2,
            elitism: true,
            seed: None,
            catalog_path: None,
            constraints_path: None,
        }
    }
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Configuration {
    #[instrument(level = "debug")]
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::from_json(&read(path)?)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the evolution parameters, failing on a missing selector or an
    /// out-of-range probability.
    pub fn evolution(&self) -> Result<Evolution, ConfigurationError> {
        let mut builder = Evolution::builder()
            .crossover(self.crossover)
            .mutation(self.mutation)
            .generations(self.generations)
            .crossover_probability(self.crossover_probability)
            .mutation_probability(self.mutation_probability)
            .elitism(self.elitism);

        if let Some(selector) = self.selector {
            builder = builder.selector(selector);
        }

        builder.build()
    }

    pub fn catalog(&self) -> Result<Catalog, Error> {
        match &self.catalog_path {
            Some(path) => Ok(serde_json::from_str(&read(path)?)?),
            None => Ok(data::catalog()?),
        }
    }

    pub fn constraints(&self) -> Result<ConstraintSet, Error> {
        match &self.constraints_path {
            Some(path) => Ok(serde_json::from_str(&read(path)?)?),
            None => Ok(data::constraints()),
        }
    }

    /// Loads catalog and constraints and checks that they fit together.
    pub fn evaluator(&self) -> Result<PenaltyEvaluator, Error> {
        Ok(PenaltyEvaluator::new(self.catalog()?, self.constraints()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Evaluator;

    #[test]
    fn it_fills_in_defaults() {
        let configuration =
            Configuration::from_json(r#"{"selector": {"method": "ranked"}}"#).expect("is valid");

        assert_eq!(configuration.population_size, 50);
        assert_eq!(configuration.generations, 100);
        assert_eq!(configuration.direction, Direction::Minimize);
        assert_eq!(configuration.seeding, Seeding::default());
        assert_eq!(configuration.crossover, Crossover::OnePoint);
        assert_eq!(configuration.mutation, Mutation::SingleBitFlip);
        assert!(configuration.elitism);
        assert_eq!(configuration.seed, None);

        let evolution = configuration.evolution().expect("is complete");
        assert_eq!(evolution.selector, Selector::Ranked);
        assert_eq!(evolution.crossover_probability.value(), 0.9);
        assert_eq!(evolution.mutation_probability.value(), 0.2);
    }

    #[test]
    fn it_parses_every_field() {
        let configuration = Configuration::from_json(
            r#"{
                "population_size": 12,
                "direction": "maximize",
                "seeding": {"replacement": false, "valid_set": [0, 1, 2]},
                "generations": 3,
                "selector": {"method": "tournament", "size": 4},
                "crossover": "ten_point",
                "crossover_probability": 0.5,
                "mutation": {"kind": "multiple_bit_flip", "flips": 2},
                "mutation_probability": 0.1,
                "elitism": false,
                "seed": 99
            }"#,
        )
        .expect("is valid");

        assert_eq!(configuration.population_size, 12);
        assert_eq!(configuration.direction, Direction::Maximize);
        assert!(!configuration.seeding.replacement);
        assert_eq!(configuration.seeding.valid_set, vec![0, 1, 2]);
        assert_eq!(configuration.selector, Some(Selector::Tournament { size: 4 }));
        assert_eq!(configuration.crossover, Crossover::TenPoint);
        assert_eq!(configuration.mutation, Mutation::MultipleBitFlip { flips: 2 });
        assert_eq!(configuration.seed, Some(99));

        let evolution = configuration.evolution().expect("is complete");
        assert_eq!(evolution.generations, 3);
        assert!(!evolution.elitism);
    }

    #[test]
    fn it_requires_a_selector() {
        let configuration = Configuration::from_json("{}").expect("is valid");

        assert_eq!(
            configuration.evolution(),
            Err(ConfigurationError::MissingOperator("selection"))
        );
    }

    #[test]
    fn it_rejects_a_tournament_without_size() {
        assert!(matches!(
            Configuration::from_json(r#"{"selector": {"method": "tournament"}}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn it_rejects_out_of_range_probabilities() {
        let configuration = Configuration::from_json(
            r#"{"selector": {"method": "roulette"}, "crossover_probability": 1.5}"#,
        )
        .expect("is valid");

        assert!(matches!(
            configuration.evolution(),
            Err(ConfigurationError::Probability(_))
        ));
    }

    #[test]
    fn it_falls_back_to_the_builtin_menu() {
        let evaluator = Configuration::default().evaluator().expect("is consistent");

        assert_eq!(evaluator.genome_length(), data::catalog().expect("is valid").len());
        assert_eq!(evaluator.constraints(), &data::constraints());
    }

    #[test]
    fn it_reports_missing_files() {
        let configuration = Configuration {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..Configuration::default()
        };

        assert!(matches!(configuration.catalog(), Err(Error::Io { .. })));
    }
}
