use super::{ConfigurationError, Evaluation, Evaluator};
use rand::Rng;
use rand::seq::{IndexedRandom, index};
use std::fmt;
use std::ops::{Index, IndexMut};
use tracing::instrument;

/// One position of a selection vector. With the default valid set a gene is either
/// 0 (item left out) or 1 (item on the menu).
pub type Gene = u8;

/// Toggles a binary gene. Values other than 0 and 1 are left untouched.
pub(crate) fn flip(gene: Gene) -> Gene {
    match gene {
        0 => 1,
        1 => 0,
        other => other,
    }
}

/// A candidate menu: its genome plus the fitness, cost and nutrient totals derived
/// from it.
///
/// The derived values are computed exactly once, when the individual is built.
/// Writing through [`IndexMut`] changes the genome only; wrap the edited genome in a
/// new individual to get values that match it again.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genome: Vec<Gene>,
    fitness: f64,
    cost: f64,
    totals: Vec<f64>,
}

impl Individual {
    /// Wraps an explicit genome and scores it.
    #[instrument(level = "trace", skip(genome, evaluator), fields(genome_length = genome.len()))]
    pub fn new<E: Evaluator + ?Sized>(
        genome: Vec<Gene>,
        evaluator: &E,
    ) -> Result<Self, ConfigurationError> {
        let Evaluation {
            fitness,
            cost,
            totals,
        } = evaluator.evaluate(&genome)?;

        Ok(Self {
            genome,
            fitness,
            cost,
            totals,
        })
    }

    /// Draws a genome of `size` genes from `valid_set` and scores it.
    ///
    /// With `replacement` every position is an independent draw. Without it the
    /// genome is a sample of distinct entries of `valid_set`, so `size` may not
    /// exceed its length.
    #[instrument(level = "debug", skip(valid_set, evaluator, rng), fields(size = size, replacement = replacement, valid_set_len = valid_set.len()))]
    pub fn random<E, R>(
        size: usize,
        replacement: bool,
        valid_set: &[Gene],
        evaluator: &E,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError>
    where
        E: Evaluator + ?Sized,
        R: Rng + ?Sized,
    {
        if valid_set.is_empty() {
            return Err(ConfigurationError::EmptyValidSet);
        }

        let genome = if replacement {
            (0..size)
                .map(|_| *valid_set.choose(rng).unwrap_or(&valid_set[0]))
                .collect()
        } else {
            if size > valid_set.len() {
                return Err(ConfigurationError::SampleTooLarge {
                    size,
                    available: valid_set.len(),
                });
            }
            index::sample(rng, valid_set.len(), size)
                .into_iter()
                .map(|i| valid_set[i])
                .collect()
        };

        Self::new(genome, evaluator)
    }

    pub fn genome(&self) -> &[Gene] {
        &self.genome
    }

    /// Consumes the individual and hands back its genome.
    pub fn into_genome(self) -> Vec<Gene> {
        self.genome
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn totals(&self) -> &[f64] {
        &self.totals
    }

    pub fn len(&self) -> usize {
        self.genome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }
}

impl Index<usize> for Individual {
    type Output = Gene;

    fn index(&self, position: usize) -> &Self::Output {
        &self.genome[position]
    }
}

impl IndexMut<usize> for Individual {
    fn index_mut(&mut self, position: usize) -> &mut Self::Output {
        &mut self.genome[position]
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Individual(size={}); Fitness: {}; Price: {}",
            self.genome.len(),
            self.fitness,
            self.cost
        )
    }
}
