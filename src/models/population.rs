//! The generational driver.
//!
//! A [`Population`] owns a fixed number of [`Individual`]s and replaces them
//! wholesale once per generation:
//!
//! 1. Parents are picked in pairs by the configured [`Selector`](super::Selector).
//!    With the crossover probability they are recombined, otherwise their genomes
//!    are copied. Each of the two offspring genomes is then mutated with the
//!    mutation probability and wrapped in a freshly scored individual. Pairs are
//!    bred until the generation is full; an odd size drops the surplus offspring.
//! 2. With elitism, a copy of the best individual of the outgoing generation
//!    replaces the worst newcomer if it is strictly better.
//! 3. The new generation replaces the old one and the best individual's fitness and
//!    nutrient totals are appended to the [`History`].
//!
//! After the last generation the names of the items picked by the best individual
//! are stored in the history as well.

use super::{
    ConfigurationError, Direction, Evaluator, Evolution, EvolutionError, Gene, GenerationRecord,
    History, Individual,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use tracing::{debug, info, instrument};

/// How the genomes of the initial generation are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seeding {
    /// Draw every gene independently (`true`) or sample distinct values (`false`).
    pub replacement: bool,
    /// Candidate gene values.
    pub valid_set: Vec<Gene>,
}

impl Default for Seeding {
    fn default() -> Self {
        Self {
            replacement: true,
            valid_set: vec![0, 1],
        }
    }
}

pub struct Population<'e, E: Evaluator + ?Sized> {
    evaluator: &'e E,
    individuals: Vec<Individual>,
    size: usize,
    direction: Direction,
    history: History,
}

impl<'e, E: Evaluator + ?Sized> Population<'e, E> {
    /// Creates generation zero: `size` random individuals with one gene per
    /// catalog item.
    #[instrument(level = "debug", skip(seeding, evaluator, rng), fields(size = size, direction = ?direction, genome_length = evaluator.genome_length()))]
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        direction: Direction,
        seeding: &Seeding,
        evaluator: &'e E,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        if size == 0 {
            return Err(ConfigurationError::EmptyPopulation);
        }

        let individuals = (0..size)
            .map(|_| {
                Individual::random(
                    evaluator.genome_length(),
                    seeding.replacement,
                    &seeding.valid_set,
                    evaluator,
                    rng,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_individuals(individuals, direction, evaluator)
    }

    /// Wraps an existing generation, e.g. one restored from an earlier run.
    pub fn from_individuals(
        individuals: Vec<Individual>,
        direction: Direction,
        evaluator: &'e E,
    ) -> Result<Self, ConfigurationError> {
        if individuals.is_empty() {
            return Err(ConfigurationError::EmptyPopulation);
        }

        let expected = evaluator.genome_length();
        if let Some(individual) = individuals.iter().find(|i| i.len() != expected) {
            return Err(ConfigurationError::GenomeLengthMismatch {
                expected,
                got: individual.len(),
            });
        }

        Ok(Self {
            evaluator,
            size: individuals.len(),
            individuals,
            direction,
            history: History::default(),
        })
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Best individual of the current generation according to the direction.
    pub fn best(&self) -> Option<&Individual> {
        self.direction
            .best(&self.individuals)
            .map(|index| &self.individuals[index])
    }

    /// Runs `evolution.generations` generations.
    ///
    /// Operators are checked against the genome length before the first generation.
    /// A failure aborts the call; generations already completed stay in the history.
    #[instrument(level = "info", skip(self, evolution, rng), fields(population_size = self.size, generations = evolution.generations, direction = ?self.direction))]
    pub fn evolve<R: Rng + ?Sized>(
        &mut self,
        evolution: &Evolution,
        rng: &mut R,
    ) -> Result<(), EvolutionError> {
        evolution.validate(self.evaluator.genome_length())?;

        for generation in 0..evolution.generations {
            let mut next = self.breed(evolution, rng)?;

            if evolution.elitism {
                self.preserve_elite(&mut next);
            }

            self.individuals = next;

            if let Some(best) = self.best() {
                info!(
                    generation = generation,
                    best_fitness = best.fitness(),
                    best_cost = best.cost(),
                    "Generation completed"
                );
                let record = GenerationRecord::from(best);
                self.history.push(record);
            }
        }

        if let Some(best) = self.best() {
            let items = self.evaluator.selected_items(best.genome());
            info!(best_fitness = best.fitness(), items = items.len(), "Evolution finished");
            self.history.set_selected_items(items);
        }

        Ok(())
    }

    /// Breeds a complete new generation of exactly `size` individuals.
    fn breed<R: Rng + ?Sized>(
        &self,
        evolution: &Evolution,
        rng: &mut R,
    ) -> Result<Vec<Individual>, EvolutionError> {
        let mut next = Vec::with_capacity(self.size + 1);

        while next.len() < self.size {
            let parent1 = evolution.selector.select(&self.individuals, rng)?;
            let parent2 = evolution.selector.select(&self.individuals, rng)?;

            let (mut offspring1, mut offspring2) = if evolution.crossover_probability.sample(rng)
            {
                evolution
                    .crossover
                    .apply(rng, parent1.genome(), parent2.genome())?
            } else {
                (parent1.genome().to_vec(), parent2.genome().to_vec())
            };

            if evolution.mutation_probability.sample(rng) {
                evolution.mutation.apply(rng, &mut offspring1)?;
            }
            if evolution.mutation_probability.sample(rng) {
                evolution.mutation.apply(rng, &mut offspring2)?;
            }

            next.push(Individual::new(offspring1, self.evaluator)?);
            next.push(Individual::new(offspring2, self.evaluator)?);
        }

        if next.len() > self.size {
            debug!(bred = next.len(), size = self.size, "Truncating surplus offspring");
            next.truncate(self.size);
        }

        Ok(next)
    }

    /// Replaces the worst member of `next` with a copy of the current best, if the
    /// copy is strictly better.
    fn preserve_elite(&self, next: &mut [Individual]) {
        let (Some(elite), Some(worst)) = (self.best(), self.direction.worst(next)) else {
            return;
        };

        if self.direction.is_better(elite.fitness(), next[worst].fitness()) {
            debug!(
                elite_fitness = elite.fitness(),
                replaced_fitness = next[worst].fitness(),
                "Elite replaces worst offspring"
            );
            next[worst] = elite.clone();
        }
    }
}

impl<E: Evaluator + ?Sized> Index<usize> for Population<'_, E> {
    type Output = Individual;

    fn index(&self, position: usize) -> &Self::Output {
        &self.individuals[position]
    }
}

impl<E: Evaluator + ?Sized> fmt::Display for Population<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for individual in &self.individuals {
            writeln!(f, "{individual}")?;
        }
        Ok(())
    }
}

impl<E: Evaluator + ?Sized> fmt::Debug for Population<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Population")
            .field("size", &self.size)
            .field("direction", &self.direction)
            .field("individuals", &self.individuals)
            .field("history", &self.history)
            .finish()
    }
}
