//! Parent selection strategies.
//!
//! A [`Selector`] picks one individual out of the current generation. It is called
//! twice per breeding step, once for each parent, and never modifies the population.
//!
//! # Selection Methods
//!
//! ## Roulette Wheel Selection
//!
//! Fitness-proportionate selection with inverted weights: individual `i` gets the
//! weight `sum(fitness) - fitness_i`, normalized by the sum of all such weights. Lower
//! fitness therefore means a larger slice of the wheel. The wheel cannot be built
//! when the normalizer is zero (a single individual, or all fitness values zero);
//! that is reported as [`SelectionError::DegenerateWeights`].
//!
//! ## Ranked Selection
//!
//! Individuals are sorted by descending fitness (worst first under minimization) and
//! receive the weights `1..=n`, scaled by `n(n+1)/2`. The lowest fitness gets the
//! largest probability.
//!
//! ## Tournament Selection
//!
//! Draws `size` individuals uniformly *with replacement* and returns the one with the
//! lowest fitness.
//!
//! Ranked and tournament selection always favour low fitness, whatever the
//! population's [`Direction`](super::Direction) is.
//!
//! ```rust
//! use menu_ga::models::Selector;
//!
//! let tournament = Selector::tournament(3)?;
//! let roulette = Selector::roulette();
//! let ranked = Selector::ranked();
//! # Ok::<(), menu_ga::models::ConfigurationError>(())
//! ```

use super::{ConfigurationError, Individual};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Performs a single roulette wheel spin over raw, non-negative weights.
fn spin_roulette<R: Rng + ?Sized>(
    weights: &[f64],
    total: f64,
    rng: &mut R,
) -> Result<usize, SelectionError> {
    let spin = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (index, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if cumulative > spin {
            return Ok(index);
        }
    }

    Err(SelectionError::RouletteSelectionFailed)
}

/// Inverted fitness weights used by roulette selection, together with their sum.
fn roulette_weights(individuals: &[Individual]) -> Result<(Vec<f64>, f64), SelectionError> {
    let total_fitness: f64 = individuals.iter().map(Individual::fitness).sum();

    let weights: Vec<f64> = individuals
        .iter()
        .map(|individual| total_fitness - individual.fitness())
        .collect();

    if let Some(weight) = weights.iter().find(|weight| **weight < 0.0) {
        return Err(SelectionError::NegativeWeight(*weight));
    }

    let normalizer: f64 = weights.iter().sum();
    if !normalizer.is_finite() || normalizer <= 0.0 {
        return Err(SelectionError::DegenerateWeights(normalizer));
    }

    Ok((weights, normalizer))
}

/// Roulette selection probabilities, in population order.
pub fn roulette_probabilities(individuals: &[Individual]) -> Result<Vec<f64>, SelectionError> {
    let (weights, normalizer) = roulette_weights(individuals)?;

    Ok(weights.into_iter().map(|w| w / normalizer).collect())
}

/// Population indices sorted by descending fitness. Equal fitness keeps population order.
fn rank_order(individuals: &[Individual]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..individuals.len()).collect();
    order.sort_by(|&a, &b| {
        individuals[b]
            .fitness()
            .total_cmp(&individuals[a].fitness())
    });
    order
}

/// Ranked selection probabilities as `(population index, probability)` pairs, worst
/// first. Probabilities are `rank / (n(n+1)/2)` for ranks `1..=n`.
pub fn ranked_probabilities(individuals: &[Individual]) -> Vec<(usize, f64)> {
    let n = individuals.len();
    let denominator = (n * (n + 1) / 2) as f64;

    rank_order(individuals)
        .into_iter()
        .enumerate()
        .map(|(rank, index)| (index, (rank + 1) as f64 / denominator))
        .collect()
}

#[instrument(level = "trace", skip(individuals, rng), fields(num_candidates = individuals.len()))]
fn roulette_selection<'a, R: Rng + ?Sized>(
    individuals: &'a [Individual],
    rng: &mut R,
) -> Result<&'a Individual, SelectionError> {
    let (weights, normalizer) = roulette_weights(individuals)?;
    let index = spin_roulette(&weights, normalizer, rng)?;

    Ok(&individuals[index])
}

#[instrument(level = "trace", skip(individuals, rng), fields(num_candidates = individuals.len()))]
fn ranked_selection<'a, R: Rng + ?Sized>(
    individuals: &'a [Individual],
    rng: &mut R,
) -> Result<&'a Individual, SelectionError> {
    let order = rank_order(individuals);
    let ranks: Vec<f64> = (1..=order.len()).map(|rank| rank as f64).collect();
    let total: f64 = ranks.iter().sum();

    let position = spin_roulette(&ranks, total, rng)?;

    Ok(&individuals[order[position]])
}

#[instrument(level = "trace", skip(individuals, rng), fields(tournament_size = tournament_size, num_candidates = individuals.len()))]
fn tournament_selection<'a, R: Rng + ?Sized>(
    individuals: &'a [Individual],
    tournament_size: usize,
    rng: &mut R,
) -> Result<&'a Individual, SelectionError> {
    let mut winner: Option<&Individual> = None;

    for _ in 0..tournament_size {
        let contender = individuals
            .choose(rng)
            .ok_or(SelectionError::EmptyPopulation)?;

        winner = match winner {
            Some(current) if current.fitness() <= contender.fitness() => Some(current),
            _ => Some(contender),
        };
    }

    winner.ok_or(SelectionError::EmptyPopulation)
}

/// Method used to pick parents out of a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Selector {
    /// Inverted fitness-proportionate selection.
    Roulette,
    /// Linear rank-based selection.
    Ranked,
    /// Best of `size` uniform draws with replacement.
    Tournament {
        /// Number of contenders per tournament, at least 1.
        size: usize,
    },
}

/// Errors raised while picking a parent.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum SelectionError {
    #[error("EmptyPopulation: no individuals to select from")]
    EmptyPopulation,

    /// The roulette normalizer is zero or not finite, so weights cannot be scaled
    /// into probabilities. Happens with a single individual or an all-zero fitness.
    #[error("DegenerateWeights: roulette weights sum to {0}")]
    DegenerateWeights(f64),

    /// An inverted roulette weight is negative, which only happens with negative fitness.
    #[error("NegativeWeight: roulette weight {0} is negative")]
    NegativeWeight(f64),

    /// Should not occur; indicates a bug in the wheel arithmetic.
    #[error("Internal error: roulette wheel failed to select an individual")]
    RouletteSelectionFailed,
}

impl Selector {
    /// Creates a tournament selector. `size` must be at least 1.
    pub fn tournament(size: usize) -> Result<Self, ConfigurationError> {
        let selector = Self::Tournament { size };
        selector.validate()?;

        Ok(selector)
    }

    pub fn roulette() -> Self {
        Self::Roulette
    }

    pub fn ranked() -> Self {
        Self::Ranked
    }

    /// Checks parameters that can only be wrong when built without the constructors.
    pub(crate) fn validate(&self) -> Result<(), ConfigurationError> {
        match self {
            Self::Tournament { size: 0 } => Err(ConfigurationError::InvalidTournamentSize),
            _ => Ok(()),
        }
    }

    /// Picks one individual out of `individuals`.
    #[instrument(level = "trace", skip(self, individuals, rng), fields(method = ?self, num_candidates = individuals.len()))]
    pub fn select<'a, R: Rng + ?Sized>(
        &self,
        individuals: &'a [Individual],
        rng: &mut R,
    ) -> Result<&'a Individual, SelectionError> {
        if individuals.is_empty() {
            return Err(SelectionError::EmptyPopulation);
        }

        match self {
            Self::Roulette => roulette_selection(individuals, rng),
            Self::Ranked => ranked_selection(individuals, rng),
            Self::Tournament { size } => tournament_selection(individuals, *size, rng),
        }
    }
}
