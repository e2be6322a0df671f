use super::{ConfigurationError, Crossover, Mutation, Probability, Selector};
use serde::Serialize;

/// Fully specified parameters of one [`Population::evolve`](super::Population::evolve) call.
///
/// Built through [`Evolution::builder`], which refuses to produce a configuration
/// without a selection, crossover and mutation operator.
///
/// ```rust
/// use menu_ga::models::{Crossover, Evolution, Mutation, Selector};
///
/// let evolution = Evolution::builder()
///     .selector(Selector::tournament(2)?)
///     .crossover(Crossover::OnePoint)
///     .mutation(Mutation::SingleBitFlip)
///     .generations(20)
///     .crossover_probability(1.0)
///     .mutation_probability(0.0)
///     .build()?;
///
/// assert_eq!(evolution.generations, 20);
/// assert!(evolution.elitism);
/// # Ok::<(), menu_ga::models::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evolution {
    pub selector: Selector,
    pub crossover: Crossover,
    pub mutation: Mutation,
    pub generations: usize,
    pub crossover_probability: Probability,
    pub mutation_probability: Probability,
    pub elitism: bool,
}

impl Evolution {
    pub fn builder() -> EvolutionBuilder {
        EvolutionBuilder::default()
    }

    /// Checks the operators against the genome length of the problem.
    pub(crate) fn validate(&self, genome_length: usize) -> Result<(), ConfigurationError> {
        self.selector.validate()?;
        self.crossover.validate(genome_length)?;
        self.mutation.validate(genome_length)?;

        Ok(())
    }
}

/// Builder for [`Evolution`]. Defaults: 100 generations, crossover probability 0.9,
/// mutation probability 0.2, elitism on.
#[derive(Debug, Clone)]
pub struct EvolutionBuilder {
    selector: Option<Selector>,
    crossover: Option<Crossover>,
    mutation: Option<Mutation>,
    generations: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    elitism: bool,
}

impl Default for EvolutionBuilder {
    fn default() -> Self {
        Self {
            selector: None,
            crossover: None,
            mutation: None,
            generations: 100,
            crossover_probability: 0.9,
            mutation_probability: 0.2,
            elitism: true,
        }
    }
}

impl EvolutionBuilder {
    pub fn selector(mut self, selector: Selector) -> Self {
        self.selector = Some(selector);
        self
    }

    pub fn crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = Some(crossover);
        self
    }

    pub fn mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = Some(mutation);
        self
    }

    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    pub fn crossover_probability(mut self, probability: f64) -> Self {
        self.crossover_probability = probability;
        self
    }

    pub fn mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    pub fn elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    pub fn build(self) -> Result<Evolution, ConfigurationError> {
        let selector = self
            .selector
            .ok_or(ConfigurationError::MissingOperator("selection"))?;
        let crossover = self
            .crossover
            .ok_or(ConfigurationError::MissingOperator("crossover"))?;
        let mutation = self
            .mutation
            .ok_or(ConfigurationError::MissingOperator("mutation"))?;
        selector.validate()?;

        Ok(Evolution {
            selector,
            crossover,
            mutation,
            generations: self.generations,
            crossover_probability: Probability::new(self.crossover_probability)?,
            mutation_probability: Probability::new(self.mutation_probability)?,
            elitism: self.elitism,
        })
    }
}
