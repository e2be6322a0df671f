mod catalog;
mod crossover;
mod direction;
mod errors;
mod evaluator;
mod evolution;
mod history;
mod individual;
mod mutation;
mod population;
mod probability;
mod selector;

pub use catalog::{Catalog, CatalogItem, ConstraintSet, NutrientMinimum};
pub use crossover::Crossover;
pub use direction::Direction;
pub use errors::{ConfigurationError, EvolutionError};
pub use evaluator::{CONSTRAINT_PENALTY, Evaluation, Evaluator, PenaltyEvaluator};
pub use evolution::{Evolution, EvolutionBuilder};
pub use history::{GenerationRecord, History};
pub use individual::{Gene, Individual};
pub use mutation::Mutation;
pub use population::{Population, Seeding};
pub use probability::{Probability, ProbabilityOutOfRangeError};
pub use selector::{SelectionError, Selector, ranked_probabilities, roulette_probabilities};
