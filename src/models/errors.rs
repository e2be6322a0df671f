use super::{ProbabilityOutOfRangeError, SelectionError};

/// Errors caused by an inconsistent setup of the catalog, the constraints or the
/// evolution parameters.
///
/// These are never retried. They indicate a caller mistake and are raised before
/// (or during) the generation in which the inconsistency is first observed.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ConfigurationError {
    #[error("MissingOperator: no {0} operator was configured")]
    MissingOperator(&'static str),
    #[error("EmptyCatalog: the catalog must contain at least one item")]
    EmptyCatalog,
    #[error(
        "AttributeLengthMismatch: item '{item}' has {got} attributes, expected {expected}"
    )]
    AttributeLengthMismatch {
        item: String,
        expected: usize,
        got: usize,
    },
    #[error(
        "ConstraintCountMismatch: catalog tracks {nutrients} nutrients, got {constraints} constraints"
    )]
    ConstraintCountMismatch { nutrients: usize, constraints: usize },
    #[error("GenomeLengthMismatch: expected {expected} genes, got {got}")]
    GenomeLengthMismatch { expected: usize, got: usize },
    #[error("EmptyValidSet: at least one candidate gene value is required")]
    EmptyValidSet,
    #[error(
        "SampleTooLarge: cannot draw {size} distinct genes from a valid set of {available}"
    )]
    SampleTooLarge { size: usize, available: usize },
    #[error("EmptyPopulation: population size must be at least 1")]
    EmptyPopulation,
    #[error("InvalidTournamentSize: tournament size must be at least 1")]
    InvalidTournamentSize,
    #[error(
        "InsufficientSplitPoints: {points}-point crossover needs a genome of at least {min_length} genes, got {genome_length}"
    )]
    InsufficientSplitPoints {
        points: usize,
        min_length: usize,
        genome_length: usize,
    },
    #[error("GenomeTooShort: {mutation} needs at least {min_length} genes, got {genome_length}")]
    GenomeTooShort {
        mutation: &'static str,
        min_length: usize,
        genome_length: usize,
    },
    #[error("Probability: {0}")]
    Probability(#[from] ProbabilityOutOfRangeError),
}

/// Any failure that aborts [`Population::evolve`](super::Population::evolve).
///
/// History recorded for generations completed before the failure is kept.
#[derive(Debug, thiserror::Error)]
pub enum EvolutionError {
    #[error("ConfigurationError: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("SelectionError: {0}")]
    Selection(#[from] SelectionError),
}
