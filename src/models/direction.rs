use super::Individual;
use serde::{Deserialize, Serialize};

/// Optimization direction of a population. Governs which individual counts as the
/// best or the worst, both for elitism and for the recorded history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Minimize,
    Maximize,
}

impl Direction {
    /// Whether `candidate` is strictly better than `incumbent`.
    pub fn is_better(&self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Direction::Minimize => candidate < incumbent,
            Direction::Maximize => candidate > incumbent,
        }
    }

    /// Position of the best individual. Ties go to the earliest one.
    pub(crate) fn best(&self, individuals: &[Individual]) -> Option<usize> {
        self.position_by(individuals, |candidate, incumbent| {
            self.is_better(candidate, incumbent)
        })
    }

    /// Position of the worst individual. Ties go to the earliest one.
    pub(crate) fn worst(&self, individuals: &[Individual]) -> Option<usize> {
        self.position_by(individuals, |candidate, incumbent| {
            self.is_better(incumbent, candidate)
        })
    }

    fn position_by(
        &self,
        individuals: &[Individual],
        replaces: impl Fn(f64, f64) -> bool,
    ) -> Option<usize> {
        let mut position = None;
        for (index, individual) in individuals.iter().enumerate() {
            match position {
                None => position = Some(index),
                Some(current) => {
                    if replaces(individual.fitness(), individuals[current].fitness()) {
                        position = Some(index);
                    }
                }
            }
        }
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::evaluator::test_utilities::three_item_evaluator;

    fn individuals() -> Vec<Individual> {
        let evaluator = three_item_evaluator();
        // fitness: 11, 3, 12, 3
        [vec![1, 0, 0], vec![1, 1, 0], vec![0, 1, 0], vec![1, 1, 0]]
            .into_iter()
            .map(|genome| Individual::new(genome, &evaluator).expect("length matches"))
            .collect()
    }

    #[test]
    fn it_compares_strictly() {
        assert!(Direction::Minimize.is_better(1.0, 2.0));
        assert!(!Direction::Minimize.is_better(2.0, 2.0));
        assert!(Direction::Maximize.is_better(3.0, 2.0));
        assert!(!Direction::Maximize.is_better(2.0, 2.0));
    }

    #[test]
    fn it_finds_best_and_worst_when_minimizing() {
        let individuals = individuals();

        assert_eq!(Direction::Minimize.best(&individuals), Some(1));
        assert_eq!(Direction::Minimize.worst(&individuals), Some(2));
    }

    #[test]
    fn it_finds_best_and_worst_when_maximizing() {
        let individuals = individuals();

        assert_eq!(Direction::Maximize.best(&individuals), Some(2));
        assert_eq!(Direction::Maximize.worst(&individuals), Some(1));
    }

    #[test]
    fn it_returns_none_for_no_individuals() {
        assert_eq!(Direction::Minimize.best(&[]), None);
        assert_eq!(Direction::Maximize.worst(&[]), None);
    }

    #[test]
    fn it_deserializes_from_snake_case() {
        let direction: Direction = serde_json::from_str("\"maximize\"").expect("is valid");
        assert_eq!(direction, Direction::Maximize);
    }
}
