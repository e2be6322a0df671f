use super::{Catalog, ConfigurationError, ConstraintSet, Gene};
use serde::Serialize;
use tracing::instrument;

/// Flat amount added to the cost for every nutrient minimum a genome fails to reach.
/// The size of the shortfall does not matter.
pub const CONSTRAINT_PENALTY: f64 = 10.0;

/// Derived values of a genome: penalized fitness, raw cost and nutrient totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub fitness: f64,
    pub cost: f64,
    pub totals: Vec<f64>,
}

/// Objective function that scores a genome.
///
/// Evaluators are passed explicitly to every constructor that needs one; an
/// [`Individual`](super::Individual) is scored once, when it is built.
pub trait Evaluator {
    /// Number of genes a genome must have to be evaluated.
    fn genome_length(&self) -> usize;

    fn evaluate(&self, genome: &[Gene]) -> Result<Evaluation, ConfigurationError>;

    /// Names of the items selected (gene equal to 1) by the genome.
    fn selected_items(&self, genome: &[Gene]) -> Vec<String>;
}

/// Scores a menu by its price, adding [`CONSTRAINT_PENALTY`] per unmet nutrient minimum.
#[derive(Debug, Clone)]
pub struct PenaltyEvaluator {
    catalog: Catalog,
    constraints: ConstraintSet,
}

impl PenaltyEvaluator {
    #[instrument(level = "debug", skip(catalog, constraints), fields(items = catalog.len(), constraints = constraints.len()))]
    pub fn new(catalog: Catalog, constraints: ConstraintSet) -> Result<Self, ConfigurationError> {
        if catalog.nutrient_count() != constraints.len() {
            return Err(ConfigurationError::ConstraintCountMismatch {
                nutrients: catalog.nutrient_count(),
                constraints: constraints.len(),
            });
        }

        Ok(Self {
            catalog,
            constraints,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }
}

impl Evaluator for PenaltyEvaluator {
    fn genome_length(&self) -> usize {
        self.catalog.len()
    }

    #[instrument(level = "trace", skip(self, genome), fields(genome_length = genome.len()))]
    fn evaluate(&self, genome: &[Gene]) -> Result<Evaluation, ConfigurationError> {
        if genome.len() != self.catalog.len() {
            return Err(ConfigurationError::GenomeLengthMismatch {
                expected: self.catalog.len(),
                got: genome.len(),
            });
        }

        // genome . attribute matrix
        let mut sums = vec![0.0; self.catalog.nutrient_count() + 1];
        for (&gene, item) in genome.iter().zip(self.catalog.items()) {
            let weight = f64::from(gene);
            for (sum, attribute) in sums.iter_mut().zip(&item.attributes) {
                *sum += weight * attribute;
            }
        }

        let cost = sums[0];
        let totals = sums.split_off(1);

        let violations = totals
            .iter()
            .zip(self.constraints.minimums())
            .filter(|(total, minimum)| **total < minimum.minimum)
            .count();

        Ok(Evaluation {
            fitness: cost + CONSTRAINT_PENALTY * violations as f64,
            cost,
            totals,
        })
    }

    fn selected_items(&self, genome: &[Gene]) -> Vec<String> {
        genome
            .iter()
            .zip(self.catalog.items())
            .filter(|(gene, _)| **gene == 1)
            .map(|(_, item)| item.name.clone())
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::test_utilities::three_item_evaluator;
    use super::*;
    use crate::models::{CatalogItem, NutrientMinimum};

    #[test]
    fn it_scores_a_feasible_menu_by_its_price() {
        let evaluator = three_item_evaluator();
        let evaluation = evaluator.evaluate(&[1, 1, 0]).expect("length matches");

        assert_eq!(evaluation.cost, 3.0);
        assert_eq!(evaluation.totals, vec![8.0]);
        assert_eq!(evaluation.fitness, 3.0);
    }

    #[test]
    fn it_penalizes_each_unmet_minimum_once() {
        let evaluator = three_item_evaluator();
        let evaluation = evaluator.evaluate(&[1, 0, 0]).expect("length matches");

        assert_eq!(evaluation.cost, 1.0);
        assert_eq!(evaluation.totals, vec![5.0]);
        assert_eq!(evaluation.fitness, 11.0);

        // The empty menu misses by 8, still a single penalty
        let evaluation = evaluator.evaluate(&[0, 0, 0]).expect("length matches");
        assert_eq!(evaluation.fitness, 10.0);
    }

    #[test]
    fn it_adds_the_penalty_for_every_violated_constraint() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("X", vec![2.0, 1.0, 1.0, 100.0]),
            CatalogItem::new("Y", vec![3.0, 1.0, 0.0, 0.0]),
        ])
        .expect("is valid");
        let constraints = ConstraintSet::new(vec![
            NutrientMinimum::new("a", 2.0),
            NutrientMinimum::new("b", 2.0),
            NutrientMinimum::new("c", 50.0),
        ]);
        let evaluator = PenaltyEvaluator::new(catalog, constraints).expect("is consistent");

        for genome in [[0u8, 0], [1, 0], [0, 1], [1, 1]] {
            let evaluation = evaluator.evaluate(&genome).expect("length matches");
            let violations = evaluation
                .totals
                .iter()
                .zip(evaluator.constraints().minimums())
                .filter(|(total, minimum)| **total < minimum.minimum)
                .count();

            assert_eq!(
                evaluation.fitness,
                evaluation.cost + CONSTRAINT_PENALTY * violations as f64
            );
        }

        let evaluation = evaluator.evaluate(&[0, 1]).expect("length matches");
        assert_eq!(evaluation.fitness, 3.0 + 3.0 * CONSTRAINT_PENALTY);
    }

    #[test]
    fn it_rejects_genomes_of_the_wrong_length() {
        let evaluator = three_item_evaluator();

        assert_eq!(
            evaluator.evaluate(&[1, 0]),
            Err(ConfigurationError::GenomeLengthMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn it_rejects_constraints_not_aligned_with_the_catalog() {
        let catalog =
            Catalog::new(vec![CatalogItem::new("A", vec![1.0, 5.0])]).expect("is valid");
        let constraints = ConstraintSet::new(vec![
            NutrientMinimum::new("a", 1.0),
            NutrientMinimum::new("b", 1.0),
        ]);

        assert!(matches!(
            PenaltyEvaluator::new(catalog, constraints),
            Err(ConfigurationError::ConstraintCountMismatch {
                nutrients: 1,
                constraints: 2
            })
        ));
    }

    #[test]
    fn it_lists_selected_item_names() {
        let evaluator = three_item_evaluator();
        assert_eq!(evaluator.selected_items(&[1, 0, 1]), vec!["A", "C"]);
        assert!(evaluator.selected_items(&[0, 0, 0]).is_empty());
    }
}
