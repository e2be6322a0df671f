use super::Individual;
use serde::Serialize;

/// Metrics of the best individual of one completed generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRecord {
    pub fitness: f64,
    pub totals: Vec<f64>,
}

impl From<&Individual> for GenerationRecord {
    fn from(best: &Individual) -> Self {
        Self {
            fitness: best.fitness(),
            totals: best.totals().to_vec(),
        }
    }
}

/// Per-generation record of the best individual, in generation order, plus the
/// names of the items picked by the final best individual.
///
/// Records are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct History {
    generations: Vec<GenerationRecord>,
    selected_items: Vec<String>,
}

impl History {
    pub(crate) fn push(&mut self, record: GenerationRecord) {
        self.generations.push(record);
    }

    pub(crate) fn set_selected_items(&mut self, items: Vec<String>) {
        self.selected_items = items;
    }

    pub fn generations(&self) -> &[GenerationRecord] {
        &self.generations
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Best fitness per generation.
    pub fn fitness(&self) -> Vec<f64> {
        self.generations.iter().map(|record| record.fitness).collect()
    }

    /// Total of the nutrient at `nutrient` (constraint order) per generation.
    /// Returns `None` when the index is out of range.
    pub fn series(&self, nutrient: usize) -> Option<Vec<f64>> {
        self.generations
            .iter()
            .map(|record| record.totals.get(nutrient).copied())
            .collect()
    }

    /// Item names chosen by the best individual after the last `evolve` call.
    pub fn selected_items(&self) -> &[String] {
        &self.selected_items
    }
}
