use super::individual::flip;
use super::{ConfigurationError, Gene};
use rand::Rng;
use rand::seq::{SliceRandom, index};
use serde::{Deserialize, Serialize};
use tracing::instrument;

fn single_bit_flip<R: Rng + ?Sized>(rng: &mut R, genome: &mut [Gene]) {
    let point = rng.random_range(0..genome.len());
    genome[point] = flip(genome[point]);
}

fn complete_bit_flip(genome: &mut [Gene]) {
    for gene in genome.iter_mut() {
        *gene = flip(*gene);
    }
}

fn single_swap<R: Rng + ?Sized>(rng: &mut R, genome: &mut [Gene]) {
    let points = index::sample(rng, genome.len(), 2);
    genome.swap(points.index(0), points.index(1));
}

/// Positions are drawn independently, so a position hit twice ends up unchanged.
fn multiple_bit_flip<R: Rng + ?Sized>(rng: &mut R, genome: &mut [Gene], flips: usize) {
    for _ in 0..flips {
        single_bit_flip(rng, genome);
    }
}

/// Shuffles `genome[start..end]` with `start` drawn from `0..len` and `end` from `start..len`.
fn scramble<R: Rng + ?Sized>(rng: &mut R, genome: &mut [Gene]) {
    let start = rng.random_range(0..genome.len());
    let end = rng.random_range(start..genome.len());
    genome[start..end].shuffle(rng);
}

/// In-place perturbation of an offspring genome.
///
/// Mutation never rescores anything: the engine wraps the mutated genome in a new
/// [`Individual`](super::Individual) afterwards.
///
/// ```rust
/// use menu_ga::models::Mutation;
///
/// let mutation: Mutation = serde_json::from_str(r#"{"kind": "multiple_bit_flip", "flips": 3}"#)?;
/// assert_eq!(mutation, Mutation::MultipleBitFlip { flips: 3 });
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mutation {
    /// Toggles one uniformly random position.
    SingleBitFlip,
    /// Toggles every position. Applying it twice restores the genome.
    CompleteBitFlip,
    /// Swaps the values at two distinct random positions.
    SingleSwap,
    /// Toggles `flips` independently drawn positions; repeats are allowed.
    MultipleBitFlip { flips: usize },
    /// Randomly permutes a random sub-range.
    Scramble,
}

impl Mutation {
    fn name(&self) -> &'static str {
        match self {
            Self::SingleBitFlip => "single bit flip",
            Self::CompleteBitFlip => "complete bit flip",
            Self::SingleSwap => "single swap",
            Self::MultipleBitFlip { .. } => "multiple bit flip",
            Self::Scramble => "scramble",
        }
    }

    fn min_length(&self) -> usize {
        match self {
            Self::SingleSwap => 2,
            Self::CompleteBitFlip => 0,
            _ => 1,
        }
    }

    /// Checks that genomes of `genome_length` genes can be mutated.
    pub fn validate(&self, genome_length: usize) -> Result<(), ConfigurationError> {
        let min_length = self.min_length();
        if genome_length < min_length {
            return Err(ConfigurationError::GenomeTooShort {
                mutation: self.name(),
                min_length,
                genome_length,
            });
        }

        Ok(())
    }

    /// Mutates `genome` in place.
    #[instrument(level = "trace", skip(self, rng, genome), fields(mutation_type = ?self, genome_length = genome.len()))]
    pub fn apply<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        genome: &mut [Gene],
    ) -> Result<(), ConfigurationError> {
        self.validate(genome.len())?;

        match self {
            Self::SingleBitFlip => single_bit_flip(rng, genome),
            Self::CompleteBitFlip => complete_bit_flip(genome),
            Self::SingleSwap => single_swap(rng, genome),
            Self::MultipleBitFlip { flips } => multiple_bit_flip(rng, genome, *flips),
            Self::Scramble => scramble(rng, genome),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn genome() -> Vec<Gene> {
        vec![1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 1, 1]
    }

    fn differences(a: &[Gene], b: &[Gene]) -> usize {
        a.iter().zip(b).filter(|(x, y)| x != y).count()
    }

    fn ones(genome: &[Gene]) -> usize {
        genome.iter().filter(|gene| **gene == 1).count()
    }

    #[test]
    fn it_flips_exactly_one_position() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let original = genome();
            let mut mutated = original.clone();
            Mutation::SingleBitFlip
                .apply(&mut rng, &mut mutated)
                .expect("is long enough");

            assert_eq!(differences(&original, &mutated), 1);
        }
    }

    #[test]
    fn it_inverts_every_position_and_back() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = genome();
        let mut mutated = original.clone();

        Mutation::CompleteBitFlip
            .apply(&mut rng, &mut mutated)
            .expect("is valid");
        assert_eq!(differences(&original, &mutated), original.len());

        Mutation::CompleteBitFlip
            .apply(&mut rng, &mut mutated)
            .expect("is valid");
        assert_eq!(mutated, original);
    }

    #[test]
    fn it_swaps_two_positions() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let original = genome();
            let mut mutated = original.clone();
            Mutation::SingleSwap
                .apply(&mut rng, &mut mutated)
                .expect("is long enough");

            let changed = differences(&original, &mutated);
            assert!(changed == 0 || changed == 2);
            assert_eq!(ones(&mutated), ones(&original));
        }
    }

    #[test]
    fn it_flips_at_most_the_requested_number_of_positions() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let original = genome();
            let mut mutated = original.clone();
            Mutation::MultipleBitFlip { flips: 3 }
                .apply(&mut rng, &mut mutated)
                .expect("is long enough");

            let changed = differences(&original, &mutated);
            // repeated positions cancel out
            assert!(changed == 1 || changed == 3);
        }
    }

    #[test]
    fn it_scrambles_without_changing_the_gene_counts() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let original = genome();
            let mut mutated = original.clone();
            Mutation::Scramble
                .apply(&mut rng, &mut mutated)
                .expect("is long enough");

            assert_eq!(mutated.len(), original.len());
            assert_eq!(ones(&mutated), ones(&original));
            assert_eq!(mutated.last(), original.last());
        }
    }

    #[test]
    fn it_leaves_non_binary_genes_alone() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut mutated: Vec<Gene> = vec![2, 0, 3];

        Mutation::CompleteBitFlip
            .apply(&mut rng, &mut mutated)
            .expect("is valid");
        assert_eq!(mutated, vec![2, 1, 3]);
    }

    #[test]
    fn it_rejects_genomes_too_short_to_mutate() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut single: Vec<Gene> = vec![1];

        assert_eq!(
            Mutation::SingleSwap.apply(&mut rng, &mut single),
            Err(ConfigurationError::GenomeTooShort {
                mutation: "single swap",
                min_length: 2,
                genome_length: 1
            })
        );
        assert!(Mutation::SingleBitFlip.apply(&mut rng, &mut []).is_err());
        assert!(Mutation::SingleBitFlip.apply(&mut rng, &mut single).is_ok());
        assert_eq!(single, vec![0]);
    }
}
