use super::{ConfigurationError, Gene};
use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Performs uniform crossover: a fair coin per position decides which parent the
/// first offspring inherits from, the second offspring takes the other parent.
#[instrument(level = "trace", skip(rng, lhs, rhs), fields(genome_length = lhs.len()))]
fn crossover_uniform<R: Rng + ?Sized>(
    rng: &mut R,
    lhs: &[Gene],
    rhs: &[Gene],
) -> (Vec<Gene>, Vec<Gene>) {
    lhs.iter()
        .zip(rhs.iter())
        .map(|(&lhs, &rhs)| {
            if rng.random_bool(0.5) {
                (lhs, rhs)
            } else {
                (rhs, lhs)
            }
        })
        .unzip()
}

/// Cuts both genomes at the sorted `points` and alternates segments between parents.
/// The first offspring starts with `lhs`, the second with `rhs`.
#[instrument(level = "trace", skip(lhs, rhs), fields(genome_length = lhs.len(), cut_points = ?points))]
fn crossover_multi_point(lhs: &[Gene], rhs: &[Gene], points: &[usize]) -> (Vec<Gene>, Vec<Gene>) {
    let mut first = Vec::with_capacity(lhs.len());
    let mut second = Vec::with_capacity(rhs.len());

    let len = lhs.len();
    let mut start = 0;
    for (segment, &end) in points.iter().chain(std::iter::once(&len)).enumerate() {
        let (from_first, from_second) = if segment % 2 == 0 {
            (lhs, rhs)
        } else {
            (rhs, lhs)
        };
        first.extend_from_slice(&from_first[start..end]);
        second.extend_from_slice(&from_second[start..end]);
        start = end;
    }

    (first, second)
}

/// Recombination strategy producing two offspring from two parent genomes.
///
/// Parents are only read; both offspring are freshly allocated.
///
/// ```rust
/// use menu_ga::models::Crossover;
///
/// let crossover = Crossover::FivePoint;
/// assert_eq!(crossover.points(), Some(5));
/// assert!(crossover.validate(6).is_err());
/// assert!(crossover.validate(7).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crossover {
    /// Independent coin flip per position.
    Uniform,
    /// One cut point drawn from `1..len`.
    OnePoint,
    /// Five distinct cut points drawn from `1..len - 1`, six alternating segments.
    FivePoint,
    /// Ten distinct cut points drawn from `1..len - 1`, eleven alternating segments.
    TenPoint,
}

impl Crossover {
    /// Number of cut points, `None` for uniform crossover.
    pub fn points(&self) -> Option<usize> {
        match self {
            Self::Uniform => None,
            Self::OnePoint => Some(1),
            Self::FivePoint => Some(5),
            Self::TenPoint => Some(10),
        }
    }

    /// Smallest genome length this strategy can cut.
    fn min_length(&self) -> usize {
        match self {
            Self::Uniform => 1,
            Self::OnePoint => 2,
            // distinct points are drawn from 1..len-1
            Self::FivePoint => 5 + 2,
            Self::TenPoint => 10 + 2,
        }
    }

    /// Checks that genomes of `genome_length` genes can be recombined.
    pub fn validate(&self, genome_length: usize) -> Result<(), ConfigurationError> {
        let min_length = self.min_length();
        if genome_length < min_length {
            return Err(ConfigurationError::InsufficientSplitPoints {
                points: self.points().unwrap_or(0),
                min_length,
                genome_length,
            });
        }

        Ok(())
    }

    /// Recombines two parent genomes into two offspring genomes.
    #[instrument(level = "trace", skip(self, rng, lhs, rhs), fields(crossover_type = ?self, genome_length = lhs.len()))]
    pub fn apply<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        lhs: &[Gene],
        rhs: &[Gene],
    ) -> Result<(Vec<Gene>, Vec<Gene>), ConfigurationError> {
        if lhs.len() != rhs.len() {
            return Err(ConfigurationError::GenomeLengthMismatch {
                expected: lhs.len(),
                got: rhs.len(),
            });
        }
        self.validate(lhs.len())?;

        let offspring = match self {
            Self::Uniform => crossover_uniform(rng, lhs, rhs),
            Self::OnePoint => {
                let point = rng.random_range(1..lhs.len());
                crossover_multi_point(lhs, rhs, &[point])
            }
            Self::FivePoint | Self::TenPoint => {
                let amount = self.points().unwrap_or(0);
                let mut points: Vec<usize> = index::sample(rng, lhs.len() - 2, amount)
                    .into_iter()
                    .map(|i| i + 1)
                    .collect();
                points.sort_unstable();
                crossover_multi_point(lhs, rhs, &points)
            }
        };

        Ok(offspring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    const ALL: [Crossover; 4] = [
        Crossover::Uniform,
        Crossover::OnePoint,
        Crossover::FivePoint,
        Crossover::TenPoint,
    ];

    fn parents(len: usize) -> (Vec<Gene>, Vec<Gene>) {
        (vec![0; len], vec![1; len])
    }

    /// Number of positions where the origin of consecutive genes changes.
    fn transitions(child: &[Gene]) -> usize {
        child.windows(2).filter(|pair| pair[0] != pair[1]).count()
    }

    #[test]
    fn it_performs_multi_point_crossover() {
        let lhs: Vec<Gene> = vec![1, 2, 3, 4, 5, 6];
        let rhs: Vec<Gene> = vec![11, 12, 13, 14, 15, 16];

        let (first, second) = crossover_multi_point(&lhs, &rhs, &[2]);
        assert_eq!(first, vec![1, 2, 13, 14, 15, 16]);
        assert_eq!(second, vec![11, 12, 3, 4, 5, 6]);

        let (first, second) = crossover_multi_point(&lhs, &rhs, &[1, 3, 5]);
        assert_eq!(first, vec![1, 12, 13, 4, 5, 16]);
        assert_eq!(second, vec![11, 2, 3, 14, 15, 6]);
    }

    #[test]
    fn it_cuts_at_the_configured_number_of_points() {
        let mut rng = StdRng::seed_from_u64(42);
        let (lhs, rhs) = parents(30);

        for _ in 0..100 {
            for crossover in [Crossover::OnePoint, Crossover::FivePoint, Crossover::TenPoint] {
                let (first, second) = crossover.apply(&mut rng, &lhs, &rhs).expect("is long enough");

                assert_eq!(first.len(), 30);
                assert_eq!(Some(transitions(&first)), crossover.points());
                assert_eq!(first[0], 0);
                assert_eq!(second[0], 1);
                assert!(first.iter().zip(&second).all(|(a, b)| a != b));
            }
        }
    }

    #[test]
    fn it_keeps_the_last_gene_out_of_multi_point_cuts() {
        let mut rng = StdRng::seed_from_u64(8);
        let (lhs, rhs) = parents(7);

        // All five interior points 1..=5 are used, so the last segment is [5..7)
        let (first, _) = Crossover::FivePoint.apply(&mut rng, &lhs, &rhs).expect("is long enough");
        assert_eq!(first, vec![0, 1, 0, 1, 0, 1, 1]);
    }

    #[test]
    fn it_produces_complementary_uniform_offspring() {
        let mut rng = StdRng::seed_from_u64(42);
        let (lhs, rhs) = parents(64);

        let (first, second) = Crossover::Uniform.apply(&mut rng, &lhs, &rhs).expect("is valid");

        assert!(first.iter().zip(&second).all(|(a, b)| a + b == 1));
        assert!(first.contains(&0) && first.contains(&1));
    }

    #[test]
    fn it_reproduces_identical_parents() {
        let mut rng = StdRng::seed_from_u64(1);
        let parent: Vec<Gene> = (0..24).map(|i| (i % 3 == 0) as Gene).collect();

        for crossover in ALL {
            let (first, second) = crossover
                .apply(&mut rng, &parent, &parent)
                .expect("is long enough");
            assert_eq!(first, parent);
            assert_eq!(second, parent);
        }
    }

    #[test]
    fn it_rejects_genomes_too_short_to_cut() {
        let mut rng = StdRng::seed_from_u64(1);
        let (lhs, rhs) = parents(11);

        assert_eq!(
            Crossover::TenPoint.apply(&mut rng, &lhs, &rhs),
            Err(ConfigurationError::InsufficientSplitPoints {
                points: 10,
                min_length: 12,
                genome_length: 11
            })
        );
        assert!(Crossover::OnePoint.validate(1).is_err());
        assert!(Crossover::OnePoint.validate(2).is_ok());
        assert!(Crossover::Uniform.validate(1).is_ok());
    }

    #[test]
    fn it_rejects_parents_of_different_lengths() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            Crossover::Uniform.apply(&mut rng, &[0, 1, 0], &[1, 0]),
            Err(ConfigurationError::GenomeLengthMismatch {
                expected: 3,
                got: 2
            })
        );
    }
}
