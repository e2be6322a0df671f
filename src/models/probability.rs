use rand::Rng;
use serde::{Deserialize, Serialize};

/// Error returned when a probability lies outside the closed range [0.0, 1.0].
///
/// ```rust
/// use menu_ga::models::Probability;
///
/// assert!(Probability::new(-0.1).is_err());
/// assert!(Probability::new(1.5).is_err());
/// assert!(Probability::new(0.0).is_ok());
/// assert!(Probability::new(1.0).is_ok());
/// ```
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
#[error("probability must be between 0.0 and 1.0, got {0}")]
pub struct ProbabilityOutOfRangeError(pub(crate) f64);

/// A validated probability used to gate crossover and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    pub const ALWAYS: Self = Self(1.0);
    pub const NEVER: Self = Self(0.0);

    pub fn new(value: f64) -> Result<Self, ProbabilityOutOfRangeError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ProbabilityOutOfRangeError(value));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Draws once from the random source and reports whether the event happens.
    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.random::<f64>() < self.0
    }
}

impl TryFrom<f64> for Probability {
    type Error = ProbabilityOutOfRangeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(probability: Probability) -> Self {
        probability.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn it_rejects_out_of_range_values() {
        assert_eq!(
            Probability::new(-0.1),
            Err(ProbabilityOutOfRangeError(-0.1))
        );
        assert_eq!(Probability::new(1.5), Err(ProbabilityOutOfRangeError(1.5)));
        assert!(Probability::new(f64::NAN).is_err());
    }

    #[test]
    fn it_never_and_always_fires_at_the_bounds() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            assert!(Probability::ALWAYS.sample(&mut rng));
            assert!(!Probability::NEVER.sample(&mut rng));
        }
    }

    #[test]
    fn it_deserializes_through_validation() {
        let ok: Probability = serde_json::from_str("0.25").expect("is in range");
        assert_eq!(ok.value(), 0.25);

        let err = serde_json::from_str::<Probability>("1.25");
        assert!(err.is_err());
    }
}
