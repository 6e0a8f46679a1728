//! Born-rule measurement sampling
//!
//! Draws independent shots from a final state's basis probabilities. The
//! random source is a caller-supplied parameter so tests can seed it and
//! parallel runs can partition their streams.

use cqze_core::constants::tolerance;
use cqze_core::{Counts, CqzeError, CqzeResult, Outcome, PhotonState};
use rand::Rng;

/// Born-rule sampler over the two-outcome polarization measurement
#[derive(Debug, Clone, Default)]
pub struct Sampler;

impl Sampler {
    /// Create a sampler
    pub fn new() -> Self {
        Self
    }

    /// Draw `shots` independent outcomes from `state` using `rng`.
    ///
    /// Both outcome labels are always present in the result, so counts sum
    /// to `shots` exactly and consumers see a fixed shape. Fails on zero
    /// shots and on a state outside normalization tolerance.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        state: &PhotonState,
        shots: u64,
        rng: &mut R,
    ) -> CqzeResult<Counts> {
        if shots == 0 {
            return Err(CqzeError::InvalidShotCount(shots));
        }
        state.check_normalized(tolerance::NORM)?;

        let p_vertical = state.p_vertical()?.value();

        let mut vertical = 0u64;
        for _ in 0..shots {
            if rng.gen::<f64>() < p_vertical {
                vertical += 1;
            }
        }

        let mut counts = Counts::new();
        counts.insert(Outcome::Horizontal.label().to_string(), shots - vertical);
        counts.insert(Outcome::Vertical.label().to_string(), vertical);
        Ok(counts)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cqze_core::Gate;
    use num_complex::Complex64;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f64::consts::PI;

    #[test]
    fn test_counts_sum_to_shots() {
        let state = PhotonState::horizontal().apply(&Gate::Ry(PI / 3.0)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let counts = Sampler::new().sample(&state, 1234, &mut rng).unwrap();
        assert_eq!(counts.values().sum::<u64>(), 1234);
        assert!(counts.contains_key("0"));
        assert!(counts.contains_key("1"));
    }

    #[test]
    fn test_deterministic_state_sampling() {
        // |H> gives all shots on "0" regardless of rng draws
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let counts = Sampler::new()
            .sample(&PhotonState::horizontal(), 100, &mut rng)
            .unwrap();
        assert_eq!(counts["0"], 100);
        assert_eq!(counts["1"], 0);

        let counts = Sampler::new()
            .sample(&PhotonState::vertical(), 100, &mut rng)
            .unwrap();
        assert_eq!(counts["1"], 100);
    }

    #[test]
    fn test_convergence_to_born_probability() {
        // Equal superposition: p = 0.5, 10k shots, 5 sigma = 0.025
        let state = PhotonState::horizontal().apply(&Gate::Ry(PI / 2.0)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let shots = 10_000u64;
        let counts = Sampler::new().sample(&state, shots, &mut rng).unwrap();

        let fraction = counts["1"] as f64 / shots as f64;
        assert!((fraction - 0.5).abs() < 0.025, "fraction = {fraction}");
    }

    #[test]
    fn test_seed_reproducibility() {
        let state = PhotonState::horizontal().apply(&Gate::Ry(0.9)).unwrap();
        let sampler = Sampler::new();

        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);
        let a = sampler.sample(&state, 500, &mut rng_a).unwrap();
        let b = sampler.sample(&state, 500, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_shots_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = Sampler::new()
            .sample(&PhotonState::horizontal(), 0, &mut rng)
            .unwrap_err();
        assert!(matches!(err, CqzeError::InvalidShotCount(0)));
    }

    #[test]
    fn test_denormalized_state_rejected() {
        let bad = PhotonState::new(Complex64::new(0.9, 0.0), Complex64::new(0.0, 0.0));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = Sampler::new().sample(&bad, 10, &mut rng).unwrap_err();
        assert!(err.is_defect());
    }
}
