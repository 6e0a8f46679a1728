//! Protocol analysis
//!
//! Pure queries over trajectories and counts: per-step basis
//! probabilities, the closed-form leakage bound, and the empirical
//! fraction of shots landing on the wrong detector.

use cqze_core::{Counts, CqzeError, CqzeResult, Outcome, ProtocolConfig};

use crate::trajectory::Trajectory;

/// Stateless analysis queries
pub struct Analysis;

impl Analysis {
    /// (P0, P1) pair for every trajectory snapshot, in step order
    pub fn basis_probabilities(trajectory: &Trajectory) -> Vec<(f64, f64)> {
        trajectory.iter().map(|s| s.probabilities()).collect()
    }

    /// Closed-form asymptotic leakage bound for a configuration.
    ///
    /// A property of the cycle counts alone, independent of any simulated
    /// trajectory; callers compare empirical results against it.
    pub fn theoretical_leakage(config: &ProtocolConfig) -> f64 {
        config.leakage_probability()
    }

    /// Fraction of shots on the outcome other than `expected`.
    ///
    /// The expected outcome is horizontal ("0") for a pass run and
    /// vertical ("1") for a block run. Fails when the counts sum to zero.
    pub fn empirical_leakage(counts: &Counts, expected: Outcome) -> CqzeResult<f64> {
        let total: u64 = counts.values().sum();
        if total == 0 {
            return Err(CqzeError::EmptyCounts);
        }
        let wrong = counts.get(expected.opposite().label()).copied().unwrap_or(0);
        Ok(wrong as f64 / total as f64)
    }
}

// ============================================================================
// Tests
// ============================================================================
