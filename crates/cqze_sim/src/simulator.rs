//! State evolution engine
//!
//! Applies a gate sequence to a photon state and records the full
//! trajectory of intermediate states, one snapshot per gate.

use cqze_core::constants::tolerance;
use cqze_core::{CqzeResult, Gate, GateSequence, PhotonState, ProtocolConfig};

use crate::trajectory::Trajectory;

/// Deterministic two-amplitude state evolver
///
/// Stateless apart from its normalization tolerance; the same inputs
/// always produce a bit-identical trajectory.
#[derive(Debug, Clone)]
pub struct Simulator {
    norm_tolerance: f64,
}

impl Simulator {
    /// Create a simulator with the default normalization tolerance
    pub fn new() -> Self {
        Self {
            norm_tolerance: tolerance::NORM,
        }
    }

    /// Override the normalization tolerance
    pub fn with_norm_tolerance(mut self, tol: f64) -> Self {
        self.norm_tolerance = tol;
        self
    }

    /// Normalization tolerance in use
    pub fn norm_tolerance(&self) -> f64 {
        self.norm_tolerance
    }

    /// Evolve a state through a gate sequence, recording every step.
    ///
    /// The trajectory holds the initial state plus one snapshot per gate,
    /// so its length is `gates.len() + 1`. Normalization is checked on the
    /// initial state and after every gate; a violation is a defect in the
    /// gate arithmetic, surfaced as [`cqze_core::CqzeError::StateNotNormalized`],
    /// never renormalized away.
    pub fn evolve(&self, initial: &PhotonState, gates: &[Gate]) -> CqzeResult<Trajectory> {
        initial.check_normalized(self.norm_tolerance)?;

        let mut states = Vec::with_capacity(gates.len() + 1);
        let mut current = *initial;
        states.push(current);

        for gate in gates {
            current = current.apply(gate)?;
            current.check_normalized(self.norm_tolerance)?;
            states.push(current);
        }

        Ok(Trajectory::new(states))
    }

    /// Run the full protocol sequence from the default |H> initial state
    pub fn run_protocol(&self, config: &ProtocolConfig) -> CqzeResult<Trajectory> {
        let sequence = GateSequence::for_protocol(config);
        self.evolve(&PhotonState::horizontal(), sequence.gates())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cqze_core::{CqzeError, Decision, SequenceBuilder};
    use num_complex::Complex64;
    use std::f64::consts::PI;

    #[test]
    fn test_trajectory_length() {
        let config = ProtocolConfig::new(3, 5, Decision::Block).unwrap();
        let trajectory = Simulator::new().run_protocol(&config).unwrap();
        assert_eq!(trajectory.len(), config.gate_count() + 1);
    }

    #[test]
    fn test_trajectory_all_normalized() {
        let config = ProtocolConfig::new(8, 8, Decision::Block).unwrap();
        let trajectory = Simulator::new().run_protocol(&config).unwrap();
        for state in trajectory.iter() {
            assert!(state.is_normalized(1e-9));
        }
    }

    #[test]
    fn test_evolve_deterministic() {
        let config = ProtocolConfig::new(4, 4, Decision::Block).unwrap();
        let sim = Simulator::new();
        let a = sim.run_protocol(&config).unwrap();
        let b = sim.run_protocol(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pass_run_is_identity() {
        let config = ProtocolConfig::new(4, 4, Decision::Pass).unwrap();
        let trajectory = Simulator::new().run_protocol(&config).unwrap();
        let (p_h, p_v) = trajectory.final_state().probabilities();
        assert_relative_eq!(p_h, 1.0, epsilon = 1e-9);
        assert!(p_v <= config.leakage_probability());
    }

    #[test]
    fn test_block_run_dominant_vertical() {
        let config = ProtocolConfig::new(4, 4, Decision::Block).unwrap();
        let trajectory = Simulator::new().run_protocol(&config).unwrap();
        let (p_h, p_v) = trajectory.final_state().probabilities();
        assert!(p_v > p_h);
        assert_relative_eq!(p_h + p_v, 1.0, epsilon = 1e-9);
        // Single midpoint flip with M = N = 4 lands exactly on cos^2(pi/8)
        assert_relative_eq!(p_v, (PI / 8.0).cos().powi(2), epsilon = 1e-9);
    }

    #[test]
    fn test_evolve_alternate_initial_state() {
        let seq = SequenceBuilder::new().flip().build();
        let trajectory = Simulator::new()
            .evolve(&PhotonState::vertical(), seq.gates())
            .unwrap();
        let (p_h, _) = trajectory.final_state().probabilities();
        assert_relative_eq!(p_h, 1.0);
    }

    #[test]
    fn test_evolve_rejects_denormalized_initial() {
        let bad = PhotonState::new(Complex64::new(0.5, 0.0), Complex64::new(0.0, 0.0));
        let err = Simulator::new().evolve(&bad, &[]).unwrap_err();
        assert!(matches!(err, CqzeError::StateNotNormalized { .. }));
    }

    #[test]
    fn test_empty_sequence_trajectory() {
        let trajectory = Simulator::new()
            .evolve(&PhotonState::horizontal(), &[])
            .unwrap();
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.initial(), trajectory.final_state());
    }
}
