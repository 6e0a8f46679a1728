//! Gate sequence construction
//!
//! Builds the flat gate list for one CQZE run: M outer rotations, N inner
//! rotations (with the block flip inserted after the midpoint cycle), then
//! the N and M unwinding rotations with negated angles.

use crate::config::{Decision, ProtocolConfig};
use crate::gate::Gate;
use crate::types::Angle;
use std::fmt;

// ============================================================================
// SequenceBuilder
// ============================================================================

/// Fluent builder for gate sequences
///
/// The protocol sequence comes from [`GateSequence::for_protocol`]; the
/// builder is the escape hatch for hand-assembled sequences in tests and
/// experiments.
#[derive(Debug, Clone, Default)]
pub struct SequenceBuilder {
    gates: Vec<Gate>,
}

impl SequenceBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rotation
    pub fn ry(mut self, theta: Angle) -> Self {
        self.gates.push(Gate::Ry(theta));
        self
    }

    /// Append a flip
    pub fn flip(mut self) -> Self {
        self.gates.push(Gate::Flip);
        self
    }

    /// Append `count` identical rotations
    pub fn ry_cycles(mut self, theta: Angle, count: usize) -> Self {
        self.gates
            .extend(std::iter::repeat(Gate::Ry(theta)).take(count));
        self
    }

    /// Finish building
    pub fn build(self) -> GateSequence {
        GateSequence { gates: self.gates }
    }
}

// ============================================================================
// GateSequence
// ============================================================================

/// Ordered gate list for one protocol run
#[derive(Debug, Clone, PartialEq)]
pub struct GateSequence {
    gates: Vec<Gate>,
}

impl GateSequence {
    /// Build the full CQZE sequence for a configuration.
    ///
    /// Forward pass: M rotations by +2*theta_M, then N rotations by
    /// +2*theta_N. Under Block, a flip is inserted immediately after the
    /// inner rotation at index N/2 (floor). Return pass: the same counts
    /// with negated angles, no flip.
    pub fn for_protocol(config: &ProtocolConfig) -> Self {
        let step_outer = 2.0 * config.theta_outer();
        let step_inner = 2.0 * config.theta_inner();
        let midpoint = config.midpoint();

        let mut gates = Vec::with_capacity(config.gate_count());

        for _ in 0..config.outer_cycles() {
            gates.push(Gate::Ry(step_outer));
        }

        for cycle in 0..config.inner_cycles() {
            gates.push(Gate::Ry(step_inner));
            if config.decision() == Decision::Block && cycle == midpoint {
                gates.push(Gate::Flip);
            }
        }

        for _ in 0..config.inner_cycles() {
            gates.push(Gate::Ry(-step_inner));
        }

        for _ in 0..config.outer_cycles() {
            gates.push(Gate::Ry(-step_outer));
        }

        Self { gates }
    }

    /// The gates in application order
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of gates
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Iterate over the gates
    pub fn iter(&self) -> std::slice::Iter<'_, Gate> {
        self.gates.iter()
    }

    /// Number of rotation gates
    pub fn rotation_count(&self) -> usize {
        self.gates.iter().filter(|g| g.is_rotation()).count()
    }

    /// Number of flip gates
    pub fn flip_count(&self) -> usize {
        self.gates.iter().filter(|g| g.is_flip()).count()
    }
}

impl fmt::Display for GateSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, gate) in self.gates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{gate}")?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_pass_sequence_shape() {
        let config = ProtocolConfig::new(3, 5, Decision::Pass).unwrap();
        let seq = GateSequence::for_protocol(&config);
        assert_eq!(seq.len(), 16);
        assert_eq!(seq.rotation_count(), 16);
        assert_eq!(seq.flip_count(), 0);
    }

    #[test]
    fn test_block_flip_position() {
        // N = 5: flip goes right after the inner rotation at index 2,
        // i.e. after gates M + 3 in the flat list.
        let config = ProtocolConfig::new(3, 5, Decision::Block).unwrap();
        let seq = GateSequence::for_protocol(&config);
        assert_eq!(seq.len(), 17);
        assert_eq!(seq.flip_count(), 1);

        let flip_index = seq.iter().position(|g| g.is_flip()).unwrap();
        assert_eq!(flip_index, 3 + 3);
    }

    #[test]
    fn test_block_flip_single_inner_cycle() {
        // N = 1: midpoint is 0, flip follows the only inner rotation
        let config = ProtocolConfig::new(2, 1, Decision::Block).unwrap();
        let seq = GateSequence::for_protocol(&config);
        let flip_index = seq.iter().position(|g| g.is_flip()).unwrap();
        assert_eq!(flip_index, 2 + 1);
    }

    #[test]
    fn test_return_pass_has_no_flip() {
        let config = ProtocolConfig::new(4, 4, Decision::Block).unwrap();
        let seq = GateSequence::for_protocol(&config);
        let flip_index = seq.iter().position(|g| g.is_flip()).unwrap();
        // Everything after the forward pass is rotations only
        assert!(seq.gates()[flip_index + 1..].iter().all(|g| g.is_rotation()));
    }

    #[test]
    fn test_angle_signs() {
        let config = ProtocolConfig::new(2, 2, Decision::Pass).unwrap();
        let seq = GateSequence::for_protocol(&config);
        let angles: Vec<f64> = seq.iter().filter_map(|g| g.angle()).collect();

        assert_relative_eq!(angles[0], PI / 4.0);
        assert_relative_eq!(angles[2], PI / 4.0);
        assert_relative_eq!(angles[4], -PI / 4.0);
        assert_relative_eq!(angles[6], -PI / 4.0);
        assert_relative_eq!(angles.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sequence_deterministic() {
        let config = ProtocolConfig::new(4, 8, Decision::Block).unwrap();
        assert_eq!(
            GateSequence::for_protocol(&config),
            GateSequence::for_protocol(&config)
        );
    }

    #[test]
    fn test_builder() {
        let seq = SequenceBuilder::new()
            .ry(0.1)
            .flip()
            .ry_cycles(0.2, 3)
            .build();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.rotation_count(), 4);
        assert_eq!(seq.flip_count(), 1);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_empty_builder() {
        let seq = SequenceBuilder::new().build();
        assert!(seq.is_empty());
        assert_eq!(seq.to_string(), "[]");
    }
}
