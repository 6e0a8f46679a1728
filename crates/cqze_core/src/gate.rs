//! Gate descriptors for CQZE
//!
//! The protocol needs exactly two single-qubit operations: a Y-axis
//! rotation mixing the two polarization amplitudes, and a full flip
//! exchanging them (the remote party's Pockels cell).

use crate::types::Angle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-qubit gate acting on the polarization amplitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Y-axis rotation by a signed angle in radians
    Ry(Angle),

    /// Polarization flip: exact exchange of the two amplitudes (Pauli-X)
    Flip,
}

impl Gate {
    /// Check if gate is a rotation
    pub fn is_rotation(&self) -> bool {
        matches!(self, Gate::Ry(_))
    }

    /// Check if gate is a flip
    pub fn is_flip(&self) -> bool {
        matches!(self, Gate::Flip)
    }

    /// Rotation angle, if any
    pub fn angle(&self) -> Option<Angle> {
        match self {
            Gate::Ry(theta) => Some(*theta),
            Gate::Flip => None,
        }
    }

    /// Inverse gate: Ry(theta) -> Ry(-theta); a flip is its own inverse
    pub fn inverse(&self) -> Self {
        match self {
            Gate::Ry(theta) => Gate::Ry(-theta),
            Gate::Flip => Gate::Flip,
        }
    }

    /// Get gate name
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Ry(_) => "ry",
            Gate::Flip => "x",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Ry(theta) => write!(f, "ry({theta})"),
            Gate::Flip => write!(f, "x"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
