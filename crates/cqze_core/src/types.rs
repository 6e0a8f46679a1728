//! Core types for CQZE
//!
//! Type aliases, the validated probability wrapper, and the two-valued
//! detector outcome used throughout the workspace.

use crate::error::{CqzeError, CqzeResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Rotation angle in radians
pub type Angle = f64;

/// Measurement counts: outcome label ("0" / "1") -> count
pub type Counts = HashMap<String, u64>;

// ============================================================================
// Probability (Validated Wrapper)
// ============================================================================

/// Probability value in range [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probability(f64);

impl Probability {
    /// Create a new Probability with validation
    pub fn new(value: f64) -> CqzeResult<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(CqzeError::InvalidProbability(value));
        }
        Ok(Self(value))
    }

    /// Create by clamping tiny floating-point excursions into [0, 1].
    ///
    /// Squared amplitudes can land a few ulps outside the unit interval
    /// after a long gate sequence; those are clamped. Anything further out
    /// is a defect and still rejected.
    pub fn new_clamped(value: f64) -> CqzeResult<Self> {
        const CLAMP_SLACK: f64 = 1e-9;
        if value < -CLAMP_SLACK || value > 1.0 + CLAMP_SLACK {
            return Err(CqzeError::InvalidProbability(value));
        }
        Ok(Self(value.clamp(0.0, 1.0)))
    }

    /// Get the probability value
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the complement (1 - p)
    #[inline]
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }

    /// Zero probability
    pub const ZERO: Self = Self(0.0);

    /// Certainty (p = 1)
    pub const ONE: Self = Self(1.0);
}

impl Default for Probability {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = CqzeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Detector outcome of a single-qubit polarization measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Horizontal polarization, basis state 0, label "0"
    Horizontal,
    /// Vertical polarization, basis state 1, label "1"
    Vertical,
}

impl Outcome {
    /// Counts key for this outcome
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Horizontal => "0",
            Outcome::Vertical => "1",
        }
    }

    /// Parse from a counts key
    pub fn from_label(label: &str) -> CqzeResult<Self> {
        match label {
            "0" => Ok(Outcome::Horizontal),
            "1" => Ok(Outcome::Vertical),
            other => Err(CqzeError::InvalidOutcome(other.to_string())),
        }
    }

    /// The other outcome
    pub fn opposite(&self) -> Self {
        match self {
            Outcome::Horizontal => Outcome::Vertical,
            Outcome::Vertical => Outcome::Horizontal,
        }
    }

    /// Basis-state index (0 or 1)
    pub fn index(&self) -> usize {
        match self {
            Outcome::Horizontal => 0,
            Outcome::Vertical => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_valid() {
        assert!(Probability::new(0.0).is_ok());
        assert!(Probability::new(0.5).is_ok());
        assert!(Probability::new(1.0).is_ok());
    }

    #[test]
    fn test_probability_invalid() {
        assert!(Probability::new(-0.1).is_err());
        assert!(Probability::new(1.1).is_err());
    }

    #[test]
    fn test_probability_clamped() {
        let p = Probability::new_clamped(-1e-12).unwrap();
        assert_eq!(p.value(), 0.0);

        let p = Probability::new_clamped(1.0 + 1e-12).unwrap();
        assert_eq!(p.value(), 1.0);

        assert!(Probability::new_clamped(-0.1).is_err());
        assert!(Probability::new_clamped(1.1).is_err());
    }

    #[test]
    fn test_probability_complement() {
        let p = Probability::new(0.3).unwrap();
        assert!((p.complement() - 0.7).abs() < 1e-10);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Horizontal.label(), "0");
        assert_eq!(Outcome::Vertical.label(), "1");
        assert_eq!(Outcome::from_label("0").unwrap(), Outcome::Horizontal);
        assert_eq!(Outcome::from_label("1").unwrap(), Outcome::Vertical);
        assert!(Outcome::from_label("2").is_err());
    }

    #[test]
    fn test_outcome_opposite() {
        assert_eq!(Outcome::Horizontal.opposite(), Outcome::Vertical);
        assert_eq!(Outcome::Vertical.opposite(), Outcome::Horizontal);
        assert_eq!(Outcome::Horizontal.index(), 0);
        assert_eq!(Outcome::Vertical.index(), 1);
    }
}
