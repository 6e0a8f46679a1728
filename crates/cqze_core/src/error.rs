//! Error types for CQZE
//!
//! All preconditions are checked synchronously at the call site that
//! violates them; nothing is retried or renormalized internally.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for CQZE
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CqzeError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Cycle count below the protocol minimum
    #[error("Invalid {param} count {value}: must be >= 1")]
    InvalidConfig { param: &'static str, value: usize },

    /// Shot count of zero requested
    #[error("Invalid shot count {0}: must be >= 1")]
    InvalidShotCount(u64),

    /// Probability value out of range [0, 1]
    #[error("Invalid probability {0}: must be in range [0, 1]")]
    InvalidProbability(f64),

    /// Outcome label other than "0" or "1"
    #[error("Invalid outcome label '{0}': must be \"0\" or \"1\"")]
    InvalidOutcome(String),

    /// Non-finite rotation angle
    #[error("Invalid angle {0}: must be finite")]
    InvalidAngle(f64),

    // ========================================================================
    // Defect Signals
    // ========================================================================
    /// State vector norm drifted outside tolerance.
    ///
    /// This indicates a defect in gate arithmetic upstream, not a
    /// recoverable input error.
    #[error("State not normalized: |h|^2 + |v|^2 = {norm_sqr} (tolerance {tolerance})")]
    StateNotNormalized { norm_sqr: f64, tolerance: f64 },

    // ========================================================================
    // Analysis Errors
    // ========================================================================
    /// Ratio requested over counts summing to zero
    #[error("Counts sum to zero: cannot compute an empirical fraction")]
    EmptyCounts,
}

/// Result type alias for CQZE operations
pub type CqzeResult<T> = Result<T, CqzeError>;

// ============================================================================
// Error Helpers
// ============================================================================

impl CqzeError {
    /// Check if error is a validation error (bad caller input)
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            CqzeError::InvalidConfig { .. }
                | CqzeError::InvalidShotCount(_)
                | CqzeError::InvalidProbability(_)
                | CqzeError::InvalidOutcome(_)
                | CqzeError::InvalidAngle(_)
        )
    }

    /// Check if error signals an implementation defect rather than bad input
    pub fn is_defect(&self) -> bool {
        matches!(self, CqzeError::StateNotNormalized { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
