//! Constants for CQZE
//!
//! Numerical tolerances and protocol defaults. Protocol values follow the
//! CQZE reference parameters (Salih et al., PRL 110, 170502).

// ============================================================================
// Tolerances
// ============================================================================

pub mod tolerance {
    //! Floating-point tolerances for state validation

    /// Allowed deviation of |h|^2 + |v|^2 from 1.0
    pub const NORM: f64 = 1e-9;

    /// Amplitude magnitudes below this are treated as zero
    pub const AMPLITUDE: f64 = 1e-12;
}

// ============================================================================
// Protocol Defaults
// ============================================================================

pub mod protocol {
    //! Default protocol parameters

    use std::f64::consts::PI;

    /// Minimum cycle count for either loop
    pub const MIN_CYCLES: usize = 1;

    /// Default outer cycle count (M)
    pub const DEFAULT_OUTER_CYCLES: usize = 4;

    /// Default inner cycle count (N)
    pub const DEFAULT_INNER_CYCLES: usize = 4;

    /// Default number of measurement shots
    pub const DEFAULT_SHOTS: u64 = 1000;

    /// Closed-form asymptotic leakage bound: (pi / (16*M*N))^2
    #[inline]
    pub fn leakage_bound(outer_cycles: usize, inner_cycles: usize) -> f64 {
        let denom = 16.0 * outer_cycles as f64 * inner_cycles as f64;
        (PI / denom).powi(2)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_leakage_bound_reference_value() {
        // M = N = 4: (pi/256)^2 ~= 1.506e-4
        let l = protocol::leakage_bound(4, 4);
        assert_relative_eq!(l, 1.5059821e-4, epsilon = 1e-9);
    }

    #[test]
    fn test_leakage_bound_monotone() {
        assert!(protocol::leakage_bound(2, 4) > protocol::leakage_bound(4, 4));
        assert!(protocol::leakage_bound(4, 4) > protocol::leakage_bound(8, 4));
        assert!(protocol::leakage_bound(4, 4) > protocol::leakage_bound(4, 8));
    }

    #[test]
    fn test_tolerances_ordered() {
        assert!(tolerance::AMPLITUDE < tolerance::NORM);
    }
}
