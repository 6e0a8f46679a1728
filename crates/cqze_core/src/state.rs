//! Photon polarization state
//!
//! The protocol never entangles the photon with anything else, so the
//! full state is a single qubit: two complex amplitudes over the
//! horizontal/vertical basis.

use crate::constants::tolerance;
use crate::error::{CqzeError, CqzeResult};
use crate::gate::Gate;
use crate::types::Probability;
use num_complex::Complex64;
use std::fmt;

/// Two-amplitude polarization state |psi> = h|H> + v|V>
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotonState {
    h: Complex64,
    v: Complex64,
}

impl PhotonState {
    /// Create a state from raw amplitudes (no normalization check)
    pub fn new(h: Complex64, v: Complex64) -> Self {
        Self { h, v }
    }

    /// |H>: the protocol's initial state
    pub fn horizontal() -> Self {
        Self {
            h: Complex64::new(1.0, 0.0),
            v: Complex64::new(0.0, 0.0),
        }
    }

    /// |V>
    pub fn vertical() -> Self {
        Self {
            h: Complex64::new(0.0, 0.0),
            v: Complex64::new(1.0, 0.0),
        }
    }

    /// Horizontal amplitude
    #[inline]
    pub fn amp_h(&self) -> Complex64 {
        self.h
    }

    /// Vertical amplitude
    #[inline]
    pub fn amp_v(&self) -> Complex64 {
        self.v
    }

    /// Squared norm |h|^2 + |v|^2
    pub fn norm_sqr(&self) -> f64 {
        self.h.norm_sqr() + self.v.norm_sqr()
    }

    /// Check normalization within the given tolerance
    pub fn is_normalized(&self, tol: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() <= tol
    }

    /// Normalization check that reports the deviation on failure
    pub fn check_normalized(&self, tol: f64) -> CqzeResult<()> {
        let norm_sqr = self.norm_sqr();
        if (norm_sqr - 1.0).abs() > tol {
            return Err(CqzeError::StateNotNormalized {
                norm_sqr,
                tolerance: tol,
            });
        }
        Ok(())
    }

    /// Probability of detecting horizontal polarization
    pub fn p_horizontal(&self) -> CqzeResult<Probability> {
        Probability::new_clamped(self.h.norm_sqr())
    }

    /// Probability of detecting vertical polarization
    pub fn p_vertical(&self) -> CqzeResult<Probability> {
        Probability::new_clamped(self.v.norm_sqr())
    }

    /// Both basis probabilities as raw values (p_h, p_v)
    pub fn probabilities(&self) -> (f64, f64) {
        (self.h.norm_sqr(), self.v.norm_sqr())
    }

    /// Apply a single gate, returning the evolved state.
    ///
    /// Ry(theta) acts as h' = cos(theta/2) h - sin(theta/2) v,
    /// v' = sin(theta/2) h + cos(theta/2) v; Flip exchanges the amplitudes.
    /// Rotation angles must be finite.
    pub fn apply(&self, gate: &Gate) -> CqzeResult<Self> {
        match gate {
            Gate::Ry(theta) => {
                if !theta.is_finite() {
                    return Err(CqzeError::InvalidAngle(*theta));
                }
                let half = theta / 2.0;
                let (sin, cos) = (half.sin(), half.cos());
                Ok(Self {
                    h: self.h * cos - self.v * sin,
                    v: self.h * sin + self.v * cos,
                })
            }
            Gate::Flip => Ok(Self {
                h: self.v,
                v: self.h,
            }),
        }
    }
}

impl Default for PhotonState {
    fn default() -> Self {
        Self::horizontal()
    }
}

impl fmt::Display for PhotonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt_amp = |c: &Complex64| {
            if c.im.abs() < tolerance::AMPLITUDE {
                format!("{:.6}", c.re)
            } else {
                format!("{:.6}{:+.6}i", c.re, c.im)
            }
        };
        write!(f, "{}|H> + {}|V>", fmt_amp(&self.h), fmt_amp(&self.v))
    }
}

// ============================================================================
// Tests
// ============================================================================
