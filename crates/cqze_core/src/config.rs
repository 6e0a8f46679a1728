//! Protocol configuration
//!
//! Cycle counts, the transmitted bit, and the derived per-cycle angles.

use crate::constants::protocol;
use crate::error::{CqzeError, CqzeResult};
use crate::types::{Angle, Outcome};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

// ============================================================================
// Decision
// ============================================================================

/// The remote party's choice for one protocol run: the logical bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Channel left open (logical 0)
    Pass,
    /// Channel blocked by inserting the flip (logical 1)
    Block,
}

impl Decision {
    /// Ideal detector outcome for this decision
    pub fn expected_outcome(&self) -> Outcome {
        match self {
            Decision::Pass => Outcome::Horizontal,
            Decision::Block => Outcome::Vertical,
        }
    }

    /// Logical bit value transmitted by this decision
    pub fn bit(&self) -> u8 {
        match self {
            Decision::Pass => 0,
            Decision::Block => 1,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Pass => write!(f, "pass"),
            Decision::Block => write!(f, "block"),
        }
    }
}

// ============================================================================
// ProtocolConfig
// ============================================================================

/// Validated parameters of one CQZE run
///
/// `outer_cycles` (M) and `inner_cycles` (N) set the Zeno angles
/// theta_M = pi/(4M) and theta_N = pi/(4N). Both counts must be >= 1;
/// the constructor is the only way to build a config, so every instance
/// is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    outer_cycles: usize,
    inner_cycles: usize,
    decision: Decision,
}

impl ProtocolConfig {
    /// Create a new configuration with validation
    pub fn new(outer_cycles: usize, inner_cycles: usize, decision: Decision) -> CqzeResult<Self> {
        if outer_cycles < protocol::MIN_CYCLES {
            return Err(CqzeError::InvalidConfig {
                param: "outer cycle",
                value: outer_cycles,
            });
        }
        if inner_cycles < protocol::MIN_CYCLES {
            return Err(CqzeError::InvalidConfig {
                param: "inner cycle",
                value: inner_cycles,
            });
        }
        Ok(Self {
            outer_cycles,
            inner_cycles,
            decision,
        })
    }

    /// Outer cycle count (M)
    #[inline]
    pub fn outer_cycles(&self) -> usize {
        self.outer_cycles
    }

    /// Inner cycle count (N)
    #[inline]
    pub fn inner_cycles(&self) -> usize {
        self.inner_cycles
    }

    /// The transmitted decision
    #[inline]
    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// Outer Zeno angle: pi / (4 * M)
    pub fn theta_outer(&self) -> Angle {
        PI / (4.0 * self.outer_cycles as f64)
    }

    /// Inner Zeno angle: pi / (4 * N)
    pub fn theta_inner(&self) -> Angle {
        PI / (4.0 * self.inner_cycles as f64)
    }

    /// Asymptotic leakage probability for these cycle counts
    pub fn leakage_probability(&self) -> f64 {
        protocol::leakage_bound(self.outer_cycles, self.inner_cycles)
    }

    /// Inner cycle index after which the block flip is applied (N / 2, floor)
    pub fn midpoint(&self) -> usize {
        self.inner_cycles / 2
    }

    /// Total number of gates the protocol sequence will contain
    pub fn gate_count(&self) -> usize {
        let flips = if self.decision == Decision::Block { 1 } else { 0 };
        2 * self.outer_cycles + 2 * self.inner_cycles + flips
    }

    /// Same cycle counts, different decision
    pub fn with_decision(&self, decision: Decision) -> Self {
        Self { decision, ..*self }
    }
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            outer_cycles: protocol::DEFAULT_OUTER_CYCLES,
            inner_cycles: protocol::DEFAULT_INNER_CYCLES,
            decision: Decision::Pass,
        }
    }
}

impl fmt::Display for ProtocolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CQZE(M={}, N={}, {})",
            self.outer_cycles, self.inner_cycles, self.decision
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
