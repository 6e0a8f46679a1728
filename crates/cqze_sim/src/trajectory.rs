//! Trajectory of intermediate states

use cqze_core::PhotonState;
use std::fmt;

/// Ordered snapshots of the state through a gate sequence
///
/// Entry 0 is the initial state; entry k is the state after gate k-1.
/// Read-only once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    states: Vec<PhotonState>,
}

impl Trajectory {
    pub(crate) fn new(states: Vec<PhotonState>) -> Self {
        debug_assert!(!states.is_empty());
        Self { states }
    }

    /// All recorded states in order
    pub fn states(&self) -> &[PhotonState] {
        &self.states
    }

    /// Number of snapshots (gate count + 1)
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// A trajectory always contains at least the initial state
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The initial state
    pub fn initial(&self) -> &PhotonState {
        &self.states[0]
    }

    /// The state after the last gate
    pub fn final_state(&self) -> &PhotonState {
        // new() guarantees at least one entry
        &self.states[self.states.len() - 1]
    }

    /// Snapshot at step `index`, if within bounds
    pub fn get(&self, index: usize) -> Option<&PhotonState> {
        self.states.get(index)
    }

    /// Iterate over the snapshots
    pub fn iter(&self) -> std::slice::Iter<'_, PhotonState> {
        self.states.iter()
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trajectory({} steps, final: {})",
            self.states.len(),
            self.final_state()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
