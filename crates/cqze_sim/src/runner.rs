//! End-to-end protocol execution
//!
//! Ties the pieces together for one run: build the gate sequence, evolve
//! the state, sample the detector, and package counts with metadata.

use cqze_core::{Counts, CqzeResult, Decision, GateSequence, PhotonState, ProtocolConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analysis::Analysis;
use crate::sampler::Sampler;
use crate::simulator::Simulator;
use crate::trajectory::Trajectory;

// ============================================================================
// ProtocolRunner
// ============================================================================

/// Executes complete CQZE runs
///
/// Unseeded runners draw entropy from the OS; seeded runners reproduce
/// counts exactly, run after run.
#[derive(Debug, Clone)]
pub struct ProtocolRunner {
    name: String,
    seed: Option<u64>,
    simulator: Simulator,
}

impl ProtocolRunner {
    /// Create a runner drawing fresh entropy per run
    pub fn new() -> Self {
        Self {
            name: "cqze_runner".to_string(),
            seed: None,
            simulator: Simulator::new(),
        }
    }

    /// Create a runner with a fixed RNG seed for reproducible sampling
    pub fn with_seed(seed: u64) -> Self {
        Self {
            name: "cqze_runner".to_string(),
            seed: Some(seed),
            simulator: Simulator::new(),
        }
    }

    /// Runner name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured seed, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Execute one full protocol run: sequence, trajectory, sampled counts.
    pub fn execute(&self, config: &ProtocolConfig, shots: u64) -> CqzeResult<RunResult> {
        let sequence = GateSequence::for_protocol(config);
        let trajectory = self
            .simulator
            .evolve(&PhotonState::horizontal(), sequence.gates())?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let counts = Sampler::new().sample(trajectory.final_state(), shots, &mut rng)?;

        let metadata = RunMetadata {
            runner: self.name.clone(),
            seed: self.seed,
            decision: config.decision(),
            theoretical_leakage: Analysis::theoretical_leakage(config),
        };

        Ok(RunResult {
            counts,
            shots,
            trajectory,
            metadata,
        })
    }
}

impl Default for ProtocolRunner {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// RunResult
// ============================================================================

/// Serializable run context attached to a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Runner that produced the result
    pub runner: String,
    /// RNG seed used, if fixed
    pub seed: Option<u64>,
    /// Decision transmitted during the run
    pub decision: Decision,
    /// Closed-form leakage bound for the run's cycle counts
    pub theoretical_leakage: f64,
}

/// Outcome of one protocol run
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Sampled detector counts
    pub counts: Counts,
    /// Shots requested (counts sum to this exactly)
    pub shots: u64,
    /// Full state trajectory of the run
    pub trajectory: Trajectory,
    /// Run context
    pub metadata: RunMetadata,
}

impl RunResult {
    /// Sum over all recorded counts
    pub fn total_counts(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Empirical probability of an outcome label
    pub fn probability(&self, label: &str) -> f64 {
        let total = self.total_counts();
        if total == 0 {
            return 0.0;
        }
        self.counts.get(label).copied().unwrap_or(0) as f64 / total as f64
    }

    /// Empirical probability of the outcome the decision predicts
    pub fn detection_rate(&self) -> f64 {
        self.probability(self.metadata.decision.expected_outcome().label())
    }

    /// Fraction of shots on the wrong detector for this run's decision
    pub fn empirical_leakage(&self) -> CqzeResult<f64> {
        Analysis::empirical_leakage(&self.counts, self.metadata.decision.expected_outcome())
    }

    /// Most frequent outcome label
    pub fn most_frequent(&self) -> Option<&str> {
        self.counts
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(label, _)| label.as_str())
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RunResult({}, {} shots, detection rate {:.4})",
            self.metadata.decision,
            self.shots,
            self.detection_rate()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
