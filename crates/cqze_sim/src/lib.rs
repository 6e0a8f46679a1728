//! # cqze_sim
//!
//! Execution layer for the CQZE counterfactual communication simulator:
//! state evolution over gate sequences, Born-rule measurement sampling
//! with an injectable random source, trajectory analysis, and an
//! end-to-end protocol runner.
//!
//! ## Quick Start
//!
//! ```
//! use cqze_core::prelude::*;
//! use cqze_sim::prelude::*;
//!
//! let config = ProtocolConfig::new(4, 4, Decision::Pass)?;
//! let result = ProtocolRunner::with_seed(42).execute(&config, 1000)?;
//!
//! assert_eq!(result.total_counts(), 1000);
//! assert_eq!(result.most_frequent(), Some("0"));
//! # Ok::<(), CqzeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod runner;
pub mod sampler;
pub mod simulator;
pub mod trajectory;

// Re-export main types at crate root
pub use analysis::Analysis;
pub use runner::{ProtocolRunner, RunMetadata, RunResult};
pub use sampler::Sampler;
pub use simulator::Simulator;
pub use trajectory::Trajectory;

/// Prelude module for convenient imports
pub mod prelude {
    //! Common imports: `use cqze_sim::prelude::*;`

    pub use crate::analysis::Analysis;
    pub use crate::runner::{ProtocolRunner, RunMetadata, RunResult};
    pub use crate::sampler::Sampler;
    pub use crate::simulator::Simulator;
    pub use crate::trajectory::Trajectory;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================
