//! # cqze_core
//!
//! Core types for the counterfactual quantum communication simulator:
//! the chained quantum Zeno effect (CQZE) protocol of Salih et al.
//!
//! A sender holds a single photon; a receiver either blocks or passes a
//! shared channel. Nested interferometer cycles keep the photon out of
//! the channel while its polarization records the receiver's choice.
//! This crate models the protocol as a validated configuration, a gate
//! sequence over two rotation angles, and a two-amplitude state.
//!
//! ## Quick Start
//!
//! ```
//! use cqze_core::prelude::*;
//!
//! let config = ProtocolConfig::new(4, 4, Decision::Block)?;
//! let sequence = GateSequence::for_protocol(&config);
//!
//! assert_eq!(sequence.len(), config.gate_count());
//! assert_eq!(sequence.flip_count(), 1);
//! # Ok::<(), CqzeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod constants;
pub mod error;
pub mod gate;
pub mod sequence;
pub mod state;
pub mod types;

// Re-export main types at crate root
pub use config::{Decision, ProtocolConfig};
pub use error::{CqzeError, CqzeResult};
pub use gate::Gate;
pub use sequence::{GateSequence, SequenceBuilder};
pub use state::PhotonState;
pub use types::{Angle, Counts, Outcome, Probability};

/// Prelude module for convenient imports
pub mod prelude {
    //! Common imports: `use cqze_core::prelude::*;`

    pub use crate::config::{Decision, ProtocolConfig};
    pub use crate::error::{CqzeError, CqzeResult};
    pub use crate::gate::Gate;
    pub use crate::sequence::{GateSequence, SequenceBuilder};
    pub use crate::state::PhotonState;
    pub use crate::types::{Angle, Counts, Outcome, Probability};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================
