//! On-demand prospect expansion for unexplored industry verticals.
//!
//! [`ExpansionOrchestrator`] runs at most one expansion at a time against an
//! external [`ProspectGenerator`], merges the generated records into the
//! working set, keeps a ledger of explored verticals, and serves the merged
//! set freshly classified for the current viewer.

pub mod client;
pub mod error;
pub mod generator;
pub mod orchestrator;
pub mod types;

pub use client::HttpGenerator;
pub use error::{ExpansionError, GeneratorError};
pub use generator::ProspectGenerator;
pub use orchestrator::ExpansionOrchestrator;
pub use types::{
    ExpansionOutcome, ExpansionRequest, ExploredVerticalEntry, GenerationLocale,
    GenerationRequest, InFlight,
};
