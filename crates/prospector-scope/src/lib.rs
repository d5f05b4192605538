//! Geographic scope classification for prospect records.
//!
//! Labels each record `local`, `national`, or `international` relative to the
//! viewing user's declared location and local-radius setting. Everything here
//! is pure: classification is recomputed on every call and never cached on
//! the record.

pub mod adjacency;
pub mod classifier;
pub mod region;
pub mod summary;

pub use adjacency::StateAdjacency;
pub use classifier::ScopeClassifier;
pub use region::RegionNormalizer;
pub use summary::{filter_by_scope, group_by_scope, ScopeSummary};
