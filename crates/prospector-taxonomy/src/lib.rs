//! Industry sector/vertical catalog and the queries run against it.

pub mod builtin;
pub mod index;

pub use builtin::builtin_catalog;
pub use index::IndustryTaxonomyIndex;
