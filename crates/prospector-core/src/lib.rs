//! Shared domain types and configuration for prospect discovery.

pub mod app_config;
pub mod config;
pub mod locale;
pub mod prospects;
pub mod taxonomy;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use locale::{Location, RadiusBand, UserLocale};
pub use prospects::{ClassifiedProspect, ProspectRecord, Scope};
pub use taxonomy::{
    load_taxonomy, IndustrySector, IndustryVertical, OpportunityTier, SectorSummary, TaxonomyFile,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read taxonomy file {path}: {source}")]
    TaxonomyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse taxonomy file: {0}")]
    TaxonomyFileParse(#[from] serde_yaml::Error),

    #[error("taxonomy validation failed: {0}")]
    Validation(String),
}
