use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityTier {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for OpportunityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpportunityTier::High => write!(f, "high"),
            OpportunityTier::Medium => write!(f, "medium"),
            OpportunityTier::Low => write!(f, "low"),
        }
    }
}

/// A narrow industry category belonging to one sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryVertical {
    pub id: String,
    pub name: String,
    /// Display name of the owning sector. Filled from the enclosing sector when
    /// loaded from YAML.
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub example_entities: Vec<String>,
    pub opportunity_tier: OpportunityTier,
}

/// A broad grouping of verticals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustrySector {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub verticals: Vec<IndustryVertical>,
}

/// Per-sector counts for catalog browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectorSummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub vertical_count: usize,
    pub company_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct TaxonomyFile {
    pub sectors: Vec<IndustrySector>,
}

/// Load and validate a sector/vertical catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_taxonomy(path: &Path) -> Result<Vec<IndustrySector>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TaxonomyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_taxonomy(&content)
}

/// Parse and validate a catalog from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML cannot be parsed or fails validation.
pub fn parse_taxonomy(yaml: &str) -> Result<Vec<IndustrySector>, ConfigError> {
    let mut file: TaxonomyFile = serde_yaml::from_str(yaml)?;

    for sector in &mut file.sectors {
        for vertical in &mut sector.verticals {
            if vertical.sector.trim().is_empty() {
                vertical.sector.clone_from(&sector.name);
            }
        }
    }

    validate_taxonomy(&file.sectors)?;
    Ok(file.sectors)
}

fn validate_taxonomy(sectors: &[IndustrySector]) -> Result<(), ConfigError> {
    let mut seen_sectors = HashSet::new();
    let mut seen_verticals = HashSet::new();

    for sector in sectors {
        if sector.id.trim().is_empty() || sector.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "sector id and name must be non-empty".to_string(),
            ));
        }
        if !seen_sectors.insert(sector.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate sector id: '{}'",
                sector.id
            )));
        }

        for vertical in &sector.verticals {
            if vertical.id.trim().is_empty() || vertical.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "sector '{}' has a vertical with an empty id or name",
                    sector.id
                )));
            }
            if !seen_verticals.insert(vertical.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate vertical id: '{}' (in sector '{}')",
                    vertical.id, sector.id
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "taxonomy_test.rs"]
mod tests;
