use chrono::{DateTime, Utc};
use prospector_core::{IndustryVertical, Scope, UserLocale};
use serde::{Deserialize, Serialize};

/// What the user asked to expand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionRequest {
    pub vertical_id: String,
    pub vertical_name: String,
    pub sector_name: String,
    pub scope: Scope,
    /// Example companies passed to the generator as hints. May be empty.
    pub example_entities: Vec<String>,
}

impl ExpansionRequest {
    #[must_use]
    pub fn for_vertical(vertical: &IndustryVertical, scope: Scope) -> Self {
        Self {
            vertical_id: vertical.id.clone(),
            vertical_name: vertical.name.clone(),
            sector_name: vertical.sector.clone(),
            scope,
            example_entities: vertical.example_entities.clone(),
        }
    }
}

/// Ledger row for a vertical that has been expanded at least once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploredVerticalEntry {
    pub vertical_id: String,
    pub vertical_name: String,
    pub sector_name: String,
    pub times_expanded: u32,
    pub last_expanded_at: DateTime<Utc>,
}

/// The expansion currently running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InFlight {
    pub vertical_id: String,
    pub scope: Scope,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionOutcome {
    /// The generator returned `added` records, now merged into the working set.
    Completed { vertical_id: String, added: usize },
    /// Another expansion was already running; nothing was done.
    Ignored { in_flight: InFlight },
}

/// Where the viewer is, so the generator can interpret `local`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationLocale {
    pub country: String,
    pub region: String,
    pub city: String,
}

impl From<&UserLocale> for GenerationLocale {
    fn from(locale: &UserLocale) -> Self {
        Self {
            country: locale.country.clone(),
            region: locale.region.clone(),
            city: locale.city.clone(),
        }
    }
}

/// Body sent to the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub vertical_id: String,
    pub vertical_name: String,
    pub sector: String,
    pub scope: Scope,
    pub hints: Vec<String>,
    pub locale: GenerationLocale,
}

impl GenerationRequest {
    #[must_use]
    pub fn new(request: &ExpansionRequest, locale: &UserLocale) -> Self {
        Self {
            vertical_id: request.vertical_id.clone(),
            vertical_name: request.vertical_name.clone(),
            sector: request.sector_name.clone(),
            scope: request.scope,
            hints: request.example_entities.clone(),
            locale: GenerationLocale::from(locale),
        }
    }
}
