//! Prospect records and their derived geographic scope.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale::Location;

/// Geographic scope of a prospect relative to the viewing user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Local,
    National,
    International,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Local, Scope::National, Scope::International];
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Local => write!(f, "local"),
            Scope::National => write!(f, "national"),
            Scope::International => write!(f, "international"),
        }
    }
}

impl std::str::FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Scope::Local),
            "national" => Ok(Scope::National),
            "international" => Ok(Scope::International),
            other => Err(format!(
                "unknown scope '{other}'; expected local, national, or international"
            )),
        }
    }
}

/// A business entity surfaced as a sales prospect.
///
/// Deliberately has no `scope` field: scope depends on the viewer's radius
/// setting and is recomputed on every read. A `scope` key in upstream JSON is
/// dropped on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProspectRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub industry_id: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Vertical id of the expansion that produced this record; `None` for core records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_vertical: Option<String>,
}

impl ProspectRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, industry_id: impl Into<String>, location: Location) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            industry_id: industry_id.into(),
            location,
            website: None,
            description: None,
            source_vertical: None,
        }
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.source_vertical.is_some()
    }
}

/// A prospect paired with the scope computed for the current viewer.
///
/// This is a view, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedProspect {
    #[serde(flatten)]
    pub record: ProspectRecord,
    pub scope: Scope,
}
