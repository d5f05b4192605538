//! Local / national / international classification.

use prospector_core::{ClassifiedProspect, Location, ProspectRecord, Scope, UserLocale};

use crate::adjacency::StateAdjacency;
use crate::region::RegionNormalizer;

/// Spellings that all mean the United States.
const US_ALIASES: &[&str] = &[
    "US",
    "USA",
    "U.S.",
    "U.S.A.",
    "UNITED STATES",
    "UNITED STATES OF AMERICA",
];

/// Classifies prospect locations relative to a viewing user.
///
/// Holds only immutable lookup data, so a single instance can be shared by
/// every caller. Results are never cached: the same record can be local for
/// one radius and national for another.
#[derive(Debug, Clone)]
pub struct ScopeClassifier {
    home_country: String,
    normalizer: RegionNormalizer,
    adjacency: StateAdjacency,
}

impl ScopeClassifier {
    /// Build a classifier for `home_country` with explicit lookup tables.
    #[must_use]
    pub fn new(home_country: &str, normalizer: RegionNormalizer, adjacency: StateAdjacency) -> Self {
        Self {
            home_country: canonical_country(home_country),
            normalizer,
            adjacency,
        }
    }

    /// US-based classifier using the built-in state tables.
    #[must_use]
    pub fn us() -> Self {
        Self::new("US", RegionNormalizer::us(), StateAdjacency::us())
    }

    #[must_use]
    pub fn home_country(&self) -> &str {
        &self.home_country
    }

    /// Classify a location for the given viewer.
    #[must_use]
    pub fn classify(&self, location: &Location, locale: &UserLocale) -> Scope {
        let user_country = canonical_country(&locale.country);
        let record_country = canonical_country(&location.country);
        let user_domestic = self.is_domestic(&user_country);
        let record_domestic = self.is_domestic(&record_country);

        match (user_domestic, record_domestic) {
            (true, false) => Scope::International,
            (true, true) => {
                let user_region = self.normalizer.normalize(&locale.region);
                let record_region = self.normalizer.normalize(&location.region);
                let neighboring = locale.radius_band().includes_neighbors()
                    && self.adjacency.are_adjacent(&user_region, &record_region);
                if same_region(&user_region, &record_region) || neighboring {
                    Scope::Local
                } else {
                    Scope::National
                }
            }
            (false, false) if user_country == record_country => {
                let user_region = self.normalizer.normalize(&locale.region);
                let record_region = self.normalizer.normalize(&location.region);
                if same_region(&user_region, &record_region) {
                    Scope::Local
                } else {
                    Scope::National
                }
            }
            _ => Scope::International,
        }
    }

    #[must_use]
    pub fn classify_record(&self, record: &ProspectRecord, locale: &UserLocale) -> Scope {
        self.classify(&record.location, locale)
    }

    /// Classify every record, producing fresh views for presentation.
    pub fn classify_all<'a, I>(&self, records: I, locale: &UserLocale) -> Vec<ClassifiedProspect>
    where
        I: IntoIterator<Item = &'a ProspectRecord>,
    {
        records
            .into_iter()
            .map(|record| ClassifiedProspect {
                scope: self.classify_record(record, locale),
                record: record.clone(),
            })
            .collect()
    }

    /// An empty country stands for the home country.
    fn is_domestic(&self, canonical: &str) -> bool {
        canonical.is_empty() || canonical == self.home_country
    }
}

impl Default for ScopeClassifier {
    fn default() -> Self {
        Self::us()
    }
}

/// Uppercased, trimmed country with US spellings folded to `"US"`.
fn canonical_country(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    if US_ALIASES.contains(&upper.as_str()) {
        "US".to_string()
    } else {
        upper
    }
}

/// Empty regions never match, otherwise two records with no region at all
/// would be local to a user with no region.
fn same_region(a: &str, b: &str) -> bool {
    !a.is_empty() && a == b
}
