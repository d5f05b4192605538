//! Flattened, queryable view over a sector/vertical catalog.

use std::collections::HashMap;

use prospector_core::{IndustrySector, IndustryVertical, OpportunityTier, SectorSummary};

/// Read-only index built once from a catalog.
///
/// Holds the sectors as given, a flat list of every vertical in catalog
/// order, and an id lookup into that list.
#[derive(Debug, Clone)]
pub struct IndustryTaxonomyIndex {
    sectors: Vec<IndustrySector>,
    verticals: Vec<IndustryVertical>,
    by_id: HashMap<String, usize>,
}

impl IndustryTaxonomyIndex {
    #[must_use]
    pub fn new(mut sectors: Vec<IndustrySector>) -> Self {
        let mut verticals = Vec::new();
        let mut by_id = HashMap::new();

        for sector in &mut sectors {
            for vertical in &mut sector.verticals {
                if vertical.sector.trim().is_empty() {
                    vertical.sector.clone_from(&sector.name);
                }
                if by_id.contains_key(&vertical.id) {
                    tracing::warn!(
                        vertical = %vertical.id,
                        sector = %sector.id,
                        "duplicate vertical id in catalog; keeping the first"
                    );
                    continue;
                }
                by_id.insert(vertical.id.clone(), verticals.len());
                verticals.push(vertical.clone());
            }
        }

        Self {
            sectors,
            verticals,
            by_id,
        }
    }

    #[must_use]
    pub fn sectors(&self) -> &[IndustrySector] {
        &self.sectors
    }

    #[must_use]
    pub fn verticals(&self) -> &[IndustryVertical] {
        &self.verticals
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&IndustryVertical> {
        self.by_id.get(id).map(|&i| &self.verticals[i])
    }

    /// Case-insensitive substring search over vertical name, sector name,
    /// keywords, and example entities. Results keep catalog order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&IndustryVertical> {
        let needle = query.trim().to_lowercase();
        self.verticals
            .iter()
            .filter(|v| {
                contains_ci(&v.name, &needle)
                    || contains_ci(&v.sector, &needle)
                    || v.keywords.iter().any(|k| contains_ci(k, &needle))
                    || v.example_entities.iter().any(|e| contains_ci(e, &needle))
            })
            .collect()
    }

    /// Verticals whose names do not overlap any tracked industry name.
    ///
    /// Overlap is substring containment in either direction, ignoring case,
    /// so a tracked "Healthcare" hides "Healthcare IT" and a tracked
    /// "Healthcare IT" hides a vertical named "Healthcare". Short tracked names
    /// can hide unrelated verticals ("AI" matches "Retail"); kept as-is for
    /// compatibility with existing tracked lists. Blank tracked names are ignored.
    #[must_use]
    pub fn untapped<S: AsRef<str>>(&self, tracked_names: &[S]) -> Vec<&IndustryVertical> {
        let tracked: Vec<String> = tracked_names
            .iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        self.verticals
            .iter()
            .filter(|v| {
                let name = v.name.to_lowercase();
                !tracked
                    .iter()
                    .any(|t| t.contains(name.as_str()) || name.contains(t.as_str()))
            })
            .collect()
    }

    /// Vertical and example-entity counts per sector.
    #[must_use]
    pub fn sector_summary(&self) -> Vec<SectorSummary> {
        self.sectors
            .iter()
            .map(|sector| SectorSummary {
                id: sector.id.clone(),
                name: sector.name.clone(),
                icon: sector.icon.clone(),
                vertical_count: sector.verticals.len(),
                company_count: sector
                    .verticals
                    .iter()
                    .map(|v| v.example_entities.len())
                    .sum(),
            })
            .collect()
    }

    #[must_use]
    pub fn by_tier(&self, tier: OpportunityTier) -> Vec<&IndustryVertical> {
        self.verticals
            .iter()
            .filter(|v| v.opportunity_tier == tier)
            .collect()
    }
}

/// `needle` must already be lowercase.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_catalog;

    fn vertical(id: &str, name: &str, keywords: &[&str], examples: &[&str]) -> IndustryVertical {
        IndustryVertical {
            id: id.to_string(),
            name: name.to_string(),
            sector: String::new(),
            keywords: keywords.iter().map(ToString::to_string).collect(),
            example_entities: examples.iter().map(ToString::to_string).collect(),
            opportunity_tier: OpportunityTier::Medium,
        }
    }

    fn fixture() -> IndustryTaxonomyIndex {
        IndustryTaxonomyIndex::new(vec![
            IndustrySector {
                id: "health".to_string(),
                name: "Health".to_string(),
                icon: "heart".to_string(),
                verticals: vec![
                    vertical("hc", "Healthcare", &["hospital"], &["Piedmont", "Emory"]),
                    vertical("hcit", "Healthcare IT", &["ehr"], &["Epic"]),
                ],
            },
            IndustrySector {
                id: "food".to_string(),
                name: "Food & Beverage".to_string(),
                icon: "utensils".to_string(),
                verticals: vec![vertical(
                    "quick",
                    "Restaurants",
                    &["QSR", "drive-thru"],
                    &["Zaxby's"],
                )],
            },
            IndustrySector {
                id: "tech".to_string(),
                name: "Technology".to_string(),
                icon: "cpu".to_string(),
                verticals: vec![vertical("cyber", "Cybersecurity", &["infosec"], &[])],
            },
        ])
    }

    fn ids(verticals: &[&IndustryVertical]) -> Vec<String> {
        verticals.iter().map(|v| v.id.clone()).collect()
    }

    #[test]
    fn flattens_in_catalog_order_and_fills_sector() {
        let index = fixture();
        let all: Vec<&str> = index.verticals().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(all, vec!["hc", "hcit", "quick", "cyber"]);
        assert_eq!(index.get("quick").map(|v| v.sector.as_str()), Some("Food & Beverage"));
        assert!(index.get("missing").is_none());
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let mut catalog = fixture().sectors().to_vec();
        catalog[2]
            .verticals
            .push(vertical("hc", "Shadow Healthcare", &[], &[]));
        let index = IndustryTaxonomyIndex::new(catalog);
        assert_eq!(index.verticals().len(), 4);
        assert_eq!(index.get("hc").map(|v| v.name.as_str()), Some("Healthcare"));
    }

    #[test]
    fn search_matches_keywords_not_only_names() {
        let index = fixture();
        assert_eq!(ids(&index.search("qsr")), vec!["quick"]);
    }

    #[test]
    fn search_matches_sector_and_examples_case_insensitively() {
        let index = fixture();
        assert_eq!(ids(&index.search("FOOD")), vec!["quick"]);
        assert_eq!(ids(&index.search("emory")), vec!["hc"]);
        assert_eq!(ids(&index.search("health")), vec!["hc", "hcit"]);
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(fixture().search("aerospace").is_empty());
    }

    #[test]
    fn untapped_containment_is_bidirectional() {
        let index = fixture();
        let untapped = ids(&index.untapped(&["Healthcare IT"]));
        assert!(!untapped.contains(&"hcit".to_string()));
        assert!(!untapped.contains(&"hc".to_string()));
        assert!(untapped.contains(&"cyber".to_string()));

        let untapped = ids(&index.untapped(&["healthcare"]));
        assert_eq!(untapped, vec!["quick", "cyber"]);
    }

    #[test]
    fn untapped_with_nothing_tracked_returns_everything() {
        let index = fixture();
        let none: [&str; 0] = [];
        assert_eq!(index.untapped(&none).len(), 4);
        assert_eq!(index.untapped(&["  "]).len(), 4);
    }

    #[test]
    fn short_tracked_names_hide_broadly() {
        // "ur" appears inside "Restaurants" and "Cybersecurity".
        let index = fixture();
        assert_eq!(ids(&index.untapped(&["ur"])), vec!["hc", "hcit"]);
    }

    #[test]
    fn sector_summary_counts_verticals_and_examples() {
        let summary = fixture().sector_summary();
        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].id, "health");
        assert_eq!(summary[0].vertical_count, 2);
        assert_eq!(summary[0].company_count, 3);
        assert_eq!(summary[2].company_count, 0);
    }

    #[test]
    fn by_tier_filters() {
        let index = IndustryTaxonomyIndex::new(builtin_catalog());
        let high = index.by_tier(OpportunityTier::High);
        assert!(!high.is_empty());
        assert!(high.iter().all(|v| v.opportunity_tier == OpportunityTier::High));
    }

    #[test]
    fn builtin_catalog_queries() {
        let index = IndustryTaxonomyIndex::new(builtin_catalog());
        assert!(ids(&index.search("qsr")).contains(&"fast-casual-qsr".to_string()));

        let untapped = ids(&index.untapped(&["Healthcare IT"]));
        assert!(!untapped.contains(&"healthcare-it".to_string()));
        assert!(untapped.contains(&"cybersecurity".to_string()));
    }
}
