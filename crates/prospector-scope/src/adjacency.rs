//! Neighboring-region lookup used by the scope classifier.

use std::collections::{BTreeSet, HashMap};

/// Land borders between US states (and DC). Every entry is mirrored by its
/// neighbor's entry.
pub(crate) const US_NEIGHBORS: &[(&str, &[&str])] = &[
    ("AL", &["FL", "GA", "MS", "TN"]),
    ("AK", &[]),
    ("AZ", &["CA", "CO", "NM", "NV", "UT"]),
    ("AR", &["LA", "MO", "MS", "OK", "TN", "TX"]),
    ("CA", &["AZ", "NV", "OR"]),
    ("CO", &["AZ", "KS", "NE", "NM", "OK", "UT", "WY"]),
    ("CT", &["MA", "NY", "RI"]),
    ("DE", &["MD", "NJ", "PA"]),
    ("DC", &["MD", "VA"]),
    ("FL", &["AL", "GA"]),
    ("GA", &["AL", "FL", "NC", "SC", "TN"]),
    ("HI", &[]),
    ("ID", &["MT", "NV", "OR", "UT", "WA", "WY"]),
    ("IL", &["IA", "IN", "KY", "MO", "WI"]),
    ("IN", &["IL", "KY", "MI", "OH"]),
    ("IA", &["IL", "MN", "MO", "NE", "SD", "WI"]),
    ("KS", &["CO", "MO", "NE", "OK"]),
    ("KY", &["IL", "IN", "MO", "OH", "TN", "VA", "WV"]),
    ("LA", &["AR", "MS", "TX"]),
    ("ME", &["NH"]),
    ("MD", &["DC", "DE", "PA", "VA", "WV"]),
    ("MA", &["CT", "NH", "NY", "RI", "VT"]),
    ("MI", &["IN", "OH", "WI"]),
    ("MN", &["IA", "ND", "SD", "WI"]),
    ("MS", &["AL", "AR", "LA", "TN"]),
    ("MO", &["AR", "IA", "IL", "KS", "KY", "NE", "OK", "TN"]),
    ("MT", &["ID", "ND", "SD", "WY"]),
    ("NE", &["CO", "IA", "KS", "MO", "SD", "WY"]),
    ("NV", &["AZ", "CA", "ID", "OR", "UT"]),
    ("NH", &["MA", "ME", "VT"]),
    ("NJ", &["DE", "NY", "PA"]),
    ("NM", &["AZ", "CO", "OK", "TX"]),
    ("NY", &["CT", "MA", "NJ", "PA", "VT"]),
    ("NC", &["GA", "SC", "TN", "VA"]),
    ("ND", &["MN", "MT", "SD"]),
    ("OH", &["IN", "KY", "MI", "PA", "WV"]),
    ("OK", &["AR", "CO", "KS", "MO", "NM", "TX"]),
    ("OR", &["CA", "ID", "NV", "WA"]),
    ("PA", &["DE", "MD", "NJ", "NY", "OH", "WV"]),
    ("RI", &["CT", "MA"]),
    ("SC", &["GA", "NC"]),
    ("SD", &["IA", "MN", "MT", "ND", "NE", "WY"]),
    ("TN", &["AL", "AR", "GA", "KY", "MO", "MS", "NC", "VA"]),
    ("TX", &["AR", "LA", "NM", "OK"]),
    ("UT", &["AZ", "CO", "ID", "NV", "WY"]),
    ("VT", &["MA", "NH", "NY"]),
    ("VA", &["DC", "KY", "MD", "NC", "TN", "WV"]),
    ("WA", &["ID", "OR"]),
    ("WV", &["KY", "MD", "OH", "PA", "VA"]),
    ("WI", &["IA", "IL", "MI", "MN"]),
    ("WY", &["CO", "ID", "MT", "NE", "SD", "UT"]),
];

/// Which region codes neighbor each other.
///
/// Lookups are keyed by the first region. Tables built through
/// [`StateAdjacency::from_pairs`] are always symmetric.
#[derive(Debug, Clone, Default)]
pub struct StateAdjacency {
    neighbors: HashMap<String, BTreeSet<String>>,
}

impl StateAdjacency {
    /// Adjacency for the 50 US states plus DC.
    #[must_use]
    pub fn us() -> Self {
        Self::from_pairs(
            US_NEIGHBORS
                .iter()
                .flat_map(|(region, neighbors)| neighbors.iter().map(move |n| (*region, *n))),
        )
    }

    /// Build a table from neighbor pairs, recording each pair in both directions.
    #[must_use]
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut neighbors: HashMap<String, BTreeSet<String>> = HashMap::new();
        for (a, b) in pairs {
            let a = a.as_ref().trim().to_uppercase();
            let b = b.as_ref().trim().to_uppercase();
            if a.is_empty() || b.is_empty() || a == b {
                continue;
            }
            neighbors.entry(a.clone()).or_default().insert(b.clone());
            neighbors.entry(b).or_default().insert(a);
        }
        Self { neighbors }
    }

    /// Neighbors of `region` in sorted order. Unknown regions have none.
    pub fn neighbors(&self, region: &str) -> impl Iterator<Item = &str> {
        self.neighbors
            .get(region)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Whether `other` appears in `region`'s neighbor entry.
    ///
    /// Both arguments must already be normalized codes.
    #[must_use]
    pub fn are_adjacent(&self, region: &str, other: &str) -> bool {
        self.neighbors
            .get(region)
            .is_some_and(|set| set.contains(other))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_table_is_symmetric_as_written() {
        let lookup: HashMap<&str, &[&str]> = US_NEIGHBORS.iter().copied().collect();
        for (region, neighbors) in US_NEIGHBORS {
            for neighbor in *neighbors {
                let back = lookup.get(neighbor).copied().unwrap_or_default();
                assert!(
                    back.contains(region),
                    "{region} lists {neighbor} but {neighbor} does not list {region}"
                );
            }
        }
    }

    #[test]
    fn georgia_neighbors() {
        let adj = StateAdjacency::us();
        let ga: Vec<&str> = adj.neighbors("GA").collect();
        assert_eq!(ga, vec!["AL", "FL", "NC", "SC", "TN"]);
        assert!(adj.are_adjacent("GA", "SC"));
        assert!(adj.are_adjacent("SC", "GA"));
        assert!(!adj.are_adjacent("GA", "CA"));
    }

    #[test]
    fn islands_have_no_neighbors() {
        let adj = StateAdjacency::us();
        assert_eq!(adj.neighbors("HI").count(), 0);
        assert_eq!(adj.neighbors("AK").count(), 0);
    }

    #[test]
    fn unknown_region_has_no_neighbors() {
        let adj = StateAdjacency::us();
        assert_eq!(adj.neighbors("ONTARIO").count(), 0);
        assert!(!adj.are_adjacent("ONTARIO", "NY"));
    }

    #[test]
    fn from_pairs_mirrors_entries() {
        let adj = StateAdjacency::from_pairs([("on", "qc"), ("ON", "MB")]);
        assert!(adj.are_adjacent("QC", "ON"));
        assert!(adj.are_adjacent("MB", "ON"));
        assert_eq!(adj.neighbors("ON").collect::<Vec<_>>(), vec!["MB", "QC"]);
        assert_eq!(adj.len(), 3);
    }

    #[test]
    fn from_pairs_skips_self_and_blank_pairs() {
        let adj = StateAdjacency::from_pairs([("GA", "GA"), ("", "SC")]);
        assert!(adj.is_empty());
    }
}
