//! Free-text region name to two-letter code normalization.

use std::collections::HashMap;

/// US state and District of Columbia names, lowercase, with their postal codes.
pub(crate) const US_REGION_NAMES: &[(&str, &str)] = &[
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("district of columbia", "DC"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
];

/// Converts region text ("Georgia", "ga", " GA ") into a canonical code.
#[derive(Debug, Clone)]
pub struct RegionNormalizer {
    names: HashMap<String, String>,
}

impl RegionNormalizer {
    /// Normalizer covering the 50 US states plus DC.
    #[must_use]
    pub fn us() -> Self {
        Self::from_names(US_REGION_NAMES.iter().copied())
    }

    /// Build a normalizer from `(full name, code)` pairs. Names are matched
    /// case-insensitively.
    #[must_use]
    pub fn from_names<I, N, C>(names: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|(name, code)| {
                (
                    name.as_ref().trim().to_lowercase(),
                    code.as_ref().trim().to_uppercase(),
                )
            })
            .collect();
        Self { names }
    }

    /// Normalize `raw` to a region code.
    ///
    /// Two-letter input is uppercased as-is. Known full names map to their
    /// code. Anything else comes back uppercased and trimmed; such values will
    /// not match any adjacency entry, which is the intended degradation.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if is_two_letter_code(trimmed) {
            return trimmed.to_uppercase();
        }

        if let Some(code) = self.names.get(&trimmed.to_lowercase()) {
            return code.clone();
        }

        if !trimmed.is_empty() {
            tracing::debug!(region = trimmed, "unrecognized region name; passing through");
        }
        trimmed.to_uppercase()
    }
}

impl Default for RegionNormalizer {
    fn default() -> Self {
        Self::us()
    }
}

fn is_two_letter_code(s: &str) -> bool {
    s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_fifty_states_and_dc() {
        assert_eq!(US_REGION_NAMES.len(), 51);
    }

    #[test]
    fn two_letter_codes_are_uppercased() {
        let n = RegionNormalizer::us();
        assert_eq!(n.normalize("ga"), "GA");
        assert_eq!(n.normalize(" Ga "), "GA");
        assert_eq!(n.normalize("GA"), "GA");
    }

    #[test]
    fn full_names_map_to_codes() {
        let n = RegionNormalizer::us();
        assert_eq!(n.normalize("Georgia"), "GA");
        assert_eq!(n.normalize("  south CAROLINA "), "SC");
        assert_eq!(n.normalize("District of Columbia"), "DC");
    }

    #[test]
    fn unknown_names_pass_through_uppercased() {
        let n = RegionNormalizer::us();
        assert_eq!(n.normalize(" Ontario "), "ONTARIO");
        assert_eq!(n.normalize(""), "");
    }

    #[test]
    fn unknown_two_letter_codes_are_kept() {
        let n = RegionNormalizer::us();
        assert_eq!(n.normalize("on"), "ON");
    }

    #[test]
    fn custom_table_replaces_us_names() {
        let n = RegionNormalizer::from_names([("Ontario", "on"), ("Quebec", "qc")]);
        assert_eq!(n.normalize("ontario"), "ON");
        assert_eq!(n.normalize("Georgia"), "GEORGIA");
    }
}
