//! Geographic inputs to scope classification.

use serde::{Deserialize, Serialize};

/// Where a prospect is located.
///
/// All fields are free text. `region` may be a full name ("Georgia") or an
/// abbreviation ("GA"); an empty `country` means the classifier's home country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Location {
    #[must_use]
    pub fn new(country: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
            city: None,
        }
    }
}

/// The viewing user's declared location and local-radius slider value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLocale {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub city: String,
    /// Radius in miles that still counts as "local".
    pub local_radius: u32,
}

impl UserLocale {
    #[must_use]
    pub fn new(country: impl Into<String>, region: impl Into<String>, local_radius: u32) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
            city: String::new(),
            local_radius,
        }
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    #[must_use]
    pub fn radius_band(&self) -> RadiusBand {
        RadiusBand::from_radius(self.local_radius)
    }
}

/// Coarse interpretation of the local-radius slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusBand {
    /// Under 50 miles: same metro only.
    Metro,
    /// 50 to 99 miles.
    ExtendedMetro,
    /// 100 to 149 miles: neighboring regions count as local.
    NeighboringRegions,
    /// 150 miles and up.
    WideRegional,
}

impl RadiusBand {
    #[must_use]
    pub fn from_radius(miles: u32) -> Self {
        match miles {
            0..=49 => RadiusBand::Metro,
            50..=99 => RadiusBand::ExtendedMetro,
            100..=149 => RadiusBand::NeighboringRegions,
            _ => RadiusBand::WideRegional,
        }
    }

    /// Whether regions adjacent to the user's own count as local.
    #[must_use]
    pub fn includes_neighbors(self) -> bool {
        self >= RadiusBand::NeighboringRegions
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RadiusBand::Metro => "same metro only",
            RadiusBand::ExtendedMetro => "extended metro",
            RadiusBand::NeighboringRegions => "includes neighboring regions",
            RadiusBand::WideRegional => "wide regional",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_band_boundaries() {
        assert_eq!(RadiusBand::from_radius(10), RadiusBand::Metro);
        assert_eq!(RadiusBand::from_radius(49), RadiusBand::Metro);
        assert_eq!(RadiusBand::from_radius(50), RadiusBand::ExtendedMetro);
        assert_eq!(RadiusBand::from_radius(99), RadiusBand::ExtendedMetro);
        assert_eq!(RadiusBand::from_radius(100), RadiusBand::NeighboringRegions);
        assert_eq!(RadiusBand::from_radius(149), RadiusBand::NeighboringRegions);
        assert_eq!(RadiusBand::from_radius(150), RadiusBand::WideRegional);
        assert_eq!(RadiusBand::from_radius(200), RadiusBand::WideRegional);
    }

    #[test]
    fn neighbors_included_from_one_hundred_miles() {
        assert!(!UserLocale::new("US", "GA", 99).radius_band().includes_neighbors());
        assert!(UserLocale::new("US", "GA", 100).radius_band().includes_neighbors());
        assert!(UserLocale::new("US", "GA", 200).radius_band().includes_neighbors());
    }

    #[test]
    fn location_deserializes_with_missing_country() {
        let loc: Location =
            serde_json::from_str(r#"{"region":"Georgia","city":"Atlanta"}"#).expect("parse");
        assert_eq!(loc.country, "");
        assert_eq!(loc.region, "Georgia");
        assert_eq!(loc.city.as_deref(), Some("Atlanta"));
    }
}
