//! Scope filtering and grouping over classified records.

use std::collections::HashMap;

use prospector_core::{ClassifiedProspect, Scope};

/// Record counts per scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeSummary {
    pub local: usize,
    pub national: usize,
    pub international: usize,
}

impl ScopeSummary {
    #[must_use]
    pub fn from_classified<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ClassifiedProspect>,
    {
        let mut summary = Self::default();
        for record in records {
            match record.scope {
                Scope::Local => summary.local += 1,
                Scope::National => summary.national += 1,
                Scope::International => summary.international += 1,
            }
        }
        summary
    }

    #[must_use]
    pub fn count(&self, scope: Scope) -> usize {
        match scope {
            Scope::Local => self.local,
            Scope::National => self.national,
            Scope::International => self.international,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.local + self.national + self.international
    }
}

impl std::fmt::Display for ScopeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} local, {} national, {} international",
            self.local, self.national, self.international
        )
    }
}

/// Records with the given scope, in input order.
#[must_use]
pub fn filter_by_scope(records: &[ClassifiedProspect], scope: Scope) -> Vec<&ClassifiedProspect> {
    records.iter().filter(|r| r.scope == scope).collect()
}

/// Records bucketed by scope. Every scope has an entry, possibly empty.
#[must_use]
pub fn group_by_scope(records: &[ClassifiedProspect]) -> HashMap<Scope, Vec<&ClassifiedProspect>> {
    let mut groups: HashMap<Scope, Vec<&ClassifiedProspect>> =
        Scope::ALL.iter().map(|s| (*s, Vec::new())).collect();
    for record in records {
        groups.entry(record.scope).or_default().push(record);
    }
    groups
}

#[cfg(test)]
mod tests {
    use prospector_core::{Location, ProspectRecord, UserLocale};

    use super::*;
    use crate::ScopeClassifier;

    fn classified() -> Vec<ClassifiedProspect> {
        let records = vec![
            ProspectRecord::new("Savannah Grill", "qsr", Location::new("US", "GA")),
            ProspectRecord::new("Charleston Bites", "qsr", Location::new("US", "SC")),
            ProspectRecord::new("Bay Tacos", "qsr", Location::new("US", "CA")),
            ProspectRecord::new("Paris Bistro", "qsr", Location::new("FR", "")),
        ];
        ScopeClassifier::us().classify_all(&records, &UserLocale::new("US", "GA", 100))
    }

    #[test]
    fn summary_counts_each_scope() {
        let records = classified();
        let summary = ScopeSummary::from_classified(&records);
        assert_eq!(summary.local, 2);
        assert_eq!(summary.national, 1);
        assert_eq!(summary.international, 1);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.count(Scope::Local), 2);
        assert_eq!(summary.to_string(), "2 local, 1 national, 1 international");
    }

    #[test]
    fn filter_keeps_input_order() {
        let records = classified();
        let local: Vec<&str> = filter_by_scope(&records, Scope::Local)
            .into_iter()
            .map(|r| r.record.name.as_str())
            .collect();
        assert_eq!(local, vec!["Savannah Grill", "Charleston Bites"]);
    }

    #[test]
    fn group_has_entry_for_every_scope() {
        let groups = group_by_scope(&[]);
        assert_eq!(groups.len(), 3);
        assert!(groups.values().all(Vec::is_empty));

        let records = classified();
        let groups = group_by_scope(&records);
        assert_eq!(groups[&Scope::International].len(), 1);
        assert_eq!(groups[&Scope::National][0].record.name, "Bay Tacos");
    }
}
