use std::path::Path;

use prospector_core::{AppConfig, Scope, UserLocale};
use prospector_scope::{filter_by_scope, ScopeClassifier, ScopeSummary};

use crate::io::{print_json, read_records};

/// Build the classifier for the configured home country with the built-in
/// US region tables.
pub(crate) fn classifier_for(config: &AppConfig) -> ScopeClassifier {
    ScopeClassifier::new(
        &config.home_country,
        prospector_scope::RegionNormalizer::us(),
        prospector_scope::StateAdjacency::us(),
    )
}

/// Classify a record file for one viewer and print the labeled records.
///
/// The summary goes to stderr so stdout stays valid JSON.
///
/// # Errors
///
/// Returns an error if the records file cannot be read or parsed.
pub(crate) fn run_classify(
    config: &AppConfig,
    records_path: &Path,
    locale: &UserLocale,
    scope_filter: Option<Scope>,
) -> anyhow::Result<()> {
    let records = read_records(records_path)?;
    let classified = classifier_for(config).classify_all(&records, locale);
    let summary = ScopeSummary::from_classified(&classified);

    tracing::info!(
        records = records.len(),
        radius = locale.local_radius,
        band = locale.radius_band().label(),
        "classified records"
    );
    eprintln!("{summary} (radius {} mi)", locale.local_radius);

    match scope_filter {
        Some(scope) => print_json(&filter_by_scope(&classified, scope)),
        None => print_json(&classified),
    }
}
