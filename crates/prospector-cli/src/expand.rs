use std::path::Path;

use anyhow::Context;
use prospector_core::{AppConfig, Scope, UserLocale};
use prospector_expansion::{ExpansionOrchestrator, ExpansionOutcome, HttpGenerator};
use prospector_scope::ScopeSummary;

use crate::catalog::load_index;
use crate::classify::classifier_for;
use crate::io::{print_json, read_ledger, read_records, write_json};

pub(crate) struct ExpandPaths<'a> {
    pub records: Option<&'a Path>,
    pub ledger: Option<&'a Path>,
    pub out: Option<&'a Path>,
}

/// Run one expansion for `vertical_id` and emit the merged, classified set.
///
/// The ledger file is only rewritten after a successful expansion.
///
/// # Errors
///
/// Returns an error if inputs cannot be read, the generator is not
/// configured, the vertical is unknown, or generation fails.
pub(crate) async fn run_expand(
    config: &AppConfig,
    vertical_id: &str,
    scope: Scope,
    locale: &UserLocale,
    paths: &ExpandPaths<'_>,
) -> anyhow::Result<()> {
    let index = load_index(config)?;
    let base = match paths.records {
        Some(path) => read_records(path)?,
        None => Vec::new(),
    };
    let ledger = match paths.ledger {
        Some(path) => read_ledger(path)?,
        None => Vec::new(),
    };

    let generator =
        HttpGenerator::from_config(config).context("prospect generator is not configured")?;
    let orchestrator =
        ExpansionOrchestrator::new(generator, classifier_for(config), locale.clone(), base)
            .with_ledger(ledger);

    let outcome = orchestrator
        .expand_from_index(&index, vertical_id, scope)
        .await?;

    match outcome {
        ExpansionOutcome::Completed { vertical_id, added } => {
            eprintln!(
                "added {added} prospects for {vertical_id} (expanded {} times)",
                orchestrator.times_expanded(&vertical_id)
            );
        }
        ExpansionOutcome::Ignored { in_flight } => {
            anyhow::bail!(
                "expansion of {} is already running",
                in_flight.vertical_id
            );
        }
    }

    if let Some(path) = paths.ledger {
        write_json(path, &orchestrator.explored())?;
    }

    let merged = orchestrator.all_records();
    eprintln!("{}", ScopeSummary::from_classified(&merged));
    match paths.out {
        Some(path) => write_json(path, &merged),
        None => print_json(&merged),
    }
}
