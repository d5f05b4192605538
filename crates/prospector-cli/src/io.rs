//! JSON file helpers for record sets and the explored-vertical ledger.

use std::path::Path;

use anyhow::Context;
use prospector_core::ProspectRecord;
use prospector_expansion::ExploredVerticalEntry;
use serde::Serialize;

pub(crate) fn read_records(path: &Path) -> anyhow::Result<Vec<ProspectRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read records from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse records in {}", path.display()))
}

/// A missing ledger file is an empty ledger.
pub(crate) fn read_ledger(path: &Path) -> anyhow::Result<Vec<ExploredVerticalEntry>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no ledger file yet; starting empty");
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read ledger from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse ledger in {}", path.display()))
}

pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    std::fs::write(path, rendered)
        .with_context(|| format!("failed to write {}", path.display()))
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
