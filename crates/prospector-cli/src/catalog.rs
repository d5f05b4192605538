//! Taxonomy browsing commands.

use prospector_core::{AppConfig, IndustryVertical};
use prospector_taxonomy::{builtin_catalog, IndustryTaxonomyIndex};

/// Build the taxonomy index from `PROSPECTOR_TAXONOMY_PATH`, or the built-in
/// catalog when unset.
///
/// # Errors
///
/// Returns an error if the configured catalog file cannot be loaded.
pub(crate) fn load_index(config: &AppConfig) -> anyhow::Result<IndustryTaxonomyIndex> {
    let sectors = match &config.taxonomy_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading taxonomy catalog");
            prospector_core::load_taxonomy(path)?
        }
        None => builtin_catalog(),
    };
    Ok(IndustryTaxonomyIndex::new(sectors))
}

pub(crate) fn run_sectors(config: &AppConfig) -> anyhow::Result<()> {
    let index = load_index(config)?;

    println!(
        "{:<22}{:<32}{:>10}{:>11}",
        "ID", "SECTOR", "VERTICALS", "COMPANIES"
    );
    for sector in index.sector_summary() {
        println!(
            "{:<22}{:<32}{:>10}{:>11}",
            sector.id, sector.name, sector.vertical_count, sector.company_count
        );
    }
    Ok(())
}

pub(crate) fn run_search(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let index = load_index(config)?;
    let matches = index.search(query);

    if matches.is_empty() {
        println!("no verticals match \"{query}\"");
        return Ok(());
    }
    print_verticals(&matches);
    Ok(())
}

pub(crate) fn run_untapped(config: &AppConfig, tracked: &[String]) -> anyhow::Result<()> {
    let index = load_index(config)?;
    let untapped = index.untapped(tracked);

    if untapped.is_empty() {
        println!("every catalog vertical overlaps a tracked industry");
        return Ok(());
    }
    print_verticals(&untapped);
    Ok(())
}

fn print_verticals(verticals: &[&IndustryVertical]) {
    println!("{:<26}{:<36}{:<30}TIER", "ID", "VERTICAL", "SECTOR");
    for v in verticals {
        println!(
            "{:<26}{:<36}{:<30}{}",
            v.id, v.name, v.sector, v.opportunity_tier
        );
    }
}
