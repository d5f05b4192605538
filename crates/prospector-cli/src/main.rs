mod catalog;
mod classify;
mod expand;
mod io;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use prospector_core::{Scope, UserLocale};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "prospector")]
#[command(about = "Prospect scope classification and vertical discovery")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Label prospect records local, national, or international for a viewer
    Classify {
        /// JSON file containing an array of prospect records
        #[arg(long)]
        records: PathBuf,

        /// Only print records with this scope
        #[arg(long)]
        scope: Option<Scope>,

        #[command(flatten)]
        locale: LocaleArgs,
    },
    /// List catalog sectors with vertical and company counts
    Sectors,
    /// Search verticals by name, sector, keyword, or example company
    Search {
        query: String,
    },
    /// List verticals not overlapping any tracked industry
    Untapped {
        /// Industry name already tracked (repeatable)
        #[arg(long = "tracked")]
        tracked: Vec<String>,
    },
    /// Generate prospects for one vertical and merge them into a record set
    Expand {
        /// Vertical id from the catalog
        #[arg(long)]
        vertical: String,

        /// Geographic scope to generate for
        #[arg(long)]
        scope: Scope,

        /// JSON file with the core record set (empty when omitted)
        #[arg(long)]
        records: Option<PathBuf>,

        /// JSON ledger of explored verticals, read before and written after
        #[arg(long)]
        ledger: Option<PathBuf>,

        /// Write the merged, classified set here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        locale: LocaleArgs,
    },
}

/// The viewer's location. Missing values fall back to configuration.
#[derive(Debug, Args)]
struct LocaleArgs {
    #[arg(long)]
    country: Option<String>,

    #[arg(long, default_value = "")]
    region: String,

    #[arg(long)]
    city: Option<String>,

    /// Local radius in miles
    #[arg(long, value_parser = clap::value_parser!(u32).range(10..=200))]
    radius: Option<u32>,
}

impl LocaleArgs {
    fn resolve(&self, config: &prospector_core::AppConfig) -> UserLocale {
        let locale = UserLocale::new(
            self.country
                .clone()
                .unwrap_or_else(|| config.home_country.clone()),
            self.region.clone(),
            self.radius.unwrap_or(config.default_radius),
        );
        match &self.city {
            Some(city) => locale.with_city(city.clone()),
            None => locale,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = prospector_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Classify {
            records,
            scope,
            locale,
        }) => classify::run_classify(&config, &records, &locale.resolve(&config), scope)?,
        Some(Commands::Sectors) => catalog::run_sectors(&config)?,
        Some(Commands::Search { query }) => catalog::run_search(&config, &query)?,
        Some(Commands::Untapped { tracked }) => catalog::run_untapped(&config, &tracked)?,
        Some(Commands::Expand {
            vertical,
            scope,
            records,
            ledger,
            out,
            locale,
        }) => {
            let paths = expand::ExpandPaths {
                records: records.as_deref(),
                ledger: ledger.as_deref(),
                out: out.as_deref(),
            };
            expand::run_expand(&config, &vertical, scope, &locale.resolve(&config), &paths)
                .await?;
        }
        None => println!("prospector: run with --help to list commands"),
    }

    Ok(())
}
