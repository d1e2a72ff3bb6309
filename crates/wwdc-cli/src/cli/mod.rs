//! CLI for locating and fetching the WWDC catalog.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use url::Url;
use wwdc_core::config;
use wwdc_core::Fetcher;

use commands::{run_extract, run_fetch, run_show};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "wwdc")]
#[command(about = "Find the WWDC catalog URL in the Developer app and fetch the catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where to read the binary that embeds the catalog URL.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct BinarySource {
    /// Path to a WWDCCore binary (or any file embedding the catalog URL).
    #[arg(long, value_name = "FILE")]
    pub binary: Option<PathBuf>,

    /// Path to a Developer.app bundle.
    #[arg(long, value_name = "APP")]
    pub app: Option<PathBuf>,
}

/// Where to get the catalog from.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct CatalogSource {
    /// Path to a WWDCCore binary (or any file embedding the catalog URL).
    #[arg(long, value_name = "FILE")]
    pub binary: Option<PathBuf>,

    /// Path to a Developer.app bundle.
    #[arg(long, value_name = "APP")]
    pub app: Option<PathBuf>,

    /// Direct contents.json URL, skipping extraction.
    #[arg(long, value_name = "URL")]
    pub url: Option<Url>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the base and contents URLs embedded in a binary.
    Extract {
        #[command(flatten)]
        source: BinarySource,
    },

    /// Fetch the catalog and print a summary.
    Fetch {
        #[command(flatten)]
        source: CatalogSource,

        /// Save the catalog JSON here (defaults to `catalog_path` from config.toml).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Summarize a previously saved catalog.
    Show {
        /// Path to the saved catalog JSON.
        path: PathBuf,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let fetcher = Fetcher::new(cfg.fetch.clone());

        match cli.command {
            CliCommand::Extract { source } => run_extract(&fetcher, &source)?,
            CliCommand::Fetch { source, output } => {
                let output = output.or_else(|| cfg.catalog_path.clone());
                run_fetch(&fetcher, &source, output.as_deref()).await?;
            }
            CliCommand::Show { path } => run_show(&path)?,
        }

        Ok(())
    }
}
