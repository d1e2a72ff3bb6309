//! `wwdc fetch` – download the catalog, print a summary, optionally save it.

use anyhow::{bail, Context, Result};
use std::path::Path;
use wwdc_core::{store, Catalog, Fetcher};

use super::show::print_summary;
use super::source::{containers, read_binary};
use crate::cli::CatalogSource;

pub async fn run_fetch(
    fetcher: &Fetcher,
    source: &CatalogSource,
    output: Option<&Path>,
) -> Result<()> {
    let catalog: Catalog = match (&source.url, &source.app, &source.binary) {
        (Some(url), _, _) => fetcher.fetch_document(url).await?,
        (None, Some(app), _) => containers(fetcher)?
            .fetch_from_container(app)
            .await
            .with_context(|| format!("fetch via {}", app.display()))?,
        (None, None, Some(path)) => {
            let bytes = read_binary(path)?;
            fetcher.fetch_from_buffer(&bytes).await?
        }
        (None, None, None) => bail!("pass --binary, --app or --url"),
    };

    print_summary(&catalog);

    if let Some(path) = output {
        store::save(&catalog, path)?;
        println!("Saved catalog to {}", path.display());
    }
    Ok(())
}
