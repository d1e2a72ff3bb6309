//! `wwdc extract` – show the URLs embedded in a binary.

use anyhow::{bail, Result};
use wwdc_core::{contents_url, resolve_base, Fetcher};

use super::source::{read_app, read_binary};
use crate::cli::BinarySource;

pub fn run_extract(fetcher: &Fetcher, source: &BinarySource) -> Result<()> {
    let bytes = match (&source.binary, &source.app) {
        (Some(path), _) => read_binary(path)?,
        (None, Some(app)) => read_app(fetcher, app)?,
        (None, None) => bail!("pass --binary or --app"),
    };
    let base = resolve_base(&bytes)?;
    let contents = contents_url(&base)?;
    println!("base:     {base}");
    println!("contents: {contents}");
    Ok(())
}
