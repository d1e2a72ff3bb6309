//! Shared input handling: read a payload from a file or a Developer.app bundle.

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use wwdc_core::{ContainerFetcher, Fetcher};

pub(super) fn containers(fetcher: &Fetcher) -> Result<ContainerFetcher<'_>> {
    fetcher.containers().ok_or_else(|| {
        anyhow!(
            "Developer.app bundles are not read on this platform; \
             set `allow_foreign_containers = true` under [fetch] in config.toml"
        )
    })
}

pub(super) fn read_binary(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read {}", path.display()))
}

pub(super) fn read_app(fetcher: &Fetcher, app: &Path) -> Result<Vec<u8>> {
    let bytes = containers(fetcher)?
        .read_payload(app)
        .with_context(|| format!("open {}", app.display()))?;
    Ok(bytes)
}
