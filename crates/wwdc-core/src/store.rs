//! Save and load documents as JSON files.
//!
//! Writes go to a temp file in the destination directory and are renamed
//! into place, so readers never see a half-written catalog.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Encodes `doc` as JSON and atomically replaces the file at `path`.
pub fn save<T: Serialize>(doc: &T, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;

    let data = serde_json::to_vec_pretty(doc).context("encode document")?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(&data)
        .with_context(|| format!("write {}", tmp.path().display()))?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("replace {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "saved document");
    Ok(())
}

/// Reads and decodes the JSON document at `path`.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))
}
