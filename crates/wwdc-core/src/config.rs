use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Transport settings for the catalog GET (the `[fetch]` table in config.toml).
///
/// Unset values leave libcurl's defaults in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Connect timeout in seconds.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// `User-Agent` header sent with the request.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Read Developer.app bundles even on hosts where they are not native (e.g. a copy on Linux).
    #[serde(default)]
    pub allow_foreign_containers: bool,
}

impl FetchConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Global configuration loaded from `~/.config/wwdc/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WwdcConfig {
    /// Where `wwdc fetch` saves the catalog when no `--output` is given.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub fetch: FetchConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wwdc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WwdcConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WwdcConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: WwdcConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
