//! Fetch pipeline: bytes → contents URL → GET → decoded document.
//!
//! Each call is independent and single-shot. A failure at any stage ends the
//! call with that stage's error; retrying is the caller's business.

mod container;
mod transport;

pub use container::{ContainerFetcher, CONTAINER_NAME, PAYLOAD_PATH};

use serde::de::DeserializeOwned;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use url::Url;

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::resolve;

use transport::AbortOnDrop;

/// Entry point for catalog retrieval. Cheap to clone and safe to share across tasks.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    cfg: Arc<FetchConfig>,
}

impl Fetcher {
    pub fn new(cfg: FetchConfig) -> Self {
        Self { cfg: Arc::new(cfg) }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.cfg
    }

    /// Container support for this host, if any.
    ///
    /// App bundles are native on macOS; elsewhere they are only read when
    /// `allow_foreign_containers` is set.
    pub fn containers(&self) -> Option<ContainerFetcher<'_>> {
        if cfg!(target_os = "macos") || self.cfg.allow_foreign_containers {
            Some(ContainerFetcher::new(self))
        } else {
            None
        }
    }

    /// Resolves the contents URL embedded in `buffer` and fetches the document behind it.
    pub async fn fetch_from_buffer<D>(&self, buffer: &[u8]) -> Result<D, FetchError>
    where
        D: DeserializeOwned,
    {
        let url = resolve::resolve_contents(buffer)?;
        self.fetch_document(&url).await
    }

    /// Downloads `url` and decodes the body as JSON with RFC 3339 dates.
    ///
    /// The transfer runs on the blocking pool. Dropping the returned future
    /// aborts the transfer.
    pub async fn fetch_document<D>(&self, url: &Url) -> Result<D, FetchError>
    where
        D: DeserializeOwned,
    {
        let abort = Arc::new(AtomicBool::new(false));
        let _guard = AbortOnDrop(Arc::clone(&abort));
        let cfg = Arc::clone(&self.cfg);
        let target = url.to_string();

        tracing::debug!(url = %url, "fetching document");
        let response = tokio::task::spawn_blocking(move || transport::get(&target, &cfg, abort))
            .await
            .map_err(|e| FetchError::Network(e.into()))??;
        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "document received"
        );

        serde_json::from_slice(&response.body).map_err(FetchError::Decode)
    }
}
