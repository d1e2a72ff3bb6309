//! Reading the WWDCCore payload out of a Developer.app bundle.

use serde::de::DeserializeOwned;
use std::path::Path;

use super::Fetcher;
use crate::error::FetchError;

/// Final path component a container root must have.
pub const CONTAINER_NAME: &str = "Developer.app";

/// Location of the binary holding the service URL, relative to the bundle root.
pub const PAYLOAD_PATH: &str = "Contents/Frameworks/WWDCCore.framework/Versions/A/WWDCCore";

/// Container-aware view of a [`Fetcher`]; obtain one with [`Fetcher::containers`].
#[derive(Debug, Clone, Copy)]
pub struct ContainerFetcher<'a> {
    fetcher: &'a Fetcher,
}

impl<'a> ContainerFetcher<'a> {
    pub(super) fn new(fetcher: &'a Fetcher) -> Self {
        Self { fetcher }
    }

    /// Reads the payload binary from the bundle at `root`.
    ///
    /// The bundle name is checked before touching the filesystem. Any read
    /// failure is reported as `ContainerUnreadable` without its cause.
    pub fn read_payload(&self, root: &Path) -> Result<Vec<u8>, FetchError> {
        read_payload_at(root)
    }

    /// Fetches the document whose URL is embedded in the bundle's payload.
    pub async fn fetch_from_container<D>(&self, root: &Path) -> Result<D, FetchError>
    where
        D: DeserializeOwned,
    {
        let root = root.to_path_buf();
        let buffer = tokio::task::spawn_blocking(move || read_payload_at(&root))
            .await
            .map_err(|_| FetchError::ContainerUnreadable)??;
        self.fetcher.fetch_from_buffer(&buffer).await
    }
}

fn read_payload_at(root: &Path) -> Result<Vec<u8>, FetchError> {
    if root.file_name().and_then(|n| n.to_str()) != Some(CONTAINER_NAME) {
        return Err(FetchError::WrongContainerKind);
    }
    let payload = root.join(PAYLOAD_PATH);
    tracing::debug!(path = %payload.display(), "reading container payload");
    std::fs::read(&payload).map_err(|_| FetchError::ContainerUnreadable)
}
