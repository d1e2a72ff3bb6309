//! Error types for URL extraction and catalog fetching.
//!
//! Every failure maps to exactly one variant. Only `Extraction`, `Network`
//! and `Decode` carry their cause; container failures deliberately do not.

use thiserror::Error;

/// Failure to recover the service URL from a binary payload.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The payload has no occurrence of the CDN prefix.
    #[error("no embedded service URL prefix found in payload")]
    PrefixNotFound,
    /// The bytes after the prefix are not printable ASCII.
    #[error("embedded URL contains a non-printable byte at offset {offset}")]
    InvalidEncoding { offset: usize },
    /// The recovered text is not an absolute URL.
    #[error("embedded URL is malformed: {0}")]
    MalformedUrl(#[source] url::ParseError),
    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("embedded URL {0} cannot be used as a base for contents.json")]
    CannotBeABase(String),
}

/// Failure anywhere in the container → URL → network → decode pipeline.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not extract catalog URL")]
    Extraction(#[source] ExtractionError),
    /// The supplied path does not name a `Developer.app` bundle.
    #[error("path is not a Developer.app bundle")]
    WrongContainerKind,
    /// The payload inside the bundle could not be read, for whatever reason.
    #[error("could not read the WWDCCore payload inside Developer.app")]
    ContainerUnreadable,
    #[error("catalog request failed")]
    Network(#[source] TransportError),
    #[error("catalog response could not be decoded")]
    Decode(#[source] serde_json::Error),
}

/// Transport-level failure of a single GET.
///
/// Any response the server sends back, whatever its status, is not a
/// transport failure; its body goes to the decoder.
#[derive(Debug, Error)]
pub enum TransportError {
    /// libcurl reported an error (DNS, connect, TLS, timeout ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The transfer was stopped before completing: the caller dropped the
    /// request, or the worker running it was cancelled or panicked.
    #[error("request aborted before completion")]
    Aborted,
}

impl From<tokio::task::JoinError> for TransportError {
    fn from(_: tokio::task::JoinError) -> Self {
        TransportError::Aborted
    }
}

impl From<ExtractionError> for FetchError {
    fn from(e: ExtractionError) -> Self {
        FetchError::Extraction(e)
    }
}

impl From<TransportError> for FetchError {
    fn from(e: TransportError) -> Self {
        FetchError::Network(e)
    }
}
