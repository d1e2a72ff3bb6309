pub mod config;
pub mod logging;

pub mod catalog;
pub mod error;
pub mod fetch;
pub mod resolve;
pub mod scan;
pub mod store;

pub use catalog::Catalog;
pub use error::{ExtractionError, FetchError, TransportError};
pub use fetch::{ContainerFetcher, Fetcher};
pub use resolve::{contents_url, resolve_base, resolve_contents};
pub use scan::find_url_candidate;
