//! CLI command handlers, one per file.

mod extract;
mod fetch;
mod show;
mod source;

pub use extract::run_extract;
pub use fetch::run_fetch;
pub use show::run_show;
