//! Single blocking HTTP GET via libcurl, collecting the body in memory.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::FetchConfig;
use crate::error::TransportError;

/// Response as received, whatever its status.
#[derive(Debug)]
pub(crate) struct Response {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs one GET against `url`. No retries.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
/// Setting `abort` makes the transfer stop at curl's next progress tick.
/// HTTP error statuses are not errors here: the body is returned as-is.
pub(crate) fn get(
    url: &str,
    cfg: &FetchConfig,
    abort: Arc<AtomicBool>,
) -> Result<Response, TransportError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.progress(true)?;
    if let Some(d) = cfg.connect_timeout() {
        easy.connect_timeout(d)?;
    }
    if let Some(d) = cfg.timeout() {
        easy.timeout(d)?;
    }
    if let Some(agent) = &cfg.user_agent {
        easy.useragent(agent)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.progress_function(|_, _, _, _| !abort.load(Ordering::Relaxed))?;
        if let Err(e) = transfer.perform() {
            if e.is_aborted_by_callback() {
                return Err(TransportError::Aborted);
            }
            return Err(e.into());
        }
    }

    let status = easy.response_code()?;
    Ok(Response { status, body })
}

/// Sets the shared abort flag when dropped, so a cancelled future stops its transfer.
pub(crate) struct AbortOnDrop(pub Arc<AtomicBool>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}
