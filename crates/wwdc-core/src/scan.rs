//! Locate a NUL-terminated string embedded in an opaque binary.
//!
//! The scan is encoding-agnostic: it only distinguishes `0x00` from every
//! other byte. Running off the end of the buffer ends the candidate exactly
//! like a terminator would.

use memchr::memmem;
use std::ops::Range;

/// Marker preceding the service URL inside the WWDCCore binary.
pub const PREFIX: &[u8] = b"https://devimages-cdn.apple.com/wwdc-services/";

/// C string terminator.
pub const TERMINATOR: u8 = 0x00;

/// Finds the first occurrence of `prefix` in `buffer` and returns the span
/// that follows it, up to the next terminator or the end of the buffer.
///
/// Returns `None` when the prefix is absent. The returned range may be empty.
pub fn find_url_candidate(buffer: &[u8], prefix: &[u8]) -> Option<Range<usize>> {
    let start = memmem::find(buffer, prefix)? + prefix.len();
    let tail = buffer.get(start..)?;
    let end = memchr::memchr(TERMINATOR, tail).map_or(buffer.len(), |pos| start + pos);
    Some(start..end)
}
