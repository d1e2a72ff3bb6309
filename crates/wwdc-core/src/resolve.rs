//! Turn a scanned candidate into the catalog's base and contents URLs.

use url::Url;

use crate::error::ExtractionError;
use crate::scan::{self, PREFIX};

/// Path segment of the catalog document below the base URL.
pub const CONTENTS_SEGMENT: &str = "contents.json";

/// Extracts the service base URL embedded after the CDN prefix in `buffer`.
pub fn resolve_base(buffer: &[u8]) -> Result<Url, ExtractionError> {
    let range =
        scan::find_url_candidate(buffer, PREFIX).ok_or(ExtractionError::PrefixNotFound)?;
    tracing::debug!(
        start = range.start,
        len = range.len(),
        "found embedded URL candidate"
    );

    let bytes = &buffer[range.clone()];
    if let Some(pos) = bytes.iter().position(|b| !is_printable_ascii(*b)) {
        return Err(ExtractionError::InvalidEncoding {
            offset: range.start + pos,
        });
    }
    // All bytes are printable ASCII, so this cannot fail.
    let text = std::str::from_utf8(bytes)
        .map_err(|_| ExtractionError::InvalidEncoding { offset: range.start })?;

    Url::parse(text).map_err(ExtractionError::MalformedUrl)
}

/// Extracts the base URL and appends `contents.json` to it.
pub fn resolve_contents(buffer: &[u8]) -> Result<Url, ExtractionError> {
    let base = resolve_base(buffer)?;
    contents_url(&base)
}

/// Appends `contents.json` to `base` as a new path segment.
///
/// A trailing slash on `base` is reused rather than doubled.
pub fn contents_url(base: &Url) -> Result<Url, ExtractionError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ExtractionError::CannotBeABase(base.to_string()))?
        .pop_if_empty()
        .push(CONTENTS_SEGMENT);
    Ok(url)
}

fn is_printable_ascii(b: u8) -> bool {
    (0x20..=0x7e).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embed(url: &[u8]) -> Vec<u8> {
        [b"\x7fELF\x02\x01".as_slice(), PREFIX, url, b"\0\x13\x37garbage".as_slice()].concat()
    }

    #[test]
    fn no_prefix() {
        let err = resolve_base(b"\0\0\0nothing to see\0").unwrap_err();
        assert!(matches!(err, ExtractionError::PrefixNotFound));
    }

    #[test]
    fn empty_candidate_is_malformed() {
        let data = [PREFIX, b"\0".as_slice()].concat();
        let err = resolve_base(&data).unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedUrl(_)));
    }

    #[test]
    fn non_ascii_candidate_is_invalid_encoding() {
        let data = embed(b"https://cdn.example.com/\xc3\xa9");
        match resolve_base(&data).unwrap_err() {
            ExtractionError::InvalidEncoding { offset } => {
                assert_eq!(data[offset], 0xc3);
            }
            other => panic!("expected InvalidEncoding, got {other:?}"),
        }
    }

    #[test]
    fn control_byte_is_invalid_encoding() {
        let data = embed(b"https://cdn.example.com/\n2024");
        assert!(matches!(
            resolve_base(&data).unwrap_err(),
            ExtractionError::InvalidEncoding { .. }
        ));
    }

    #[test]
    fn relative_text_is_malformed() {
        let data = embed(b"2024.example.com");
        assert!(matches!(
            resolve_base(&data).unwrap_err(),
            ExtractionError::MalformedUrl(_)
        ));
    }

    #[test]
    fn base_ignores_trailing_garbage() {
        let data = embed(b"https://cdn.example.com/2024");
        let url = resolve_base(&data).unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/2024");
    }

    #[test]
    fn base_runs_to_end_without_terminator() {
        let data = [PREFIX, b"https://cdn.example.com/2025/".as_slice()].concat();
        let url = resolve_base(&data).unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/2025/");
    }

    #[test]
    fn first_embedded_url_wins() {
        let data = [
            PREFIX,
            b"https://a.example.com/\0".as_slice(),
            PREFIX,
            b"https://b.example.com/\0".as_slice(),
        ]
        .concat();
        assert_eq!(resolve_base(&data).unwrap().host_str(), Some("a.example.com"));
    }

    #[test]
    fn contents_appended_to_path() {
        let data = embed(b"https://cdn.example.com/2024");
        let url = resolve_contents(&data).unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/2024/contents.json");
    }

    #[test]
    fn contents_does_not_double_slash() {
        let base = Url::parse("https://cdn.example.com/wwdc/2024/").unwrap();
        assert_eq!(
            contents_url(&base).unwrap().as_str(),
            "https://cdn.example.com/wwdc/2024/contents.json"
        );
    }

    #[test]
    fn contents_on_bare_host() {
        let base = Url::parse("https://cdn.example.com").unwrap();
        assert_eq!(
            contents_url(&base).unwrap().as_str(),
            "https://cdn.example.com/contents.json"
        );
    }

    #[test]
    fn contents_keeps_query() {
        let base = Url::parse("https://cdn.example.com/2024?v=3").unwrap();
        assert_eq!(
            contents_url(&base).unwrap().as_str(),
            "https://cdn.example.com/2024/contents.json?v=3"
        );
    }

    #[test]
    fn contents_rejects_opaque_base() {
        let base = Url::parse("mailto:wwdc@example.com").unwrap();
        assert!(matches!(
            contents_url(&base).unwrap_err(),
            ExtractionError::CannotBeABase(_)
        ));
    }

    #[test]
    fn contents_propagates_base_errors() {
        assert!(matches!(
            resolve_contents(b"nothing").unwrap_err(),
            ExtractionError::PrefixNotFound
        ));
    }
}
