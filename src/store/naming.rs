//! Upload name resolution.
//!
//! Resumable upload clients announce the desired filename through the
//! `Upload-Metadata` request header: a comma-separated list of
//! `key base64(value)` pairs. This module decodes that header and picks
//! the on-disk name for a new upload, with a timestamp-based fallback
//! when no usable `filename` key is present.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;

/// Parse an `Upload-Metadata` header value into a key/value map.
///
/// Each pair is split on the first space into a key and a base64-encoded
/// value. Pairs whose value fails to decode as base64 or as UTF-8 are
/// skipped rather than failing the whole parse, and a repeated key keeps
/// its last successfully decoded value.
pub fn parse_upload_metadata(header: &str) -> HashMap<String, String> {
    let mut metadata = HashMap::new();

    for pair in header.split(',') {
        let pair = pair.trim();
        let Some((key, encoded)) = pair.split_once(' ') else {
            // Key-only pair: nothing to decode.
            continue;
        };
        if key.is_empty() {
            continue;
        }

        let Ok(raw) = STANDARD.decode(encoded.trim()) else {
            continue;
        };
        let Ok(value) = String::from_utf8(raw) else {
            continue;
        };

        metadata.insert(key.to_string(), value);
    }

    metadata
}

/// Resolve the on-disk name for a new upload.
///
/// Returns the decoded `filename` metadata value verbatim when present,
/// otherwise a synthesized `file-<epochMillis>` name.
///
/// Note: the client-supplied name is deliberately not sanitized against
/// path traversal and not checked for collisions with existing files.
/// This mirrors the documented upload contract; see DESIGN.md before
/// tightening it.
pub fn resolve_upload_name(metadata: Option<&str>) -> String {
    if let Some(header) = metadata {
        if let Some(name) = parse_upload_metadata(header).remove("filename") {
            return name;
        }
    }

    format!("file-{}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_pair() {
        // "dGVzdC50eHQ=" is base64 for "test.txt"
        let metadata = parse_upload_metadata("filename dGVzdC50eHQ=");
        assert_eq!(metadata.get("filename").map(String::as_str), Some("test.txt"));
    }

    #[test]
    fn test_parse_multiple_pairs() {
        // filename "video.mp4", filetype "video/mp4"
        let metadata =
            parse_upload_metadata("filename dmlkZW8ubXA0, filetype dmlkZW8vbXA0");
        assert_eq!(metadata.get("filename").map(String::as_str), Some("video.mp4"));
        assert_eq!(metadata.get("filetype").map(String::as_str), Some("video/mp4"));
    }

    #[test]
    fn test_parse_repeated_key_last_wins() {
        // "Zmlyc3Q=" = "first", "c2Vjb25k" = "second"
        let metadata = parse_upload_metadata("filename Zmlyc3Q=, filename c2Vjb25k");
        assert_eq!(metadata.get("filename").map(String::as_str), Some("second"));
    }

    #[test]
    fn test_parse_skips_malformed_base64() {
        let metadata = parse_upload_metadata("filename !!!not-base64!!!, other dGVzdA==");
        assert!(!metadata.contains_key("filename"));
        assert_eq!(metadata.get("other").map(String::as_str), Some("test"));
    }

    #[test]
    fn test_parse_skips_invalid_utf8() {
        // "/w==" decodes to the single byte 0xFF, which is not valid UTF-8
        let metadata = parse_upload_metadata("filename /w==");
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_parse_skips_key_only_pair() {
        let metadata = parse_upload_metadata("is_confidential, filename dGVzdC50eHQ=");
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get("filename").map(String::as_str), Some("test.txt"));
    }

    #[test]
    fn test_parse_empty_header() {
        assert!(parse_upload_metadata("").is_empty());
    }

    #[test]
    fn test_resolve_uses_filename_metadata() {
        let name = resolve_upload_name(Some("filename dGVzdC50eHQ="));
        assert_eq!(name, "test.txt");
    }

    #[test]
    fn test_resolve_fallback_without_header() {
        let name = resolve_upload_name(None);
        let digits = name.strip_prefix("file-").expect("fallback prefix");
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_resolve_fallback_without_filename_key() {
        let name = resolve_upload_name(Some("filetype dmlkZW8vbXA0"));
        assert!(name.starts_with("file-"));
    }

    #[test]
    fn test_resolve_fallback_on_undecodable_filename() {
        // Malformed base64 in the filename value falls through to the
        // synthesized name instead of erroring out.
        let name = resolve_upload_name(Some("filename ???"));
        assert!(name.starts_with("file-"));
    }
}
