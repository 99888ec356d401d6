//! Result of fetching a file from a repository.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// What the contents API returned for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedFile {
    /// The path does not exist.
    Absent,

    /// The file's decoded text.
    Text(String),

    /// The path exists but its content cannot be read as text.
    Unreadable { reason: String },
}

/// Decodes the base64 payload of a contents API response.
///
/// GitHub omits the payload for files too large for the contents API, and
/// wraps the base64 text at 60 columns.
#[must_use]
pub fn decode_file_content(content: Option<&str>) -> FetchedFile {
    let Some(content) = content else {
        return unreadable("content could not be decoded (no content returned)");
    };

    let encoded: Vec<u8> = content
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    let bytes = match STANDARD.decode(encoded) {
        Ok(bytes) => bytes,
        Err(e) => return unreadable(format!("content could not be decoded ({e})")),
    };

    match String::from_utf8(bytes) {
        Ok(text) => FetchedFile::Text(text),
        Err(_) => unreadable("content could not be decoded (not UTF-8)"),
    }
}

fn unreadable(reason: impl Into<String>) -> FetchedFile {
    FetchedFile::Unreadable {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wrapped_base64() {
        // "repos: []\n", split across lines the way GitHub wraps it
        let fetched = decode_file_content(Some("cmVwb3M6\nIFtdCg==\n"));
        assert_eq!(fetched, FetchedFile::Text("repos: []\n".to_string()));
    }

    #[test]
    fn empty_payload_is_empty_text() {
        assert_eq!(
            decode_file_content(Some("")),
            FetchedFile::Text(String::new())
        );
    }

    #[test]
    fn missing_payload_is_unreadable() {
        let fetched = decode_file_content(None);
        assert!(matches!(
            fetched,
            FetchedFile::Unreadable { reason } if reason.starts_with("content could not be decoded")
        ));
    }

    #[test]
    fn non_utf8_is_unreadable() {
        // 0xFF 0xFE
        let fetched = decode_file_content(Some("//4="));
        assert_eq!(
            fetched,
            FetchedFile::Unreadable {
                reason: "content could not be decoded (not UTF-8)".to_string()
            }
        );
    }

    #[test]
    fn garbage_base64_is_unreadable() {
        assert!(matches!(
            decode_file_content(Some("not base64!")),
            FetchedFile::Unreadable { .. }
        ));
    }
}
