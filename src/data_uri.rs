//! Embedding images as `data:` URIs.
//!
//! Uploaded backgrounds are read in full and turned into a self-contained
//! `data:<mime>;base64,<payload>` string, so the theme record only ever holds
//! text. The MIME type comes from the file contents first and the file
//! extension second; anything that is not an image is rejected.

use crate::error::{Result, StartPageError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use tracing::debug;

const DATA_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// Returns true if `source` is a `data:` URI.
pub fn is_data_uri(source: &str) -> bool {
    source
        .get(..DATA_PREFIX.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(DATA_PREFIX))
}

/// Encodes raw bytes as a base64 `data:` URI.
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("{DATA_PREFIX}{mime}{BASE64_MARKER},{}", STANDARD.encode(bytes))
}

/// Splits a base64 `data:` URI back into its MIME type and bytes.
pub fn decode(uri: &str) -> Result<(String, Vec<u8>)> {
    if !is_data_uri(uri) {
        return Err(StartPageError::InvalidDataUri("missing data: prefix".to_string()));
    }
    let rest = &uri[DATA_PREFIX.len()..];
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| StartPageError::InvalidDataUri("missing ',' separator".to_string()))?;
    let mime = meta
        .strip_suffix(BASE64_MARKER)
        .ok_or_else(|| StartPageError::InvalidDataUri("only base64 payloads are supported".to_string()))?;
    let bytes = STANDARD.decode(payload.trim())?;
    Ok((mime.to_string(), bytes))
}

/// Detects the image MIME type of a file.
///
/// Content sniffing wins over the extension; `None` means "not an image".
pub fn image_mime(path: &Path, bytes: &[u8]) -> Option<String> {
    if let Ok(format) = image::guess_format(bytes) {
        return Some(format.to_mime_type().to_string());
    }
    mime_guess::from_path(path)
        .iter()
        .find(|m| m.type_() == mime_guess::mime::IMAGE)
        .map(|m| m.essence_str().to_string())
}

/// Reads an image file and returns it as an embeddable `data:` URI.
pub fn read_image_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| StartPageError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mime = image_mime(path, &bytes).ok_or_else(|| StartPageError::NotAnImage {
        path: path.to_path_buf(),
    })?;
    debug!(path = %path.display(), %mime, size = bytes.len(), "encoded background image");
    Ok(encode(&mime, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smallest valid PNG signature + IHDR start, enough for format sniffing
    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

    #[test]
    fn test_is_data_uri() {
        assert!(is_data_uri("data:image/png;base64,AAAA"));
        assert!(is_data_uri("DATA:image/png;base64,AAAA"));
        assert!(!is_data_uri("https://example.com/a.png"));
        assert!(!is_data_uri("dat"));
    }

    #[test]
    fn test_encode_and_decode() {
        let uri = encode("image/png", b"hello");
        assert_eq!(uri, "data:image/png;base64,aGVsbG8=");
        let (mime, bytes) = decode(&uri).unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(decode("https://x"), Err(StartPageError::InvalidDataUri(_))));
        assert!(matches!(decode("data:image/png;base64"), Err(StartPageError::InvalidDataUri(_))));
        assert!(matches!(decode("data:text/plain,hi"), Err(StartPageError::InvalidDataUri(_))));
        assert!(matches!(decode("data:image/png;base64,@@@"), Err(StartPageError::Decode(_))));
    }

    #[test]
    fn test_image_mime_sniffs_content() {
        let mime = image_mime(Path::new("picture.bin"), PNG_HEADER);
        assert_eq!(mime.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_image_mime_falls_back_to_extension() {
        let mime = image_mime(Path::new("wallpaper.jpg"), b"not really a jpeg");
        assert_eq!(mime.as_deref(), Some("image/jpeg"));
        assert_eq!(image_mime(Path::new("notes.txt"), b"plain text"), None);
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join("rstartpage_missing_background.png");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(read_image_file(&path), Err(StartPageError::FileRead { .. })));
    }

    #[test]
    fn test_read_image_file() {
        let path = std::env::temp_dir().join("rstartpage_data_uri_test.png");
        std::fs::write(&path, PNG_HEADER).unwrap();
        let uri = read_image_file(&path).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(decode(&uri).unwrap().1, PNG_HEADER);
        let _ = std::fs::remove_file(&path);
    }
}
