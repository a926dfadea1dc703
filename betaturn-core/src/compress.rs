//! Transparent decompression of structure and annotation files.

use std::io::Read;
use std::path::Path;

use crate::{BetaTurnError, Result};

/// Supported compression algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Zstd,
    Gzip,
}

/// Decompress zstd data.
pub fn zstd_decompress(data: &[u8]) -> Result<Vec<u8>> {
    zstd::decode_all(data).map_err(|e| BetaTurnError::Compression(e.to_string()))
}

/// Decompress gzip data.
pub fn gzip_decompress(data: &[u8]) -> Result<Vec<u8>> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| BetaTurnError::Compression(e.to_string()))?;
    Ok(decompressed)
}

/// Detect the compression algorithm from the magic bytes of `data`.
///
/// Returns `None` if the data does not match a known format.
pub fn detect_algorithm(data: &[u8]) -> Option<Algorithm> {
    if data.len() >= 4 && data[..4] == [0x28, 0xB5, 0x2F, 0xFD] {
        Some(Algorithm::Zstd)
    } else if data.len() >= 2 && data[..2] == [0x1F, 0x8B] {
        Some(Algorithm::Gzip)
    } else {
        None
    }
}

/// Decompress `data` if it carries a known magic number, otherwise return it as-is.
pub fn maybe_decompress(data: Vec<u8>) -> Result<Vec<u8>> {
    match detect_algorithm(&data) {
        Some(Algorithm::Zstd) => zstd_decompress(&data),
        Some(Algorithm::Gzip) => gzip_decompress(&data),
        None => Ok(data),
    }
}

/// Read a text file, decompressing gzip or zstd content on the fly.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, a compression error if a
/// compressed stream is truncated, and a parse error if the content is not UTF-8.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let raw = std::fs::read(path.as_ref())?;
    let bytes = maybe_decompress(raw)?;
    String::from_utf8(bytes).map_err(|e| {
        BetaTurnError::Parse(format!(
            "{} is not valid UTF-8: {}",
            path.as_ref().display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::new(6));
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn detects_zstd() {
        let compressed = zstd::encode_all(&b"test"[..], 3).unwrap();
        assert_eq!(detect_algorithm(&compressed), Some(Algorithm::Zstd));
    }

    #[test]
    fn detects_gzip() {
        assert_eq!(detect_algorithm(&gzip(b"test")), Some(Algorithm::Gzip));
    }

    #[test]
    fn plain_text_has_no_algorithm() {
        assert_eq!(detect_algorithm(b"ATOM      1  N   ALA"), None);
    }

    #[test]
    fn plain_data_passes_through() {
        let data = b"data_1ABC\n".to_vec();
        assert_eq!(maybe_decompress(data.clone()).unwrap(), data);
    }

    #[test]
    fn auto_decompress_zstd() {
        let original = b"auto-detect zstd";
        let compressed = zstd::encode_all(&original[..], 3).unwrap();
        assert_eq!(maybe_decompress(compressed).unwrap(), original.to_vec());
    }

    #[test]
    fn truncated_gzip_fails() {
        let mut compressed = gzip(b"a longer payload that will be cut short");
        compressed.truncate(12);
        assert!(maybe_decompress(compressed).is_err());
    }

    #[test]
    fn read_text_gzip_file() {
        let mut file = tempfile::Builder::new().suffix(".pdb.gz").tempfile().unwrap();
        file.write_all(&gzip(b"HEADER    TEST\n")).unwrap();
        file.flush().unwrap();
        assert_eq!(read_text(file.path()).unwrap(), "HEADER    TEST\n");
    }

    #[test]
    fn read_text_missing_file() {
        assert!(matches!(
            read_text("/nonexistent/structure.cif"),
            Err(BetaTurnError::Io(_))
        ));
    }
}
