//! Legacy code page and UTF-16LE ↔ UTF-8 re-encoding, per `spec.md` §4.5.
//!
//! Grounded in `other_examples/tim-weis-ovba/parser.rs`'s `cp_to_string`,
//! which maps a Windows code page identifier to an [`encoding_rs::Encoding`]
//! via the [`codepage`] crate and decodes through it.

use crate::error::{Error, Result};

/// A Windows legacy code page identifier (e.g. `1252` for Western European,
/// `932` for Shift-JIS).
pub type CodePage = u16;

/// The default code page used when a caller doesn't otherwise specify one:
/// Windows-1252, the common Western European default.
pub const DEFAULT_CODEPAGE: CodePage = 1252;

fn encoding_for(codepage: CodePage) -> Result<&'static encoding_rs::Encoding> {
    codepage::to_encoding(codepage)
        .ok_or_else(|| Error::Runtime(format!("unsupported code page {}", codepage)))
}

/// Decodes a legacy code-paged byte string to UTF-8.
pub fn bytes_to_utf8(bytes: &[u8], codepage: CodePage) -> Result<String> {
    let encoding = encoding_for(codepage)?;
    let (decoded, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(Error::Runtime(format!(
            "invalid byte sequence for code page {}",
            codepage
        )));
    }
    Ok(decoded.into_owned())
}

/// Encodes a UTF-8 string into a legacy code-paged byte string, used by the
/// round-trip property test (`spec.md` §8, property 3).
pub fn utf8_to_bytes(text: &str, codepage: CodePage) -> Result<Vec<u8>> {
    let encoding = encoding_for(codepage)?;
    let (encoded, _, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(Error::Runtime(format!(
            "string not representable in code page {}",
            codepage
        )));
    }
    Ok(encoded.into_owned())
}

/// Decodes a UTF-16LE byte stream (as stored in a shell item) to UTF-8.
pub fn utf16le_bytes_to_utf8(bytes: &[u8]) -> Result<String> {
    let units = utf16le_bytes_to_units(bytes);
    String::from_utf16(&units)
        .map_err(|_| Error::Runtime("invalid UTF-16LE sequence".to_string()))
}

/// Decodes a legacy code-paged byte string into UTF-16 code units.
pub fn bytes_to_utf16(bytes: &[u8], codepage: CodePage) -> Result<Vec<u16>> {
    let text = bytes_to_utf8(bytes, codepage)?;
    Ok(text.encode_utf16().collect())
}

/// Splits a raw UTF-16LE byte stream into `u16` code units. The stream may
/// have an odd trailing byte only if the source data was truncated; such a
/// byte is dropped rather than causing a panic.
pub fn utf16le_bytes_to_units(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
