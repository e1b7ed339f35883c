//! URI shell items (`class_type == 0x61`).
//!
//! Grounded in `libfwsi_uri_values.c`. The source's size guard there reads
//! `if (data_size < 2) && (data_size > shell_item_data_size - 6)`, which
//! looks like an `||` that was typo'd into an `&&` (see `spec.md` §9's
//! Open Question about it). Per that note's resolution, this decoder
//! simply treats any `data_size` that doesn't fit inside the item as
//! `InvalidItemSize`, rather than reproducing the original conjunction.

use crate::codepage::{self, CodePage};
use crate::cursor::Cursor;
use crate::error::{Error, Result};

const CLASS_TYPE: u8 = 0x61;
const UNICODE_FLAG: u8 = 0x80;
const OPAQUE_HEADER_LEN: usize = 40;
const OPAQUE_HEADER_THRESHOLD: u16 = 40;

#[derive(Debug, Clone)]
pub struct UriValues {
    pub flags: u8,
    pub data_size: u16,
    pub is_unicode: bool,
    /// Raw URI bytes: UTF-16LE if `is_unicode`, otherwise legacy
    /// code-paged.
    pub uri: Vec<u8>,
}

impl UriValues {
    pub fn uri_utf8(&self, codepage: CodePage) -> Result<String> {
        if self.is_unicode {
            codepage::utf16le_bytes_to_utf8(&self.uri)
        } else {
            codepage::bytes_to_utf8(&self.uri, codepage)
        }
    }
}

pub fn parse(item_bytes: &[u8]) -> Result<Option<UriValues>> {
    if item_bytes.first() != Some(&CLASS_TYPE) {
        return Ok(None);
    }

    let mut cursor = Cursor::at(item_bytes, 1);
    let flags = cursor.read_u8()?;
    let data_size = cursor.read_u16()?;
    let is_unicode = flags & UNICODE_FLAG != 0;

    if data_size as usize > cursor.remaining() {
        return Err(Error::InvalidItemSize(data_size));
    }

    if data_size >= OPAQUE_HEADER_THRESHOLD {
        cursor.advance(OPAQUE_HEADER_LEN)?;
    }

    let uri = if is_unicode {
        cursor.read_utf16_cstr()?.to_vec()
    } else {
        cursor.read_cstr()?.to_vec()
    };

    Ok(Some(UriValues {
        flags,
        data_size,
        is_unicode,
        uri,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ascii_uri() {
        let mut item_bytes = vec![CLASS_TYPE, 0x00];
        item_bytes.extend_from_slice(&0u16.to_le_bytes());
        item_bytes.extend_from_slice(b"http://example.com\0");
        let values = parse(&item_bytes).unwrap().unwrap();
        assert!(!values.is_unicode);
        assert_eq!(values.uri_utf8(1252).unwrap(), "http://example.com");
    }

    #[test]
    fn parses_unicode_uri_with_opaque_header() {
        let mut item_bytes = vec![CLASS_TYPE, UNICODE_FLAG];
        item_bytes.extend_from_slice(&40u16.to_le_bytes());
        item_bytes.extend_from_slice(&[0u8; OPAQUE_HEADER_LEN]);
        let uri: Vec<u16> = "http://example.com".encode_utf16().collect();
        for unit in &uri {
            item_bytes.extend_from_slice(&unit.to_le_bytes());
        }
        item_bytes.extend_from_slice(&0u16.to_le_bytes());
        let values = parse(&item_bytes).unwrap().unwrap();
        assert!(values.is_unicode);
        assert_eq!(values.uri_utf8(1252).unwrap(), "http://example.com");
    }
}
