//! Network-location shell items (`class_type` in `0x41..=0x47`): UNC
//! shares, servers, and workgroups.
//!
//! Grounded in `libfwsi_network_location_values.c`: a flags byte followed
//! by a chain of NUL-terminated legacy-code-paged strings, some of them
//! gated by flag bits.

use crate::codepage::{self, CodePage};
use crate::cursor::Cursor;
use crate::error::Result;

const CLASS_RANGE: std::ops::RangeInclusive<u8> = 0x41..=0x47;

/// Bit gating the optional device name. Not pinned by the distilled
/// specification; chosen as the next free bit below the documented
/// `0x80`/`0x40` description/comments bits (see `DESIGN.md`).
const HAS_DEVICE_NAME: u8 = 0x02;
const HAS_DESCRIPTION: u8 = 0x80;
const HAS_COMMENTS: u8 = 0x40;

#[derive(Debug, Clone)]
pub struct NetworkLocationValues {
    pub flags: u8,
    pub share_name: Vec<u8>,
    pub device_name: Option<Vec<u8>>,
    pub description: Option<Vec<u8>>,
    pub comments: Option<Vec<u8>>,
    pub location_type: Option<u32>,
}

impl NetworkLocationValues {
    pub fn share_name_utf8(&self, codepage: CodePage) -> Result<String> {
        codepage::bytes_to_utf8(&self.share_name, codepage)
    }
}

pub fn parse(item_bytes: &[u8]) -> Result<Option<NetworkLocationValues>> {
    let class_type = match item_bytes.first() {
        Some(&b) => b,
        None => return Ok(None),
    };
    if !CLASS_RANGE.contains(&class_type) {
        return Ok(None);
    }

    let mut cursor = Cursor::at(item_bytes, 1);
    let flags = cursor.read_u8()?;
    let share_name = cursor.read_cstr()?.to_vec();

    let device_name = if flags & HAS_DEVICE_NAME != 0 {
        Some(cursor.read_cstr()?.to_vec())
    } else {
        None
    };
    let description = if flags & HAS_DESCRIPTION != 0 {
        Some(cursor.read_cstr()?.to_vec())
    } else {
        None
    };
    let comments = if flags & HAS_COMMENTS != 0 {
        Some(cursor.read_cstr()?.to_vec())
    } else {
        None
    };
    let location_type = if cursor.remaining() >= 4 {
        Some(cursor.read_u32()?)
    } else {
        None
    };

    Ok(Some(NetworkLocationValues {
        flags,
        share_name,
        device_name,
        description,
        comments,
        location_type,
    }))
}
