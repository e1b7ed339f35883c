//! Volume shell items (a drive or a named volume), `class_type` one of
//! `0x23, 0x25, 0x29, 0x2A, 0x2E, 0x2F`.
//!
//! Grounded in `libfwsi_volume_values.c`: the `0x2E` class carries a bare
//! GUID; every other class carries a fixed 20-byte name field (optionally
//! NUL-terminated early) followed, when room remains, by a trailing
//! shell-folder GUID.

use crate::codepage::{self, CodePage};
use crate::cursor::Cursor;
use crate::error::Result;
use crate::guid::Guid;

const NAME_FIELD_LEN: usize = 20;
const GUID_LEN: usize = 16;

#[derive(Debug, Clone)]
pub struct VolumeValues {
    pub has_name: bool,
    /// Set only when `has_name` is `false` (class type `0x2E`).
    pub identifier: Option<Guid>,
    /// Set only when `has_name` is `true`. A trailing path separator, if
    /// present in the stored bytes, has already been stripped (see
    /// `SPEC_FULL.md` §4.3).
    pub name: Option<Vec<u8>>,
    pub name_size: usize,
    /// Present only when `has_name` is `true` and at least 16 more bytes
    /// followed the name field.
    pub shell_folder_identifier: Option<Guid>,
    pub ascii_codepage: CodePage,
}

impl VolumeValues {
    pub fn name_utf8(&self) -> Result<Option<String>> {
        match &self.name {
            Some(bytes) => Ok(Some(codepage::bytes_to_utf8(bytes, self.ascii_codepage)?)),
            None => Ok(None),
        }
    }
}

fn is_bare_guid_class(class_type: u8) -> bool {
    class_type == 0x2E
}

fn is_named_class(class_type: u8) -> bool {
    matches!(class_type, 0x23 | 0x25 | 0x29 | 0x2A | 0x2F)
}

/// Strips a single trailing path separator from a NUL-terminated name
/// field, matching how shell items store a drive's display name ("C:\")
/// distinctly from its canonical short form ("C:").
fn trim_name(field: &[u8]) -> Vec<u8> {
    let nul_at = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    let mut name = field[..nul_at].to_vec();
    if name.last() == Some(&0x5C) {
        name.pop();
    }
    name
}

pub fn parse(item_bytes: &[u8], default_codepage: CodePage) -> Result<Option<VolumeValues>> {
    let class_type = match item_bytes.first() {
        Some(&b) => b,
        None => return Ok(None),
    };

    if is_bare_guid_class(class_type) {
        let mut cursor = Cursor::at(item_bytes, 1);
        let _flags = cursor.read_u8()?;
        let identifier = cursor.read_guid()?;
        return Ok(Some(VolumeValues {
            has_name: false,
            identifier: Some(identifier),
            name: None,
            name_size: 0,
            shell_folder_identifier: None,
            ascii_codepage: default_codepage,
        }));
    }

    if !is_named_class(class_type) {
        return Ok(None);
    }

    let mut cursor = Cursor::at(item_bytes, 1);
    let name_field = cursor.read_slice(NAME_FIELD_LEN)?;
    let name = trim_name(name_field);
    let name_size = name.len();

    let shell_folder_identifier = if cursor.remaining() >= GUID_LEN {
        Some(cursor.read_guid()?)
    } else {
        None
    };

    Ok(Some(VolumeValues {
        has_name: true,
        identifier: None,
        name: Some(name),
        name_size,
        shell_folder_identifier,
        ascii_codepage: default_codepage,
    }))
}
