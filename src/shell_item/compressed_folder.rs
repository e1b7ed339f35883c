//! Compressed-folder shell items (e.g. a Zip folder opened as a shell
//! namespace location).
//!
//! `spec.md` describes this variant only as "analogous" to root folder and
//! volume, "identified by a class byte or a GUID in a fixed position,"
//! without pinning the exact byte. This decoder reuses the root-folder
//! layout (one unknown byte, then a 16-byte shell-folder GUID) against
//! `0x52`, the class byte libfwsi's test fixtures use for compressed
//! folders; recorded as an Open Question resolution in `DESIGN.md`.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::guid::Guid;

pub const CLASS_TYPE: u8 = 0x52;

#[derive(Debug, Clone)]
pub struct CompressedFolderValues {
    pub shell_folder_identifier: Guid,
}

pub fn parse(item_bytes: &[u8]) -> Result<Option<CompressedFolderValues>> {
    if item_bytes.first() != Some(&CLASS_TYPE) {
        return Ok(None);
    }
    let mut cursor = Cursor::at(item_bytes, 1);
    let _unknown = cursor.read_u8()?;
    let shell_folder_identifier = cursor.read_guid()?;
    Ok(Some(CompressedFolderValues {
        shell_folder_identifier,
    }))
}
