//! File-entry shell items (`(class_type & 0x70) == 0x30`): files and
//! folders inside a volume. The richest variant — carries a name, a FAT
//! timestamp, and a chain of extension blocks.
//!
//! Grounded in `libfwsi_file_entry.c`.

use crate::codepage::{self, CodePage};
use crate::cursor::Cursor;
use crate::error::Result;
use crate::extension_block::{self, ExtensionBlockValues};
use crate::fat_time::FatDateTime;

const FAMILY_MASK: u8 = 0x70;
const FAMILY_FILE_ENTRY: u8 = 0x30;
const UNICODE_BIT: u8 = 0x04;

#[derive(Debug, Clone)]
pub struct FileEntryValues {
    pub file_size: u32,
    pub modification_time: FatDateTime,
    pub file_attribute_flags: u32,
    /// Raw name bytes: UTF-16LE if `is_unicode`, otherwise legacy
    /// code-paged. Never includes the terminator.
    pub name: Vec<u8>,
    pub name_size: usize,
    pub is_unicode: bool,
    pub extension_blocks: Vec<ExtensionBlockValues>,
}

impl FileEntryValues {
    /// Decodes `name` to UTF-8, transcoding from `codepage` if the name
    /// isn't already marked Unicode.
    pub fn name_utf8(&self, codepage: CodePage) -> Result<String> {
        if self.is_unicode {
            codepage::utf16le_bytes_to_utf8(&self.name)
        } else {
            codepage::bytes_to_utf8(&self.name, codepage)
        }
    }

    /// Decodes `name` to UTF-16 code units.
    pub fn name_utf16(&self, codepage: CodePage) -> Result<Vec<u16>> {
        if self.is_unicode {
            Ok(codepage::utf16le_bytes_to_units(&self.name))
        } else {
            codepage::bytes_to_utf16(&self.name, codepage)
        }
    }

    /// The modification time decoded to a calendar date/time, or `None`
    /// if the packed value is zero or out of range. Supplemental accessor
    /// (see `SPEC_FULL.md` §9); the raw `modification_time` field remains
    /// the primary source of truth.
    pub fn modification_datetime(&self) -> Option<chrono::NaiveDateTime> {
        self.modification_time.to_naive_datetime()
    }
}

pub fn parse(item_bytes: &[u8]) -> Result<Option<FileEntryValues>> {
    let class_type = match item_bytes.first() {
        Some(&b) => b,
        None => return Ok(None),
    };
    if class_type & FAMILY_MASK != FAMILY_FILE_ENTRY {
        return Ok(None);
    }

    let mut cursor = Cursor::new(item_bytes);
    cursor.advance(1)?; // class_type, already read
    let _unknown = cursor.read_u8()?;
    let file_size = cursor.read_u32()?;
    let modification_time = FatDateTime(cursor.read_u32()?);
    let file_attribute_flags = cursor.read_u16()? as u32;

    let is_unicode = class_type & UNICODE_BIT != 0;
    let name = if is_unicode {
        cursor.read_utf16_cstr()?.to_vec()
    } else {
        let raw = cursor.read_cstr()?.to_vec();
        // Align so the extension-block chain starts on an even offset,
        // per spec's note on code-paged names; skip the pad byte only
        // when one is actually available.
        if cursor.offset() % 2 != 0 && cursor.remaining() > 0 {
            cursor.advance(1)?;
        }
        raw
    };
    let name_size = name.len();

    let ext_region = &item_bytes[cursor.offset()..];
    let (extension_blocks, _consumed) = extension_block::parse_chain(ext_region)?;

    Ok(Some(FileEntryValues {
        file_size,
        modification_time,
        file_attribute_flags,
        name,
        name_size,
        is_unicode,
        extension_blocks,
    }))
}
