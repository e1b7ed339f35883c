//! The Extension-Block Decoder (component B of `spec.md` §4.2).
//!
//! Extension blocks are variable-length, signature-tagged sub-records
//! appended to certain shell items (most notably file-entry items). Each
//! block starts with an 8-byte header (`size`, `version`, `signature`);
//! dispatch is purely on `signature`. An unrecognized `0xBEEF`-prefixed
//! signature is never a parse error — it is captured as raw bytes, the
//! same way `goblin::mach::load_command::CommandVariant` falls back to
//! `Unimplemented` for an unrecognized `cmd`.

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::fat_time::FatDateTime;
use crate::guid::Guid;

const HEADER_LEN: usize = 8;

/// One parsed extension block, tagged by its signature.
#[derive(Debug, Clone)]
pub enum ExtensionBlockValues {
    /// `0xBEEF0004` — file-entry extension: long name, timestamps, and
    /// (from version 7 onward) the MFT reference.
    FileEntry(FileEntryExtensionBlock),
    /// `0xBEEF0005` — bag-link block: a single GUID.
    BagLink(Guid),
    /// `0xBEEF0006` — user identifier block. Layout beyond the header is
    /// not pinned by `spec.md`; stored as the raw block body (see
    /// `SPEC_FULL.md` §4.2).
    UserId { version: u16, data: Vec<u8> },
    /// `0xBEEF000A` — property view block (raw body; see `SPEC_FULL.md` §4.2).
    PropertyView { version: u16, data: Vec<u8> },
    /// `0xBEEF001A` — raw body; see `SPEC_FULL.md` §4.2.
    Beef001a { version: u16, data: Vec<u8> },
    /// `0xBEEF0025` — raw body; see `SPEC_FULL.md` §4.2.
    Beef0025 { version: u16, data: Vec<u8> },
    /// `0xBEEF002C` — "cnet" block; raw body, see `SPEC_FULL.md` §4.2.
    Cnet { version: u16, data: Vec<u8> },
    /// Any other `0xBEEF`-range (or otherwise unrecognized) signature.
    Unknown {
        signature: u32,
        version: u16,
        data: Vec<u8>,
    },
}

impl ExtensionBlockValues {
    /// The block's 4-byte signature.
    pub fn signature(&self) -> u32 {
        match self {
            ExtensionBlockValues::FileEntry(_) => 0xBEEF0004,
            ExtensionBlockValues::BagLink(_) => 0xBEEF0005,
            ExtensionBlockValues::UserId { .. } => 0xBEEF0006,
            ExtensionBlockValues::PropertyView { .. } => 0xBEEF000A,
            ExtensionBlockValues::Beef001a { .. } => 0xBEEF001A,
            ExtensionBlockValues::Beef0025 { .. } => 0xBEEF0025,
            ExtensionBlockValues::Cnet { .. } => 0xBEEF002C,
            ExtensionBlockValues::Unknown { signature, .. } => *signature,
        }
    }
}

/// `0xBEEF0004`: the richest extension block, carrying the long file name,
/// precise timestamps, and (in later versions) the MFT reference.
#[derive(Debug, Clone)]
pub struct FileEntryExtensionBlock {
    pub version: u16,
    pub creation_time: FatDateTime,
    pub access_time: FatDateTime,
    pub unknown1: u16,
    pub unknown2: u16,
    /// Present from block version 7 onward.
    pub mft_reference: Option<u64>,
    /// Present from block version 7 onward (unknown purpose, stored raw).
    pub mft_unknown: Option<u64>,
    /// Raw UTF-16LE long name bytes (no terminator).
    pub long_name: Vec<u8>,
    /// A secondary name present from block version 3 onward. Unicode from
    /// version 7 onward (alongside the MFT reference), legacy code-paged
    /// otherwise — see `SPEC_FULL.md` §4.2 for this Open Question's
    /// resolution.
    pub secondary_name: Option<Vec<u8>>,
    pub secondary_name_is_unicode: bool,
    /// Offset to the long name, as stored at the end of the block.
    pub offset_to_long_name: u16,
}

/// Outcome of attempting to parse a single extension block from the start
/// of a byte slice.
pub enum ExtensionBlockParse {
    Block(ExtensionBlockValues, usize),
    /// The header didn't look like a block; the caller should stop
    /// scanning for more blocks.
    NotABlock,
}

/// Parses exactly one extension block from the start of `bytes`.
pub fn parse_one(bytes: &[u8]) -> Result<ExtensionBlockParse> {
    if bytes.len() < HEADER_LEN {
        return Ok(ExtensionBlockParse::NotABlock);
    }
    let size = u16::from_le_bytes([bytes[0], bytes[1]]);
    let version = u16::from_le_bytes([bytes[2], bytes[3]]);
    let signature = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);

    if (size as usize) < HEADER_LEN {
        return Err(Error::InvalidExtensionBlock("size smaller than header"));
    }
    if size as usize > bytes.len() {
        return Err(Error::InvalidExtensionBlock("size exceeds remaining data"));
    }

    let body = &bytes[HEADER_LEN..size as usize];
    let values = dispatch(signature, version, body)?;
    Ok(ExtensionBlockParse::Block(values, size as usize))
}

fn dispatch(signature: u32, version: u16, body: &[u8]) -> Result<ExtensionBlockValues> {
    match signature {
        0xBEEF0004 => Ok(ExtensionBlockValues::FileEntry(parse_file_entry_block(
            version, body,
        )?)),
        0xBEEF0005 => {
            let mut cursor = Cursor::new(body);
            let guid = cursor.read_guid()?;
            Ok(ExtensionBlockValues::BagLink(guid))
        }
        0xBEEF0006 => Ok(ExtensionBlockValues::UserId {
            version,
            data: body.to_vec(),
        }),
        0xBEEF000A => Ok(ExtensionBlockValues::PropertyView {
            version,
            data: body.to_vec(),
        }),
        0xBEEF001A => Ok(ExtensionBlockValues::Beef001a {
            version,
            data: body.to_vec(),
        }),
        0xBEEF0025 => Ok(ExtensionBlockValues::Beef0025 {
            version,
            data: body.to_vec(),
        }),
        0xBEEF002C => Ok(ExtensionBlockValues::Cnet {
            version,
            data: body.to_vec(),
        }),
        other => Ok(ExtensionBlockValues::Unknown {
            signature: other,
            version,
            data: body.to_vec(),
        }),
    }
}

fn parse_file_entry_block(version: u16, body: &[u8]) -> Result<FileEntryExtensionBlock> {
    let mut cursor = Cursor::new(body);
    let creation_time = FatDateTime(cursor.read_u32()?);
    let access_time = FatDateTime(cursor.read_u32()?);
    let unknown1 = cursor.read_u16()?;
    let unknown2 = cursor.read_u16()?;

    let (mft_reference, mft_unknown) = if version >= 7 {
        (Some(cursor.read_u64()?), Some(cursor.read_u64()?))
    } else {
        (None, None)
    };

    let long_name = cursor.read_utf16_cstr()?.to_vec();

    let secondary_name_is_unicode = version >= 7;
    let secondary_name = if version >= 3 && cursor.remaining() > 2 {
        if secondary_name_is_unicode {
            Some(cursor.read_utf16_cstr()?.to_vec())
        } else {
            Some(cursor.read_cstr()?.to_vec())
        }
    } else {
        None
    };

    // Trailing u16 offset-to-long-name, if room remains for it.
    let offset_to_long_name = if cursor.remaining() >= 2 {
        cursor.read_u16()?
    } else {
        0
    };

    Ok(FileEntryExtensionBlock {
        version,
        creation_time,
        access_time,
        unknown1,
        unknown2,
        mft_reference,
        mft_unknown,
        long_name,
        secondary_name,
        secondary_name_is_unicode,
        offset_to_long_name,
    })
}

/// Parses a chain of extension blocks from `region`, stopping per the
/// state machine in `spec.md` §4.2/§4.4: while at least 4 bytes remain
/// before the final 2-byte item terminator, and the next `u16` size is
/// `>= 8` and fits before that terminator, pull one more block. Returns the
/// parsed blocks and the byte offset within `region` where scanning
/// stopped (i.e. where the trailing terminator begins).
pub fn parse_chain(region: &[u8]) -> Result<(Vec<ExtensionBlockValues>, usize)> {
    let mut offset = 0usize;
    let mut blocks = Vec::new();
    loop {
        let remaining = region.len() - offset;
        if remaining < 4 {
            break;
        }
        let size = u16::from_le_bytes([region[offset], region[offset + 1]]);
        if size < 8 || (size as usize) > remaining - 2 {
            break;
        }
        match parse_one(&region[offset..])? {
            ExtensionBlockParse::Block(values, consumed) => {
                blocks.push(values);
                offset += consumed;
            }
            ExtensionBlockParse::NotABlock => break,
        }
    }
    Ok((blocks, offset))
}
