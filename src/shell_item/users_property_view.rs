//! Users-property-view shell items: a GUID-only control item
//! (`class_type == 0x00`), outside every `0x70`-masked family and handled
//! as a special case by the classifier, per `spec.md` §4.4's "special
//! cases listed in §4.3" note.
//!
//! Class byte chosen per `SPEC_FULL.md` §4.3's Open Question resolution.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::guid::Guid;

pub const CLASS_TYPE: u8 = 0x00;

#[derive(Debug, Clone)]
pub struct UsersPropertyViewValues {
    pub identifier: Guid,
}

pub fn parse(item_bytes: &[u8]) -> Result<Option<UsersPropertyViewValues>> {
    if item_bytes.first() != Some(&CLASS_TYPE) {
        return Ok(None);
    }
    let mut cursor = Cursor::at(item_bytes, 1);
    let _unknown = cursor.read_u8()?;
    let identifier = cursor.read_guid()?;
    Ok(Some(UsersPropertyViewValues { identifier }))
}
