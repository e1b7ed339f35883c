//! Control-panel shell items, e.g. a control panel category or applet
//! shown as a namespace hop.
//!
//! Like `compressed_folder`, `spec.md` leaves the exact class byte
//! unpinned. This decoder uses `0x71` (libfwsi's control-panel-category
//! class byte) with the same unknown-byte-then-GUID layout as
//! `root_folder`; see `DESIGN.md`.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::guid::Guid;

pub const CLASS_TYPE: u8 = 0x71;

#[derive(Debug, Clone)]
pub struct ControlPanelValues {
    pub identifier: Guid,
}

pub fn parse(item_bytes: &[u8]) -> Result<Option<ControlPanelValues>> {
    if item_bytes.first() != Some(&CLASS_TYPE) {
        return Ok(None);
    }
    let mut cursor = Cursor::at(item_bytes, 1);
    let _unknown = cursor.read_u8()?;
    let identifier = cursor.read_guid()?;
    Ok(Some(ControlPanelValues { identifier }))
}
