//! Delegate shell items (`class_type == 0x74`): a thin wrapper around a
//! nested, delegate-target shell item.
//!
//! Per `SPEC_FULL.md` §4.3, the nested item is stored as raw bytes rather
//! than recursively decoded — recursive delegate targets are rare and
//! outside this decoder's scope; callers who need the nested item can
//! feed `inner_bytes` back through `parse_item` themselves.

use crate::error::Result;

pub const CLASS_TYPE: u8 = 0x74;

#[derive(Debug, Clone)]
pub struct DelegateValues {
    pub inner_bytes: Vec<u8>,
}

pub fn parse(item_bytes: &[u8]) -> Result<Option<DelegateValues>> {
    if item_bytes.first() != Some(&CLASS_TYPE) {
        return Ok(None);
    }
    let inner_bytes = item_bytes.get(2..).unwrap_or(&[]).to_vec();
    Ok(Some(DelegateValues { inner_bytes }))
}
