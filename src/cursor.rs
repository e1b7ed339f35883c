//! Bounds-checked little-endian reads over a borrowed byte slice.
//!
//! This is a thin wrapper over [`scroll::Pread`]; every read advances an
//! internal offset and fails with [`Error::Truncated`] rather than reading
//! past the end of the slice, matching `goblin`'s own `bytes.gread_with`
//! idiom used throughout `pe::header` and `pe::data_directories`.

use scroll::Pread;

use crate::error::{Error, Result};
use crate::guid::Guid;

/// A cursor over a borrowed shell-item buffer.
pub struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, offset: 0 }
    }

    /// Creates a cursor over `bytes` starting at `offset`.
    pub fn at(bytes: &'a [u8], offset: usize) -> Self {
        Cursor { bytes, offset }
    }

    /// Current read offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Whether the cursor has reached the end of its buffer.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Advances the offset by `n` bytes without reading anything, failing if
    /// that would run past the end of the buffer.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        if n > self.remaining() {
            return Err(Error::Truncated);
        }
        self.offset += n;
        Ok(())
    }

    /// Reads a `u8`, advancing the cursor.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.bytes.gread_with(&mut self.offset, scroll::LE)?)
    }

    /// Reads a little-endian `u16`, advancing the cursor.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(self.bytes.gread_with(&mut self.offset, scroll::LE)?)
    }

    /// Reads a little-endian `u32`, advancing the cursor.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(self.bytes.gread_with(&mut self.offset, scroll::LE)?)
    }

    /// Reads a little-endian `u64`, advancing the cursor.
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(self.bytes.gread_with(&mut self.offset, scroll::LE)?)
    }

    /// Reads a 16-byte Microsoft mixed-endian GUID, advancing the cursor.
    pub fn read_guid(&mut self) -> Result<Guid> {
        let bytes = self.read_slice(16)?;
        let mut raw = [0u8; 16];
        raw.copy_from_slice(bytes);
        Ok(Guid(raw))
    }

    /// Reads `len` raw bytes without any endian interpretation, advancing the
    /// cursor.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::Truncated);
        }
        let start = self.offset;
        self.offset += len;
        Ok(&self.bytes[start..start + len])
    }

    /// Returns the next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8> {
        self.bytes
            .get(self.offset)
            .copied()
            .ok_or(Error::Truncated)
    }

    /// Returns the two bytes at the current offset as a little-endian `u16`
    /// without consuming them.
    pub fn peek_u16(&self) -> Result<u16> {
        let b = self
            .bytes
            .get(self.offset..self.offset + 2)
            .ok_or(Error::Truncated)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    /// Reads a NUL-terminated (`0x00`) byte string, not including the
    /// terminator, advancing past the terminator.
    pub fn read_cstr(&mut self) -> Result<&'a [u8]> {
        let start = self.offset;
        loop {
            let b = self.read_u8()?;
            if b == 0 {
                break;
            }
        }
        Ok(&self.bytes[start..self.offset - 1])
    }

    /// Reads a UTF-16LE string terminated by a `0x0000` code unit, not
    /// including the terminator, advancing past the terminator. Reads
    /// byte-by-byte; no 2-byte alignment is required or assumed, per
    /// `spec.md` §4.3's "UTF-16 name not 2-byte aligned" edge case.
    pub fn read_utf16_cstr(&mut self) -> Result<&'a [u8]> {
        let start = self.offset;
        loop {
            let unit = self.read_u16()?;
            if unit == 0 {
                break;
            }
        }
        Ok(&self.bytes[start..self.offset - 2])
    }
}
