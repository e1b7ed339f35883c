//! FAT date/time decode, the date/time formatter collaborator from
//! `spec.md` §6. Used by `Debug` output and one supplemental accessor;
//! never on the primary `file_size`/`name` accessor path, per
//! `spec.md`'s note that this collaborator "is not used on the main
//! accessor path."
//!
//! Bit layout and the DOS → `chrono` conversion are grounded in
//! `other_examples/h4x0r-tl/shell_item.rs`'s `dos_datetime_to_utc`: the
//! DOS date is read before the DOS time (`parse_file_entry_item` reads
//! `dos_date` then `dos_time`), so in the combined little-endian 32-bit
//! value stored in a shell item, the date occupies the low 16 bits and
//! the time occupies the high 16 bits.

use chrono::NaiveDateTime;

/// A 32-bit packed FAT date/time value, as stored in a shell item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FatDateTime(pub u32);

impl FatDateTime {
    /// The raw packed value.
    pub fn raw(self) -> u32 {
        self.0
    }

    fn date_bits(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    fn time_bits(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Decodes to a [`chrono::NaiveDateTime`], or `None` if the packed value
    /// is zero or encodes an out-of-range date/time.
    pub fn to_naive_datetime(self) -> Option<NaiveDateTime> {
        if self.0 == 0 {
            return None;
        }
        let date = self.date_bits();
        let time = self.time_bits();

        let year = ((date >> 9) & 0x7F) as i32 + 1980;
        let month = ((date >> 5) & 0x0F) as u32;
        let day = (date & 0x1F) as u32;

        let hour = ((time >> 11) & 0x1F) as u32;
        let minute = ((time >> 5) & 0x3F) as u32;
        let second = ((time & 0x1F) * 2) as u32;

        let naive_date = chrono::NaiveDate::from_ymd_opt(year, month, day)?;
        let naive_time = chrono::NaiveTime::from_hms_opt(hour, minute, second)?;
        Some(NaiveDateTime::new(naive_date, naive_time))
    }
}
