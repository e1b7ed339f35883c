//! End-to-end scenarios and property-style tests against the public API,
//! mirroring how `goblin` places fixture-driven coverage in `tests/*.rs`
//! alongside inline per-module unit tests.

use shellitem::{parse_item, parse_item_list, Error, VariantTag};
use std::sync::Once;

const DEFAULT_CODEPAGE: u16 = 1252;

static LOG_INIT: Once = Once::new();

/// Wires the classifier's `log::{debug, trace}` calls to stderr, the same
/// way the teacher's `examples/rewrite_pe.rs`/`examples/pe_add_section.rs`
/// call `stderrlog::new().verbosity(N).init()`. Run once per test binary so
/// `cargo test -- --nocapture` surfaces dispatch tracing.
fn init_logging() {
    LOG_INIT.call_once(|| {
        stderrlog::new().verbosity(3).init().ok();
    });
}

#[test]
fn root_folder_my_computer() {
    init_logging();
    let bytes = [
        0x14, 0x00, 0x1F, 0x50, 0x20, 0xD0, 0x4F, 0xE0, 0x3A, 0xEA, 0x10, 0x69, 0xA2, 0xD8, 0x08,
        0x00, 0x2B, 0x30, 0x30, 0x9D,
    ];
    let item = parse_item(&bytes, DEFAULT_CODEPAGE).unwrap();
    assert_eq!(item.variant(), VariantTag::RootFolder);
    assert_eq!(item.data_size(), 20);
    let root_folder = item.root_folder().unwrap();
    assert_eq!(
        root_folder.shell_folder_identifier.to_string(),
        "{E04FD020-EA3A-6910-A2D8-08002B30309D}"
    );
    assert_eq!(root_folder.well_known_name(), Some("My Computer"));
}

#[test]
fn volume_with_name_c_drive() {
    init_logging();
    let bytes = [
        0x19, 0x00, 0x2F, 0x43, 0x3A, 0x5C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];
    let item = parse_item(&bytes, DEFAULT_CODEPAGE).unwrap();
    assert_eq!(item.variant(), VariantTag::Volume);
    assert_eq!(item.data_size(), 25);
    let volume = item.volume().unwrap();
    assert!(volume.has_name);
    assert_eq!(volume.name_size, 2);
    assert_eq!(volume.name_utf8().unwrap().unwrap(), "C:");
}

#[test]
fn file_entry_readme() {
    init_logging();
    // spec.md's own S3 vector is explicitly marked "partial" and, taken
    // literally, disagrees with its own documented offsets (the
    // is_unicode bit and the position of file_attribute_flags don't
    // agree with where "readme.txt" actually starts). This builds an
    // equivalent fixture that is internally consistent with the
    // documented layout in spec.md §4.3 instead of replaying those bytes
    // verbatim.
    let mut bytes = vec![0x00, 0x00, 0x34, 0x00]; // size placeholder, class_type=0x34 (file entry, unicode)
    bytes.extend_from_slice(&0u32.to_le_bytes()); // file_size
    bytes.extend_from_slice(&0u32.to_le_bytes()); // modification_time
    bytes.extend_from_slice(&0x0020u16.to_le_bytes()); // file_attribute_flags
    for unit in "readme.txt".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes.extend_from_slice(&0u16.to_le_bytes()); // name terminator
    bytes.extend_from_slice(&0u16.to_le_bytes()); // item terminator
    let size = bytes.len() as u16;
    bytes[0..2].copy_from_slice(&size.to_le_bytes());

    let item = parse_item(&bytes, DEFAULT_CODEPAGE).unwrap();
    assert_eq!(item.variant(), VariantTag::FileEntry);
    let file_entry = item.file_entry().unwrap();
    assert_eq!(file_entry.file_size, 0);
    assert_eq!(file_entry.file_attribute_flags, 0x20);
    assert!(file_entry.is_unicode);
    assert_eq!(
        file_entry.name_utf8(item.ascii_codepage()).unwrap(),
        "readme.txt"
    );
}

#[test]
fn zero_size_sentinel_yields_empty_list() {
    init_logging();
    let bytes = [0x00, 0x00, 0xAA, 0xBB];
    let items = parse_item_list(&bytes, DEFAULT_CODEPAGE).unwrap();
    assert!(items.is_empty());
}

#[test]
fn truncated_file_entry_fails() {
    init_logging();
    let bytes = [0x0A, 0x00, 0x32, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    let err = parse_item(&bytes, DEFAULT_CODEPAGE).unwrap_err();
    assert!(matches!(err, Error::Truncated | Error::InvalidItemSize(_)));
}

#[test]
fn unknown_class_type_is_not_an_error() {
    init_logging();
    let bytes = [0x08, 0x00, 0x77, 0x00, 0x11, 0x22, 0x33, 0x44];
    let item = parse_item(&bytes, DEFAULT_CODEPAGE).unwrap();
    assert_eq!(item.variant(), VariantTag::Unknown);
    assert_eq!(item.data_size(), 8);
    assert!(matches!(
        item.root_folder(),
        Err(Error::UnsupportedClassType(0x77))
    ));
}

#[test]
fn chained_list_stops_at_sentinel() {
    init_logging();
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&[
        0x14, 0x00, 0x1F, 0x50, 0x20, 0xD0, 0x4F, 0xE0, 0x3A, 0xEA, 0x10, 0x69, 0xA2, 0xD8, 0x08,
        0x00, 0x2B, 0x30, 0x30, 0x9D,
    ]);
    bytes.extend_from_slice(&[0x00, 0x00]); // sentinel
    bytes.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]); // trailing junk past the sentinel

    let items = parse_item_list(&bytes, DEFAULT_CODEPAGE).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].variant(), VariantTag::RootFolder);
}

/// Property: for a range of short, malformed inputs, parsing never panics
/// and never reports consuming more than was given to it.
#[test]
fn bounds_safety_and_length_accounting_on_malformed_input() {
    init_logging();
    for len in 0..64usize {
        for seed in 0..8u8 {
            let bytes: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(seed + 1)).collect();
            if let Ok(item) = parse_item(&bytes, DEFAULT_CODEPAGE) {
                assert!(item.data_size() <= bytes.len());
            }
        }
    }
}

/// Property: re-decoding a code-paged file-entry name through the UTF-16
/// accessor and back through the original code page recovers the stored
/// bytes (the terminator is never included in either direction).
#[test]
fn code_paged_name_round_trips_through_utf16() {
    init_logging();
    let mut bytes = vec![0x00, 0x00, 0x30, 0x00]; // class_type=0x30 (file entry, not unicode)
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u16.to_le_bytes());
    bytes.extend_from_slice(b"notes.txt\0");
    bytes.extend_from_slice(&0u16.to_le_bytes()); // item terminator
    let size = bytes.len() as u16;
    bytes[0..2].copy_from_slice(&size.to_le_bytes());

    let item = parse_item(&bytes, DEFAULT_CODEPAGE).unwrap();
    let file_entry = item.file_entry().unwrap();
    assert!(!file_entry.is_unicode);

    let utf16 = file_entry.name_utf16(DEFAULT_CODEPAGE).unwrap();
    let utf8 = String::from_utf16(&utf16).unwrap();
    assert_eq!(utf8, "notes.txt");

    let reencoded = shellitem::codepage::utf8_to_bytes(&utf8, DEFAULT_CODEPAGE).unwrap();
    assert_eq!(reencoded, file_entry.name);
}

/// Regression test for the FAT date/time bit layout: the date half must
/// land in the low 16 bits and the time half in the high 16 bits of the
/// packed value, matching `other_examples/h4x0r-tl/shell_item.rs`'s
/// `dos_datetime_to_utc` (which reads `dos_date` before `dos_time`). This
/// drives a non-zero timestamp through the real `parse_item` path rather
/// than constructing a `FatDateTime` directly, so it would have caught the
/// two halves being swapped in `file_entry::parse`.
#[test]
fn modification_time_decodes_with_correct_date_time_order() {
    init_logging();
    use chrono::{Datelike, Timelike};

    let date: u16 = ((2001u16 - 1980) << 9) | (6 << 5) | 15; // 2001-06-15
    let time: u16 = (9 << 11) | (5 << 5) | (20 / 2); // 09:05:20
    let packed = ((time as u32) << 16) | date as u32;

    let mut bytes = vec![0x00, 0x00, 0x30, 0x00]; // class_type=0x30 (file entry, not unicode)
    bytes.extend_from_slice(&0u32.to_le_bytes()); // file_size
    bytes.extend_from_slice(&packed.to_le_bytes()); // modification_time
    bytes.extend_from_slice(&0u16.to_le_bytes());
    bytes.extend_from_slice(b"a.txt\0");
    bytes.extend_from_slice(&0u16.to_le_bytes()); // item terminator
    let size = bytes.len() as u16;
    bytes[0..2].copy_from_slice(&size.to_le_bytes());

    let item = parse_item(&bytes, DEFAULT_CODEPAGE).unwrap();
    let file_entry = item.file_entry().unwrap();
    let decoded = file_entry.modification_datetime().unwrap();
    assert_eq!(decoded.year(), 2001);
    assert_eq!(decoded.month(), 6);
    assert_eq!(decoded.day(), 15);
    assert_eq!(decoded.hour(), 9);
    assert_eq!(decoded.minute(), 5);
    assert_eq!(decoded.second(), 20);
}
