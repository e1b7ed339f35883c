//! The Item Classifier / Dispatcher (component D) and Typed Accessors
//! (component E).
//!
//! Grounded in `goblin::pe::PE::parse`'s layered classify-then-dispatch
//! pattern: inspect a small header, pick a variant, delegate to that
//! variant's own decoder.

pub mod compressed_folder;
pub mod control_panel;
pub mod delegate;
pub mod file_entry;
pub mod network_location;
pub mod root_folder;
pub mod users_property_view;
pub mod uri;
pub mod volume;

use log::{debug, trace};

use crate::codepage::CodePage;
use crate::error::{Error, Result};

pub use compressed_folder::CompressedFolderValues;
pub use control_panel::ControlPanelValues;
pub use delegate::DelegateValues;
pub use file_entry::FileEntryValues;
pub use network_location::NetworkLocationValues;
pub use root_folder::RootFolderValues;
pub use users_property_view::UsersPropertyViewValues;
pub use uri::UriValues;
pub use volume::VolumeValues;

const FAMILY_MASK: u8 = 0x70;
const FAMILY_ROOT_FOLDER: u8 = 0x10;
const FAMILY_VOLUME: u8 = 0x20;
const FAMILY_FILE_ENTRY: u8 = 0x30;
const FAMILY_NETWORK_LOCATION: u8 = 0x40;
const FAMILY_COMPRESSED_FOLDER: u8 = 0x50;
const FAMILY_URI: u8 = 0x60;
const FAMILY_CONTROL_PANEL: u8 = 0x70;

/// Which shape an [`Item`]'s value record holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantTag {
    RootFolder,
    Volume,
    FileEntry,
    NetworkLocation,
    CompressedFolder,
    ControlPanel,
    Uri,
    UsersPropertyView,
    Delegate,
    Unknown,
}

/// The tagged-sum value record a decoded [`Item`] carries. Replaces the
/// source's opaque-pointer-plus-class-type-cast polymorphism, per
/// `spec.md` §9.
#[derive(Debug, Clone)]
pub enum ItemValue {
    RootFolder(RootFolderValues),
    Volume(VolumeValues),
    FileEntry(FileEntryValues),
    NetworkLocation(NetworkLocationValues),
    CompressedFolder(CompressedFolderValues),
    ControlPanel(ControlPanelValues),
    Uri(UriValues),
    UsersPropertyView(UsersPropertyViewValues),
    Delegate(DelegateValues),
    Unknown,
}

/// A decoded Windows shell item.
///
/// `Item` owns every variable-length field copied out of the input slice
/// at decode time (see `spec.md` §5); it does not borrow the buffer it was
/// parsed from, so it remains valid after that buffer is freed.
#[derive(Debug, Clone)]
pub struct Item {
    class_type: u8,
    variant: VariantTag,
    value: ItemValue,
    ascii_codepage: CodePage,
    data_size: usize,
}

macro_rules! accessor {
    ($name:ident, $variant:ident, $values:ty) => {
        pub fn $name(&self) -> Result<&$values> {
            match &self.value {
                ItemValue::$variant(v) => Ok(v),
                _ => Err(Error::UnsupportedClassType(self.class_type)),
            }
        }
    };
}

impl Item {
    pub fn variant(&self) -> VariantTag {
        self.variant
    }

    pub fn class_type(&self) -> u8 {
        self.class_type
    }

    pub fn ascii_codepage(&self) -> CodePage {
        self.ascii_codepage
    }

    /// Changes the code page used by subsequent string accessors. Does
    /// not reparse anything already decoded.
    pub fn set_ascii_codepage(&mut self, codepage: CodePage) {
        self.ascii_codepage = codepage;
    }

    pub fn data_size(&self) -> usize {
        self.data_size
    }

    pub fn value(&self) -> &ItemValue {
        &self.value
    }

    accessor!(root_folder, RootFolder, RootFolderValues);
    accessor!(volume, Volume, VolumeValues);
    accessor!(file_entry, FileEntry, FileEntryValues);
    accessor!(network_location, NetworkLocation, NetworkLocationValues);
    accessor!(compressed_folder, CompressedFolder, CompressedFolderValues);
    accessor!(control_panel, ControlPanel, ControlPanelValues);
    accessor!(uri, Uri, UriValues);
    accessor!(
        users_property_view,
        UsersPropertyView,
        UsersPropertyViewValues
    );
    accessor!(delegate, Delegate, DelegateValues);
}

/// Decodes a single shell item from the start of `bytes`. `bytes` must
/// start at the outer 2-byte size field. Does not handle the `0x0000`
/// end-of-list sentinel — use [`parse_item_list`] for chained input.
pub fn parse_item(bytes: &[u8], default_codepage: CodePage) -> Result<Item> {
    if bytes.len() < 2 {
        return Err(Error::Truncated);
    }
    let size = u16::from_le_bytes([bytes[0], bytes[1]]);
    if size < 2 || size as usize > bytes.len() {
        return Err(Error::InvalidItemSize(size));
    }

    let item_bytes = &bytes[2..size as usize];
    let class_type = *item_bytes.first().ok_or(Error::Truncated)?;
    debug!("shell item: size={} class_type=0x{:02x}", size, class_type);

    // Special cases outside the 0x70 family mask, per spec.md §4.4.
    if class_type == users_property_view::CLASS_TYPE {
        if let Some(values) = users_property_view::parse(item_bytes)? {
            return Ok(Item {
                class_type,
                variant: VariantTag::UsersPropertyView,
                value: ItemValue::UsersPropertyView(values),
                ascii_codepage: default_codepage,
                data_size: size as usize,
            });
        }
    }
    if class_type == delegate::CLASS_TYPE {
        if let Some(values) = delegate::parse(item_bytes)? {
            return Ok(Item {
                class_type,
                variant: VariantTag::Delegate,
                value: ItemValue::Delegate(values),
                ascii_codepage: default_codepage,
                data_size: size as usize,
            });
        }
    }

    let family = class_type & FAMILY_MASK;
    trace!("dispatching on family 0x{:02x}", family);
    let decoded = match family {
        FAMILY_ROOT_FOLDER => root_folder::parse(item_bytes)?.map(|v| {
            (VariantTag::RootFolder, ItemValue::RootFolder(v))
        }),
        FAMILY_VOLUME => volume::parse(item_bytes, default_codepage)?
            .map(|v| (VariantTag::Volume, ItemValue::Volume(v))),
        FAMILY_FILE_ENTRY => file_entry::parse(item_bytes)?
            .map(|v| (VariantTag::FileEntry, ItemValue::FileEntry(v))),
        FAMILY_NETWORK_LOCATION => network_location::parse(item_bytes)?
            .map(|v| (VariantTag::NetworkLocation, ItemValue::NetworkLocation(v))),
        FAMILY_COMPRESSED_FOLDER => compressed_folder::parse(item_bytes)?.map(|v| {
            (
                VariantTag::CompressedFolder,
                ItemValue::CompressedFolder(v),
            )
        }),
        FAMILY_URI => uri::parse(item_bytes)?.map(|v| (VariantTag::Uri, ItemValue::Uri(v))),
        FAMILY_CONTROL_PANEL => control_panel::parse(item_bytes)?
            .map(|v| (VariantTag::ControlPanel, ItemValue::ControlPanel(v))),
        _ => None,
    };

    let (variant, value) = decoded.unwrap_or((VariantTag::Unknown, ItemValue::Unknown));

    Ok(Item {
        class_type,
        variant,
        value,
        ascii_codepage: default_codepage,
        data_size: size as usize,
    })
}

/// Decodes a chained list of shell items, stopping at the `0x0000`
/// end-of-list sentinel or the end of `bytes`, whichever comes first. An
/// error decoding any item aborts the whole list (`spec.md` §7) — shell
/// item chains carry no framing checkpoints to safely resynchronize from.
pub fn parse_item_list(bytes: &[u8], default_codepage: CodePage) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    let mut offset = 0usize;

    while bytes.len() - offset >= 2 {
        let size = u16::from_le_bytes([bytes[offset], bytes[offset + 1]]);
        if size == 0 {
            break;
        }
        let item = parse_item(&bytes[offset..], default_codepage)?;
        offset += item.data_size();
        items.push(item);
    }

    Ok(items)
}
