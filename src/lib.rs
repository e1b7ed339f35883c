//! A bounds-safe decoder for Windows Shell Item binary structures: the
//! records embedded in `.lnk` files, jump lists, and shellbag registry
//! values that each describe one hop of a shell namespace path (a drive,
//! a folder, a file, a network share, a URI, ...).
//!
//! ```no_run
//! fn run(bytes: &[u8]) -> shellitem::Result<()> {
//!     let item = shellitem::parse_item(bytes, shellitem::codepage::DEFAULT_CODEPAGE)?;
//!     if let shellitem::VariantTag::FileEntry = item.variant() {
//!         let file_entry = item.file_entry()?;
//!         println!("{}", file_entry.name_utf8(item.ascii_codepage())?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! This crate is a pure decoder: it has no opinion on where the bytes
//! came from and performs no I/O. Parsing a `.lnk` file or a jump list is
//! the caller's job; this crate only understands the shell-item records
//! once they've been extracted.

pub mod codepage;
pub mod cursor;
pub mod error;
pub mod extension_block;
pub mod fat_time;
pub mod guid;
pub mod shell_item;

pub use codepage::CodePage;
pub use error::{Error, Result};
pub use extension_block::ExtensionBlockValues;
pub use fat_time::FatDateTime;
pub use guid::Guid;
pub use shell_item::{
    parse_item, parse_item_list, CompressedFolderValues, ControlPanelValues, DelegateValues,
    FileEntryValues, Item, ItemValue, NetworkLocationValues, RootFolderValues,
    UsersPropertyViewValues, UriValues, VariantTag, VolumeValues,
};
