//! Error types returned by this crate.
//!
//! Every decode operation is infallible with respect to memory safety: a
//! malformed or truncated shell item never causes an out-of-bounds read, it
//! returns one of these variants instead.

use core::fmt;

/// The error type for all fallible operations in this crate.
#[derive(Debug)]
pub enum Error {
    /// A caller passed a null, empty, or otherwise mistyped argument.
    InvalidArgument(&'static str),
    /// A read would have gone past the end of the input buffer.
    Truncated,
    /// The outer `size` field of an item is `< 2` or larger than the
    /// remaining input.
    InvalidItemSize(u16),
    /// An extension block's header failed its `size`/signature checks.
    InvalidExtensionBlock(&'static str),
    /// A typed accessor was called on an `Item` of the wrong variant.
    UnsupportedClassType(u8),
    /// A collaborator (code page / Unicode conversion) failed.
    Runtime(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::Truncated => write!(f, "read past the end of the shell item buffer"),
            Error::InvalidItemSize(size) => {
                write!(f, "invalid item size {} (outer size field)", size)
            }
            Error::InvalidExtensionBlock(msg) => write!(f, "invalid extension block: {}", msg),
            Error::UnsupportedClassType(class_type) => write!(
                f,
                "accessor does not support class type 0x{:02x}",
                class_type
            ),
            Error::Runtime(msg) => write!(f, "runtime error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<scroll::Error> for Error {
    fn from(err: scroll::Error) -> Self {
        match err {
            scroll::Error::TooBig { .. } | scroll::Error::BadOffset(_) => Error::Truncated,
            other => Error::Runtime(other.to_string()),
        }
    }
}

/// A specialized [`Result`](core::result::Result) for this crate's
/// operations.
pub type Result<T> = core::result::Result<T, Error>;
