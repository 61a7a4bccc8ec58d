//! # bytesniff-magic
//!
//! Magic-number signature catalog and file-format detection.
//!
//! This crate maps the leading bytes of a file to a [`FileKind`] by
//! looking up the longest registered signature that prefixes them. It
//! provides:
//! - [`FileKind`]: the format identifiers and their human-readable names
//! - [`Signature`]: one anchored byte pattern tagged with a kind
//! - [`Catalog`]: a named signature collection with JSON load/save
//! - [`MagicDetector`]: the trie-backed detector built from a catalog
//! - [`builtin`]: the catalog of well-known magic numbers that ships
//!   with bytesniff
//!
//! # Example
//!
//! ```
//! use bytesniff_magic::{builtin, FileKind};
//!
//! let detector = builtin::detector();
//!
//! // A JPEG starts with FF D8.
//! let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
//! assert_eq!(detector.detect(&data), Some(FileKind::Jpeg));
//!
//! // Callers should feed at least this many leading bytes to get the
//! // most specific answer.
//! let needed = detector.max_prefix_len();
//! assert!(needed >= 4);
//! ```

mod catalog;
mod detector;
mod kind;
mod signature;
pub mod builtin;

pub use catalog::Catalog;
pub use detector::{Detection, MagicDetector};
pub use kind::FileKind;
pub use signature::Signature;

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum MagicError {
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MagicError>;
