//! # bytesniff-trie
//!
//! Byte-keyed prefix trie with longest-match lookup.
//!
//! This crate is the matching engine behind magic-number file-format
//! detection: signatures are registered as byte keys, and a lookup walks
//! the trie as deep as the input allows, returning the payload of the
//! deepest signature that is a prefix of the input. Specificity beats
//! generality: when one registered key extends another, an input carrying
//! the longer key resolves to the longer key's payload.
//!
//! The trie is generic over its payload and never inspects it.
//!
//! # Example
//!
//! ```
//! use bytesniff_trie::ByteTrie;
//!
//! let mut trie = ByteTrie::new();
//! // Keys may be registered as several fragments; only their
//! // concatenation matters.
//! trie.insert("tiff", [b"II".as_slice(), &[0x2A, 0x00]]);
//! trie.insert("raw", [b"II".as_slice(), &[0x2A, 0x00, 0x08, 0x00]]);
//!
//! let hit = trie.longest_match(&[0x49, 0x49, 0x2A, 0x00, 0x08, 0x00]).unwrap();
//! assert_eq!(*hit.payload, "raw");
//! assert_eq!(trie.max_depth(), 6);
//! ```

mod trie;

pub use trie::{ByteTrie, Match};
