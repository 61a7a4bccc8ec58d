//! Magic-number signature definition.
//!
//! A signature is one byte pattern anchored at offset 0, tagged with the
//! file kind it identifies. Patterns are plain literals: no wildcards,
//! no masks, no offsets.

use crate::kind::FileKind;
use crate::{MagicError, Result};
use serde::{Deserialize, Serialize};

/// A magic-number signature.
///
/// In JSON, the pattern is written as space-separated hex bytes, e.g.
/// `{"kind": "jpeg", "pattern": "FF D8"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The format this signature identifies.
    pub kind: FileKind,

    /// The literal bytes expected at the start of the file.
    #[serde(with = "hex_pattern")]
    pattern: Vec<u8>,
}

impl Signature {
    /// Create a signature from an ordered list of byte fragments.
    ///
    /// The fragments are concatenated; splitting a pattern into a marker
    /// literal plus version bytes is purely for readability at the call
    /// site.
    pub fn new<I, F>(kind: FileKind, fragments: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        let mut pattern = Vec::new();
        for fragment in fragments {
            pattern.extend_from_slice(fragment.as_ref());
        }
        Self { kind, pattern }
    }

    /// Parse a signature from a hex string.
    ///
    /// Format: "FF D8", two hex digits per byte, space-separated.
    pub fn from_hex(kind: FileKind, s: &str) -> Result<Self> {
        Ok(Self {
            kind,
            pattern: parse_hex(s)?,
        })
    }

    /// The literal pattern bytes.
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// The pattern length in bytes.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Check if the pattern is empty.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Convert the pattern to its hex string representation.
    pub fn to_hex_string(&self) -> String {
        self.pattern
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

/// Parse space-separated hex bytes.
fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    for part in s.split_whitespace() {
        if part.len() != 2 {
            return Err(MagicError::InvalidPattern(format!(
                "invalid hex byte: {part}"
            )));
        }
        let byte = u8::from_str_radix(part, 16)
            .map_err(|_| MagicError::InvalidPattern(format!("invalid hex byte: {part}")))?;
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Serde adapter storing patterns as hex strings.
mod hex_pattern {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(pattern: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let hex = pattern
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ");
        serializer.serialize_str(&hex)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}
