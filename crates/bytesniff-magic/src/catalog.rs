//! Signature catalog storage.
//!
//! A catalog is the persisted form of the signature set: an ordered list
//! of signatures plus metadata. Detection itself happens in
//! [`MagicDetector`](crate::MagicDetector), built from a catalog.

use crate::detector::MagicDetector;
use crate::signature::Signature;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named collection of magic-number signatures.
///
/// Order matters: signatures are registered in catalog order, and when
/// two entries carry the exact same pattern the later one wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog name.
    pub name: String,

    /// Catalog version.
    pub version: String,

    /// Description.
    pub description: Option<String>,

    /// The signatures, in registration order.
    signatures: Vec<Signature>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            name: "unnamed".to_string(),
            version: "1.0".to_string(),
            description: None,
            signatures: Vec::new(),
        }
    }

    /// Create a new catalog with metadata.
    pub fn with_metadata(
        name: impl Into<String>,
        version: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description,
            signatures: Vec::new(),
        }
    }

    /// Add a signature to the catalog.
    pub fn add(&mut self, signature: Signature) {
        self.signatures.push(signature);
    }

    /// Get all signatures in registration order.
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Get the number of signatures.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Append another catalog's signatures to this one.
    ///
    /// Appended entries come after the existing ones, so on an exact
    /// pattern collision the other catalog's entry wins at detection
    /// time.
    pub fn merge(&mut self, other: &Catalog) {
        self.signatures.extend(other.signatures.iter().cloned());
    }

    /// Length in bytes of the longest pattern.
    pub fn max_pattern_len(&self) -> usize {
        self.signatures.iter().map(Signature::len).max().unwrap_or(0)
    }

    /// Build a detector from this catalog.
    pub fn detector(&self) -> MagicDetector {
        MagicDetector::from_catalog(self)
    }

    /// Save the catalog to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a catalog from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
