//! Trie-backed format detection.
//!
//! The detector is populated once from a catalog and is read-only
//! afterwards: every query takes `&self`, so a built detector can be
//! shared across threads without coordination.

use crate::catalog::Catalog;
use crate::kind::FileKind;
use crate::signature::Signature;
use bytesniff_trie::ByteTrie;

/// Result of a detection, with the matched signature length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// The detected format.
    pub kind: FileKind,
    /// Length in bytes of the signature that matched.
    pub len: usize,
}

/// Magic-number detector.
///
/// Maps the leading bytes of a file to the [`FileKind`] of the longest
/// registered signature prefixing them. When one signature literally
/// extends another (Sony ARW's `49 49 2A 00 08 00` extends TIFF's
/// `49 49 2A 00`), the more specific one wins.
#[derive(Debug, Clone, Default)]
pub struct MagicDetector {
    trie: ByteTrie<FileKind>,
}

impl MagicDetector {
    /// Create an empty detector.
    pub fn new() -> Self {
        Self {
            trie: ByteTrie::new(),
        }
    }

    /// Build a detector from a catalog.
    ///
    /// Signatures are registered in catalog order; on an exact pattern
    /// collision the later entry silently replaces the earlier one.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut detector = Self::new();
        for signature in catalog.signatures() {
            detector.add(signature);
        }
        detector
    }

    /// Register one signature.
    pub fn add(&mut self, signature: &Signature) {
        self.trie.insert(signature.kind, [signature.pattern()]);
    }

    /// Register a signature given as an ordered list of byte fragments.
    ///
    /// The fragments are concatenated into one pattern; the split is
    /// caller convenience only.
    pub fn add_fragments<I, F>(&mut self, kind: FileKind, fragments: I)
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        self.trie.insert(kind, fragments);
    }

    /// Detect the format of `data` from its leading bytes.
    ///
    /// Returns `None` when no registered signature prefixes the input;
    /// that is a valid classification ("unknown"), not an error.
    pub fn detect(&self, data: &[u8]) -> Option<FileKind> {
        self.trie.longest_match(data).map(|m| *m.payload)
    }

    /// Detect the format of `data`, reporting the matched length too.
    pub fn detect_match(&self, data: &[u8]) -> Option<Detection> {
        self.trie.longest_match(data).map(|m| Detection {
            kind: *m.payload,
            len: m.depth,
        })
    }

    /// Number of leading bytes a caller must supply to guarantee the
    /// most specific answer.
    ///
    /// Reading fewer bytes than this may resolve a file to a shorter
    /// signature that happens to prefix the truncated input.
    pub fn max_prefix_len(&self) -> usize {
        self.trie.max_depth()
    }

    /// Number of distinct registered patterns.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Check if no signature has been registered.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiff_family() -> MagicDetector {
        let mut detector = MagicDetector::new();
        detector.add_fragments(FileKind::TiffLe, [b"II".as_slice(), &[0x2A, 0x00]]);
        detector.add_fragments(FileKind::Arw, [b"II".as_slice(), &[0x2A, 0x00, 0x08, 0x00]]);
        detector.add_fragments(FileKind::Rw2, [b"II".as_slice(), &[0x55, 0x00]]);
        detector
    }

    #[test]
    fn test_detect_most_specific() {
        let detector = tiff_family();

        let tiff = [0x49, 0x49, 0x2A, 0x00, 0x00, 0x00];
        assert_eq!(detector.detect(&tiff), Some(FileKind::TiffLe));

        let arw = [0x49, 0x49, 0x2A, 0x00, 0x08, 0x00];
        assert_eq!(detector.detect(&arw), Some(FileKind::Arw));
    }

    #[test]
    fn test_detect_match_reports_length() {
        let detector = tiff_family();
        let arw = [0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x01];

        let detection = detector.detect_match(&arw).unwrap();
        assert_eq!(detection.kind, FileKind::Arw);
        assert_eq!(detection.len, 6);
    }

    #[test]
    fn test_detect_unknown() {
        let detector = tiff_family();
        assert_eq!(detector.detect(&[0x00, 0x01, 0x02]), None);
        assert_eq!(detector.detect(&[]), None);
    }

    #[test]
    fn test_detect_truncated_signature() {
        let detector = tiff_family();
        // Three bytes of the four-byte TIFF signature: nothing shorter is
        // registered along that path, so this is unknown.
        assert_eq!(detector.detect(&[0x49, 0x49, 0x2A]), None);
    }

    #[test]
    fn test_from_catalog_preserves_order() {
        let mut catalog = Catalog::new();
        catalog.add(Signature::from_hex(FileKind::Gif, "47 49 46").unwrap());
        catalog.add(Signature::from_hex(FileKind::Bmp, "47 49 46").unwrap());

        let detector = MagicDetector::from_catalog(&catalog);
        assert_eq!(detector.detect(&[0x47, 0x49, 0x46]), Some(FileKind::Bmp));
        assert_eq!(detector.len(), 1);
    }

    #[test]
    fn test_shared_queries_across_threads() {
        let detector = tiff_family();

        // Once populated, queries take &self only; a shared detector
        // serves concurrent lookups without coordination.
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(
                        detector.detect(&[0x49, 0x49, 0x2A, 0x00, 0x08, 0x00]),
                        Some(FileKind::Arw)
                    );
                    assert_eq!(detector.detect(&[0xAB]), None);
                });
            }
        });
    }

    #[test]
    fn test_max_prefix_len() {
        let detector = tiff_family();
        assert_eq!(detector.max_prefix_len(), 6);

        let empty = MagicDetector::new();
        assert_eq!(empty.max_prefix_len(), 0);
        assert!(empty.is_empty());
    }
}
