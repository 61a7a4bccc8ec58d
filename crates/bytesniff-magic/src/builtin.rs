//! Builtin signature catalog.
//!
//! These are the magic numbers for common image, camera-raw, document,
//! media, and archive formats that ship with bytesniff.
//!
//! Reference: <https://en.wikipedia.org/wiki/List_of_file_signatures>

use crate::catalog::Catalog;
use crate::detector::MagicDetector;
use crate::kind::FileKind;
use crate::signature::Signature;

/// Build the builtin catalog.
pub fn catalog() -> Catalog {
    let mut catalog = Catalog::with_metadata(
        "builtin",
        "1.0",
        Some("Builtin magic-number signatures".to_string()),
    );

    add_image_formats(&mut catalog);
    add_camera_raw_formats(&mut catalog);
    add_media_formats(&mut catalog);
    add_document_formats(&mut catalog);
    add_archive_formats(&mut catalog);

    catalog
}

/// Build a detector over the builtin catalog.
pub fn detector() -> MagicDetector {
    MagicDetector::from_catalog(&catalog())
}

fn add_image_formats(catalog: &mut Catalog) {
    catalog.add(Signature::new(FileKind::Jpeg, [&[0xFF, 0xD8]]));

    // TIFF: byte-order marker, then the magic word in that byte order.
    catalog.add(Signature::new(
        FileKind::TiffLe,
        [b"II".as_slice(), &[0x2A, 0x00]],
    ));
    catalog.add(Signature::new(
        FileKind::TiffBe,
        [b"MM".as_slice(), &[0x00, 0x2A]],
    ));

    catalog.add(Signature::new(FileKind::Psd, [b"8BPS"]));
    catalog.add(Signature::new(
        FileKind::Png,
        [&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]],
    ));
    catalog.add(Signature::new(FileKind::Bmp, [b"BM"]));

    catalog.add(Signature::new(FileKind::Gif, [b"GIF87a"]));
    // TODO: the GIF89a literal mapping to Bmp looks like a copy/paste
    // slip, but changing it changes what every GIF89a file reports.
    // Confirm against real inputs before touching it.
    catalog.add(Signature::new(FileKind::Bmp, [b"GIF89a"]));

    catalog.add(Signature::new(FileKind::Ico, [&[0x00, 0x00, 0x01, 0x00]]));

    // PCX: fixed marker, then the version byte, then the RLE flag.
    catalog.add(Signature::new(FileKind::Pcx, [&[0x0A, 0x00, 0x01]]));
    catalog.add(Signature::new(FileKind::Pcx, [&[0x0A, 0x02, 0x01]]));
    catalog.add(Signature::new(FileKind::Pcx, [&[0x0A, 0x03, 0x01]]));
    catalog.add(Signature::new(FileKind::Pcx, [&[0x0A, 0x05, 0x01]]));
}

fn add_camera_raw_formats(catalog: &mut Catalog) {
    // CR2 is a TIFF container: the TIFF LE signature, the IFD offset,
    // then the "CR" marker.
    catalog.add(Signature::new(
        FileKind::Cr2,
        [
            b"II*".as_slice(),
            &[0x00, 0x10, 0x00, 0x00, 0x00],
            b"CR",
        ],
    ));

    // ARW extends the TIFF LE signature with its fixed IFD offset.
    catalog.add(Signature::new(
        FileKind::Arw,
        [b"II".as_slice(), &[0x2A, 0x00, 0x08, 0x00]],
    ));

    catalog.add(Signature::new(
        FileKind::Crw,
        [b"II".as_slice(), &[0x1A, 0x00, 0x00, 0x00], b"HEAPCCDR"],
    ));

    // NEF extends the TIFF BE signature.
    catalog.add(Signature::new(
        FileKind::Nef,
        [
            b"MM".as_slice(),
            &[0x00, 0x2A, 0x00, 0x00, 0x00, 0x80, 0x00],
        ],
    ));

    // Olympus raw comes in two flavors.
    catalog.add(Signature::new(
        FileKind::Orf,
        [b"IIRO".as_slice(), &[0x08, 0x00]],
    ));
    catalog.add(Signature::new(
        FileKind::Orf,
        [b"IIRS".as_slice(), &[0x08, 0x00]],
    ));

    catalog.add(Signature::new(FileKind::Raf, [b"FUJIFILMCCD-RAW"]));

    // RW2 shares the "II" marker with TIFF but uses its own magic word.
    catalog.add(Signature::new(
        FileKind::Rw2,
        [b"II".as_slice(), &[0x55, 0x00]],
    ));
}

fn add_media_formats(catalog: &mut Catalog) {
    catalog.add(Signature::new(
        FileKind::Mov,
        [[0x00, 0x00, 0x00, 0x18].as_slice(), b"ftypqt  "],
    ));
    catalog.add(Signature::new(FileKind::Mp3, [b"ID3"]));
}

fn add_document_formats(catalog: &mut Catalog) {
    catalog.add(Signature::new(FileKind::Ps, [b"%!PS"]));
    catalog.add(Signature::new(FileKind::Pdf, [b"%PDF"]));
    catalog.add(Signature::new(FileKind::Djvu, [b"AT&TFORM"]));
}

fn add_archive_formats(catalog: &mut Catalog) {
    catalog.add(Signature::new(
        FileKind::Zip,
        [b"PK".as_slice(), &[0x03, 0x04]],
    ));
    catalog.add(Signature::new(FileKind::Gzip, [&[0x1F, 0x8B]]));
    catalog.add(Signature::new(FileKind::Lzw, [&[0x1F, 0x9D]]));
    catalog.add(Signature::new(FileKind::Lzh, [&[0x1F, 0xA0]]));
    catalog.add(Signature::new(FileKind::Bz2, [b"BZh"]));
    catalog.add(Signature::new(FileKind::Exe, [b"MZ"]));

    // Apple disk images show up with several distinct leading byte runs
    // in the wild (zlib stream variants). TODO: investigate whether these
    // three cover current macOS output.
    catalog.add(Signature::new(
        FileKind::Dmg,
        [&[0x78, 0xDA, 0x73, 0x0D, 0x62, 0x62, 0x60]],
    ));
    catalog.add(Signature::new(
        FileKind::Dmg,
        [&[0x78, 0xDA, 0x63, 0x60, 0x18, 0x05]],
    ));
    catalog.add(Signature::new(
        FileKind::Dmg,
        [&[0x78, 0x01, 0x63, 0x60, 0x18, 0x05]],
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Catalog Shape Tests ====================

    #[test]
    fn test_builtin_counts() {
        let catalog = catalog();
        // 4 PCX + 2 ORF + 3 DMG variants among 28 kinds.
        assert_eq!(catalog.len(), 35);

        let detector = catalog.detector();
        // Every pattern is distinct, so none collapse in the trie.
        assert_eq!(detector.len(), 35);
    }

    #[test]
    fn test_builtin_max_prefix_len() {
        // The Fujifilm signature is the longest at 15 bytes.
        assert_eq!(detector().max_prefix_len(), 15);
    }

    // ==================== Detection Tests ====================

    #[test]
    fn test_detect_common_formats() {
        let detector = detector();

        assert_eq!(
            detector.detect(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(FileKind::Jpeg)
        );
        assert_eq!(
            detector.detect(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00]),
            Some(FileKind::Png)
        );
        assert_eq!(detector.detect(b"%PDF-1.7"), Some(FileKind::Pdf));
        assert_eq!(detector.detect(b"BZh91AY"), Some(FileKind::Bz2));
        assert_eq!(
            detector.detect(&[0x50, 0x4B, 0x03, 0x04, 0x14, 0x00]),
            Some(FileKind::Zip)
        );
    }

    #[test]
    fn test_detect_tiff_family_specificity() {
        let detector = detector();

        // Plain TIFF LE.
        assert_eq!(
            detector.detect(&[0x49, 0x49, 0x2A, 0x00, 0x12, 0x00]),
            Some(FileKind::TiffLe)
        );
        // ARW extends TIFF LE; the longer signature wins.
        assert_eq!(
            detector.detect(&[0x49, 0x49, 0x2A, 0x00, 0x08, 0x00]),
            Some(FileKind::Arw)
        );
        // CR2 extends TIFF LE even further.
        assert_eq!(
            detector.detect(&[0x49, 0x49, 0x2A, 0x00, 0x10, 0x00, 0x00, 0x00, 0x43, 0x52, 0x02, 0x00]),
            Some(FileKind::Cr2)
        );
        // NEF extends TIFF BE.
        assert_eq!(
            detector.detect(&[0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x80, 0x00]),
            Some(FileKind::Nef)
        );
        // A TIFF BE that diverges from NEF stays TIFF BE.
        assert_eq!(
            detector.detect(&[0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08]),
            Some(FileKind::TiffBe)
        );
    }

    #[test]
    fn test_detect_gif_mis_tag_preserved() {
        let detector = detector();

        assert_eq!(detector.detect(b"GIF87a"), Some(FileKind::Gif));
        // The GIF89a literal is registered under Bmp; see the catalog.
        assert_eq!(detector.detect(b"GIF89a"), Some(FileKind::Bmp));
    }

    #[test]
    fn test_detect_multi_signature_formats() {
        let detector = detector();

        for version in [0x00, 0x02, 0x03, 0x05] {
            assert_eq!(
                detector.detect(&[0x0A, version, 0x01, 0xFF]),
                Some(FileKind::Pcx),
                "PCX version byte {version:#04x}"
            );
        }

        assert_eq!(
            detector.detect(&[0x78, 0xDA, 0x63, 0x60, 0x18, 0x05]),
            Some(FileKind::Dmg)
        );
        assert_eq!(
            detector.detect(&[0x78, 0x01, 0x63, 0x60, 0x18, 0x05]),
            Some(FileKind::Dmg)
        );
    }

    #[test]
    fn test_detect_compress_family_disambiguated() {
        let detector = detector();

        // Gzip, LZW, and LZH all start with 0x1F and split on byte two.
        assert_eq!(detector.detect(&[0x1F, 0x8B, 0x08]), Some(FileKind::Gzip));
        assert_eq!(detector.detect(&[0x1F, 0x9D, 0x90]), Some(FileKind::Lzw));
        assert_eq!(detector.detect(&[0x1F, 0xA0, 0x00]), Some(FileKind::Lzh));
        assert_eq!(detector.detect(&[0x1F, 0x00]), None);
    }

    #[test]
    fn test_detect_unknown_inputs() {
        let detector = detector();

        assert_eq!(detector.detect(&[]), None);
        assert_eq!(detector.detect(&[0x00]), None);
        // An ELF header is deliberately not in the catalog.
        assert_eq!(detector.detect(&[0x7F, 0x45, 0x4C, 0x46]), None);
    }

    #[test]
    fn test_catalog_json_roundtrip_preserves_detection() {
        let original = catalog();
        let json = original.to_json().unwrap();
        let reloaded = Catalog::from_json(&json).unwrap();

        assert_eq!(reloaded.len(), original.len());

        let detector = reloaded.detector();
        assert_eq!(detector.detect(&[0xFF, 0xD8]), Some(FileKind::Jpeg));
        assert_eq!(detector.detect(b"GIF89a"), Some(FileKind::Bmp));
        assert_eq!(detector.max_prefix_len(), 15);
    }
}
