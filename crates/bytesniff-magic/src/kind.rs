//! File-format identifiers.

use serde::{Deserialize, Serialize};

/// A recognized file format.
///
/// This is the payload stored in the detector's trie; the matching
/// engine never inspects it. "Unknown" is deliberately not a variant:
/// detection reports absence through `Option` so the identifier space
/// stays open to new formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// JPEG image.
    Jpeg,
    /// TIFF image, big-endian byte order.
    TiffBe,
    /// TIFF image, little-endian byte order.
    TiffLe,
    /// Canon Raw version 2.
    Cr2,
    /// Photoshop Document, Adobe Photoshop's native format.
    Psd,
    /// Portable Network Graphics image.
    Png,
    /// Windows bitmap image.
    Bmp,
    /// Graphics Interchange Format image.
    Gif,
    /// Computer icon in the ICO container.
    Ico,
    /// PCX paintbrush image.
    Pcx,
    /// Sony Alpha Raw.
    Arw,
    /// Camera Image File Format (Canon).
    Crw,
    /// Nikon Electronic Format.
    Nef,
    /// Olympus Raw.
    Orf,
    /// Fujifilm Raw.
    Raf,
    /// Panasonic Raw.
    Rw2,
    /// QuickTime movie.
    Mov,
    /// MP3 audio with an ID3 tag.
    Mp3,
    /// PostScript document.
    Ps,
    /// Portable Document Format.
    Pdf,
    /// DjVu document.
    Djvu,
    /// ZIP archive.
    Zip,
    /// Gzip-compressed data.
    Gzip,
    /// Apple Disk Image.
    Dmg,
    /// LZW-compressed data (compress).
    Lzw,
    /// LZH-compressed data.
    Lzh,
    /// Bzip2-compressed data.
    Bz2,
    /// DOS/Windows executable.
    Exe,
}

impl FileKind {
    /// Human-readable name for display to users.
    pub fn name(&self) -> &'static str {
        match self {
            FileKind::Jpeg => "JPEG",
            FileKind::TiffBe => "TIFF, Big Endian",
            FileKind::TiffLe => "TIFF, Little Endian",
            FileKind::Cr2 => "Canon Raw",
            FileKind::Psd => "Photoshop Document",
            FileKind::Png => "PNG image",
            FileKind::Bmp => "BMP",
            FileKind::Gif => "GIF",
            FileKind::Ico => "Icon",
            FileKind::Pcx => "PCX",
            FileKind::Arw => "Sony Alpha Raw",
            FileKind::Crw => "Camera Image File Format",
            FileKind::Nef => "Nikon Electronic Format",
            FileKind::Orf => "Olympus RAW",
            FileKind::Raf => "FUJI Raw",
            FileKind::Rw2 => "Panasonic RAW",
            FileKind::Mov => "Quick Time Movie",
            FileKind::Mp3 => "MP3",
            FileKind::Ps => "PostScript",
            FileKind::Pdf => "PDF document",
            FileKind::Djvu => "DjVu document",
            FileKind::Zip => "ZIP archive",
            FileKind::Gzip => "GZIP archive",
            FileKind::Dmg => "Apple Disk Image",
            FileKind::Lzw => "LZW compressed archive",
            FileKind::Lzh => "LZH compressed archive",
            FileKind::Bz2 => "Bzip2 compressed archive",
            FileKind::Exe => "DOS executable",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_name() {
        assert_eq!(FileKind::Jpeg.to_string(), "JPEG");
        assert_eq!(FileKind::TiffLe.to_string(), "TIFF, Little Endian");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&FileKind::TiffBe).unwrap();
        assert_eq!(json, "\"tiff_be\"");

        let kind: FileKind = serde_json::from_str("\"gzip\"").unwrap();
        assert_eq!(kind, FileKind::Gzip);
    }
}
