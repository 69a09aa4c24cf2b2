//! PNG header sniffing
//!
//! Only the signature and the IHDR width/height are read; nothing else in
//! the file is looked at.

use nom::{
    bytes::complete::{tag, take},
    number::complete::be_u32,
    IResult,
};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Bytes needed to reach the end of the IHDR height field
pub const HEADER_LEN: usize = 24;

/// Natural size of an image in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn is_landscape(&self) -> bool {
        self.height < self.width
    }
}

/// Parse signature, IHDR chunk length and type, then width and height
pub fn parse_png_header(input: &[u8]) -> IResult<&[u8], ImageSize> {
    let (input, _) = tag(&PNG_SIGNATURE[..])(input)?;
    let (input, _) = take(8usize)(input)?;
    let (input, width) = be_u32(input)?;
    let (input, height) = be_u32(input)?;
    Ok((input, ImageSize { width, height }))
}

/// Read the size of a PNG file from its header.
///
/// Returns `None` for anything that isn't a usable PNG: missing or
/// unreadable file, short file, wrong signature, or a zero dimension.
pub fn read_image_size(path: &Path) -> Option<ImageSize> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("Cannot open {}: {}", path.display(), e);
            return None;
        }
    };

    let mut buffer = Vec::with_capacity(HEADER_LEN);
    if let Err(e) = file.take(HEADER_LEN as u64).read_to_end(&mut buffer) {
        log::debug!("Cannot read {}: {}", path.display(), e);
        return None;
    }

    match parse_png_header(&buffer) {
        Ok((_, size)) if size.width > 0 && size.height > 0 => Some(size),
        Ok(_) => {
            log::debug!("{} has a zero dimension, ignoring it", path.display());
            None
        }
        Err(_) => {
            log::debug!("{} is not a PNG file", path.display());
            None
        }
    }
}

/// Build a minimal PNG header for the given size
///
/// Enough for [`read_image_size`]; used by tests to fake artwork.
#[doc(hidden)]
pub fn png_header(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_LEN);
    bytes.extend_from_slice(&PNG_SIGNATURE);
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_header() {
        let bytes = png_header(380, 532);
        let (rest, size) = parse_png_header(&bytes).unwrap();
        assert!(rest.is_empty());
        assert_eq!(size, ImageSize { width: 380, height: 532 });
        assert!(!size.is_landscape());
    }

    #[test]
    fn test_wrong_signature() {
        let mut bytes = png_header(10, 10);
        bytes[1] = b'J';
        assert!(parse_png_header(&bytes).is_err());
    }

    #[test]
    fn test_short_header() {
        let bytes = png_header(10, 10);
        assert!(parse_png_header(&bytes[..20]).is_err());
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        let mut bytes = png_header(640, 320);
        bytes.extend_from_slice(&[0u8; 32]);
        fs::write(&path, bytes).unwrap();

        let size = read_image_size(&path).unwrap();
        assert_eq!(size.width, 640);
        assert_eq!(size.height, 320);
        assert!(size.is_landscape());
        assert_eq!(size.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_missing_and_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_image_size(&dir.path().join("absent.png")).is_none());

        let text = dir.path().join("text.png");
        fs::write(&text, "definitely not an image file").unwrap();
        assert!(read_image_size(&text).is_none());

        let flat = dir.path().join("flat.png");
        fs::write(&flat, png_header(100, 0)).unwrap();
        assert!(read_image_size(&flat).is_none());
    }
}
