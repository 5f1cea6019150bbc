//! Binary portable graymap (PGM, magic `P5`) support.
//!
//! Layout: `P5`, whitespace, then the decimal `width`, `height` and `maxval`
//! tokens separated by whitespace, exactly one whitespace byte, then
//! `width * height` raster bytes in row-major order. Lines starting with `#`
//! may appear before each header token and are skipped.
//!
//! Only 8-bit files are supported: `maxval` must lie in `1..=255`. The ASCII
//! variant (`P2`) and 16-bit rasters are rejected.
//!
//! # Example
//!
//! ```rust
//! use gray8_core::GrayImage;
//! use gray8_io::pgm;
//!
//! let img = GrayImage::from_raw(2, 1, 200, vec![7, 9]).unwrap();
//! let bytes = pgm::encode(&img);
//! assert!(bytes.starts_with(b"P5\n2 1\n200\n"));
//!
//! let back = pgm::decode(&bytes).unwrap();
//! assert_eq!(back, img);
//! ```

use crate::{IoError, IoResult};
use gray8_core::{instrument, GrayImage};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, trace};

const PGM_MAGIC: &[u8; 2] = b"P5";

/// Reads a PGM file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| IoError::context("open", path, e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| IoError::context("read", path, e))?;
    let image = decode(&bytes)?;
    debug!(path = %path.display(), width = image.width(), height = image.height(), "pgm::read");
    Ok(image)
}

/// Writes a PGM file, replacing any existing file.
pub fn write<P: AsRef<Path>>(path: P, image: &GrayImage) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| IoError::context("create", path, e))?;
    let mut writer = BufWriter::new(file);
    write_to(&mut writer, image).map_err(|e| IoError::context("write", path, e))?;
    writer
        .flush()
        .map_err(|e| IoError::context("write", path, e))?;
    debug!(path = %path.display(), width = image.width(), height = image.height(), "pgm::write");
    Ok(())
}

/// Decodes a PGM byte stream into a new image.
///
/// Trailing bytes after the raster are ignored.
///
/// # Errors
///
/// - [`IoError::InvalidFile`] for a bad magic, a missing or malformed header
///   token, or `maxval == 0`
/// - [`IoError::UnsupportedBitDepth`] for `maxval > 255`
/// - [`IoError::DecodeError`] if fewer than `width * height` raster bytes
///   follow the header
/// - [`IoError::Core`] if the image cannot be allocated
pub fn decode(bytes: &[u8]) -> IoResult<GrayImage> {
    let mut header = Header { bytes, pos: 0 };
    header.read_magic()?;
    let width = header.read_token("width")?;
    let height = header.read_token("height")?;
    let maxval = header.read_token("maxval")?;

    if maxval == 0 {
        return Err(IoError::InvalidFile("maxval must be positive".into()));
    }
    let max_gray = u8::try_from(maxval).map_err(|_| {
        IoError::UnsupportedBitDepth(format!("maxval {maxval} (only 8-bit PGM is supported)"))
    })?;
    header.read_separator()?;
    trace!(width, height, max_gray, offset = header.pos, "pgm header");

    let raster = &bytes[header.pos..];
    let needed = u64::from(width) * u64::from(height);
    if (raster.len() as u64) < needed {
        return Err(IoError::DecodeError("truncated pixel data".into()));
    }

    let mut image = GrayImage::new(width, height, max_gray)?;
    let len = image.pixel_count();
    image.as_bytes_mut().copy_from_slice(&raster[..len]);
    instrument::count_pixel_access(len as u64);
    Ok(image)
}

/// Encodes an image as a PGM byte stream.
pub fn encode(image: &GrayImage) -> Vec<u8> {
    let mut out = Vec::with_capacity(image.pixel_count() + 32);
    // writing into a Vec cannot fail
    let _ = write_to(&mut out, image);
    out
}

fn write_to<W: Write>(writer: &mut W, image: &GrayImage) -> std::io::Result<()> {
    write!(
        writer,
        "P5\n{} {}\n{}\n",
        image.width(),
        image.height(),
        image.max_gray()
    )?;
    writer.write_all(image.as_bytes())?;
    instrument::count_pixel_access(image.pixel_count() as u64);
    Ok(())
}

/// Cursor over the text header.
struct Header<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Header<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn read_magic(&mut self) -> IoResult<()> {
        if !self.bytes.starts_with(PGM_MAGIC) {
            return Err(IoError::InvalidFile("invalid file format".into()));
        }
        self.pos = PGM_MAGIC.len();
        match self.peek() {
            Some(b) if b.is_ascii_whitespace() => Ok(()),
            _ => Err(IoError::InvalidFile("invalid file format".into())),
        }
    }

    /// Skips whitespace and `#` comment lines.
    fn skip_filler(&mut self) {
        loop {
            while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
                self.pos += 1;
            }
            if self.peek() != Some(b'#') {
                return;
            }
            while let Some(b) = self.peek() {
                self.pos += 1;
                if b == b'\n' {
                    break;
                }
            }
        }
    }

    fn read_token(&mut self, name: &str) -> IoResult<u32> {
        self.skip_filler();
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidFile(format!("missing {name}")));
        }
        // digits only, so the slice is valid UTF-8
        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| IoError::InvalidFile(format!("{name} out of range")))
    }

    fn read_separator(&mut self) -> IoResult<()> {
        match self.peek() {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(IoError::InvalidFile(
                "expected a single whitespace byte after maxval".into(),
            )),
        }
    }
}
