//! Format detection from file extensions.

use std::path::Path;

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Binary (P5) portable graymap.
    Pgm,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from file extension only (case-insensitive).
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("pgm") => Format::Pgm,
            _ => Format::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension("a.pgm"), Format::Pgm);
        assert_eq!(Format::from_extension("dir/B.PGM"), Format::Pgm);
        assert_eq!(Format::from_extension("a.png"), Format::Unknown);
        assert_eq!(Format::from_extension("pgm"), Format::Unknown);
    }
}
