//! Source framing: BOM detection and cursor creation.
//!
//! The buffer borrows the caller's bytes rather than copying them, because
//! every token lexeme is a slice of the original input. If the content
//! starts with the UTF-8 byte order mark (`EF BB BF`), the BOM is stripped
//! before scanning begins and remembered so a rebuild can re-emit it.

use crate::Cursor;

/// The UTF-8 byte order mark.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Borrowed, BOM-stripped view of the input.
///
/// All cursor positions and token lexemes are relative to the bytes
/// *after* the BOM, so a BOM never appears inside any token.
#[derive(Clone, Copy, Debug)]
pub struct SourceBuffer<'a> {
    /// Source bytes with the BOM (if any) already stripped.
    bytes: &'a [u8],
    /// Whether the original content started with the UTF-8 BOM.
    has_utf8_bom: bool,
}

impl<'a> SourceBuffer<'a> {
    /// Frame the given content, stripping a leading UTF-8 BOM.
    #[must_use]
    pub fn new(content: &'a [u8]) -> Self {
        match content.strip_prefix(&UTF8_BOM) {
            Some(rest) => Self {
                bytes: rest,
                has_utf8_bom: true,
            },
            None => Self {
                bytes: content,
                has_utf8_bom: false,
            },
        }
    }

    /// The scannable source bytes (BOM excluded).
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Whether the original content started with the UTF-8 BOM.
    #[inline]
    #[must_use]
    pub fn has_utf8_bom(&self) -> bool {
        self.has_utf8_bom
    }

    /// Length of the scannable content in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the scannable content is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_source_is_untouched() {
        let buf = SourceBuffer::new(b"int x;\n");
        assert!(!buf.has_utf8_bom());
        assert_eq!(buf.bytes(), b"int x;\n");
        assert_eq!(buf.len(), 7);
    }

    #[test]
    fn utf8_bom_is_stripped_and_recorded() {
        let buf = SourceBuffer::new(b"\xEF\xBB\xBFint x;\n");
        assert!(buf.has_utf8_bom());
        assert_eq!(buf.bytes(), b"int x;\n");
    }

    #[test]
    fn bom_only_input_scans_as_empty() {
        let buf = SourceBuffer::new(b"\xEF\xBB\xBF");
        assert!(buf.has_utf8_bom());
        assert!(buf.is_empty());
        assert!(buf.cursor().is_eof());
    }

    #[test]
    fn partial_bom_is_content() {
        let buf = SourceBuffer::new(b"\xEF\xBB");
        assert!(!buf.has_utf8_bom());
        assert_eq!(buf.bytes(), b"\xEF\xBB");
    }

    #[test]
    fn empty_input() {
        let buf = SourceBuffer::new(b"");
        assert!(!buf.has_utf8_bom());
        assert!(buf.is_empty());
    }
}
