//! Byte cursor over the borrowed source buffer.
//!
//! The cursor advances through the source byte-by-byte. EOF is detected by
//! position: [`current()`](Cursor::current) returns a virtual `0x00`
//! sentinel at and past the end of the source, so scanner states can treat
//! "end of input" as one more character and flush their pending token
//! uniformly. The source is borrowed, not copied: lexemes sliced through
//! the cursor alias the caller's buffer.
//!
//! Peeks are raw. `peek()`/`peek2()` see `\r` and `\n` exactly as they
//! appear in the buffer; newline normalization is the scanner's job. The
//! line-splice protocol depends on this: a `\` must be checked against the
//! raw bytes that follow it.

/// Byte cursor over a borrowed source buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source bytes (BOM already stripped by `SourceBuffer`).
    buf: &'a [u8],
    /// Current read position. May sit past the end: one step past delivers
    /// the sentinel round, further steps report EOF.
    pos: u32,
}

/// Size assertion: fat pointer plus position, padded to 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// The buffer length must fit in `u32`; `tokenize` rejects larger
    /// inputs before any cursor exists.
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        debug_assert!(u32::try_from(buf.len()).is_ok(), "source exceeds u32 range");
        Self { buf, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at and past EOF.
    #[inline]
    #[must_use]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the raw byte one position ahead, or `0x00` past the end.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Returns the raw byte two positions ahead, or `0x00` past the end.
    #[inline]
    #[must_use]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Returns the raw byte at an arbitrary position, or `0x00` past the end.
    #[inline]
    #[must_use]
    pub fn byte_at(&self, pos: u32) -> u8 {
        self.buf.get(pos as usize).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Current byte offset in the source.
    #[inline]
    #[must_use]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content in bytes.
    #[inline]
    #[must_use]
    pub fn source_len(&self) -> u32 {
        self.buf.len() as u32
    }

    /// Returns `true` once the position has reached or passed the end.
    #[inline]
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.buf.len()
    }

    /// The whole source, for error-line rendering.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &'a [u8] {
        self.buf
    }

    /// Extract a source slice.
    ///
    /// `start..end` must fall within the source content. Guaranteed by the
    /// scanner's token boundary tracking.
    #[must_use]
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end as usize <= self.buf.len(),
            "slice end {end} exceeds source length {}",
            self.buf.len()
        );
        &self.buf[start as usize..end as usize]
    }
}
