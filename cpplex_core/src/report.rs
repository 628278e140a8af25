//! Failure message rendering.
//!
//! A failure message shows what the scanner was doing, which character
//! stopped it, and where:
//!
//! ```text
//! state: hexadecimal literal x
//! char: 'g' u+0067
//!     int n = 0xg1;
//! ~~~~~~~~~~~~^
//! ```
//!
//! Tabs from the source line are copied into the caret line so the `^`
//! stays under the offending column in terminal output.

/// Printable ASCII range for the character display; everything else is
/// shown as `?` next to its hex code.
fn display_glyph(c: u8) -> char {
    if (32..=126).contains(&c) {
        c as char
    } else {
        '?'
    }
}

/// Render the failure message.
///
/// `line_start` is the byte offset where the offending line begins and
/// `pos` the offset of the offending character; `pos` may equal
/// `source.len()` when the failure is the end of input itself.
pub(crate) fn render(state_name: &str, c: u8, source: &[u8], line_start: u32, pos: u32) -> String {
    let start = line_start as usize;
    let pos = pos as usize;

    // The offending line runs to the next newline after pos, or to EOF.
    let line_end = match memchr::memchr(b'\n', &source[pos.min(source.len())..]) {
        Some(offset) => pos + offset,
        None => source.len(),
    };
    let line = String::from_utf8_lossy(&source[start..line_end]);

    let mut caret = String::with_capacity(pos - start + 1);
    for &b in &source[start..pos] {
        caret.push(if b == b'\t' { '\t' } else { '~' });
    }
    caret.push('^');

    format!("state: {state_name}\nchar: '{}' u+{:04x}\n{line}\n{caret}\n", display_glyph(c), c)
}
