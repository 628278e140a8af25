//! Source reconstruction from a token stream.
//!
//! Token lexemes never contain newline bytes; the line number on each
//! token says where it lives. Rebuilding is therefore: emit lexemes in
//! order, inserting one newline per line-number increment, all in a single
//! chosen style. Files that mixed newline styles come back uniform — the
//! one documented lossy case.

use crate::output::{LexOutput, NewlineStyle};

/// Rebuild with the preferred newline style and the recorded BOM flag.
#[must_use]
pub fn rebuild(output: &LexOutput<'_>) -> Vec<u8> {
    rebuild_with(
        output,
        output.newlines.preferred_style(),
        output.has_utf8_bom,
    )
}

/// Rebuild with an explicit newline style and BOM choice.
#[must_use]
pub fn rebuild_with(output: &LexOutput<'_>, style: NewlineStyle, include_bom: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(rough_size(output));
    if include_bom {
        out.extend_from_slice(&[0xEF, 0xBB, 0xBF]);
    }

    let mut line = 1u32;
    for token in &output.tokens {
        while line <= token.line {
            if line != 1 {
                out.extend_from_slice(style.as_bytes());
            }
            line += 1;
        }
        out.extend_from_slice(token.text);
    }
    out
}

/// Lexeme bytes plus up to two bytes per line, as a capacity guess.
fn rough_size(output: &LexOutput<'_>) -> usize {
    let text: usize = output.tokens.iter().map(|t| t.text.len()).sum();
    let lines = output.tokens.last().map_or(0, |t| t.line as usize);
    text + 2 * lines + 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    #[test]
    fn single_line_source_is_identical() {
        let src = b"int x = 0;";
        let out = tokenize(src, 0);
        assert!(out.is_ok());
        assert_eq!(rebuild(&out), src);
    }

    #[test]
    fn unix_newlines_round_trip() {
        let src = b"int a;\n\nint b;\n";
        let out = tokenize(src, 0);
        assert_eq!(rebuild(&out), src);
    }

    #[test]
    fn dos_newlines_round_trip() {
        let src = b"int a;\r\nint b;\r\n";
        let out = tokenize(src, 0);
        assert_eq!(out.newlines.dos, 2);
        assert_eq!(rebuild(&out), src);
    }

    #[test]
    fn mac_newlines_rebuild_as_lf() {
        let src = b"int a;\rint b;\r";
        let out = tokenize(src, 0);
        assert_eq!(out.newlines.mac, 2);
        assert_eq!(rebuild(&out), b"int a;\nint b;\n");
    }

    #[test]
    fn bom_is_reemitted() {
        let src = b"\xEF\xBB\xBFint x;\n";
        let out = tokenize(src, 0);
        assert!(out.has_utf8_bom);
        assert_eq!(rebuild(&out), src);
    }

    #[test]
    fn explicit_style_overrides_the_counters() {
        let src = b"int a;\nint b;\n";
        let out = tokenize(src, 0);
        let dos = rebuild_with(&out, NewlineStyle::CrLf, false);
        assert_eq!(dos, b"int a;\r\nint b;\r\n");
    }

    #[test]
    fn empty_input_rebuilds_empty() {
        let out = tokenize(b"", 0);
        assert_eq!(rebuild(&out), b"");
    }
}
