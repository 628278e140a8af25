//! Tokenization result types.

use crate::token::Token;

/// Per-style newline counters, collected during newline normalization.
///
/// The counters are advisory: a rebuilder uses them to pick the single
/// newline style for its output via [`preferred_style`](Self::preferred_style).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NewlineCounts {
    /// Lines ending with `\n`.
    pub unix: u32,
    /// Lines ending with `\r\n`.
    pub dos: u32,
    /// Lines ending with a lone `\r`.
    pub mac: u32,
}

/// Newline style a rebuilder should emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewlineStyle {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl NewlineStyle {
    /// The bytes of this newline style.
    #[must_use]
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Lf => b"\n",
            Self::CrLf => b"\r\n",
        }
    }
}

impl NewlineCounts {
    /// Style a rebuild should use: CRLF when it dominates LF, LF otherwise.
    /// Lone-CR files rebuild as LF; old-Mac endings are not reproduced.
    #[must_use]
    pub fn preferred_style(&self) -> NewlineStyle {
        if self.dos > self.unix {
            NewlineStyle::CrLf
        } else {
            NewlineStyle::Lf
        }
    }
}

/// A tokenization failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    /// 1-based line of the offending character. Zero for argument errors
    /// that happen before any scanning.
    pub line: u32,
    /// Multi-line human-readable description: scanner state, offending
    /// character, source line, and a caret marking the column.
    pub message: String,
}

/// Everything `tokenize` produces.
///
/// On failure the tokens emitted before the offending character are still
/// present, so partial results can be inspected or highlighted. All owned
/// storage is released when the output is dropped; the lexemes inside
/// `tokens` borrow the input buffer, which must outlive this value.
#[derive(Debug)]
pub struct LexOutput<'a> {
    /// The physical tokens, in source order.
    pub tokens: Vec<Token<'a>>,
    /// Failure description, `None` when the whole input was tokenized.
    pub error: Option<LexError>,
    /// Newline statistics gathered by the reader.
    pub newlines: NewlineCounts,
    /// Whether the input started with the UTF-8 byte order mark.
    pub has_utf8_bom: bool,
}

impl LexOutput<'_> {
    /// Returns `true` when tokenization covered the whole input.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Output for failures detected before scanning starts.
    pub(crate) fn failed(message: &str) -> Self {
        Self {
            tokens: Vec::new(),
            error: Some(LexError {
                line: 0,
                message: message.to_string(),
            }),
            newlines: NewlineCounts::default(),
            has_utf8_bom: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_style_picks_the_majority() {
        let mut counts = NewlineCounts::default();
        assert_eq!(counts.preferred_style(), NewlineStyle::Lf);

        counts.dos = 3;
        counts.unix = 1;
        assert_eq!(counts.preferred_style(), NewlineStyle::CrLf);

        counts.unix = 3;
        assert_eq!(counts.preferred_style(), NewlineStyle::Lf);

        // A tie keeps LF
        counts.dos = 3;
        assert_eq!(counts.preferred_style(), NewlineStyle::Lf);
    }

    #[test]
    fn failed_output_has_no_tokens() {
        let out = LexOutput::failed("bad options");
        assert!(!out.is_ok());
        assert!(out.tokens.is_empty());
        let err = out.error.unwrap();
        assert_eq!(err.line, 0);
        assert_eq!(err.message, "bad options");
    }
}
