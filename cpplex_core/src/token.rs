//! Token kind, multi-part marker, and the public token type.
//!
//! `TokenKind` is the classification produced by the scanner. Unlike a
//! parser-oriented lexer there is no per-operator variant: the token stream
//! is meant for source-level tooling (highlighting, style checks, faithful
//! rebuilds), so every byte of the input is covered by some token and
//! operators share a single kind with the spelling in the lexeme.
//!
//! # Physical vs. C++ tokens
//!
//! One C++ token may be represented by several physical tokens: a block
//! comment spanning lines, a string literal continued after an escaped
//! newline, a macro interrupted by a comment, or any token cut by a
//! backslash-newline splice. The [`Multi`] marker links the pieces:
//! the first carries [`Multi::First`], the rest [`Multi::Next`], and an
//! unsplit token stays [`Multi::Single`].

/// Classification of a physical token.
///
/// # Representation
///
/// `#[repr(u8)]` keeps the tag a single byte for compact token storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Placeholder used while a split token waits for its final kind.
    ///
    /// Continuation fragments of a block comment or string literal are
    /// stored as `None` until the closing delimiter reveals the kind, which
    /// is then written back onto every pending fragment. A `None` therefore
    /// never appears in a successfully tokenized stream; it can survive only
    /// in the partial stream returned alongside an error.
    None = 0,
    /// Run of spaces, tabs, or form feeds. May be empty when a
    /// backslash-newline splice cut the run at a line boundary.
    Space = 1,
    /// Zero-length marker for a line with no characters at all.
    EmptyLine = 2,
    /// `//` comment, up to but not including the newline.
    CommentLine = 3,
    /// `/* ... */` comment, split per line when it spans several.
    CommentBlock = 4,
    /// Identifier that is not a reserved word.
    Identifier = 5,
    /// One of the 72 C++ reserved words.
    Keyword = 6,
    /// Symbol-spelled operator or punctuator, digraphs included. The
    /// word-like operators (`new`, `delete`, ...) lex as keywords.
    OperatorOrPunctuator = 7,
    /// Preprocessor directive text. The most common source of multi-part
    /// tokens: continuation lines and embedded comments split it.
    Macro = 8,
    /// The lone `\` of a line splice; always one byte. The newline bytes
    /// that follow it are consumed by the reader and never appear in any
    /// lexeme.
    BackslashNewline = 9,
    /// `"..."` string literal, optionally carrying an `L`/`u`/`U` prefix.
    StringLiteral = 10,
    /// `'...'` character literal, optionally carrying an `L`/`u`/`U` prefix.
    CharacterLiteral = 11,
    /// Decimal, octal, or hexadecimal integer literal with an optional
    /// integer suffix (`0xFFull`, `123u`, `07L`).
    IntegerLiteral = 12,
}

impl TokenKind {
    /// Human-readable name, used by diagnostics and the CLI.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Space => "space",
            Self::EmptyLine => "empty line",
            Self::CommentLine => "line comment",
            Self::CommentBlock => "block comment",
            Self::Identifier => "identifier",
            Self::Keyword => "keyword",
            Self::OperatorOrPunctuator => "operator or punctuator",
            Self::Macro => "macro",
            Self::BackslashNewline => "backslash-newline",
            Self::StringLiteral => "string literal",
            Self::CharacterLiteral => "character literal",
            Self::IntegerLiteral => "integer literal",
        }
    }

    /// Returns `true` for the two comment kinds.
    #[must_use]
    pub fn is_comment(self) -> bool {
        matches!(self, Self::CommentLine | Self::CommentBlock)
    }
}

/// How a physical token maps onto a C++ token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Multi {
    /// The C++ token is represented by this single physical token.
    #[default]
    Single = 0,
    /// The C++ token is split; this is the first piece.
    First = 1,
    /// The C++ token is split; this is one of the following pieces.
    Next = 2,
}

/// A physical token: a classified, non-owning view into the input buffer.
///
/// The lexeme borrows the buffer passed to [`tokenize`](crate::tokenize),
/// which must therefore outlive the token. Leading and trailing newline
/// bytes are already trimmed from `text`; the rebuilder re-inserts one
/// newline per `line` increment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Piece marker for split C++ tokens.
    pub multi: Multi,
    /// 1-based line number of the token's first byte, after newline
    /// normalization.
    pub line: u32,
    /// The bytes this token covers.
    pub text: &'a [u8],
}

/// Size assertions: `TokenKind` and `Multi` are one byte each; `Token` is a
/// fat pointer plus eight bytes of metadata.
const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);
const _: () = assert!(std::mem::size_of::<Multi>() == 1);
const _: () = assert!(std::mem::size_of::<Token<'static>>() == 24);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_one_byte() {
        assert_eq!(std::mem::size_of::<TokenKind>(), 1);
    }

    #[test]
    fn name_returns_readable_description() {
        assert_eq!(TokenKind::Identifier.name(), "identifier");
        assert_eq!(TokenKind::Keyword.name(), "keyword");
        assert_eq!(TokenKind::Macro.name(), "macro");
        assert_eq!(TokenKind::BackslashNewline.name(), "backslash-newline");
        assert_eq!(TokenKind::IntegerLiteral.name(), "integer literal");
    }

    #[test]
    fn comment_classification() {
        assert!(TokenKind::CommentLine.is_comment());
        assert!(TokenKind::CommentBlock.is_comment());
        assert!(!TokenKind::Macro.is_comment());
        assert!(!TokenKind::Space.is_comment());
    }

    #[test]
    fn multi_defaults_to_single() {
        assert_eq!(Multi::default(), Multi::Single);
    }

    #[test]
    fn token_is_copy() {
        let tok = Token {
            kind: TokenKind::Identifier,
            multi: Multi::Single,
            line: 1,
            text: b"x",
        };
        let tok2 = tok;
        assert_eq!(tok, tok2);
    }
}
