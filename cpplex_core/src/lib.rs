//! Lossless tokenizer for C++ source text.
//!
//! Given a byte buffer holding a syntactically valid C++ translation unit,
//! [`tokenize`] produces an ordered sequence of tokens covering every byte
//! of the input (modulo newline normalization): preprocessor directives,
//! comments, whitespace runs, empty lines, and line continuations all
//! become tokens. Consumers can highlight, style-check, or rebuild the
//! original file without running the preprocessor or a parser.
//!
//! # Architecture
//!
//! - [`SourceBuffer`] / [`Cursor`]: borrowed input framing and raw byte
//!   navigation. No copies; token lexemes alias the caller's buffer.
//! - `scanner`: a deterministic byte-driven state machine fed one logical
//!   character at a time by a reader that normalizes newlines and splices
//!   backslash-newlines.
//! - [`Token`] / [`Multi`]: one C++ token may surface as several physical
//!   tokens (split comments, continued strings, interrupted macros); the
//!   `multi` marker makes the pieces recoverable.
//! - [`rebuild`]: reconstructs the source from a token stream, which is
//!   also the library's own round-trip test oracle.
//!
//! # Usage
//!
//! ```
//! use cpplex_core::{tokenize, TokenKind};
//!
//! let out = tokenize(b"int x = 0;\n", 0);
//! assert!(out.is_ok());
//! assert_eq!(out.tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(out.tokens[0].text, b"int");
//! ```
//!
//! # Scope
//!
//! No macro expansion, no include resolution, no Unicode identifiers, no
//! floating-point literals, no raw or user-defined string literals. The
//! rebuilder emits a single newline style, so files mixing styles are the
//! one documented non-round-trip case.

mod cursor;
mod output;
mod pool;
mod rebuild;
mod report;
mod scanner;
mod source_buffer;
mod tables;
mod token;

pub use cursor::Cursor;
pub use output::{LexError, LexOutput, NewlineCounts, NewlineStyle};
pub use rebuild::{rebuild, rebuild_with};
pub use scanner::tokenize;
pub use source_buffer::SourceBuffer;
pub use tables::{check_integer_suffix, check_operator, is_keyword, PrefixMatch};
pub use token::{Multi, Token, TokenKind};
