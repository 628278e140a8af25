//! `tokens`: print the token stream with one truecolor per kind.

use cpplex_core::{tokenize, Multi, TokenKind};

use super::{read_file, report_error};

/// Foreground color per token kind; `None` keeps the terminal default.
fn color(kind: TokenKind) -> Option<(u8, u8, u8)> {
    match kind {
        TokenKind::None => None,
        TokenKind::Space => Some((70, 70, 120)),
        TokenKind::EmptyLine => Some((70, 120, 0)),
        TokenKind::CommentLine => Some((50, 255, 50)),
        TokenKind::CommentBlock => Some((100, 200, 100)),
        TokenKind::Identifier => None,
        TokenKind::Keyword => Some((10, 150, 255)),
        TokenKind::OperatorOrPunctuator => Some((200, 100, 200)),
        TokenKind::Macro => Some((200, 230, 0)),
        TokenKind::BackslashNewline => Some((255, 255, 255)),
        TokenKind::StringLiteral => Some((200, 90, 90)),
        TokenKind::CharacterLiteral => Some((200, 150, 90)),
        TokenKind::IntegerLiteral => Some((100, 100, 50)),
    }
}

/// Print every token with a line-number gutter.
///
/// `debug` wraps each lexeme in `«»` and marks the pieces of split C++
/// tokens, making the 1:n mapping visible.
pub(crate) fn print_tokens(path: &str, debug: bool) {
    let content = read_file(path);
    let out = tokenize(&content, 0);
    if let Some(error) = &out.error {
        report_error(path, error);
        std::process::exit(1);
    }
    tracing::debug!(tokens = out.tokens.len(), "tokenized {path}");

    let mut line = 1u32;
    for token in &out.tokens {
        while line <= token.line {
            if line != 1 {
                println!();
            }
            print!("{line:3}: ");
            line += 1;
        }

        let text = String::from_utf8_lossy(token.text);
        let piece = if debug {
            let mark = match token.multi {
                Multi::Single => "",
                Multi::First => "\u{2081}",
                Multi::Next => "\u{2099}",
            };
            format!("\u{ab}{text}\u{bb}{mark}")
        } else {
            text.into_owned()
        };

        match color(token.kind) {
            Some((r, g, b)) => print!("\x1b[38;2;{r};{g};{b}m{piece}\x1b[0m"),
            None => print!("{piece}"),
        }
    }
    println!();
}
