//! The tokenizer state machine.
//!
//! One [`Lexer`] drives three cooperating mechanisms:
//!
//! - **The reader** ([`fetch`](Lexer::fetch)): hands the state machine one
//!   logical character per round. It normalizes `\r\n` and lone `\r` to
//!   `\n` (counting each style), and intercepts a `\` followed by a raw
//!   newline — the line splice. A splice flushes the in-progress token as
//!   a multi-part fragment, emits a one-byte `BackslashNewline` token, and
//!   silently consumes the newline bytes, so the states above never see
//!   either the backslash or the line break. After the last real byte the
//!   reader delivers a single `0x00` round so every state can flush its
//!   pending token the same way it would on any other non-matching
//!   character.
//!
//! - **The states**: each state is a method deciding, for the current
//!   character, whether to keep accumulating, hand off to another state
//!   without consuming (the handlers call each other directly for that),
//!   push a token, or fail. Operator/punctuator and integer-suffix states
//!   re-test the whole accumulated spelling against their tables on every
//!   character, which yields maximal munch for free.
//!
//! - **The stitching** ([`push_token`](Lexer::push_token) /
//!   [`push_multiline`](Lexer::push_multiline)): keeps the `Single` /
//!   `First` / `Next` protocol, back-fills pending `None` fragment kinds
//!   once the real kind is known, merges adjacent macro fragments, and
//!   collapses a macro left as a lone `First` back to `Single`.
//!
//! Macro handling is deliberately shallow: inside a directive a `/` is
//! always treated as a potential comment opener, never as division. A
//! comment really found there becomes its own token (a line comment ends
//! the directive, a block comment suspends it); anything else is merged
//! back into the macro fragment. No attempt is made to understand the
//! directive's contents beyond that.

use crate::cursor::Cursor;
use crate::output::{LexError, LexOutput, NewlineCounts};
use crate::pool::{PoolAllocError, RawToken, TokenPool};
use crate::report;
use crate::source_buffer::SourceBuffer;
use crate::tables::{self, PrefixMatch};
use crate::token::{Multi, TokenKind};

/// Tokens the pool can hold before the first regrowth.
const INITIAL_POOL_CAPACITY: usize = 200_000;

/// Scanner states. `name()` strings appear in failure messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    Idle,
    Space,
    NewLine,
    Identifier,
    IdentifierOrLiteral,
    Macro,
    CommentOrOperator,
    CommentLine,
    CommentBlock,
    CommentBlockEnd,
    OperatorOrPunctuator,
    StringLiteral,
    StringLiteralEsc,
    CharacterLiteral,
    CharacterLiteralEsc,
    OctOrHexLiteral,
    DecLiteral,
    OctLiteral,
    HexLiteralX,
    HexLiteral,
    IntegerSuffix,
    IntegerSuffix2,
    Error,
}

impl State {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Space => "space",
            Self::NewLine => "new line",
            Self::Identifier => "identifier",
            Self::IdentifierOrLiteral => "identifier or literal",
            Self::Macro => "macro",
            Self::CommentOrOperator => "comment or /",
            Self::CommentLine => "comment line",
            Self::CommentBlock => "comment block",
            Self::CommentBlockEnd => "comment block end",
            Self::OperatorOrPunctuator => "operator or punctuator",
            Self::StringLiteral => "string literal",
            Self::StringLiteralEsc => "string literal escape sequence",
            Self::CharacterLiteral => "character literal",
            Self::CharacterLiteralEsc => "character literal escape sequence",
            Self::OctOrHexLiteral => "octal or hexadecimal literal",
            Self::DecLiteral => "decimal literal",
            Self::OctLiteral => "octal literal",
            Self::HexLiteralX => "hexadecimal literal x",
            Self::HexLiteral => "hexadecimal literal",
            Self::IntegerSuffix => "integer suffix",
            Self::IntegerSuffix2 => "integer suffix 2",
            Self::Error => "error",
        }
    }
}

/// Marker for "tokenization must halt"; the failure details are already
/// recorded on the lexer when this is returned.
struct Halted;

type Step = Result<(), Halted>;

/// What the reader produced for this round.
enum Fetch {
    /// `ch` holds the next logical character (possibly the `0x00` flush
    /// round).
    Char,
    /// The flush round has already been delivered; stop.
    Done,
}

struct Lexer<'a> {
    cursor: Cursor<'a>,
    /// False until the first fetch; the first round must not advance.
    started: bool,
    /// Current logical character. Never `\r`; `0x00` on the flush round.
    ch: u8,
    state: State,
    /// Byte offset where the in-progress token began.
    token_start: u32,
    /// Line number where the in-progress token began.
    token_line: u32,
    /// Byte offset where the current line begins, for failure rendering.
    line_start: u32,
    /// Current 1-based line number.
    line: u32,
    /// Multi-part marker the next pushed token will carry.
    multi: Multi,
    /// True between the `#` opening a directive and its terminating
    /// newline or line comment.
    inside_macro: bool,
    pool: TokenPool,
    newlines: NewlineCounts,
    error: Option<LexError>,
}

impl<'a> Lexer<'a> {
    fn new(cursor: Cursor<'a>, pool: TokenPool) -> Self {
        Self {
            cursor,
            started: false,
            ch: 0,
            state: State::NewLine,
            token_start: 0,
            token_line: 1,
            line_start: 0,
            line: 1,
            multi: Multi::Single,
            inside_macro: false,
            pool,
            newlines: NewlineCounts::default(),
            error: None,
        }
    }

    // ─── Reader ──────────────────────────────────────────────────────

    /// Advance to the next logical character.
    fn fetch(&mut self) -> Result<Fetch, Halted> {
        if self.started {
            self.cursor.advance();
        } else {
            self.started = true;
        }
        loop {
            let pos = self.cursor.pos();
            if pos >= self.cursor.source_len() {
                if pos > self.cursor.source_len() {
                    return Ok(Fetch::Done);
                }
                // One 0x00 round so states can flush their pending token.
                self.ch = 0;
                return Ok(Fetch::Char);
            }
            if !self.next_legit_char()? {
                return Ok(Fetch::Char);
            }
        }
    }

    /// Read the byte under the cursor, normalizing newlines and splicing
    /// backslash-newlines. Returns `true` when a splice consumed input and
    /// the read must be retried at the new position.
    fn next_legit_char(&mut self) -> Result<bool, Halted> {
        if self.ch == b'\n' {
            self.line_start = self.cursor.pos();
        }
        self.ch = self.cursor.current();
        match self.ch {
            b'\n' => {
                self.line += 1;
                self.newlines.unix += 1;
            }
            b'\r' => {
                // The states never see \r: both DOS and old-Mac endings
                // surface as \n.
                if self.cursor.peek() == b'\n' {
                    self.cursor.advance();
                    self.newlines.dos += 1;
                } else {
                    self.newlines.mac += 1;
                }
                self.ch = b'\n';
                self.line += 1;
            }
            b'\\' if matches!(self.cursor.peek(), b'\r' | b'\n') => {
                self.splice()?;
                return Ok(true);
            }
            _ => {}
        }
        Ok(false)
    }

    /// The line-splice protocol: flush the in-progress token, emit the
    /// one-byte `BackslashNewline`, swallow the newline, and restart the
    /// token on the next line.
    fn splice(&mut self) -> Step {
        if self.state != State::Idle && self.state != State::NewLine {
            self.push_multiline(TokenKind::None)?;
        } else {
            // Nothing was in progress; the next line may still be empty.
            self.state = State::NewLine;
        }

        let pos = self.cursor.pos();
        self.push_pool(RawToken {
            kind: TokenKind::BackslashNewline,
            multi: self.multi,
            line: self.line,
            start: pos,
            len: 1,
        })?;

        // Consume the backslash plus one newline of whatever style.
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'\r', b'\n') => {
                self.newlines.dos += 1;
                self.cursor.advance_n(3);
            }
            (b'\r', _) => {
                self.newlines.mac += 1;
                self.cursor.advance_n(2);
            }
            _ => {
                self.newlines.unix += 1;
                self.cursor.advance_n(2);
            }
        }
        self.line_start = self.cursor.pos();
        self.line += 1;
        self.new_token();
        Ok(())
    }

    // ─── Token bookkeeping ───────────────────────────────────────────

    fn new_token(&mut self) {
        self.token_start = self.cursor.pos();
        self.token_line = self.line;
    }

    fn new_state(&mut self, next: State) {
        if self.state == State::Idle || self.state == State::NewLine {
            self.new_token();
        }
        if next == State::Macro {
            self.inside_macro = true;
        }
        self.state = next;
    }

    /// The accumulated spelling including the current character, or `None`
    /// on the flush round (a spelling containing `0x00` matches nothing).
    fn candidate(&self) -> Option<&'a [u8]> {
        let end = self.cursor.pos() + 1;
        if end > self.cursor.source_len() {
            return None;
        }
        Some(self.cursor.slice(self.token_start, end))
    }

    /// The last `back` bytes of the candidate, for integer-suffix tests.
    ///
    /// A splice can restart the token mid-suffix and leave fewer than
    /// `back` bytes accumulated; that can no longer be a suffix.
    fn candidate_tail(&self, back: usize) -> Option<&'a [u8]> {
        let candidate = self.candidate()?;
        if candidate.len() < back {
            return None;
        }
        Some(&candidate[candidate.len() - back..])
    }

    fn push_pool(&mut self, token: RawToken) -> Step {
        match self.pool.push(token) {
            Ok(()) => Ok(()),
            Err(PoolAllocError) => {
                self.error = Some(LexError {
                    line: self.line,
                    message: "token pool alloc failed".to_string(),
                });
                Err(Halted)
            }
        }
    }

    /// Store the accumulated bytes as one physical token.
    ///
    /// `wants_current` includes the current character; it is set for the
    /// kinds closed by their own terminator (the `/` of `*/`, a closing
    /// quote, the last character of an unambiguous operator or suffix).
    fn push_raw(&mut self, kind: TokenKind, wants_current: bool) -> Step {
        let mut start = self.token_start;
        let mut len = self.cursor.pos() - self.token_start + 1;
        if !wants_current {
            len -= 1;
        }

        // Newline bytes picked up around a split are not lexeme content.
        while len > 0 && matches!(self.cursor.byte_at(start + len - 1), b'\n' | b'\r') {
            len -= 1;
        }
        while len > 0 && matches!(self.cursor.byte_at(start), b'\n' | b'\r') {
            start += 1;
            len -= 1;
        }

        if kind == TokenKind::Macro {
            if len == 0 {
                // A comment inside a directive restarts macro scanning and
                // can leave an empty fragment behind; don't store those.
                return Ok(());
            }
            if self.try_merge_macro(len) {
                return Ok(());
            }
        }

        let kind = if kind == TokenKind::Identifier
            && tables::is_keyword(self.cursor.slice(start, start + len))
        {
            TokenKind::Keyword
        } else {
            kind
        };

        self.push_pool(RawToken {
            kind,
            multi: self.multi,
            line: self.token_line,
            start,
            len,
        })
    }

    /// Extend the previous macro fragment instead of storing a new token.
    ///
    /// Fires only while continuing a split macro, and only when the
    /// previous physical token is itself macro text; fragments are then
    /// adjacent in the source, so growing the length is enough.
    fn try_merge_macro(&mut self, len: u32) -> bool {
        if self.multi != Multi::Next {
            return false;
        }
        match self.pool.last_mut() {
            Some(prev) if prev.kind == TokenKind::Macro && prev.multi != Multi::Single => {
                prev.len += len;
                true
            }
            _ => false,
        }
    }

    /// A macro whose fragments all merged back ends as a lone `First`;
    /// turn it back into a plain `Single` token.
    fn collapse_lone_macro_first(&mut self) {
        if let Some(prev) = self.pool.last_mut() {
            if prev.kind == TokenKind::Macro && prev.multi == Multi::First {
                prev.multi = Multi::Single;
            }
        }
    }

    /// Inside a directive, re-label what the sub-states found.
    ///
    /// Comments keep their identity. A `Macro` push is the directive's own
    /// end. Everything else (an operator recognized after a `/`, for
    /// instance) is macro text: the shallow policy never commits to a
    /// non-comment reading of directive contents.
    fn apply_macro_context(&mut self, kind: TokenKind) -> TokenKind {
        if !self.inside_macro {
            return kind;
        }
        match kind {
            TokenKind::CommentLine | TokenKind::CommentBlock => kind,
            TokenKind::Macro => {
                self.inside_macro = false;
                kind
            }
            _ => TokenKind::Macro,
        }
    }

    /// Finish one C++ token: stitch, store, and decide the follow-up state.
    ///
    /// Returns the state to continue in, so callers holding an unconsumed
    /// character can re-dispatch it (`Idle` normally, `Macro` when a
    /// directive resumes after an embedded comment or merged fragment).
    fn push_token(&mut self, kind: TokenKind, wants_current: bool) -> Result<State, Halted> {
        let kind = self.apply_macro_context(kind);

        // The final piece of a split token reveals the kind of every
        // pending piece before it.
        if self.multi != Multi::Single {
            self.pool.backfill_kind(kind);
        }

        self.push_raw(kind, wants_current)?;

        if !self.inside_macro {
            self.state = State::Idle;
            self.multi = Multi::Single;
            self.collapse_lone_macro_first();
        } else {
            match kind {
                TokenKind::CommentBlock | TokenKind::Macro => {
                    // Resume the directive right after what was pushed.
                    self.state = State::Macro;
                    self.multi = Multi::Next;
                    self.token_start = self.cursor.pos() + u32::from(wants_current);
                    self.token_line = self.line;
                }
                TokenKind::CommentLine => {
                    // A line comment runs to the end of line, and so does
                    // the directive.
                    self.inside_macro = false;
                    self.state = State::Idle;
                    self.multi = Multi::Single;
                    self.collapse_lone_macro_first();
                }
                _ => self.state = State::Idle,
            }
        }
        Ok(self.state)
    }

    /// Flush the in-progress token as one piece of a split C++ token and
    /// start accumulating the next piece.
    ///
    /// `kind` is `None` when the final kind is not yet known (block
    /// comments, string literals); the closing push back-fills it.
    fn push_multiline(&mut self, kind: TokenKind) -> Step {
        if self.multi == Multi::Single {
            self.multi = Multi::First;
        } else if self.multi == Multi::First {
            self.multi = Multi::Next;
        }
        self.push_raw(kind, false)?;
        self.new_token();
        if self.multi == Multi::First {
            self.multi = Multi::Next;
        }
        Ok(())
    }

    /// Record the failure and halt.
    fn fail(&mut self) -> Halted {
        // A newline that just failed a state already advanced the counter;
        // report the line it ended.
        let line = if self.ch == b'\n' { self.line - 1 } else { self.line };
        let message = report::render(
            self.state.name(),
            self.ch,
            self.cursor.source(),
            self.line_start,
            self.cursor.pos(),
        );
        self.error = Some(LexError { line, message });
        self.state = State::Error;
        Halted
    }

    // ─── Dispatch ────────────────────────────────────────────────────

    fn run(&mut self) -> Step {
        loop {
            match self.fetch()? {
                Fetch::Done => return Ok(()),
                Fetch::Char => self.dispatch()?,
            }
        }
    }

    fn dispatch(&mut self) -> Step {
        match self.state {
            State::Idle => self.idle(),
            State::Space => self.space(),
            State::NewLine => self.new_line(),
            State::Identifier => self.identifier(),
            State::IdentifierOrLiteral => self.identifier_or_literal(),
            State::Macro => self.macro_body(),
            State::CommentOrOperator => self.comment_or_operator(),
            State::CommentLine => self.comment_line(),
            State::CommentBlock => self.comment_block(),
            State::CommentBlockEnd => self.comment_block_end(),
            State::OperatorOrPunctuator => self.operator_or_punctuator(),
            State::StringLiteral => self.string_literal(),
            State::StringLiteralEsc => self.string_literal_esc(),
            State::CharacterLiteral => self.character_literal(),
            State::CharacterLiteralEsc => self.character_literal_esc(),
            State::OctOrHexLiteral => self.oct_or_hex_literal(),
            State::DecLiteral => self.dec_literal(),
            State::OctLiteral => self.oct_literal(),
            State::HexLiteralX => self.hex_literal_x(),
            State::HexLiteral => self.hex_literal(),
            State::IntegerSuffix => self.integer_suffix(),
            State::IntegerSuffix2 => self.integer_suffix2(),
            State::Error => Err(Halted),
        }
    }

    // ─── States ──────────────────────────────────────────────────────

    fn idle(&mut self) -> Step {
        if matches!(self.ch, b' ' | b'\t' | b'\x0c') {
            self.new_state(State::Space);
            Ok(())
        } else {
            self.no_space()
        }
    }

    /// A token begins here. Not a state of its own: both `Idle` and
    /// `Space` delegate to it once whitespace is out of the way.
    fn no_space(&mut self) -> Step {
        match self.ch {
            // Possible wide/unicode literal prefix; the next character
            // decides.
            b'L' | b'u' | b'U' => self.new_state(State::IdentifierOrLiteral),
            b'"' => self.new_state(State::StringLiteral),
            b'#' => self.new_state(State::Macro),
            b'/' => self.new_state(State::CommentOrOperator),
            b'\'' => self.new_state(State::CharacterLiteral),
            b'0' => self.new_state(State::OctOrHexLiteral),
            b'\n' => self.new_state(State::NewLine),
            0 => {} // end of input
            c if tables::is_identifier_start(c) => self.new_state(State::Identifier),
            c if c.is_ascii_digit() => self.new_state(State::DecLiteral),
            c => {
                // Operators can be a single character long.
                match tables::check_operator(&[c]) {
                    PrefixMatch::Maybe => self.new_state(State::OperatorOrPunctuator),
                    PrefixMatch::Equal => {
                        self.new_state(State::OperatorOrPunctuator);
                        self.push_token(TokenKind::OperatorOrPunctuator, true)?;
                    }
                    PrefixMatch::NotEqual => return Err(self.fail()),
                }
            }
        }
        Ok(())
    }

    fn space(&mut self) -> Step {
        if matches!(self.ch, b' ' | b'\t' | b'\x0c') {
            return Ok(());
        }
        self.push_token(TokenKind::Space, false)?;
        self.no_space()
    }

    /// Start-of-line variant of `Idle`: a line whose first character is
    /// already a newline (or the end of input) gets a zero-length
    /// `EmptyLine` marker so rebuilds can reproduce it.
    fn new_line(&mut self) -> Step {
        if self.ch == b'\n' || self.ch == 0 {
            self.push_token(TokenKind::EmptyLine, false)?;
        }
        self.idle()
    }

    fn identifier(&mut self) -> Step {
        if tables::is_identifier_char(self.ch) {
            return Ok(());
        }
        // Keyword promotion happens at push time.
        self.push_token(TokenKind::Identifier, false)?;
        self.idle()
    }

    /// After a leading `L`, `u`, or `U`: a quote makes it a literal prefix,
    /// anything else means it was an ordinary identifier all along.
    fn identifier_or_literal(&mut self) -> Step {
        match self.ch {
            b'"' => {
                self.new_state(State::StringLiteral);
                Ok(())
            }
            b'\'' => {
                self.new_state(State::CharacterLiteral);
                Ok(())
            }
            _ => {
                self.new_state(State::Identifier);
                self.identifier()
            }
        }
    }

    fn macro_body(&mut self) -> Step {
        if self.ch == b'\n' || self.ch == 0 {
            self.push_token(TokenKind::Macro, false)?;
            return self.idle();
        }
        if self.ch == b'/' {
            // A comment may open here. Flush what the directive has so
            // far; if no comment follows, the pieces merge back together.
            self.push_multiline(TokenKind::Macro)?;
            self.new_state(State::CommentOrOperator);
        }
        Ok(())
    }

    fn comment_line(&mut self) -> Step {
        if self.ch == b'\n' || self.ch == 0 {
            self.push_token(TokenKind::CommentLine, false)?;
            return self.idle();
        }
        Ok(())
    }

    fn comment_or_operator(&mut self) -> Step {
        match self.ch {
            b'/' => {
                self.new_state(State::CommentLine);
                Ok(())
            }
            b'*' => {
                self.new_state(State::CommentBlock);
                Ok(())
            }
            _ => {
                // The pending / was an operator after all.
                match self.push_token(TokenKind::OperatorOrPunctuator, false)? {
                    State::Macro => self.macro_body(),
                    _ => self.idle(),
                }
            }
        }
    }

    fn comment_block(&mut self) -> Step {
        match self.ch {
            b'*' => self.new_state(State::CommentBlockEnd),
            b'\n' => return self.push_multiline(TokenKind::None),
            _ => {}
        }
        Ok(())
    }

    fn comment_block_end(&mut self) -> Step {
        match self.ch {
            b'*' => {}
            b'\n' => return self.push_multiline(TokenKind::None),
            b'/' => {
                // The closing tag belongs to the comment.
                self.push_token(TokenKind::CommentBlock, true)?;
            }
            _ => self.new_state(State::CommentBlock),
        }
        Ok(())
    }

    fn operator_or_punctuator(&mut self) -> Step {
        let matched = self
            .candidate()
            .map_or(PrefixMatch::NotEqual, tables::check_operator);
        match matched {
            PrefixMatch::Maybe => Ok(()),
            PrefixMatch::Equal => {
                self.push_token(TokenKind::OperatorOrPunctuator, true)?;
                Ok(())
            }
            PrefixMatch::NotEqual => {
                // Longest spelling ended one character ago.
                self.push_token(TokenKind::OperatorOrPunctuator, false)?;
                self.idle()
            }
        }
    }

    fn string_literal(&mut self) -> Step {
        match self.ch {
            b'\\' => self.new_state(State::StringLiteralEsc),
            b'\n' => return self.push_multiline(TokenKind::None),
            b'"' => {
                self.push_token(TokenKind::StringLiteral, true)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn string_literal_esc(&mut self) -> Step {
        if tables::is_simple_escape(self.ch)
            || self.ch == b'x'
            || tables::is_oct_digit(self.ch)
            || self.ch == b'\n'
        {
            // Octal covers more than \0 because some compilers accept \4.
            // A bare backslash-newline here is an embedded splice and
            // stays inside the string.
            self.new_state(State::StringLiteral);
            Ok(())
        } else {
            Err(self.fail())
        }
    }

    fn character_literal(&mut self) -> Step {
        match self.ch {
            b'\\' => self.new_state(State::CharacterLiteralEsc),
            b'\n' => return Err(self.fail()),
            b'\'' => {
                self.push_token(TokenKind::CharacterLiteral, true)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn character_literal_esc(&mut self) -> Step {
        if tables::is_simple_escape(self.ch) || self.ch == b'x' || tables::is_oct_digit(self.ch) {
            self.new_state(State::CharacterLiteral);
            Ok(())
        } else {
            Err(self.fail())
        }
    }

    /// After a leading `0`: hex prefix, octal run, suffix, or just zero.
    fn oct_or_hex_literal(&mut self) -> Step {
        match self.ch {
            b'x' => self.new_state(State::HexLiteralX),
            c if tables::is_oct_digit(c) => self.new_state(State::OctLiteral),
            c if tables::is_integer_suffix_start(c) => self.new_state(State::IntegerSuffix),
            _ => {
                self.push_token(TokenKind::IntegerLiteral, false)?;
                return self.idle();
            }
        }
        Ok(())
    }

    /// The `x` of `0x` was seen; at least one hex digit must follow.
    fn hex_literal_x(&mut self) -> Step {
        if self.ch.is_ascii_hexdigit() {
            self.new_state(State::HexLiteral);
            Ok(())
        } else {
            Err(self.fail())
        }
    }

    fn hex_literal(&mut self) -> Step {
        if self.ch.is_ascii_hexdigit() {
            return Ok(());
        }
        if tables::is_integer_suffix_start(self.ch) {
            self.new_state(State::IntegerSuffix);
            return Ok(());
        }
        self.push_token(TokenKind::IntegerLiteral, false)?;
        self.idle()
    }

    fn oct_literal(&mut self) -> Step {
        if tables::is_oct_digit(self.ch) {
            return Ok(());
        }
        if tables::is_integer_suffix_start(self.ch) {
            self.new_state(State::IntegerSuffix);
            return Ok(());
        }
        self.push_token(TokenKind::IntegerLiteral, false)?;
        self.idle()
    }

    fn dec_literal(&mut self) -> Step {
        if self.ch.is_ascii_digit() {
            return Ok(());
        }
        if tables::is_integer_suffix_start(self.ch) {
            self.new_state(State::IntegerSuffix);
            return Ok(());
        }
        self.push_token(TokenKind::IntegerLiteral, false)?;
        self.idle()
    }

    /// One suffix character seen; test the trailing two spelling bytes.
    fn integer_suffix(&mut self) -> Step {
        let matched = self
            .candidate_tail(2)
            .map_or(PrefixMatch::NotEqual, tables::check_integer_suffix);
        match matched {
            PrefixMatch::Maybe => {
                self.new_state(State::IntegerSuffix2);
                Ok(())
            }
            PrefixMatch::Equal => {
                self.push_token(TokenKind::IntegerLiteral, true)?;
                Ok(())
            }
            PrefixMatch::NotEqual => {
                self.push_token(TokenKind::IntegerLiteral, false)?;
                self.idle()
            }
        }
    }

    /// Two suffix characters seen; test the trailing three.
    fn integer_suffix2(&mut self) -> Step {
        let matched = self
            .candidate_tail(3)
            .map_or(PrefixMatch::NotEqual, tables::check_integer_suffix);
        match matched {
            PrefixMatch::Maybe => {
                self.new_state(State::IntegerSuffix2);
                Ok(())
            }
            PrefixMatch::Equal => {
                self.push_token(TokenKind::IntegerLiteral, true)?;
                Ok(())
            }
            PrefixMatch::NotEqual => {
                self.push_token(TokenKind::IntegerLiteral, false)?;
                self.idle()
            }
        }
    }
}

/// Tokenize a C++ source buffer.
///
/// `options` is reserved and must be zero. The returned tokens borrow
/// `content`, which must outlive them.
///
/// The input is expected to be a syntactically valid translation unit
/// whose macros are parsable without expansion. On failure the output
/// carries both the tokens accumulated so far and a rendered error; see
/// [`LexOutput`].
pub fn tokenize(content: &[u8], options: u32) -> LexOutput<'_> {
    if options != 0 {
        return LexOutput::failed("bad options");
    }
    if u32::try_from(content.len()).is_err() {
        return LexOutput::failed("content too large");
    }

    let source = SourceBuffer::new(content);
    let pool = match TokenPool::with_capacity(INITIAL_POOL_CAPACITY) {
        Ok(pool) => pool,
        Err(PoolAllocError) => return LexOutput::failed("token pool alloc failed"),
    };

    let mut lexer = Lexer::new(source.cursor(), pool);
    // A failure is already recorded on the lexer; tokens so far are kept.
    let _ = lexer.run();

    let Lexer {
        pool,
        error,
        newlines,
        ..
    } = lexer;

    LexOutput {
        tokens: pool.detach(source.bytes()),
        error,
        newlines,
        has_utf8_bom: source.has_utf8_bom(),
    }
}
