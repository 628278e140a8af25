//! Append-only token store.
//!
//! Tokens are stored in span form (`start`/`len` into the source) while
//! scanning, because the stitching protocol mutates already-pushed tokens:
//! macro fragments get their length extended when merged, and pending
//! `None` kinds are back-filled once a split token's final kind is known.
//! [`TokenPool::detach`] resolves the spans into borrowed lexemes and
//! hands the finished vector to the caller.
//!
//! Growth is guarded by `try_reserve` so an allocation failure surfaces as
//! an error on the tokenize result instead of an abort.

use crate::token::{Multi, Token, TokenKind};

/// A token in span form, private to the scanning phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RawToken {
    pub kind: TokenKind,
    pub multi: Multi,
    /// 1-based line of the token's first byte.
    pub line: u32,
    /// Byte offset of the lexeme in the (BOM-stripped) source.
    pub start: u32,
    /// Lexeme length in bytes.
    pub len: u32,
}

/// Size assertion: span-form tokens stay at 16 bytes.
const _: () = assert!(std::mem::size_of::<RawToken>() == 16);

/// Raised when the pool cannot grow.
#[derive(Debug)]
pub(crate) struct PoolAllocError;

/// Append-only sequence of span-form tokens.
pub(crate) struct TokenPool {
    entries: Vec<RawToken>,
}

impl TokenPool {
    /// Create a pool with space for `capacity` tokens up front.
    pub fn with_capacity(capacity: usize) -> Result<Self, PoolAllocError> {
        let mut entries = Vec::new();
        entries.try_reserve(capacity).map_err(|_| PoolAllocError)?;
        Ok(Self { entries })
    }

    /// Append one token. Doubles the backing store when full.
    pub fn push(&mut self, token: RawToken) -> Result<(), PoolAllocError> {
        if self.entries.len() == self.entries.capacity() {
            let grow = self.entries.capacity().max(1);
            self.entries.try_reserve(grow).map_err(|_| PoolAllocError)?;
        }
        self.entries.push(token);
        Ok(())
    }

    /// The most recently pushed token, for merge and collapse decisions.
    pub fn last_mut(&mut self) -> Option<&mut RawToken> {
        self.entries.last_mut()
    }

    /// Write `kind` onto every trailing fragment still waiting for one.
    ///
    /// Walks backwards over the current multi-run (stopping at the first
    /// `Single` token) and replaces `None` kinds. Fragments that already
    /// carry a concrete kind, like an embedded `BackslashNewline`, are left
    /// alone.
    pub fn backfill_kind(&mut self, kind: TokenKind) {
        for token in self.entries.iter_mut().rev() {
            if token.multi == Multi::Single {
                break;
            }
            if token.kind == TokenKind::None {
                token.kind = kind;
            }
        }
    }

    /// Number of tokens currently stored.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Resolve spans against the source and transfer ownership out.
    pub fn detach<'a>(self, source: &'a [u8]) -> Vec<Token<'a>> {
        self.entries
            .into_iter()
            .map(|t| Token {
                kind: t.kind,
                multi: t.multi,
                line: t.line,
                text: &source[t.start as usize..(t.start + t.len) as usize],
            })
            .collect()
    }
}
