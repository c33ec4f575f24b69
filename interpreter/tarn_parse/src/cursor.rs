//! Token cursor for navigating the token stream.
//!
//! Provides token access, one-token lookahead, and consumption methods.
//! The cursor position is always valid: the stream is guaranteed to end
//! with an Eof token the cursor never steps past.

use crate::error::{ErrorCode, ParseError};
use tarn_ir::{Ident, Span, StringInterner, Token, TokenKind, TokenList};

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    /// Get access to the string interner.
    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Get the current position in the token stream.
    ///
    /// Used for progress tracking: compare positions before and after
    /// parsing to determine whether tokens were consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    ///
    /// Used to close the span of a construct that just consumed its last
    /// token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token matches the given kind.
    ///
    /// Payload-carrying kinds match on the variant, so
    /// `check(TokenKind::Int(0))` matches any integer literal.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        std::mem::discriminant(&self.current_kind()) == std::mem::discriminant(&kind)
    }

    /// Check if the current token is an identifier.
    #[inline]
    pub fn check_ident(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(_))
    }

    /// Consume and return the current token.
    ///
    /// At end of input this returns the Eof token without moving, so
    /// runaway loops cannot index past the stream.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    /// Expect the current token to be `kind`, consuming it.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    /// Build the error for a failed `expect()` call.
    ///
    /// Separated as `#[cold]` so the `format!()` allocation doesn't
    /// prevent LLVM from inlining the hot `expect()` fast path.
    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: TokenKind) -> ParseError {
        ParseError::new(
            ErrorCode::E1001,
            format!(
                "expected next token to be {}, got {} instead",
                kind.display_name(),
                self.current_kind().display_name()
            ),
            self.current_span(),
        )
    }

    /// Expect and consume an identifier, returning it with its span.
    #[inline]
    pub fn expect_ident(&mut self) -> Result<Ident, ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.current_span();
            self.advance();
            Ok(Ident::new(name, span))
        } else {
            Err(self.make_expect_ident_error())
        }
    }

    /// Build the error for a failed `expect_ident()` call.
    #[cold]
    #[inline(never)]
    fn make_expect_ident_error(&self) -> ParseError {
        ParseError::new(
            ErrorCode::E1001,
            format!(
                "expected next token to be identifier, got {} instead",
                self.current_kind().display_name()
            ),
            self.current_span(),
        )
    }
}
