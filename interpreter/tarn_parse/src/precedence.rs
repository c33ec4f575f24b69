//! Operator precedence ladder.

use tarn_ir::TokenKind;

/// Binding strength for expression parsing, weakest first.
///
/// The derived `Ord` gives the climbing comparison: an infix operator is
/// consumed only while its precedence strictly exceeds the minimum the
/// current recursion level was entered with, which also makes operators
/// of equal precedence left-associative.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Precedence {
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// `-x`, `!x`
    Prefix,
    /// `callee(args)`
    Call,
}

impl Precedence {
    /// Precedence of a token in infix position.
    ///
    /// Tokens with no infix role default to `Lowest`, which stops the
    /// climbing loop.
    pub fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::EqEq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Star | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}
