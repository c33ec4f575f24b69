//! Shared node capabilities.

use crate::ast::{Block, Expr, Ident, Stmt};
use crate::{Span, Token};

/// Anything that carries a source location.
///
/// Diagnostics locate nodes through this instead of echoing token text.
pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for Token {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Ident {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Expr {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Stmt {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Block {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}
