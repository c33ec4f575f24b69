//! AST nodes for Tarn.
//!
//! A `Program` is an ordered sequence of statements; statements embed
//! expressions; `if` and `fn` embed brace-delimited `Block`s of further
//! statements. The parser builds the tree once and the evaluator only
//! reads it.

mod expr;
mod operators;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, UnaryOp};

use crate::{Name, Span};

/// An identifier occurrence with its source span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ident {
    pub name: Name,
    pub span: Span,
}

impl Ident {
    #[inline]
    pub fn new(name: Name, span: Span) -> Self {
        Ident { name, span }
    }
}

/// Root node: an ordered sequence of top-level statements.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Program { stmts: Vec::new() }
    }
}

/// A brace-delimited statement group, owned by the construct embedding it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

/// A statement with its source span.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum StmtKind {
    /// `let name = value;`
    Let { name: Ident, value: Expr },
    /// `return value;`
    Return { value: Expr },
    /// An expression used as a statement.
    Expr(Expr),
}
