//! Statement and block parsing.
//!
//! The statement loop dispatches on the current token kind: `let` and
//! `return` get dedicated statement forms, anything else is an expression
//! used as a statement. A trailing `;` is consumed if present but never
//! required.

mod expr;

use crate::error::ParseError;
use crate::precedence::Precedence;
use crate::Parser;
use tarn_ir::{Block, Stmt, StmtKind, TokenKind};

impl Parser<'_> {
    /// Parse one statement.
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            _ => self.parse_expr_stmt(),
        }
    }

    /// `let IDENT = expr;`
    fn parse_let_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();

        let name = self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::Assign)?;
        let value = self.parse_expr(Precedence::Lowest)?;
        self.eat_optional_semicolon();

        let span = start.merge(self.cursor.previous_span());
        Ok(Stmt::new(StmtKind::Let { name, value }, span))
    }

    /// `return expr;`
    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();

        let value = self.parse_expr(Precedence::Lowest)?;
        self.eat_optional_semicolon();

        let span = start.merge(self.cursor.previous_span());
        Ok(Stmt::new(StmtKind::Return { value }, span))
    }

    /// An expression in statement position.
    fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expr(Precedence::Lowest)?;
        self.eat_optional_semicolon();

        let span = expr.span.merge(self.cursor.previous_span());
        Ok(Stmt::new(StmtKind::Expr(expr), span))
    }

    /// `{ stmt* }`, used by `if` branches and function bodies.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let lbrace = self.cursor.expect(TokenKind::LBrace)?;

        let mut stmts = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            stmts.push(self.parse_stmt()?);
        }

        let rbrace = self.cursor.expect(TokenKind::RBrace)?;
        Ok(Block {
            stmts,
            span: lbrace.span.merge(rbrace.span),
        })
    }

    fn eat_optional_semicolon(&mut self) {
        if self.cursor.check(TokenKind::Semicolon) {
            self.cursor.advance();
        }
    }
}
