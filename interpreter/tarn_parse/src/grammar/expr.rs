//! Expression parsing.
//!
//! Precedence climbing with two dispatch points: `parse_prefix` handles
//! every token that can begin an expression, and the loop in
//! `parse_expr_at` consumes infix operators (and call parens) while their
//! precedence strictly exceeds the level the loop was entered with. The
//! strict comparison makes equal-precedence operators left-associative;
//! prefix operands parse at `Precedence::Prefix`, so `-a * b` binds as
//! `(-a) * b`.

use crate::error::{ErrorCode, ParseError};
use crate::precedence::Precedence;
use crate::stack::ensure_sufficient_stack;
use crate::Parser;
use tarn_ir::{BinaryOp, Expr, ExprKind, TokenKind, UnaryOp};

impl Parser<'_> {
    /// Parse an expression, consuming operators above `min`.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow on deeply
    /// nested expressions.
    pub(crate) fn parse_expr(&mut self, min: Precedence) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_at(min))
    }

    /// Inner expression parsing logic (wrapped by `parse_expr` for stack
    /// safety).
    fn parse_expr_at(&mut self, min: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix()?;

        loop {
            if self.cursor.check(TokenKind::Semicolon) {
                break;
            }
            if Precedence::of(self.cursor.current_kind()) <= min {
                break;
            }

            left = if self.cursor.check(TokenKind::LParen) {
                self.parse_call(left)?
            } else if let Some(op) = self.match_binary_op() {
                self.parse_binary(left, op)?
            } else {
                // Token has a precedence entry but no infix rule; hand the
                // expression back and let the caller decide.
                break;
            };
        }

        Ok(left)
    }

    /// Dispatch on every token kind that can begin an expression.
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.cursor.current_span();
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Ident(name), span))
            }
            TokenKind::Int(value) => {
                let span = self.cursor.current_span();
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Int(value), span))
            }
            TokenKind::True => {
                let span = self.cursor.current_span();
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Bool(true), span))
            }
            TokenKind::False => {
                let span = self.cursor.current_span();
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Bool(false), span))
            }
            TokenKind::Bang => self.parse_unary(UnaryOp::Not),
            TokenKind::Minus => self.parse_unary(UnaryOp::Neg),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Fn => self.parse_function(),
            other => Err(self.no_prefix_parse_error(other)),
        }
    }

    /// `-x`, `!x`: the operand binds at `Prefix`, tighter than any infix
    /// operator.
    fn parse_unary(&mut self, op: UnaryOp) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();

        let operand = self.parse_expr(Precedence::Prefix)?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// `( expr )`: grouping resets the minimum precedence to `Lowest`.
    fn parse_grouped(&mut self) -> Result<Expr, ParseError> {
        self.cursor.advance();
        let expr = self.parse_expr(Precedence::Lowest)?;
        self.cursor.expect(TokenKind::RParen)?;
        Ok(expr)
    }

    /// `if (cond) { block } [else { block }]`
    fn parse_if(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();

        self.cursor.expect(TokenKind::LParen)?;
        let cond = self.parse_expr(Precedence::Lowest)?;
        self.cursor.expect(TokenKind::RParen)?;

        let then_block = self.parse_block()?;
        let else_block = if self.cursor.check(TokenKind::Else) {
            self.cursor.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        let span = start.merge(self.cursor.previous_span());
        Ok(Expr::new(
            ExprKind::If {
                cond: Box::new(cond),
                then_block,
                else_block,
            },
            span,
        ))
    }

    /// `fn (params) { block }`
    fn parse_function(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();

        self.cursor.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            params.push(self.cursor.expect_ident()?);
            while self.cursor.check(TokenKind::Comma) {
                self.cursor.advance();
                params.push(self.cursor.expect_ident()?);
            }
        }
        self.cursor.expect(TokenKind::RParen)?;

        let body = self.parse_block()?;
        let span = start.merge(self.cursor.previous_span());
        Ok(Expr::new(ExprKind::Function { params, body }, span))
    }

    /// `callee(args)`: installed as the infix rule for `(`, so it
    /// composes with arbitrary callee expressions, including chained
    /// calls like `f(1)(2)`.
    fn parse_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        self.cursor.advance();

        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            args.push(self.parse_expr(Precedence::Lowest)?);
            while self.cursor.check(TokenKind::Comma) {
                self.cursor.advance();
                args.push(self.parse_expr(Precedence::Lowest)?);
            }
        }
        self.cursor.expect(TokenKind::RParen)?;

        let span = callee.span.merge(self.cursor.previous_span());
        Ok(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
            span,
        ))
    }

    /// Binary infix: the right operand parses at the operator's own
    /// precedence, so equal-precedence operators associate left.
    fn parse_binary(&mut self, left: Expr, op: BinaryOp) -> Result<Expr, ParseError> {
        let prec = Precedence::of(self.cursor.current_kind());
        self.cursor.advance();

        let right = self.parse_expr(prec)?;
        let span = left.span.merge(right.span);
        Ok(Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        ))
    }

    /// Match the current token as a binary operator.
    fn match_binary_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    /// Build the error for a token with no prefix rule.
    #[cold]
    #[inline(never)]
    fn no_prefix_parse_error(&self, kind: TokenKind) -> ParseError {
        ParseError::new(
            ErrorCode::E1002,
            format!("no prefix parse function for {}", kind.display_name()),
            self.cursor.current_span(),
        )
    }
}
