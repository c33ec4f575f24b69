//! Parse errors.
//!
//! Syntax problems are collected, never thrown: the parser keeps going on
//! a best-effort basis and the caller checks [`ParseResult::has_errors`]
//! before trusting the AST.
//!
//! [`ParseResult::has_errors`]: crate::ParseResult::has_errors

use std::fmt;
use tarn_ir::Span;

/// Stable error codes for searchability.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Structural expectation failure ("expected next token to be ...").
    E1001,
    /// No prefix parse function for the token in expression position.
    E1002,
    /// Integer literal out of range (reported by the lexer, carried here
    /// when a driver folds lex errors into the parse error list).
    E1003,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error with error code and source location.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
        }
    }
}
