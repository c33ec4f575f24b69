//! Lexer for Tarn using logos with string interning.
//!
//! Lexing never fails: unrecognized input becomes a `TokenKind::Error`
//! token in the stream plus a collected [`LexError`], and the caller
//! decides what to do with both. Integer literals and identifiers are
//! cooked here (parsed to `i64`, interned to `Name`) so the parser never
//! re-reads literal text.

use logos::Logos;
use tarn_ir::{Span, StringInterner, Token, TokenKind, TokenList};

/// A lexical error with its source span.
///
/// Carried alongside the token stream, never instead of it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LexError {
    pub message: String,
    pub span: Span,
}

impl LexError {
    fn new(message: impl Into<String>, span: Span) -> Self {
        LexError {
            message: message.into(),
            span,
        }
    }

    fn unrecognized_character(c: char, span: Span) -> Self {
        Self::new(format!("unrecognized character `{c}`"), span)
    }

    fn invalid_int_literal(literal: &str, cause: &std::num::ParseIntError, span: Span) -> Self {
        Self::new(
            format!("could not parse `{literal}` as integer: {cause}"),
            span,
        )
    }
}

/// Raw token from logos (before cooking).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[token("let")]
    Let,
    #[token("fn")]
    Fn,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,
}

/// Lex a source string into an Eof-terminated [`TokenList`].
///
/// Identifier text is interned through `interner`. Lexical problems are
/// collected as [`LexError`]s; the stream itself always covers the whole
/// input.
pub fn lex(source: &str, interner: &StringInterner) -> (TokenList, Vec<LexError>) {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let kind = match result {
            Ok(raw) => cook(raw, lexer.slice(), span, interner, &mut errors),
            Err(()) => {
                let c = lexer.slice().chars().next().unwrap_or('\u{FFFD}');
                errors.push(LexError::unrecognized_character(c, span));
                TokenKind::Error
            }
        };
        tokens.push(Token::new(kind, span));
    }

    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));

    (TokenList::new(tokens), errors)
}

/// Convert a raw token to its cooked [`TokenKind`].
fn cook(
    raw: RawToken,
    slice: &str,
    span: Span,
    interner: &StringInterner,
    errors: &mut Vec<LexError>,
) -> TokenKind {
    match raw {
        RawToken::Let => TokenKind::Let,
        RawToken::Fn => TokenKind::Fn,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Return => TokenKind::Return,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
        RawToken::Int => match slice.parse::<i64>() {
            Ok(value) => TokenKind::Int(value),
            Err(cause) => {
                errors.push(LexError::invalid_int_literal(slice, &cause, span));
                TokenKind::Error
            }
        },
    }
}
