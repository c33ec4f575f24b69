//! Tarn interpreter front end.
//!
//! Ties the pipeline together: lex → parse → eval, with one [`Session`]
//! per interactive run holding the interner and the flat top-level
//! environment for as long as the host lives.

pub mod commands;
pub mod repl;
mod reporting;

pub use reporting::report_diagnostics;

use tarn_eval::Environment;
use tarn_ir::{Span, StringInterner};

/// A lex or parse problem with its source location, ready for rendering.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
}

/// Merge lexer and parser errors into one render-ready list.
///
/// Lex errors come first: they describe raw input the parser only sees as
/// opaque error tokens.
pub fn collect_diagnostics(
    lex_errors: &[tarn_lexer::LexError],
    parse_errors: &[tarn_parse::ParseError],
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::with_capacity(lex_errors.len() + parse_errors.len());
    for err in lex_errors {
        diagnostics.push(Diagnostic {
            message: err.message.clone(),
            span: err.span,
        });
    }
    for err in parse_errors {
        diagnostics.push(Diagnostic {
            message: err.message.clone(),
            span: err.span,
        });
    }
    diagnostics
}

/// Result of pushing one input through a [`Session`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum LineOutcome {
    /// Evaluation succeeded; the inspected rendering of the result.
    Value(String),
    /// Lex/parse problems; evaluation was skipped for this input.
    SyntaxErrors(Vec<Diagnostic>),
    /// Evaluation produced an error value; rendered without the
    /// `ERROR: ` prefix the REPL adds.
    RuntimeError(String),
}

/// One evaluation session.
///
/// The environment and interner live for the whole session, so `let`
/// bindings persist from one input to the next.
pub struct Session {
    interner: StringInterner,
    env: Environment,
}

impl Session {
    pub fn new() -> Self {
        Session {
            interner: StringInterner::new(),
            env: Environment::new(),
        }
    }

    /// Run one input through lex → parse → eval.
    ///
    /// Evaluation is skipped when the input has any lexical or syntax
    /// problem, so the environment never sees a partial program.
    pub fn eval_line(&self, source: &str) -> LineOutcome {
        let (tokens, lex_errors) = tarn_lexer::lex(source, &self.interner);
        let parsed = tarn_parse::parse(&tokens, &self.interner);

        let diagnostics = collect_diagnostics(&lex_errors, &parsed.errors);
        if !diagnostics.is_empty() {
            return LineOutcome::SyntaxErrors(diagnostics);
        }

        match tarn_eval::eval(&parsed.program, &self.env, &self.interner) {
            Ok(value) => LineOutcome::Value(value.inspect(&self.interner)),
            Err(err) => LineOutcome::RuntimeError(err.to_string()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
