//! File-mode subcommands: `run`, `parse`, `lex`.

use crate::{collect_diagnostics, report_diagnostics};
use std::fs;
use std::process::ExitCode;
use tarn_eval::Environment;
use tarn_ir::{display, StringInterner};

/// Evaluate a file and print the inspected result of its last statement.
pub fn run_file(path: &str) -> ExitCode {
    let Some(source) = load(path) else {
        return ExitCode::FAILURE;
    };

    let interner = StringInterner::new();
    let (tokens, lex_errors) = tarn_lexer::lex(&source, &interner);
    let parsed = tarn_parse::parse(&tokens, &interner);
    tracing::debug!(
        "lexed {} tokens, parsed {} statements from `{path}`",
        tokens.len(),
        parsed.program.stmts.len()
    );

    let diagnostics = collect_diagnostics(&lex_errors, &parsed.errors);
    if !diagnostics.is_empty() {
        report_diagnostics(path, &source, &diagnostics);
        return ExitCode::FAILURE;
    }

    let env = Environment::new();
    match tarn_eval::eval(&parsed.program, &env, &interner) {
        Ok(value) => {
            println!("{}", value.inspect(&interner));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Parse a file and print its canonical rendering.
pub fn parse_file(path: &str) -> ExitCode {
    let Some(source) = load(path) else {
        return ExitCode::FAILURE;
    };

    let interner = StringInterner::new();
    let (tokens, lex_errors) = tarn_lexer::lex(&source, &interner);
    let parsed = tarn_parse::parse(&tokens, &interner);

    let diagnostics = collect_diagnostics(&lex_errors, &parsed.errors);
    if !diagnostics.is_empty() {
        report_diagnostics(path, &source, &diagnostics);
        return ExitCode::FAILURE;
    }

    println!("{}", display::render_program(&parsed.program, &interner));
    ExitCode::SUCCESS
}

/// Dump a file's token stream, one token per line.
pub fn lex_file(path: &str) -> ExitCode {
    let Some(source) = load(path) else {
        return ExitCode::FAILURE;
    };

    let interner = StringInterner::new();
    let (tokens, lex_errors) = tarn_lexer::lex(&source, &interner);
    for token in &tokens {
        println!("{token:?}");
    }

    if lex_errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        let diagnostics = collect_diagnostics(&lex_errors, &[]);
        report_diagnostics(path, &source, &diagnostics);
        ExitCode::FAILURE
    }
}

fn load(path: &str) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(err) => {
            eprintln!("error: could not read `{path}`: {err}");
            None
        }
    }
}
