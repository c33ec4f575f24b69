//! Interactive read-eval-print loop.
//!
//! One [`Session`] per loop: `let` bindings persist until the user quits.
//! Inputs with lex/parse problems are reported and skipped, so the
//! session environment only ever sees programs that parsed cleanly.

use crate::{LineOutcome, Session};
use std::io::{self, Write};

const PROMPT: &str = "> ";

/// Start the REPL on stdin/stdout.
pub fn repl() {
    let session = Session::new();

    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break, // EOF or unreadable stdin
            Ok(_) => {}
        }

        let input = input.trim();
        match input {
            ":quit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                println!("  :quit, :q   Exit the REPL");
                println!("  :help, :h   Show this help");
            }
            "" => {}
            _ => match session.eval_line(input) {
                LineOutcome::Value(rendered) => println!("{rendered}"),
                LineOutcome::SyntaxErrors(diagnostics) => {
                    for diagnostic in &diagnostics {
                        eprintln!("parse error: {}", diagnostic.message);
                    }
                }
                LineOutcome::RuntimeError(message) => println!("ERROR: {message}"),
            },
        }
    }
}
