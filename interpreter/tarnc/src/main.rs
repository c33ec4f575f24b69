//! Tarn CLI
//!
//! `tarn` with no arguments starts the REPL; `run`, `parse`, and `lex`
//! operate on files.

use std::process::ExitCode;
use tarnc::{commands, repl};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None | Some("repl") => {
            repl::repl();
            ExitCode::SUCCESS
        }
        Some("run") => match args.get(2) {
            Some(path) => commands::run_file(path),
            None => usage_error("tarn run <file.tarn>"),
        },
        Some("parse") => match args.get(2) {
            Some(path) => commands::parse_file(path),
            None => usage_error("tarn parse <file.tarn>"),
        },
        Some("lex") => match args.get(2) {
            Some(path) => commands::lex_file(path),
            None => usage_error("tarn lex <file.tarn>"),
        },
        Some("help" | "--help" | "-h") => {
            print_usage();
            ExitCode::SUCCESS
        }
        Some(other) => {
            eprintln!("error: unknown command `{other}`");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn usage_error(usage: &str) -> ExitCode {
    eprintln!("Usage: {usage}");
    ExitCode::FAILURE
}

fn print_usage() {
    println!("Usage: tarn [command]");
    println!();
    println!("Commands:");
    println!("  repl                Start the interactive REPL (default)");
    println!("  run <file.tarn>     Evaluate a file and print the result");
    println!("  parse <file.tarn>   Print the canonical rendering of a file");
    println!("  lex <file.tarn>     Dump a file's token stream");
    println!("  help                Show this help");
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
