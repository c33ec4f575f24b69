//! Diagnostic rendering with ariadne.
//!
//! File-mode commands render lex/parse problems as labeled reports over
//! the source; the REPL prints plain one-liners instead (a one-line input
//! rarely needs a source snippet).

use crate::Diagnostic;
use ariadne::{Color, Label, Report, ReportKind, Source};

/// Render each diagnostic as a labeled report to stderr.
pub fn report_diagnostics(path: &str, source: &str, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        let report = Report::build(ReportKind::Error, path, diagnostic.span.start as usize)
            .with_message(&diagnostic.message)
            .with_label(
                Label::new((path, diagnostic.span.to_range()))
                    .with_message(&diagnostic.message)
                    .with_color(Color::Red),
            )
            .finish();
        // Rendering failures (a closed stderr) are not worth surfacing.
        let _ = report.eprint((path, Source::from(source)));
    }
}
