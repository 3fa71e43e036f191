//! Diagnostic rendering for the minic CLI.
//!
//! Errors from any compiler phase are rendered as [`ariadne`] reports on
//! stderr: the offending source line with a red label anchored at the
//! error's byte span, or a plain `Error:` line when the error carries no
//! location. Rendering failures fall back to an unadorned message so a
//! broken terminal never hides the diagnostic itself.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use minic::driver::CompileError;
use minic::token::Span;

/// Display name for the command-line source string in reports.
const SOURCE_ID: &str = "<source>";

/// Renders one located report over the source.
fn print_span_report(source: &str, span_range: Range<usize>, message: &str) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (SOURCE_ID, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((SOURCE_ID, span_range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((SOURCE_ID, Source::from(source)))
}

/// Widens a possibly empty span into a byte range ariadne can label.
///
/// End-of-input errors carry a zero-width span at the end of the source;
/// those are anchored at the last byte (or the empty range for an empty
/// source).
fn display_range(source: &str, span: Span) -> Range<usize> {
    if span.start < span.end {
        span.start..span.end
    } else if span.start < source.len() {
        span.start..span.start + 1
    } else if source.is_empty() {
        0..0
    } else {
        source.len() - 1..source.len()
    }
}

/// Reports a compile error on stderr.
pub(crate) fn report_error(source: &str, error: &CompileError) {
    match error.span() {
        Some(span) => {
            let range = display_range(source, span);
            if let Err(report_err) = print_span_report(source, range, error.message()) {
                eprintln!(
                    "Error: {} (at {}:{})",
                    error.message(),
                    span.line,
                    span.column
                );
                eprintln!("(Failed to display detailed error report: {})", report_err);
            }
        }
        None => {
            eprintln!("Error: {}", error.message());
        }
    }
}
