//! Shared rendering for lexer and parser diagnostics.

use crate::GraphQLErrorNoteKind;
use crate::GraphQLErrorNotes;
use crate::token::GraphQLTokenSpan;

/// Formats an error as a diagnostic string for CLI output.
///
/// Produces output like:
/// ```text
/// error: unexpected `}`, expected `Name`
///   --> 3:5
///    |
///  3 |     }
///    |     ^
///    |
///    = help: ...
/// ```
///
/// Snippets are omitted when `source` is `None`; the location line is always
/// shown.
pub(crate) fn format_detailed(
    message: &str,
    span: &GraphQLTokenSpan,
    notes: &GraphQLErrorNotes,
    source: Option<&str>,
) -> String {
    let mut output = String::new();

    output.push_str("error: ");
    output.push_str(message);
    output.push('\n');
    output.push_str(&format!("  --> {}\n", span.start_inclusive));

    if let Some(src) = source
        && let Some(snippet) = format_source_snippet(src, span)
    {
        output.push_str(&snippet);
    }

    for note in notes {
        let prefix = match note.kind {
            GraphQLErrorNoteKind::General => "note",
            GraphQLErrorNoteKind::Help => "help",
            GraphQLErrorNoteKind::Spec => "spec",
        };
        output.push_str(&format!("   = {prefix}: {}\n", note.message));

        if let (Some(note_span), Some(src)) = (&note.span, source)
            && let Some(snippet) = format_note_snippet(src, note_span)
        {
            output.push_str(&snippet);
        }
    }

    output
}

/// Formats an error as a single-line summary: `line:column: error: message`.
pub(crate) fn format_oneline(message: &str, span: &GraphQLTokenSpan) -> String {
    format!("{}: error: {message}", span.start_inclusive)
}

/// Returns the text of the 1-based `line`, using the same line terminators
/// as the lexer (`\n`, `\r`, `\r\n`).
fn source_line(source: &str, line: usize) -> Option<&str> {
    let mut remaining = source;
    for _ in 1..line {
        let end = memchr::memchr2(b'\n', b'\r', remaining.as_bytes())?;
        let skip = if remaining[end..].starts_with("\r\n") { 2 } else { 1 };
        remaining = &remaining[end + skip..];
    }
    let end = memchr::memchr2(b'\n', b'\r', remaining.as_bytes()).unwrap_or(remaining.len());
    Some(&remaining[..end])
}

fn format_source_snippet(source: &str, span: &GraphQLTokenSpan) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source_line(source, line_num)?;
    let line_num_width = line_num.to_string().len().max(2);

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!("{line_num:>line_num_width$} | {line_content}\n"));

    let col_start = span.start_inclusive.column() - 1;
    let underline_len = if span.end_exclusive.line() == line_num
        && span.end_exclusive.column() > span.start_inclusive.column()
    {
        span.end_exclusive.column() - span.start_inclusive.column()
    } else {
        1
    };
    output.push_str(&format!(
        "{:>width$} | {:>padding$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
        width = line_num_width,
        padding = col_start,
    ));

    Some(output)
}

fn format_note_snippet(source: &str, span: &GraphQLTokenSpan) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source_line(source, line_num)?;
    let line_num_width = line_num.to_string().len().max(2);

    let mut output = String::new();
    output.push_str(&format!("     {line_num:>line_num_width$} | {line_content}\n"));
    output.push_str(&format!(
        "     {:>width$} | {:>padding$}-\n",
        "",
        "",
        width = line_num_width,
        padding = span.start_inclusive.column() - 1,
    ));

    Some(output)
}
