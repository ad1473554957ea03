use owo_colors::OwoColorize;
use std::path::Path;

use hdevelop::language::{LoadingError, StructuralError};
use hdevelop::notebook::NotebookError;

/// Format a structural error with full details. When the markup itself is
/// broken the offending line is shown with a caret under the position.
pub fn full_structural_error<'i>(
    error: &StructuralError,
    filename: &'i Path,
    source: &'i str,
) -> String {
    let Some(offset) = error.offset() else {
        return concise_structural_error(error, filename, source);
    };
    let offset = clamp(source, offset);

    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("?");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        error
            .to_string()
            .bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
    )
    .trim_ascii()
    .to_string()
}

/// Format a structural error as a single line.
pub fn concise_structural_error<'i>(
    error: &StructuralError,
    filename: &'i Path,
    source: &'i str,
) -> String {
    match error.offset() {
        Some(offset) => {
            let offset = clamp(source, offset);
            let line = calculate_line_number(source, offset) + 1;
            let column = calculate_column_number(source, offset) + 1;

            format!(
                "{}: {}:{}:{} {}",
                "error".bright_red(),
                filename.to_string_lossy(),
                line,
                column,
                error
                    .to_string()
                    .bold(),
            )
        }
        None => format!(
            "{}: {}: {}",
            "error".bright_red(),
            filename.to_string_lossy(),
            error
                .to_string()
                .bold(),
        ),
    }
}

/// Format an error raised while opening or saving a notebook.
pub fn full_notebook_error<'i>(
    error: &NotebookError,
    filename: &'i Path,
    source: &'i str,
) -> String {
    match error {
        NotebookError::Structural(error) => full_structural_error(error, filename, source),
        NotebookError::Format(..) => format!(
            "{}: {}: {}",
            "error".bright_red(),
            filename.to_string_lossy(),
            error
                .to_string()
                .bold(),
        ),
    }
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {} {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold(),
        error.details
    )
}

// Offsets from the reader may point past the end, or into the middle of a
// multi-byte character.
fn clamp(content: &str, offset: usize) -> usize {
    let mut offset = offset.min(content.len());
    while !content.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

// Helper functions for line/column calculation
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
