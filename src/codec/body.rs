//! Procedure bodies as plain code text

use crate::formatting::Formatter;
use crate::language::BodyLine;

/// Lines starting with this marker are comments.
pub const COMMENT_MARKER: char = '*';

/// Render the body as text, reindented by `formatter`. Lines whose node
/// held no text come out empty.
pub fn decode(lines: &[BodyLine], formatter: &Formatter) -> String {
    let texts: Vec<&str> = lines
        .iter()
        .map(BodyLine::text)
        .collect();

    formatter
        .format_lines(&texts)
        .join("\n")
}

/// Classify each line of edited code. The text is kept exactly as typed.
pub fn encode(text: &str) -> Vec<BodyLine> {
    text.split('\n')
        .map(|line| {
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                BodyLine::Comment(line.to_string())
            } else {
                BodyLine::Statement(line.to_string())
            }
        })
        .collect()
}
