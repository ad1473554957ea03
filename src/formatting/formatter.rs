//! Indentation of HDevelop code
//!
//! Indentation is derived purely from control keywords at the start of each
//! line. A stack of open keywords is kept; a keyword that is a registered
//! terminator of the keyword on top of the stack closes that scope and is
//! itself placed at the outer level. Keywords that have terminators of their
//! own (`if`, `for`, but also `else` and `catch`) then open a new scope.
//! Final closers such as `endif` never do. Any existing indentation is
//! discarded.

use tracing::debug;

/// Editor settings from which the indentation unit is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indentation {
    pub tab_size: usize,
    pub insert_spaces: bool,
}

impl Default for Indentation {
    fn default() -> Self {
        Indentation {
            tab_size: 4,
            insert_spaces: true,
        }
    }
}

impl Indentation {
    pub fn unit(&self) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size)
        } else {
            "\t".to_string()
        }
    }
}

// Longer keywords first where one is a prefix of another.
const KEYWORDS: [&str; 11] = [
    "elseif", "else", "endif", "if", "endwhile", "while", "endfor", "for", "try", "catch",
    "endtry",
];

fn terminators(keyword: &str) -> Option<&'static [&'static str]> {
    match keyword {
        "if" | "elseif" => Some(&["endif", "else", "elseif"]),
        "else" => Some(&["endif"]),
        "while" => Some(&["endwhile"]),
        "for" => Some(&["endfor"]),
        "try" => Some(&["catch", "endtry"]),
        "catch" => Some(&["endtry"]),
        _ => None,
    }
}

/// The control keyword a line of code starts with, if any. The keyword must
/// be a whole word: `format := 1` is not a `for` loop.
pub fn control_keyword(content: &str) -> Option<&'static str> {
    let content = content.trim_start();

    KEYWORDS
        .into_iter()
        .find(|keyword| match content.strip_prefix(keyword) {
            Some(rest) => !rest
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$'),
            None => false,
        })
}

/// A change to the leading whitespace of one line: bytes `0..end` of line
/// `line` are to be replaced by `new_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentEdit {
    pub line: usize,
    pub end: usize,
    pub new_text: String,
}

impl IndentEdit {
    pub fn apply(&self, line: &str) -> String {
        format!("{}{}", self.new_text, &line[self.end..])
    }
}

/// A line-indexed text buffer that can be reindented in place.
pub trait LineBuffer {
    fn line_count(&self) -> usize;
    fn line_at(&self, index: usize) -> &str;
}

impl<S: AsRef<str>> LineBuffer for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_at(&self, index: usize) -> &str {
        self[index].as_ref()
    }
}

impl<S: AsRef<str>> LineBuffer for Vec<S> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_at(&self, index: usize) -> &str {
        self[index].as_ref()
    }
}

pub struct Formatter {
    unit: String,
}

impl Formatter {
    /// A formatter indenting by one repetition of `unit` per open scope.
    pub fn new(unit: &str) -> Formatter {
        Formatter {
            unit: unit.to_string(),
        }
    }

    pub fn from_settings(settings: &Indentation) -> Formatter {
        Formatter::new(&settings.unit())
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Reindent every line. Blank lines are passed through untouched.
    pub fn format_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let mut scope = Scope::new(&self.unit);

        lines
            .iter()
            .map(|line| {
                let line = line.as_ref();
                match scope.place(line) {
                    Some(indentation) => format!("{}{}", indentation, line.trim_start()),
                    None => line.to_string(),
                }
            })
            .collect()
    }

    pub fn format_text(&self, text: &str) -> String {
        let lines: Vec<&str> = text
            .split('\n')
            .collect();
        self.format_lines(&lines)
            .join("\n")
    }

    /// The smallest set of edits that brings `buffer` to the indentation
    /// [`format_lines`](Self::format_lines) would produce. Lines already
    /// indented correctly get no edit.
    pub fn indentation_edits<B: LineBuffer + ?Sized>(&self, buffer: &B) -> Vec<IndentEdit> {
        let mut scope = Scope::new(&self.unit);
        let mut edits = Vec::new();

        for i in 0..buffer.line_count() {
            let line = buffer.line_at(i);
            let Some(indentation) = scope.place(line) else {
                continue;
            };

            let end = line.len()
                - line
                    .trim_start()
                    .len();
            if line[..end] != indentation {
                edits.push(IndentEdit {
                    line: i,
                    end,
                    new_text: indentation,
                });
            }
        }

        debug!("Computed {} indentation edits", edits.len());
        edits
    }
}

/// Open control scopes during one formatting pass.
struct Scope<'f> {
    unit: &'f str,
    stack: Vec<&'static str>,
}

impl<'f> Scope<'f> {
    fn new(unit: &'f str) -> Scope<'f> {
        Scope {
            unit,
            stack: vec![],
        }
    }

    fn current(&self) -> String {
        self.unit
            .repeat(
                self.stack
                    .len(),
            )
    }

    /// Advance past one line, returning the indentation it should have, or
    /// None for a blank line.
    fn place(&mut self, line: &str) -> Option<String> {
        let content = line.trim_start();
        if content.is_empty() {
            return None;
        }

        let Some(keyword) = control_keyword(content) else {
            return Some(self.current());
        };

        if let Some(&top) = self
            .stack
            .last()
        {
            if terminators(top).is_some_and(|closing| closing.contains(&keyword)) {
                self.stack
                    .pop();
            }
        }

        let indentation = self.current();

        if terminators(keyword).is_some() {
            self.stack
                .push(keyword);
        }

        Some(indentation)
    }
}
