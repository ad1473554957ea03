use hdevelop::formatting::{Formatter, IndentEdit, LineBuffer};

/// A buffer that keeps its lines with their terminators, as an editor would.
struct Editor {
    lines: Vec<String>,
}

impl Editor {
    fn new(text: &str) -> Editor {
        Editor {
            lines: text
                .split('\n')
                .map(|line| line.trim_end_matches('\r').to_string())
                .collect(),
        }
    }

    fn apply(&mut self, edits: &[IndentEdit]) {
        for edit in edits {
            self.lines[edit.line] = edit.apply(&self.lines[edit.line]);
        }
    }

    fn text(&self) -> String {
        self.lines
            .join("\n")
    }
}

impl LineBuffer for Editor {
    fn line_count(&self) -> usize {
        self.lines
            .len()
    }

    fn line_at(&self, index: usize) -> &str {
        &self.lines[index]
    }
}

#[test]
fn already_formatted_needs_no_edits() {
    let formatter = Formatter::new("    ");
    let editor = Editor::new("if (a)\n    x := 1\nelse\n    x := 2\nendif\n");

    assert!(formatter
        .indentation_edits(&editor)
        .is_empty());
}

#[test]
fn edits_touch_only_leading_whitespace() {
    let formatter = Formatter::new("    ");
    let mut editor = Editor::new("for i := 0 to 1 by 1\nx := i\n        endfor\n\n  y := 0");

    let edits = formatter.indentation_edits(&editor);
    assert_eq!(
        edits,
        vec![
            IndentEdit {
                line: 1,
                end: 0,
                new_text: "    ".to_string(),
            },
            IndentEdit {
                line: 2,
                end: 8,
                new_text: String::new(),
            },
            IndentEdit {
                line: 4,
                end: 2,
                new_text: String::new(),
            },
        ]
    );

    editor.apply(&edits);
    assert_eq!(editor.text(), "for i := 0 to 1 by 1\n    x := i\nendfor\n\ny := 0");
}

#[test]
fn edits_agree_with_reformatting() {
    let formatter = Formatter::new("\t");
    let text = "try\n  if (a)\n  * why\nelseif (b)\n     endif\n catch (E)\nendtry";

    let mut editor = Editor::new(text);
    let edits = formatter.indentation_edits(&editor);
    editor.apply(&edits);

    assert_eq!(editor.text(), formatter.format_text(text));
}
