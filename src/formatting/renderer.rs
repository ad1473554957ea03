use owo_colors::OwoColorize;

use super::formatter::control_keyword;
use super::syntax::*;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Indent => content.to_string(),
            Syntax::Keyword => content // keyword.control - #cc0000 (red) bold
                .color(owo_colors::Rgb(0xcc, 0x00, 0x00))
                .bold()
                .to_string(),
            Syntax::Comment => content // comment.line - #999999 (grey)
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .to_string(),
            Syntax::Type => content // storage.type - #8f5902 (brown) bold
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .bold()
                .to_string(),
            Syntax::Variable => content // variable.parameter - #729fcf (light blue) bold
                .color(owo_colors::Rgb(0x72, 0x9f, 0xcf))
                .bold()
                .to_string(),
            Syntax::Numeric => content // constant.numeric - #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .bold()
                .to_string(),
            Syntax::Punctuation => content
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .to_string(),
            Syntax::Heading => content
                .bright_white()
                .bold()
                .to_string(),
        }
    }
}

/// Split the text of a code cell into tagged fragments, line by line.
pub fn code_fragments(text: &str) -> Vec<(Syntax, String)> {
    let mut fragments = Vec::new();

    for (i, line) in text
        .split('\n')
        .enumerate()
    {
        if i > 0 {
            fragments.push((Syntax::Neutral, "\n".to_string()));
        }

        let content = line.trim_start();
        let indent = &line[..line.len() - content.len()];
        if !indent.is_empty() {
            fragments.push((Syntax::Indent, indent.to_string()));
        }

        if content.is_empty() {
            continue;
        }

        if content.starts_with('*') {
            fragments.push((Syntax::Comment, content.to_string()));
        } else if let Some(keyword) = control_keyword(content) {
            fragments.push((Syntax::Keyword, keyword.to_string()));
            fragments.push((Syntax::Neutral, content[keyword.len()..].to_string()));
        } else {
            fragments.push((Syntax::Neutral, content.to_string()));
        }
    }

    fragments
}

/// Split the text of a parameter cell into tagged fragments. Lines that do
/// not look like declarations are passed through as they are.
pub fn parameter_fragments(text: &str) -> Vec<(Syntax, String)> {
    let re = crate::compile!(r"^(\s*)(\S+)(\s+)([^\s\[]+)(\s*)(?:\[(\d+)\])?(.*)$");
    let mut fragments = Vec::new();

    for (i, line) in text
        .split('\n')
        .enumerate()
    {
        if i > 0 {
            fragments.push((Syntax::Neutral, "\n".to_string()));
        }

        let Some(captures) = re.captures(line) else {
            fragments.push((Syntax::Neutral, line.to_string()));
            continue;
        };

        fragments.push((Syntax::Indent, captures[1].to_string()));
        fragments.push((Syntax::Type, captures[2].to_string()));
        fragments.push((Syntax::Neutral, captures[3].to_string()));
        fragments.push((Syntax::Variable, captures[4].to_string()));
        fragments.push((Syntax::Neutral, captures[5].to_string()));
        if let Some(dimension) = captures.get(6) {
            fragments.push((Syntax::Punctuation, "[".to_string()));
            fragments.push((Syntax::Numeric, dimension.as_str().to_string()));
            fragments.push((Syntax::Punctuation, "]".to_string()));
        }
        fragments.push((Syntax::Neutral, captures[7].to_string()));
    }

    fragments
        .into_iter()
        .filter(|(_, content)| !content.is_empty())
        .collect()
}

/// Apply markup to fragments via style() and combine.
pub fn render(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
