//! Writing a tree back out as markup
//!
//! The layout follows what HDevelop itself writes: one element per line,
//! no indentation, childless elements self-closed and text kept inline with
//! the element that holds it.

use quick_xml::escape::{escape, partial_escape};

use super::tree::*;

pub(super) fn write(document: &Document) -> String {
    let mut output = Writer::new();

    for (i, node) in document
        .nodes
        .iter()
        .enumerate()
    {
        if i > 0 {
            output.append_newline();
        }
        output.write_node(node);
    }

    output.append_newline();
    output.buffer
}

struct Writer {
    buffer: String,
}

impl Writer {
    fn new() -> Writer {
        Writer {
            buffer: String::new(),
        }
    }

    fn append_str(&mut self, text: &str) {
        self.buffer
            .push_str(text);
    }

    fn append_newline(&mut self) {
        self.buffer
            .push('\n');
    }

    fn append_attribute(&mut self, name: &str, value: &str) {
        self.append_str(" ");
        self.append_str(name);
        self.append_str("=\"");
        self.append_str(&escape(value));
        self.append_str("\"");
    }

    fn write_node(&mut self, node: &Node) {
        match node {
            Node::Declaration(declaration) => self.write_declaration(declaration),
            Node::Element(element) => self.write_element(element),
            Node::Text(text) => self.append_str(&partial_escape(text)),
            Node::CData(data) => {
                self.append_str("<![CDATA[");
                self.append_str(data);
                self.append_str("]]>");
            }
            Node::Comment(comment) => {
                self.append_str("<!--");
                self.append_str(comment);
                self.append_str("-->");
            }
            Node::Instruction(instruction) => {
                self.append_str("<?");
                self.append_str(instruction);
                self.append_str("?>");
            }
            Node::DocType(doctype) => {
                self.append_str("<!DOCTYPE ");
                self.append_str(doctype);
                self.append_str(">");
            }
        }
    }

    fn write_declaration(&mut self, declaration: &Declaration) {
        self.append_str("<?xml");

        let fields = [
            ("version", &declaration.version),
            ("encoding", &declaration.encoding),
            ("standalone", &declaration.standalone),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                self.append_attribute(name, value);
            }
        }

        self.append_str("?>");
    }

    fn write_element(&mut self, element: &Element) {
        self.append_str("<");
        self.append_str(&element.name);
        for attribute in &element.attributes {
            self.append_attribute(
                &attribute.name,
                &attribute
                    .value
                    .to_string(),
            );
        }

        if element
            .children
            .is_empty()
        {
            self.append_str("/>");
            return;
        }

        self.append_str(">");

        // Line breaks next to text would become part of that text when read
        // back, so mixed content is written without any.
        let block = !element
            .children
            .iter()
            .any(Node::is_inline);

        for child in &element.children {
            if block {
                self.append_newline();
            }
            self.write_node(child);
        }

        if block {
            self.append_newline();
        }

        self.append_str("</");
        self.append_str(&element.name);
        self.append_str(">");
    }
}
