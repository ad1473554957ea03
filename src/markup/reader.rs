//! Reading markup into a tree

use std::borrow::Cow;

use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use super::tree::*;
use crate::language::MarkupError;

pub(super) fn read(content: &[u8]) -> Result<Document, MarkupError> {
    let source = std::str::from_utf8(content).map_err(|error| MarkupError {
        problem: format!("invalid UTF-8 ({})", error),
        offset: error.valid_up_to(),
    })?;

    let mut reader = Reader::from_str(source);
    let mut open: Vec<Element> = Vec::new();
    let mut document = Document::default();

    loop {
        let offset = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|error| MarkupError {
                problem: error.to_string(),
                offset: reader.buffer_position(),
            })?;

        let node = match event {
            Event::Decl(decl) => Node::Declaration(read_declaration(&decl)),
            Event::Start(start) => {
                open.push(read_element(&start, offset)?);
                continue;
            }
            Event::Empty(start) => Node::Element(read_element(&start, offset)?),
            Event::End(end) => {
                let name = decode(end.name().as_ref()).into_owned();
                match open.pop() {
                    Some(element) if element.name == name => Node::Element(element),
                    Some(element) => {
                        return Err(MarkupError {
                            problem: format!(
                                "expected </{}> but found </{}>",
                                element.name, name
                            ),
                            offset,
                        })
                    }
                    None => {
                        return Err(MarkupError {
                            problem: format!("unexpected </{}>", name),
                            offset,
                        })
                    }
                }
            }
            Event::Text(text) => {
                let value = text
                    .unescape()
                    .map_err(|error| MarkupError {
                        problem: error.to_string(),
                        offset,
                    })?;
                // whitespace between elements carries no meaning
                if value
                    .trim()
                    .is_empty()
                {
                    continue;
                }
                Node::Text(value.into_owned())
            }
            Event::CData(data) => Node::CData(decode(&data).into_owned()),
            Event::Comment(comment) => Node::Comment(decode(&comment).into_owned()),
            Event::PI(instruction) => Node::Instruction(decode(&instruction).into_owned()),
            Event::DocType(doctype) => Node::DocType(decode(&doctype).into_owned()),
            Event::Eof => break,
        };

        match open.last_mut() {
            Some(parent) => parent
                .children
                .push(node),
            None => document
                .nodes
                .push(node),
        }
    }

    if let Some(element) = open.last() {
        return Err(MarkupError {
            problem: format!("unclosed element <{}>", element.name),
            offset: source.len(),
        });
    }

    debug!("Read {} top-level nodes", document.nodes.len());

    Ok(document)
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

fn read_declaration(decl: &BytesDecl) -> Declaration {
    Declaration {
        version: field(Some(decl.version())),
        encoding: field(decl.encoding()),
        standalone: field(decl.standalone()),
    }
}

fn field(value: Option<quick_xml::Result<Cow<'_, [u8]>>>) -> Option<String> {
    value
        .and_then(Result::ok)
        .map(|bytes| {
            decode(&bytes).into_owned()
        })
}

fn read_element(start: &BytesStart, offset: usize) -> Result<Element, MarkupError> {
    let mut element = Element::new(&decode(start.name().as_ref()));

    for attribute in start.attributes() {
        let attribute = attribute.map_err(|error| MarkupError {
            problem: error.to_string(),
            offset,
        })?;
        let value = attribute
            .unescape_value()
            .map_err(|error| MarkupError {
                problem: error.to_string(),
                offset,
            })?;

        element
            .attributes
            .push(Attribute {
                name: decode(attribute.key.as_ref()).into_owned(),
                value: Scalar::parse(&value),
            });
    }

    Ok(element)
}
