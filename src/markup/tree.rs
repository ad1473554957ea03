//! Order-preserving tree of markup nodes

use std::fmt;

/// An attribute value. The variant records what the value looked like when
/// it was read, and always renders back to that same text.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Scalar {
    /// Type a raw attribute value. Only values in their canonical textual
    /// form become numbers or booleans, so "007" or "1.0" stay text.
    pub fn parse(raw: &str) -> Scalar {
        if let Ok(value) = raw.parse::<i64>() {
            if value.to_string() == raw {
                return Scalar::Integer(value);
            }
        }

        if let Ok(value) = raw.parse::<f64>() {
            if value.is_finite() && value.to_string() == raw {
                return Scalar::Float(value);
            }
        }

        match raw {
            "true" => Scalar::Boolean(true),
            "false" => Scalar::Boolean(false),
            _ => Scalar::Text(raw.to_string()),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Scalar::Integer(value) => Some(*value),
            Scalar::Text(text) => text
                .trim()
                .parse()
                .ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Integer(value) => write!(f, "{}", value),
            Scalar::Float(value) => write!(f, "{}", value),
            Scalar::Boolean(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.to_string())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Integer(value as i64)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: Scalar,
}

/// The `<?xml ...?>` prologue. XML only allows these three pseudo-attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declaration {
    pub version: Option<String>,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Declaration(Declaration),
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
    Instruction(String),
    DocType(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Text and CDATA sit inline with their surroundings when written out.
    pub(crate) fn is_inline(&self) -> bool {
        matches!(self, Node::Text(_) | Node::CData(_))
    }
}

impl Element {
    pub fn new(name: &str) -> Element {
        Element {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<Scalar>) -> Element {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, node: Node) -> Element {
        self.children
            .push(node);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Scalar> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| &attribute.value)
    }

    /// Overwrite an existing attribute in place, keeping its position, or
    /// append a new one.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<Scalar>) {
        let value = value.into();
        match self
            .attributes
            .iter_mut()
            .find(|attribute| attribute.name == name)
        {
            Some(attribute) => attribute.value = value,
            None => self
                .attributes
                .push(Attribute {
                    name: name.to_string(),
                    value,
                }),
        }
    }

    /// Child elements only, skipping text, comments and the like.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
    }

    /// Positions within `children` of the child elements.
    pub fn element_positions(&self) -> Vec<usize> {
        self.children
            .iter()
            .enumerate()
            .filter(|(_, node)| matches!(node, Node::Element(_)))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements()
            .find(|element| element.name == name)
    }

    /// The content of an element holding exactly one text node, as in
    /// `<l>text</l>`.
    pub fn text(&self) -> Option<&str> {
        match self
            .children
            .as_slice()
        {
            [Node::Text(text)] | [Node::CData(text)] => Some(text.as_str()),
            _ => None,
        }
    }
}

/// A parsed markup document: the sequence of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn declaration(&self) -> Option<&Declaration> {
        match self
            .nodes
            .first()
        {
            Some(Node::Declaration(declaration)) => Some(declaration),
            _ => None,
        }
    }

    pub fn declaration_mut(&mut self) -> Option<&mut Declaration> {
        match self
            .nodes
            .first_mut()
        {
            Some(Node::Declaration(declaration)) => Some(declaration),
            _ => None,
        }
    }

    /// The first top-level element.
    pub fn root(&self) -> Option<&Element> {
        self.nodes
            .iter()
            .find_map(Node::as_element)
    }
}
