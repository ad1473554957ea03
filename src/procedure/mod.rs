//! The shape of an HDevelop procedure file
//!
//! A procedure file is a markup document of the form
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <hdevelop file_version="1.2" halcon_version="22.11.0.0">
//! <procedure name="...">
//! <interface> ... </interface>
//! <body> ... </body>
//! <docu id="..."> ... </docu>
//! </procedure>
//! </hdevelop>
//! ```
//!
//! Validation locates the three mutable subtrees once; the accessors and
//! mutators then work on the original tree by position, leaving everything
//! else exactly as it was read.

use tracing::{debug, warn};

use crate::language::*;
use crate::markup::{Document, Element, Node};

/// The declaration version written back on every save.
pub const CANONICAL_VERSION: &str = "1.0";

// Stands in for a part of the tree that validation guarantees is present.
static EMPTY: Element = Element {
    name: String::new(),
    attributes: Vec::new(),
    children: Vec::new(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Location {
    root: usize,
    procedure: usize,
    interface: usize,
    body: usize,
    docu: usize,
}

/// A document known to contain a well-formed procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDocument {
    document: Document,
    location: Location,
}

/// Check the document has the shape of a procedure file, taking ownership
/// of it for subsequent reads and in-place replacement.
pub fn validate(mut document: Document) -> Result<ProcedureDocument, StructuralError> {
    let location = locate(&document).inspect_err(|error| warn!("{}", error))?;

    if let Some(declaration) = document.declaration_mut() {
        declaration.version = Some(CANONICAL_VERSION.to_string());
    }

    debug!(?location, "Validated procedure document");

    Ok(ProcedureDocument { document, location })
}

fn locate(document: &Document) -> Result<Location, StructuralError> {
    match document.declaration() {
        Some(declaration) if declaration.version.is_some() => {}
        _ => return Err(StructuralError::MissingDeclaration),
    }

    let root = document
        .nodes
        .iter()
        .position(|node| matches!(node, Node::Element(_)))
        .ok_or(StructuralError::MissingRoot)?;
    let hdevelop = match &document.nodes[root] {
        Node::Element(element) if element.name == "hdevelop" => element,
        _ => return Err(StructuralError::MissingRoot),
    };

    let procedure = hdevelop
        .element_positions()
        .first()
        .copied()
        .ok_or(StructuralError::MissingProcedure)?;
    let procedure_element = match &hdevelop.children[procedure] {
        Node::Element(element) if element.name == "procedure" => element,
        _ => return Err(StructuralError::MissingProcedure),
    };

    let positions = procedure_element.element_positions();
    if positions.len() < 3 {
        return Err(StructuralError::TooFewProcedureElements(positions.len()));
    }

    let expect_at = |i: usize, name: &'static str| -> Result<usize, StructuralError> {
        let position = positions[i];
        match &procedure_element.children[position] {
            Node::Element(element) if element.name == name => Ok(position),
            _ => Err(StructuralError::MissingProcedureElement(name)),
        }
    };

    Ok(Location {
        root,
        procedure,
        interface: expect_at(0, "interface")?,
        body: expect_at(1, "body")?,
        docu: expect_at(2, "docu")?,
    })
}

impl ProcedureDocument {
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    fn procedure(&self) -> Option<&Element> {
        self.document
            .nodes
            .get(self.location.root)
            .and_then(Node::as_element)
            .and_then(|root| {
                root.children
                    .get(self.location.procedure)
            })
            .and_then(Node::as_element)
    }

    fn part(&self, position: usize) -> &Element {
        self.procedure()
            .and_then(|procedure| {
                procedure
                    .children
                    .get(position)
            })
            .and_then(Node::as_element)
            .unwrap_or(&EMPTY)
    }

    fn part_mut(&mut self, position: usize) -> Option<&mut Element> {
        let location = self.location;
        self.document
            .nodes
            .get_mut(location.root)
            .and_then(Node::as_element_mut)
            .and_then(|root| {
                root.children
                    .get_mut(location.procedure)
            })
            .and_then(Node::as_element_mut)
            .and_then(|procedure| {
                procedure
                    .children
                    .get_mut(position)
            })
            .and_then(Node::as_element_mut)
    }

    fn replace_children(&mut self, position: usize, children: Vec<Node>) {
        if let Some(element) = self.part_mut(position) {
            element.children = children;
        }
    }

    /// The value of the procedure's `name` attribute, if it has one.
    pub fn name(&self) -> Option<String> {
        self.procedure()
            .and_then(|procedure| procedure.attribute("name"))
            .map(|value| value.to_string())
    }

    pub fn interface_element(&self) -> &Element {
        self.part(self.location.interface)
    }

    pub fn body_element(&self) -> &Element {
        self.part(self.location.body)
    }

    pub fn docu_element(&self) -> &Element {
        self.part(self.location.docu)
    }

    /// Read the parameter groups. A group missing from the file reads as
    /// empty, as do parameters with missing attributes.
    pub fn interface(&self) -> Interface {
        let mut interface = Interface::default();

        for group in self
            .interface_element()
            .elements()
        {
            let Some(kind) = GroupKind::from_tag(&group.name) else {
                debug!(tag = %group.name, "Ignoring unknown interface group");
                continue;
            };

            let parameters = group
                .elements()
                .filter(|par| par.name == "par")
                .map(read_parameter)
                .collect();

            *interface.group_mut(kind) = ParameterGroup(parameters);
        }

        interface
    }

    pub fn body(&self) -> Vec<BodyLine> {
        self.body_element()
            .elements()
            .map(|line| {
                let text = line
                    .text()
                    .unwrap_or_default()
                    .to_string();
                match line
                    .name
                    .as_str()
                {
                    "c" => BodyLine::Comment(text),
                    _ => BodyLine::Statement(text),
                }
            })
            .collect()
    }

    pub fn docu(&self) -> Vec<DocuEntry> {
        self.docu_element()
            .elements()
            .filter(|element| element.name == "parameters")
            .flat_map(|parameters| parameters.elements())
            .filter(|element| element.name == "parameter")
            .map(|parameter| DocuEntry {
                name: parameter
                    .attribute("id")
                    .map(|value| value.to_string())
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Replace the children of `<interface>` with the four groups.
    pub fn replace_interface(&mut self, interface: &Interface) {
        let groups = GroupKind::ALL
            .into_iter()
            .map(|kind| {
                let mut element = Element::new(kind.tag());
                element.children = interface
                    .group(kind)
                    .0
                    .iter()
                    .map(|parameter| Node::Element(write_parameter(parameter)))
                    .collect();
                Node::Element(element)
            })
            .collect();

        self.replace_children(self.location.interface, groups);
    }

    /// Replace the children of `<body>`, one `<c>` or `<l>` per line.
    pub fn replace_body(&mut self, lines: &[BodyLine]) {
        let children = lines
            .iter()
            .map(|line| {
                let mut element = Element::new(line.tag());
                if !line
                    .text()
                    .is_empty()
                {
                    element
                        .children
                        .push(Node::Text(
                            line.text()
                                .to_string(),
                        ));
                }
                Node::Element(element)
            })
            .collect();

        self.replace_children(self.location.body, children);
    }

    /// Replace the content of `<docu>`, keeping its attributes.
    pub fn replace_docu(&mut self, entries: &[DocuEntry]) {
        let mut parameters = Element::new("parameters");
        parameters.children = entries
            .iter()
            .map(|entry| {
                Node::Element(Element::new("parameter").with_attribute("id", entry.name.as_str()))
            })
            .collect();

        self.replace_children(self.location.docu, vec![Node::Element(parameters)]);
    }
}

fn read_parameter(par: &Element) -> Parameter {
    let text = |name: &str| {
        par.attribute(name)
            .map(|value| value.to_string())
            .unwrap_or_default()
    };

    let dimension = par
        .attribute("dimension")
        .and_then(|value| value.as_integer())
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(0);

    Parameter {
        base_type: text("base_type"),
        dimension,
        name: text("name"),
    }
}

fn write_parameter(parameter: &Parameter) -> Element {
    Element::new("par")
        .with_attribute("name", parameter.name.as_str())
        .with_attribute("base_type", parameter.base_type.as_str())
        .with_attribute("dimension", parameter.dimension)
}
