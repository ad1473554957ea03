//! Types representing the editable parts of an HDevelop procedure

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four parameter groups of a procedure interface, in the order they
/// appear in the file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    InputObjects,
    OutputObjects,
    InputControls,
    OutputControls,
}

impl GroupKind {
    pub const ALL: [GroupKind; 4] = [
        GroupKind::InputObjects,
        GroupKind::OutputObjects,
        GroupKind::InputControls,
        GroupKind::OutputControls,
    ];

    /// The element name used for this group inside `<interface>`.
    pub fn tag(&self) -> &'static str {
        match self {
            GroupKind::InputObjects => "io",
            GroupKind::OutputObjects => "oo",
            GroupKind::InputControls => "ic",
            GroupKind::OutputControls => "oc",
        }
    }

    pub fn from_tag(tag: &str) -> Option<GroupKind> {
        match tag {
            "io" => Some(GroupKind::InputObjects),
            "oo" => Some(GroupKind::OutputObjects),
            "ic" => Some(GroupKind::InputControls),
            "oc" => Some(GroupKind::OutputControls),
            _ => None,
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GroupKind::InputObjects => "input objects",
            GroupKind::OutputObjects => "output objects",
            GroupKind::InputControls => "input controls",
            GroupKind::OutputControls => "output controls",
        };
        f.write_str(label)
    }
}

/// A single interface parameter. A `dimension` of zero is a scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub base_type: String,
    pub dimension: u32,
    pub name: String,
}

impl Parameter {
    pub fn new(base_type: &str, name: &str, dimension: u32) -> Parameter {
        Parameter {
            base_type: base_type.to_string(),
            dimension,
            name: name.to_string(),
        }
    }

    pub fn is_scalar(&self) -> bool {
        self.dimension == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterGroup(pub Vec<Parameter>);

impl ParameterGroup {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .map(|parameter| parameter.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.0
            .is_empty()
    }
}

/// The complete typed interface of a procedure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interface {
    pub input_objects: ParameterGroup,
    pub output_objects: ParameterGroup,
    pub input_controls: ParameterGroup,
    pub output_controls: ParameterGroup,
}

impl Interface {
    pub fn group(&self, kind: GroupKind) -> &ParameterGroup {
        match kind {
            GroupKind::InputObjects => &self.input_objects,
            GroupKind::OutputObjects => &self.output_objects,
            GroupKind::InputControls => &self.input_controls,
            GroupKind::OutputControls => &self.output_controls,
        }
    }

    pub fn group_mut(&mut self, kind: GroupKind) -> &mut ParameterGroup {
        match kind {
            GroupKind::InputObjects => &mut self.input_objects,
            GroupKind::OutputObjects => &mut self.output_objects,
            GroupKind::InputControls => &mut self.input_controls,
            GroupKind::OutputControls => &mut self.output_controls,
        }
    }

    /// Parameter names across all four groups, in group order io, oo, ic, oc.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        GroupKind::ALL
            .into_iter()
            .flat_map(move |kind| {
                self.group(kind)
                    .names()
            })
    }
}

/// One line of a procedure body. The tag in the file (`<c>` or `<l>`)
/// decides the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine {
    Comment(String),
    Statement(String),
}

impl BodyLine {
    pub fn text(&self) -> &str {
        match self {
            BodyLine::Comment(text) => text,
            BodyLine::Statement(text) => text,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            BodyLine::Comment(_) => "c",
            BodyLine::Statement(_) => "l",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocuEntry {
    pub name: String,
}
