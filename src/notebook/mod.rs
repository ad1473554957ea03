//! Procedure files as editable notebooks
//!
//! Opening a file projects it into five text cells: the four parameter
//! groups and the body code. Saving encodes the cells again and substitutes
//! the results into the tree the file was originally read into, so that
//! whatever the cells do not cover is written back as it was read.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::codec::{body, docu, parameters};
use crate::formatting::{Formatter, Indentation};
use crate::language::*;
use crate::markup;
use crate::procedure::{self, ProcedureDocument};

/// What a cell holds, in the order the cells are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRole {
    Parameters(GroupKind),
    Code,
}

impl CellRole {
    /// The language identifier the host associates with the cell.
    pub fn language(&self) -> &'static str {
        match self {
            CellRole::Parameters(_) => "hdevelop.api",
            CellRole::Code => "hdevelop",
        }
    }
}

impl fmt::Display for CellRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRole::Parameters(kind) => write!(f, "{}", kind),
            CellRole::Code => f.write_str("code"),
        }
    }
}

/// The five editable text blocks of a procedure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cells {
    pub input_objects: String,
    pub output_objects: String,
    pub input_controls: String,
    pub output_controls: String,
    pub code: String,
}

impl Cells {
    pub fn parameters(&self, kind: GroupKind) -> &str {
        match kind {
            GroupKind::InputObjects => &self.input_objects,
            GroupKind::OutputObjects => &self.output_objects,
            GroupKind::InputControls => &self.input_controls,
            GroupKind::OutputControls => &self.output_controls,
        }
    }

    fn parameters_mut(&mut self, kind: GroupKind) -> &mut String {
        match kind {
            GroupKind::InputObjects => &mut self.input_objects,
            GroupKind::OutputObjects => &mut self.output_objects,
            GroupKind::InputControls => &mut self.input_controls,
            GroupKind::OutputControls => &mut self.output_controls,
        }
    }

    /// The cells in presentation order, each with its role.
    pub fn iter(&self) -> impl Iterator<Item = (CellRole, &str)> {
        GroupKind::ALL
            .into_iter()
            .map(move |kind| {
                (
                    CellRole::Parameters(kind),
                    self.parameters(kind),
                )
            })
            .chain(std::iter::once((CellRole::Code, self.code.as_str())))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotebookError {
    Structural(StructuralError),
    Format(GroupKind, FormatError),
}

impl fmt::Display for NotebookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotebookError::Structural(error) => write!(f, "{}", error),
            NotebookError::Format(kind, error) => write!(f, "{} (in {})", error, kind),
        }
    }
}

impl std::error::Error for NotebookError {}

impl From<StructuralError> for NotebookError {
    fn from(error: StructuralError) -> Self {
        NotebookError::Structural(error)
    }
}

impl From<MarkupError> for NotebookError {
    fn from(error: MarkupError) -> Self {
        NotebookError::Structural(StructuralError::Malformed(error))
    }
}

/// An open procedure: the cells the user edits, and the tree they were
/// read from.
#[derive(Debug, Clone)]
pub struct EditableDocument {
    pub cells: Cells,
    base: ProcedureDocument,
}

/// Read a procedure file into cells. Malformed markup or a missing
/// procedure element is fatal; the content of the cells never is.
pub fn open(content: &[u8], settings: &Indentation) -> Result<EditableDocument, NotebookError> {
    let document = markup::parse(content)?;
    let base = procedure::validate(document)?;

    let interface = base.interface();
    let mut cells = Cells::default();
    for kind in GroupKind::ALL {
        *cells.parameters_mut(kind) = parameters::decode(interface.group(kind));
    }

    let formatter = Formatter::from_settings(settings);
    cells.code = body::decode(&base.body(), &formatter);

    info!(
        "Opened procedure {} with {} parameters",
        base.name()
            .unwrap_or_default(),
        interface
            .names()
            .count()
    );

    Ok(EditableDocument { cells, base })
}

impl EditableDocument {
    pub fn base(&self) -> &ProcedureDocument {
        &self.base
    }

    /// Encode the cells back into the base tree and serialize it. When any
    /// parameter cell is invalid nothing is changed.
    pub fn save(&mut self) -> Result<Vec<u8>, NotebookError> {
        let mut interface = Interface::default();
        for kind in GroupKind::ALL {
            let group = parameters::encode(self.cells.parameters(kind))
                .map_err(|error| NotebookError::Format(kind, error))?;
            debug!(%kind, "Encoded {} parameters", group.len());
            *interface.group_mut(kind) = group;
        }

        let entries = docu::generate(&interface);
        let lines = body::encode(&self.cells.code);

        self.base
            .replace_interface(&interface);
        self.base
            .replace_body(&lines);
        self.base
            .replace_docu(&entries);

        let output = markup::serialize(
            self.base
                .document(),
        );
        info!("Saved {} body lines, {} bytes", lines.len(), output.len());

        Ok(output)
    }
}
