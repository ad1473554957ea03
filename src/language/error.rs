use std::{fmt, path::Path};

/// Failure to read a file from disk, before any parsing happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl<'i> std::error::Error for LoadingError<'i> {}

/// Input that is not well-formed markup. The offset is in bytes from the
/// start of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupError {
    pub problem: String,
    pub offset: usize,
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed markup at byte {}: {}", self.offset, self.problem)
    }
}

impl std::error::Error for MarkupError {}

/// The document cannot be used at all: either it is not markup, or one of
/// the elements a procedure file must have is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    Malformed(MarkupError),
    MissingDeclaration,
    MissingRoot,
    MissingProcedure,
    TooFewProcedureElements(usize),
    MissingProcedureElement(&'static str),
}

impl StructuralError {
    pub fn offset(&self) -> Option<usize> {
        match self {
            StructuralError::Malformed(error) => Some(error.offset),
            _ => None,
        }
    }
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::Malformed(error) => write!(f, "Invalid file: {}", error),
            StructuralError::MissingDeclaration => {
                write!(f, "Invalid file: could not find XML header and version")
            }
            StructuralError::MissingRoot => {
                write!(f, "Invalid file: could not find hdevelop element")
            }
            StructuralError::MissingProcedure => {
                write!(f, "Invalid file: could not find procedure elements (no procedure)")
            }
            StructuralError::TooFewProcedureElements(found) => write!(
                f,
                "Invalid file: could not find procedure elements (expected interface, body and docu, found {})",
                found
            ),
            StructuralError::MissingProcedureElement(name) => write!(
                f,
                "Invalid file: could not find procedure elements (missing <{}>)",
                name
            ),
        }
    }
}

impl std::error::Error for StructuralError {}

impl From<MarkupError> for StructuralError {
    fn from(error: MarkupError) -> Self {
        StructuralError::Malformed(error)
    }
}

/// A parameter line that does not follow `type name[dimension]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub line: String,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot save file: invalid parameter format at '{}'", self.line)
    }
}

impl std::error::Error for FormatError {}
