//! Order- and attribute-preserving markup documents
//!
//! This layer knows nothing about procedures. It reads XML into a tree that
//! keeps every node in its original order (including the declaration,
//! comments and processing instructions) and writes such a tree back out.
//! Reading the output of [`serialize`] and serializing again is stable.

use tracing::debug;

use crate::language::MarkupError;

mod reader;
mod tree;
mod writer;

pub use tree::*;

/// Parse bytes into a document tree, or report where the markup is broken.
pub fn parse(content: &[u8]) -> Result<Document, MarkupError> {
    reader::read(content)
}

pub fn serialize(document: &Document) -> Vec<u8> {
    let output = writer::write(document);
    debug!("Serialized {} bytes", output.len());
    output.into_bytes()
}
