//! Documentation entries derived from the interface

use crate::language::{DocuEntry, Interface};

/// One entry per parameter name across all groups, sorted. Names that occur
/// in more than one group appear once for each occurrence.
pub fn generate(interface: &Interface) -> Vec<DocuEntry> {
    let mut names: Vec<&str> = interface
        .names()
        .collect();
    names.sort();

    names
        .into_iter()
        .map(|name| DocuEntry {
            name: name.to_string(),
        })
        .collect()
}
