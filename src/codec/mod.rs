//! Conversions between procedure subtrees and the text the user edits

pub mod body;
pub mod docu;
pub mod parameters;
