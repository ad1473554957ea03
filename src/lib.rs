//! Editing HDevelop procedure files as notebooks.

pub mod codec;
pub mod formatting;
pub mod language;
pub mod markup;
pub mod notebook;
pub mod procedure;
mod regex;
