//! Indentation and highlighting of HDevelop code

mod formatter;
mod renderer;
mod syntax;

// Re-export all public symbols
pub use formatter::*;
pub use renderer::*;
pub use syntax::*;
