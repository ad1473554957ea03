// Types representing HDevelop procedures and the errors raised handling them

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
