// Program wide top-level error handling

mod format;

// Re-export all public symbols
pub use format::*;
