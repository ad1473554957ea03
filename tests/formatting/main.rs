mod edits;
mod indentation;
