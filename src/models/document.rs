// file: src/models/document.rs
// description: corpus document model with positional identifiers
// reference: internal data structures

use serde::Serialize;

/// Text stored for rows whose source value is missing.
pub const MISSING_TEXT: &str = "nan";

/// A raw text row identified by its zero-based position in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: usize,
    pub text: String,
}

impl Document {
    pub fn new(id: usize, text: String) -> Self {
        Self { id, text }
    }

    pub fn is_missing(&self) -> bool {
        self.text == MISSING_TEXT
    }
}
