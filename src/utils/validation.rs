// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{IndexError, Result};
use std::path::Path;

pub const MAX_DISPLAY_LIMIT: usize = 10_000;

pub struct Validator;

impl Validator {
    pub fn validate_source_path(path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(IndexError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    pub fn validate_text_column(column: &str) -> Result<()> {
        if column.trim().is_empty() {
            return Err(IndexError::Validation(
                "Text column name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_display_limit(limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(IndexError::Validation(
                "Display limit must be greater than 0".to_string(),
            ));
        }

        if limit > MAX_DISPLAY_LIMIT {
            return Err(IndexError::Validation(format!(
                "Display limit too large (max {})",
                MAX_DISPLAY_LIMIT
            )));
        }

        Ok(())
    }

    /// Cuts `text` to at most `max_chars` characters, appending "..." when shortened.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
            None => text.to_string(),
        }
    }
}
