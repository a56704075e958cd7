// file: src/corpus/delimited.rs
// description: CSV text column extraction
// reference: https://docs.rs/csv

use super::open_source;
use crate::error::{IndexError, Result};
use crate::models::MISSING_TEXT;
use csv::ReaderBuilder;
use std::path::Path;
use tracing::debug;

/// Field values read as missing, the same set pandas treats as NaN by default.
const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn coerce_field(value: Option<&str>) -> String {
    match value {
        Some(text) if !NA_MARKERS.contains(&text) => text.to_string(),
        _ => MISSING_TEXT.to_string(),
    }
}

pub(crate) fn read_text_column(path: &Path, column: &str) -> Result<Vec<String>> {
    let file = open_source(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| IndexError::parse(path, e.to_string()))?
        .clone();

    if headers.is_empty() {
        return Err(IndexError::parse(path, "no columns to parse from file"));
    }

    let position = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| IndexError::MissingColumn {
            column: column.to_string(),
            available: headers.iter().map(String::from).collect(),
        })?;

    let mut texts = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| IndexError::parse(path, e.to_string()))?;

        if record.len() > headers.len() {
            return Err(IndexError::parse(
                path,
                format!(
                    "row {}: expected {} fields, found {}",
                    row + 1,
                    headers.len(),
                    record.len()
                ),
            ));
        }

        // Short rows keep their slot in the corpus
        texts.push(coerce_field(record.get(position)));
    }

    debug!("Read {} rows from column '{}'", texts.len(), column);
    Ok(texts)
}
