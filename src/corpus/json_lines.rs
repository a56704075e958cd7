// file: src/corpus/json_lines.rs
// description: JSON-lines text field extraction
// reference: https://docs.rs/serde_json

use super::open_source;
use crate::error::{IndexError, Result};
use crate::models::MISSING_TEXT;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

pub(crate) fn read_text_column(path: &Path, column: &str) -> Result<Vec<String>> {
    let reader = BufReader::new(open_source(path)?);

    let mut records: Vec<Map<String, Value>> = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line =
            line.map_err(|e| IndexError::parse(path, format!("line {}: {}", line_number, e)))?;

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(&line) {
            Ok(Value::Object(record)) => records.push(record),
            Ok(_) => {
                return Err(IndexError::parse(
                    path,
                    format!("line {}: expected a JSON object", line_number),
                ));
            }
            Err(e) => {
                return Err(IndexError::parse(
                    path,
                    format!("line {}: {}", line_number, e),
                ));
            }
        }
    }

    if !records.iter().any(|record| record.contains_key(column)) {
        return Err(IndexError::MissingColumn {
            column: column.to_string(),
            available: collect_columns(&records),
        });
    }

    let texts: Vec<String> = records
        .iter()
        .map(|record| coerce_text(record.get(column)))
        .collect();

    debug!("Read {} records from field '{}'", texts.len(), column);
    Ok(texts)
}

/// Field names in order of first appearance across all records.
fn collect_columns(records: &[Map<String, Value>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();

    for key in records.iter().flat_map(|record| record.keys()) {
        if seen.insert(key.as_str()) {
            columns.push(key.clone());
        }
    }

    columns
}

fn coerce_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_TEXT.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
