// file: src/corpus/format.rs
// description: supported corpus source formats and extension detection

use crate::error::{IndexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Comma separated values with a header row
    Csv,
    /// One JSON object per line
    #[serde(alias = "jsonl", alias = "ndjson", alias = "json")]
    JsonLines,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("jsonl") | Some("ndjson") | Some("json") => Ok(Self::JsonLines),
            _ => Err(IndexError::Config(format!(
                "Cannot infer source format from {}; set the format explicitly (csv or jsonl)",
                path.display()
            ))),
        }
    }
}

impl FromStr for SourceFormat {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "jsonl" | "jsonlines" | "ndjson" | "json" => Ok(Self::JsonLines),
            other => Err(IndexError::Config(format!(
                "Unknown source format: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::JsonLines => write!(f, "jsonl"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            SourceFormat::from_path(Path::new("mental_health.csv")).unwrap(),
            SourceFormat::Csv
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("data/set.JSONL")).unwrap(),
            SourceFormat::JsonLines
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("mental_health_dataset.json")).unwrap(),
            SourceFormat::JsonLines
        );
        assert!(SourceFormat::from_path(Path::new("notes.txt")).is_err());
        assert!(SourceFormat::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("CSV".parse::<SourceFormat>().unwrap(), SourceFormat::Csv);
        assert_eq!(
            "ndjson".parse::<SourceFormat>().unwrap(),
            SourceFormat::JsonLines
        );
        assert!("xml".parse::<SourceFormat>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for format in [SourceFormat::Csv, SourceFormat::JsonLines] {
            assert_eq!(format.to_string().parse::<SourceFormat>().unwrap(), format);
        }
    }
}
