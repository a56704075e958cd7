// file: src/corpus/mod.rs
// description: corpus loading from tabular and JSON-lines sources
// reference: internal module structure

mod delimited;
pub mod format;
mod json_lines;

pub use format::SourceFormat;

use crate::error::{IndexError, Result};
use crate::models::Corpus;
use crate::utils::Validator;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::info;

/// Loads one text-bearing column of a source file into a [`Corpus`].
/// Any failure returns an error and no corpus at all.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    text_column: String,
}

impl CorpusLoader {
    pub fn new(text_column: impl Into<String>) -> Self {
        Self {
            text_column: text_column.into(),
        }
    }

    pub fn text_column(&self) -> &str {
        &self.text_column
    }

    /// Reads `path` with the given format, or the one implied by its extension.
    pub fn load(&self, path: &Path, format: Option<SourceFormat>) -> Result<Corpus> {
        Validator::validate_source_path(path)?;

        let format = match format {
            Some(format) => format,
            None => SourceFormat::from_path(path)?,
        };

        info!(
            "Loading {} corpus from {} (column '{}')",
            format,
            path.display(),
            self.text_column
        );

        let texts = match format {
            SourceFormat::Csv => delimited::read_text_column(path, &self.text_column)?,
            SourceFormat::JsonLines => json_lines::read_text_column(path, &self.text_column)?,
        };

        info!("Loaded {} documents", texts.len());
        Ok(Corpus::from_texts(texts).with_source(path))
    }
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new("text")
    }
}

pub(crate) fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => IndexError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => IndexError::parse(path, e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::InvertedIndex;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_csv_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mental_health.csv");
        fs::write(&path, "text,label\nThe cat sat.,0\nA cat and a dog.,1\n").unwrap();

        let corpus = CorpusLoader::default().load(&path, None).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(0).unwrap().text, "The cat sat.");
        assert_eq!(corpus.source(), Some(path.as_path()));
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dump.txt");
        fs::write(&path, "{\"content\": \"hello world\"}\n").unwrap();

        let loader = CorpusLoader::new("content");
        assert!(loader.load(&path, None).is_err());

        let corpus = loader.load(&path, Some(SourceFormat::JsonLines)).unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_missing_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");

        let err = CorpusLoader::default().load(&path, None).unwrap_err();
        assert!(matches!(err, IndexError::SourceNotFound { .. }));
        assert_eq!(err.kind(), "source-not-found");
    }

    #[test]
    fn test_directory_is_not_a_source() {
        let dir = TempDir::new().unwrap();

        let err = CorpusLoader::default()
            .load(dir.path(), Some(SourceFormat::Csv))
            .unwrap_err();
        assert_eq!(err.kind(), "source-not-found");
    }

    #[test]
    fn test_missing_column_produces_no_corpus() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("labels.csv");
        fs::write(&path, "id,label\n1,0\n").unwrap();

        let result = CorpusLoader::default().load(&path, None);
        match result {
            Err(IndexError::MissingColumn { available, .. }) => {
                assert_eq!(available, vec!["id", "label"]);
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_text_rows_are_indexed_as_nan() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("labels.csv");
        fs::write(&path, "label,text\n1,\n0,hello\n1,N/A\n").unwrap();

        let corpus = CorpusLoader::default().load(&path, None).unwrap();
        assert_eq!(corpus.len(), 3);
        assert!(corpus.get(0).unwrap().is_missing());
        assert!(corpus.get(2).unwrap().is_missing());

        let index = InvertedIndex::build(&corpus);
        assert_eq!(index.retrieve("nan").doc_ids, vec![0, 2]);
        assert_eq!(index.retrieve("NaN").doc_ids, vec![0, 2]);
        assert_eq!(index.terms(), vec!["hello", "nan"]);
    }

    #[test]
    fn test_csv_and_jsonl_build_identical_indexes() {
        let dir = TempDir::new().unwrap();
        let csv_path = dir.path().join("set.csv");
        let jsonl_path = dir.path().join("set.jsonl");
        fs::write(&csv_path, "text\nThe cat sat.\nA cat and a dog.\n").unwrap();
        fs::write(
            &jsonl_path,
            "{\"text\": \"The cat sat.\"}\n{\"text\": \"A cat and a dog.\"}\n",
        )
        .unwrap();

        let loader = CorpusLoader::default();
        let from_csv = InvertedIndex::build(&loader.load(&csv_path, None).unwrap());
        let from_jsonl = InvertedIndex::build(&loader.load(&jsonl_path, None).unwrap());

        assert_eq!(from_csv, from_jsonl);
        assert_eq!(from_csv.retrieve("cat").doc_ids, vec![0, 1]);
    }
}
