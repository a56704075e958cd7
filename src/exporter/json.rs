// file: src/exporter/json.rs
// description: json export of query outcomes against a built index

use crate::error::{IndexError, Result};
use crate::index::{IndexStats, InvertedIndex};
use crate::models::QueryResult;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryReport {
    pub query: String,
    pub normalized: String,
    pub match_count: usize,
    pub doc_ids: Vec<usize>,
}

impl QueryReport {
    /// Keeps at most `limit` ids; `match_count` always reflects the full result.
    pub fn from_result(result: &QueryResult, limit: Option<usize>) -> Self {
        let doc_ids = match limit {
            Some(limit) => result.preview(limit).to_vec(),
            None => result.doc_ids.clone(),
        };

        Self {
            query: result.query.clone(),
            normalized: result.normalized.clone(),
            match_count: result.match_count(),
            doc_ids,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalReport {
    pub generated_at: String,
    pub source: Option<String>,
    pub stats: IndexStats,
    pub queries: Vec<QueryReport>,
}

impl RetrievalReport {
    pub fn new(
        source: Option<&Path>,
        index: &InvertedIndex,
        results: &[QueryResult],
        limit: Option<usize>,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            source: source.map(|p| p.display().to_string()),
            stats: index.stats(),
            queries: results
                .iter()
                .map(|r| QueryReport::from_result(r, limit))
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportExporter {
    output_path: PathBuf,
}

impl ReportExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Result<Self> {
        let output_path = output_path.into();
        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { output_path })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, report: &RetrievalReport, pretty: bool) -> Result<()> {
        let body = if pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
        .map_err(|e| IndexError::Serialization(e.to_string()))?;

        fs::write(&self.output_path, body)?;

        info!(
            "Exported {} query results to {}",
            report.queries.len(),
            self.output_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Corpus;
    use tempfile::tempdir;

    #[test]
    fn test_query_report_respects_limit() {
        let result = QueryResult::new("Cat", "cat".to_string(), vec![0, 2, 5, 9]);

        let report = QueryReport::from_result(&result, Some(2));
        assert_eq!(report.doc_ids, vec![0, 2]);
        assert_eq!(report.match_count, 4);

        let full = QueryReport::from_result(&result, None);
        assert_eq!(full.doc_ids, vec![0, 2, 5, 9]);
    }

    #[test]
    fn test_export_writes_readable_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports/run.json");

        let corpus = Corpus::from_texts(["The cat sat.", "A cat and a dog."]);
        let index = InvertedIndex::build(&corpus);
        let results = vec![index.retrieve("cat"), index.retrieve("fish")];
        let report = RetrievalReport::new(corpus.source(), &index, &results, None);

        let exporter = ReportExporter::new(&path).unwrap();
        exporter.export(&report, true).unwrap();

        let written = fs::read_to_string(exporter.output_path()).unwrap();
        let parsed: RetrievalReport = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.stats.documents, 2);
        assert_eq!(parsed.queries[0].doc_ids, vec![0, 1]);
        assert_eq!(parsed.queries[1].match_count, 0);
        assert!(parsed.source.is_none());
    }
}
