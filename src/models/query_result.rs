// file: src/models/query_result.rs
// description: term lookup result with display helpers
// reference: Used for inverted index membership queries

use super::{Corpus, Document};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Query term as supplied by the caller
    pub query: String,

    /// Lowercased key used for the lookup
    pub normalized: String,

    /// Ascending document ids containing the term
    pub doc_ids: Vec<usize>,
}

impl QueryResult {
    pub fn new(query: &str, normalized: String, doc_ids: Vec<usize>) -> Self {
        Self {
            query: query.to_string(),
            normalized,
            doc_ids,
        }
    }

    pub fn match_count(&self) -> usize {
        self.doc_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_ids.is_empty()
    }

    /// At most `limit` leading ids; the result itself is left untouched.
    pub fn preview(&self, limit: usize) -> &[usize] {
        &self.doc_ids[..self.doc_ids.len().min(limit)]
    }

    pub fn is_truncated(&self, limit: usize) -> bool {
        self.doc_ids.len() > limit
    }

    pub fn first_document<'a>(&self, corpus: &'a Corpus) -> Option<&'a Document> {
        self.doc_ids.first().and_then(|&id| corpus.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_does_not_alter_result() {
        let result = QueryResult::new("Cat", "cat".to_string(), (0..25).collect());

        assert_eq!(result.preview(10), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(result.is_truncated(10));
        assert_eq!(result.match_count(), 25);
        assert_eq!(result.preview(100).len(), 25);
        assert!(!result.is_truncated(25));
    }

    #[test]
    fn test_first_document() {
        let corpus = Corpus::from_texts(["no match here", "the cat sat"]);
        let result = QueryResult::new("cat", "cat".to_string(), vec![1]);

        let doc = result.first_document(&corpus).unwrap();
        assert_eq!(doc.id, 1);
        assert_eq!(doc.text, "the cat sat");

        let empty = QueryResult::new("fish", "fish".to_string(), vec![]);
        assert!(empty.is_empty());
        assert!(empty.first_document(&corpus).is_none());
    }
}
