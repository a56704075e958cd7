// file: src/index/inverted.rs
// description: term to posting list index with case-insensitive lookup
// reference: inverted index construction over an ordered corpus

use super::tokenizer::unique_terms;
use crate::models::{Corpus, QueryResult};
use crate::pipeline::BuildProgress;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Membership index built once from a corpus. Posting lists hold each
/// document id at most once, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<usize>>,
    doc_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub documents: usize,
    pub vocabulary: usize,
    pub postings: usize,
    pub avg_terms_per_doc: f64,
}

impl InvertedIndex {
    pub fn build(corpus: &Corpus) -> Self {
        Self::build_inner(corpus, |_| {})
    }

    pub fn build_with_progress(corpus: &Corpus, progress: &BuildProgress) -> Self {
        let index = Self::build_inner(corpus, |terms| progress.inc_document(terms));
        progress.finish();
        index
    }

    fn build_inner<F>(corpus: &Corpus, mut on_document: F) -> Self
    where
        F: FnMut(usize),
    {
        let mut postings: HashMap<String, Vec<usize>> = HashMap::new();

        // Ascending ids plus per-document dedup keep every list sorted and unique
        for doc in corpus {
            let terms = unique_terms(&doc.text);
            let term_count = terms.len();

            for term in terms {
                postings.entry(term).or_default().push(doc.id);
            }

            on_document(term_count);
        }

        debug!(
            "Indexed {} documents into {} terms",
            corpus.len(),
            postings.len()
        );

        Self {
            postings,
            doc_count: corpus.len(),
        }
    }

    /// Exact, case-insensitive key lookup. The query is not tokenized, so
    /// unknown or punctuation-only terms simply yield an empty result.
    pub fn retrieve(&self, term: &str) -> QueryResult {
        let normalized = term.to_lowercase();
        let doc_ids = self.postings(&normalized).to_vec();
        QueryResult::new(term, normalized, doc_ids)
    }

    /// Posting list for an already normalized key.
    pub fn postings(&self, key: &str) -> &[usize] {
        self.postings.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(&term.to_lowercase())
    }

    pub fn vocabulary_size(&self) -> usize {
        self.postings.len()
    }

    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.postings.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> + '_ {
        self.postings
            .iter()
            .map(|(term, ids)| (term.as_str(), ids.as_slice()))
    }

    pub fn stats(&self) -> IndexStats {
        let postings: usize = self.postings.values().map(Vec::len).sum();
        let avg_terms_per_doc = if self.doc_count == 0 {
            0.0
        } else {
            postings as f64 / self.doc_count as f64
        };

        IndexStats {
            documents: self.doc_count,
            vocabulary: self.postings.len(),
            postings,
            avg_terms_per_doc,
        }
    }
}

pub fn retrieve(term: &str, index: &InvertedIndex) -> QueryResult {
    index.retrieve(term)
}
