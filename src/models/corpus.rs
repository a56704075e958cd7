// file: src/models/corpus.rs
// description: ordered, read-only collection of loaded documents
// reference: internal data structures

use super::Document;
use std::path::{Path, PathBuf};

/// Ordered documents whose ids are their row positions. Length is fixed
/// once constructed and there is no mutation API.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    source: Option<PathBuf>,
}

impl Corpus {
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let documents = texts
            .into_iter()
            .enumerate()
            .map(|(id, text)| Document::new(id, text.into()))
            .collect();

        Self {
            documents,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
