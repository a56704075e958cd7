// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod corpus;
pub mod document;
pub mod query_result;

pub use corpus::Corpus;
pub use document::{Document, MISSING_TEXT};
pub use query_result::QueryResult;
