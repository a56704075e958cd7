// file: src/index/mod.rs
// description: tokenizer and inverted index exports
// reference: internal module structure

pub mod inverted;
pub mod tokenizer;

pub use inverted::{IndexStats, InvertedIndex, retrieve};
pub use tokenizer::{tokenize, unique_terms};
