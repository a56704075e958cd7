// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod corpus;
pub mod error;
pub mod exporter;
pub mod index;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use config::{Config, CorpusConfig, QueryConfig};
pub use corpus::{CorpusLoader, SourceFormat};
pub use error::{IndexError, Result};
pub use exporter::{QueryReport, ReportExporter, RetrievalReport};
pub use index::{IndexStats, InvertedIndex, retrieve, tokenize};
pub use models::{Corpus, Document, QueryResult};
pub use pipeline::{BuildProgress, BuildStats};
pub use utils::{OperationTimer, Validator};
