// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: index build reporting

mod progress;

pub use progress::{BuildProgress, BuildStats};
