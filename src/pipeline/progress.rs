// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for index builds
// reference: uses indicatif for progress bars and tracks indexing metrics

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    pub documents_indexed: usize,
    pub term_occurrences: usize,
    pub duration_secs: f64,
}

impl BuildStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents_per_second(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        self.documents_indexed as f64 / self.duration_secs
    }
}

pub struct BuildProgress {
    bar: ProgressBar,
    documents_indexed: AtomicUsize,
    term_occurrences: AtomicUsize,
    start_time: Instant,
}

impl BuildProgress {
    pub fn with_color(total_documents: usize, colored: bool) -> Self {
        let bar = create_progress_bar(total_documents as u64, colored);
        Self::from_bar(bar)
    }

    /// Tracks counts without drawing anything.
    pub fn hidden(total_documents: usize) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(total_documents as u64),
            ProgressDrawTarget::hidden(),
        );
        Self::from_bar(bar)
    }

    fn from_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            documents_indexed: AtomicUsize::new(0),
            term_occurrences: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn inc_document(&self, distinct_terms: usize) {
        self.documents_indexed.fetch_add(1, Ordering::Relaxed);
        self.term_occurrences
            .fetch_add(distinct_terms, Ordering::Relaxed);
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Index built");
    }

    pub fn get_stats(&self) -> BuildStats {
        BuildStats {
            documents_indexed: self.documents_indexed.load(Ordering::Relaxed),
            term_occurrences: self.term_occurrences.load(Ordering::Relaxed),
            duration_secs: self.start_time.elapsed().as_secs_f64(),
        }
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} docs {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} docs {msg}"
    };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => {
            let chars = if colored { "█▓▒░" } else { "=>-" };
            bar.set_style(style.progress_chars(chars));
        }
        Err(_) => bar.set_style(ProgressStyle::default_bar()),
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_stats_rate() {
        let mut stats = BuildStats::new();
        stats.documents_indexed = 100;
        stats.duration_secs = 4.0;

        assert_eq!(stats.documents_per_second(), 25.0);
    }

    #[test]
    fn test_build_stats_zero_duration() {
        let stats = BuildStats::new();
        assert_eq!(stats.documents_per_second(), 0.0);
    }

    #[test]
    fn test_progress_counts() {
        let progress = BuildProgress::hidden(3);

        progress.inc_document(4);
        progress.inc_document(0);

        let stats = progress.get_stats();
        assert_eq!(stats.documents_indexed, 2);
        assert_eq!(stats.term_occurrences, 4);
    }
}
