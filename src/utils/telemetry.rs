// file: src/utils/telemetry.rs
// description: timing helpers for load and build phases

use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Logs how long a named phase took once it completes.
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        debug!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish_with_count(self, count: usize, unit: &str) -> Duration {
        let elapsed = self.elapsed();
        let secs = elapsed.as_secs_f64();
        info!(
            "Completed {}: {} {} in {:.2}s ({:.2} {}/sec)",
            self.operation,
            count,
            unit,
            secs,
            if secs > 0.0 { count as f64 / secs } else { 0.0 },
            unit
        );
        elapsed
    }
}
