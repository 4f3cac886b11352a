use std::sync::Arc;
use std::time::Duration;
use lazy_static::lazy_static;
use crate::config::{get_config, HappenConfig};
use crate::error::HappenError;

/// Destination for the outcome of a finished timer.
/// Timers never return errors to the timed code; they end up here.
pub trait Reporter: Send + Sync {
    /// A happening was measured
    fn finished(&self, name: &str, duration: Duration);

    /// Timing failed somewhere between capture and measurement
    fn failed(&self, error: &HappenError);
}

/// Reports through `tracing`: info on success, error on failure
#[derive(Debug, Clone, Default)]
pub struct TracingReporter {
    /// Durations above this are logged at warn level
    slow_threshold: Option<Duration>,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &HappenConfig) -> Self {
        TracingReporter {
            slow_threshold: config.slow_threshold_ms.map(Duration::from_millis),
        }
    }

    pub fn with_slow_threshold(mut self, threshold: Duration) -> Self {
        self.slow_threshold = Some(threshold);
        self
    }

    pub fn is_slow(&self, duration: Duration) -> bool {
        self.slow_threshold.is_some_and(|threshold| duration > threshold)
    }
}

impl Reporter for TracingReporter {
    fn finished(&self, name: &str, duration: Duration) {
        if self.is_slow(duration) {
            tracing::warn!(
                name = name,
                duration = ?duration,
                threshold = ?self.slow_threshold,
                "Finished timing {} (slow)",
                name
            );
        } else {
            tracing::info!(name = name, duration = ?duration, "Finished timing {}", name);
        }
    }

    fn failed(&self, error: &HappenError) {
        tracing::error!(stage = error.stage(), error = %error, "Timing failed");
    }
}

lazy_static! {
    static ref DEFAULT_REPORTER: Arc<dyn Reporter> =
        Arc::new(TracingReporter::from_config(get_config()));
}

/// Reporter used by timers started without an explicit one
pub fn default_reporter() -> Arc<dyn Reporter> {
    DEFAULT_REPORTER.clone()
}
