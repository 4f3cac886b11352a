use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for registry transitions.
/// All metrics are atomic counters for thread-safety
#[derive(Clone, Default, Debug)]
pub struct RegistryMetrics {
    /// Happenings successfully begun
    pub begun: Arc<AtomicU64>,
    /// Happenings successfully closed
    pub ended: Arc<AtomicU64>,
    /// Happenings measured (and consumed)
    pub measured: Arc<AtomicU64>,
    /// Operations rejected with an error
    pub rejected: Arc<AtomicU64>,
}

/// Plain copy of the counters at one point in time
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub begun: u64,
    pub ended: u64,
    pub measured: u64,
    pub rejected: u64,
}

impl RegistryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_begin(&self) {
        self.begun.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_end(&self) {
        self.ended.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_measure(&self) {
        self.measured.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            begun: self.begun.load(Ordering::Relaxed),
            ended: self.ended.load(Ordering::Relaxed),
            measured: self.measured.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }
}
