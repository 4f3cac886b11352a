use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use parking_lot::Mutex;
use crate::error::HappenError;
use crate::metrics::RegistryMetrics;

/// One tracked interval of time
#[derive(Debug, Clone, Copy)]
pub(crate) struct Happening {
    begin: Instant,
    end: Option<Instant>,
    started_at: DateTime<Utc>,
}

impl Happening {
    fn start() -> Self {
        Happening {
            begin: Instant::now(),
            end: None,
            started_at: Utc::now(),
        }
    }

    /// Time between begin and end. Zero if the happening was never ended.
    fn elapsed(&self) -> Duration {
        match self.end {
            Some(end) => end.saturating_duration_since(self.begin),
            None => Duration::ZERO,
        }
    }
}

/// Mapping from tracking key to happening.
/// Clones share the same map and counters.
#[derive(Clone, Default)]
pub struct Registry {
    happenings: Arc<Mutex<HashMap<String, Happening>>>,
    metrics: RegistryMetrics,
}

lazy_static! {
    static ref GLOBAL_REGISTRY: Registry = Registry::new();
}

/// Registry backing the free functions and `time_me!()`.
/// Lives for the whole process.
pub fn global() -> &'static Registry {
    &GLOBAL_REGISTRY
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a happening under `key`.
    ///
    /// Any entry for `key`, closed or not, blocks a new one until it is read
    /// with [`Registry::duration`] or dropped with [`Registry::abandon`].
    pub fn begin(&self, key: &str) -> Result<(), HappenError> {
        let mut happenings = self.happenings.lock();
        if happenings.contains_key(key) {
            drop(happenings);
            return Err(self.reject(HappenError::AlreadyStarted { key: key.to_string() }));
        }
        happenings.insert(key.to_string(), Happening::start());
        self.metrics.record_begin();
        Ok(())
    }

    /// Mark the happening under `key` as ended.
    pub fn end(&self, key: &str) -> Result<(), HappenError> {
        let now = Instant::now();
        let mut happenings = self.happenings.lock();
        if let Some(happening) = happenings.get_mut(key) {
            happening.end = Some(now);
            self.metrics.record_end();
            return Ok(());
        }
        drop(happenings);
        Err(self.reject(HappenError::NotStarted { key: key.to_string() }))
    }

    /// Returns how much time occurred in the happening and clears the key.
    pub fn duration(&self, key: &str) -> Result<Duration, HappenError> {
        let removed = self.happenings.lock().remove(key);
        match removed {
            Some(happening) => {
                self.metrics.record_measure();
                Ok(happening.elapsed())
            }
            None => Err(self.reject(HappenError::NeverHappened { key: key.to_string() })),
        }
    }

    /// Drop the entry for `key` without measuring it.
    /// Returns whether an entry existed.
    pub fn abandon(&self, key: &str) -> bool {
        let existed = self.happenings.lock().remove(key).is_some();
        if existed {
            tracing::debug!(key = key, "Abandoned happening");
        }
        existed
    }

    pub fn clear(&self) {
        self.happenings.lock().clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.happenings.lock().contains_key(key)
    }

    /// Whether `end` has been called for the entry under `key`
    pub fn is_closed(&self, key: &str) -> Option<bool> {
        self.happenings.lock().get(key).map(|h| h.end.is_some())
    }

    /// Wall-clock time at which the entry under `key` was begun
    pub fn started_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.happenings.lock().get(key).map(|h| h.started_at)
    }

    pub fn keys(&self) -> Vec<String> {
        self.happenings.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.happenings.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.happenings.lock().is_empty()
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }

    fn reject(&self, err: HappenError) -> HappenError {
        self.metrics.record_rejection();
        tracing::debug!(stage = err.stage(), error = %err, "Registry operation rejected");
        err
    }
}

/// Start a happening in the global registry
pub fn begin(key: &str) -> Result<(), HappenError> {
    global().begin(key)
}

/// End a happening in the global registry
pub fn end(key: &str) -> Result<(), HappenError> {
    global().end(key)
}

/// Measure and clear a happening in the global registry
pub fn duration(key: &str) -> Result<Duration, HappenError> {
    global().duration(key)
}
