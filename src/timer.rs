use std::panic::Location;
use std::sync::Arc;
use crate::caller::Caller;
use crate::error::HappenError;
use crate::registry::{global, Registry};
use crate::report::{default_reporter, Reporter};

/// Times the code between its creation and `finish` (or drop).
///
/// Bind it to a named variable (`let _timer = time_me!();`) so it lives to
/// the end of the scope; `let _ = ...` drops it immediately.
#[must_use = "the timer reports when dropped"]
pub struct TimerHandle {
    registry: Registry,
    reporter: Arc<dyn Reporter>,
    key: Result<String, HappenError>,
    finished: bool,
}

impl TimerHandle {
    /// Start timing `caller` in the global registry
    pub fn start(caller: impl Caller) -> Self {
        Self::start_in(global().clone(), default_reporter(), caller)
    }

    /// Start timing keyed by the call site's source location
    #[track_caller]
    pub fn here() -> Self {
        Self::start(Location::caller())
    }

    /// Start timing `caller` in `registry`, reporting to `reporter`.
    ///
    /// If the identity cannot be resolved, nothing is registered and the
    /// handle reports the capture error when finished. A failed `begin`
    /// (the same key still open) is ignored.
    pub fn start_in(registry: Registry, reporter: Arc<dyn Reporter>, caller: impl Caller) -> Self {
        let key = caller.identify();
        if let Ok(ref name) = key {
            if let Err(e) = registry.begin(name) {
                tracing::trace!(error = %e, "Ignoring begin failure");
            }
        }
        TimerHandle {
            registry,
            reporter,
            key,
            finished: false,
        }
    }

    /// Tracking key, if the caller was resolved
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref().ok()
    }

    pub fn capture_error(&self) -> Option<&HappenError> {
        self.key.as_ref().err()
    }

    /// Stop the timer and report the outcome
    pub fn finish(mut self) {
        self.complete();
    }

    fn complete(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        let name = match &self.key {
            Ok(name) => name,
            Err(e) => {
                self.reporter.failed(e);
                return;
            }
        };

        let _ = self.registry.end(name);
        match self.registry.duration(name) {
            Ok(duration) => self.reporter.finished(name, duration),
            Err(e) => self.reporter.failed(&e),
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.complete();
    }
}

/// Start a [`TimerHandle`] keyed by the enclosing function's path.
///
/// `time_me!()` uses the global registry and default reporter;
/// `time_me!(registry, reporter)` uses the given ones.
#[macro_export]
macro_rules! time_me {
    () => {
        $crate::TimerHandle::start($crate::FunctionName($crate::function_name!()))
    };
    ($registry:expr, $reporter:expr) => {
        $crate::TimerHandle::start_in(
            $registry,
            $reporter,
            $crate::FunctionName($crate::function_name!()),
        )
    };
}
