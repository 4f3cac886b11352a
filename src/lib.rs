//! Mark the start and end of named happenings and log how long they took.
//!
//! ```
//! fn work() {
//!     let _timer = happen::time_me!();
//!     // ...
//! } // logs `Finished timing <crate>::work` with its duration
//! # work();
//! ```

pub mod caller;
pub mod config;
mod error;
pub mod logging;
pub mod metrics;
pub mod registry;
pub mod report;
mod timer;

pub use caller::{Caller, FunctionName, Unresolved};
pub use error::HappenError;
pub use registry::{begin, duration, end, global, Registry};
pub use report::{Reporter, TracingReporter};
pub use timer::TimerHandle;

#[cfg(test)]
#[path = "../tests/unit/mod.rs"]
mod tests;
