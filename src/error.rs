use thiserror::Error;

/// Unified error type for happening bookkeeping.
/// Registry operations return `Result<T, HappenError>`; the timer layer
/// never returns it and hands it to a reporter instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HappenError {
    /// `begin` found an entry for the key, open or closed but not yet read
    #[error("{key:?} already started happening")]
    AlreadyStarted { key: String },

    /// `end` found no entry for the key
    #[error("{key:?} did not start happening yet")]
    NotStarted { key: String },

    /// `duration` found no entry for the key
    #[error("{key:?} didn't happen")]
    NeverHappened { key: String },

    /// The caller identity could not be resolved
    #[error("unable to recover caller information")]
    CaptureFailed,

    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),
}

impl HappenError {
    /// Name of the operation that produced the error, used as a log field
    pub fn stage(&self) -> &'static str {
        match self {
            HappenError::AlreadyStarted { .. } => "begin",
            HappenError::NotStarted { .. } => "end",
            HappenError::NeverHappened { .. } => "duration",
            HappenError::CaptureFailed => "capture",
            HappenError::Config(_) => "config",
            HappenError::Logging(_) => "logging",
        }
    }

    /// Tracking key the error refers to, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            HappenError::AlreadyStarted { key }
            | HappenError::NotStarted { key }
            | HappenError::NeverHappened { key } => Some(key),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for HappenError {
    fn from(err: toml::de::Error) -> Self {
        HappenError::Config(format!("TOML error: {}", err))
    }
}

impl From<std::io::Error> for HappenError {
    fn from(err: std::io::Error) -> Self {
        HappenError::Config(format!("I/O error: {}", err))
    }
}
