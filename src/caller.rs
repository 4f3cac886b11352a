//! Caller identity used as a tracking key.
//!
//! [`function_name!`](crate::function_name) resolves the enclosing function's
//! path at compile time. [`Location`] identities come from `#[track_caller]`.

use std::panic::Location;
use crate::error::HappenError;

const MARKER_SUFFIX: &str = "::__happen_marker";
const CLOSURE_SUFFIX: &str = "::{{closure}}";

/// Something that can name the code being timed
pub trait Caller {
    fn identify(&self) -> Result<String, HappenError>;
}

/// Fully-qualified function path, as produced by `function_name!()`.
/// An empty path means resolution failed.
#[derive(Debug, Clone, Copy)]
pub struct FunctionName<'a>(pub &'a str);

impl Caller for FunctionName<'_> {
    fn identify(&self) -> Result<String, HappenError> {
        if self.0.is_empty() {
            return Err(HappenError::CaptureFailed);
        }
        Ok(self.0.to_string())
    }
}

/// Source location of the call site, keyed as `file:line:column`
impl Caller for &'static Location<'static> {
    fn identify(&self) -> Result<String, HappenError> {
        Ok(format!("{}:{}:{}", self.file(), self.line(), self.column()))
    }
}

/// Explicit key supplied by the instrumented code
impl Caller for &str {
    fn identify(&self) -> Result<String, HappenError> {
        Ok((*self).to_string())
    }
}

impl Caller for String {
    fn identify(&self) -> Result<String, HappenError> {
        Ok(self.clone())
    }
}

/// Identity that never resolves
#[derive(Debug, Clone, Copy, Default)]
pub struct Unresolved;

impl Caller for Unresolved {
    fn identify(&self) -> Result<String, HappenError> {
        Err(HappenError::CaptureFailed)
    }
}

/// Turns the type name of the marker fn declared by `function_name!()` into
/// the path of the function enclosing it. Returns `""` if the name has an
/// unexpected shape.
#[doc(hidden)]
pub fn strip_marker(type_name: &'static str) -> &'static str {
    let Some(mut name) = type_name.strip_suffix(MARKER_SUFFIX) else {
        return "";
    };
    while let Some(outer) = name.strip_suffix(CLOSURE_SUFFIX) {
        name = outer;
    }
    name
}

/// Expands to the fully-qualified path of the enclosing function.
///
/// Closures and async blocks resolve to the function that contains them.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __happen_marker() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::caller::strip_marker(type_name_of(__happen_marker))
    }};
}
