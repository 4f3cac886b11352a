use crate::caller::{strip_marker, Caller, FunctionName, Unresolved};
use crate::error::HappenError;

#[test]
fn test_function_name_resolves_enclosing_function() {
    let name = crate::function_name!();
    assert_eq!(
        name,
        "happen::tests::caller_test::test_function_name_resolves_enclosing_function"
    );
}

#[test]
fn test_function_name_inside_closure_reports_owner() {
    let name = (|| crate::function_name!())();
    assert!(name.ends_with("::test_function_name_inside_closure_reports_owner"));
    assert!(!name.contains("{{closure}}"));
}

#[test]
fn test_strip_marker() {
    assert_eq!(strip_marker("app::run::__happen_marker"), "app::run");
    assert_eq!(
        strip_marker("app::run::{{closure}}::{{closure}}::__happen_marker"),
        "app::run"
    );
    // Unexpected shape
    assert_eq!(strip_marker("app::run"), "");
}

#[test]
fn test_empty_function_name_fails_capture() {
    assert_eq!(FunctionName("").identify(), Err(HappenError::CaptureFailed));
    assert_eq!(FunctionName("app::run").identify(), Ok("app::run".to_string()));
}

#[test]
fn test_location_identity() {
    let location = std::panic::Location::caller();
    let key = location.identify().unwrap();
    assert!(key.starts_with(location.file()));
    assert!(key.ends_with(&format!(":{}:{}", location.line(), location.column())));
}

#[test]
fn test_unresolved_always_fails() {
    assert_eq!(Unresolved.identify(), Err(HappenError::CaptureFailed));
}
