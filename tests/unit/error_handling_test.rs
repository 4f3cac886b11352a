use crate::config::HappenConfig;
use crate::error::HappenError;

#[test]
fn test_error_messages() {
    let err = HappenError::AlreadyStarted { key: "load".to_string() };
    assert_eq!(err.to_string(), "\"load\" already started happening");

    let err = HappenError::NotStarted { key: "load".to_string() };
    assert_eq!(err.to_string(), "\"load\" did not start happening yet");

    let err = HappenError::NeverHappened { key: "load".to_string() };
    assert_eq!(err.to_string(), "\"load\" didn't happen");

    assert_eq!(
        HappenError::CaptureFailed.to_string(),
        "unable to recover caller information"
    );
}

#[test]
fn test_error_stage_and_key() {
    let err = HappenError::NeverHappened { key: "x".to_string() };
    assert_eq!(err.stage(), "duration");
    assert_eq!(err.key(), Some("x"));

    assert_eq!(HappenError::CaptureFailed.stage(), "capture");
    assert_eq!(HappenError::CaptureFailed.key(), None);
}

#[test]
fn test_toml_error_converts_to_config_error() {
    let err = HappenConfig::from_toml_str("log_format = [").unwrap_err();
    assert_eq!(err.stage(), "config");
    assert!(err.to_string().starts_with("config error: TOML error"));
}

#[test]
fn test_io_error_converts_to_config_error() {
    let err = HappenConfig::load_from("/nonexistent/happen.toml").unwrap_err();
    assert!(matches!(err, HappenError::Config(_)));
}
