use happen::config::{HappenConfig, LogFormat};
use happen::TracingReporter;
use std::time::Duration;

#[test]
fn test_defaults_when_empty() {
    let config = HappenConfig::from_toml_str("").unwrap();
    assert_eq!(config, HappenConfig::default());
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.slow_threshold_ms, None);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = HappenConfig::from_toml_str(
        r#"
        log_format = "json"
        slow_threshold_ms = 250
        "#,
    )
    .unwrap();
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.slow_threshold_ms, Some(250));
}

#[test]
fn test_rejects_unknown_format() {
    assert!(HappenConfig::from_toml_str(r#"log_format = "xml""#).is_err());
}

#[test]
fn test_reporter_slow_threshold_from_config() {
    let config = HappenConfig {
        slow_threshold_ms: Some(100),
        ..HappenConfig::default()
    };
    let reporter = TracingReporter::from_config(&config);
    assert!(reporter.is_slow(Duration::from_millis(150)));
    assert!(!reporter.is_slow(Duration::from_millis(100)));

    assert!(!TracingReporter::new().is_slow(Duration::from_secs(3600)));
    assert!(TracingReporter::new()
        .with_slow_threshold(Duration::from_millis(1))
        .is_slow(Duration::from_millis(2)));
}

#[test]
fn test_logging_initializes_once() {
    assert!(happen::logging::init_logging().is_ok());
    let err = happen::logging::init_logging().unwrap_err();
    assert_eq!(err.stage(), "logging");
}
