//! # Configuration Tests
//!
//! Defaults and JSON deserialization of the conversion options.

use logihex_core::{Config, Error, WordAddr};

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.start, 0);
    assert_eq!(config.count, None);
    assert!(!config.fill_missing);
    assert_eq!(config.start_addr(), WordAddr::new(0));
}

#[test]
fn test_json_empty_object_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_json_full() {
    let config = Config::from_json(r#"{"start": 1024, "count": 6, "fill_missing": true}"#).unwrap();
    assert_eq!(config.start, 1024);
    assert_eq!(config.count, Some(6));
    assert!(config.fill_missing);
}

#[test]
fn test_json_negative_count_is_accepted() {
    let config = Config::from_json(r#"{"count": -3}"#).unwrap();
    assert_eq!(config.count, Some(-3));
}

#[test]
fn test_json_null_count_means_unbounded() {
    let config = Config::from_json(r#"{"count": null}"#).unwrap();
    assert_eq!(config.count, None);
}

#[test]
fn test_json_unknown_field_rejected() {
    let err = Config::from_json(r#"{"begin": 4}"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_json_negative_start_rejected() {
    assert!(matches!(
        Config::from_json(r#"{"start": -1}"#),
        Err(Error::Config(_))
    ));
}
