use super::*;

#[test]
fn default_config_matches_builtin_constants() {
    let config = SiteConfig::default();
    assert_eq!(config.theme_key, "theme-preference");
    assert_eq!(config.phrases.len(), 3);
    assert_eq!(config.typing, TypingTiming { type_ms: 80, delete_ms: 40, hold_full_ms: 900, hold_empty_ms: 300 });
    assert!((config.progress_threshold - 0.35).abs() < f64::EPSILON);
    assert!((config.progress_default_percent - 60.0).abs() < f64::EPSILON);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{ "phrases": ["One"], "typing": { "type_ms": 10 } }"#).unwrap();
    assert_eq!(config.phrases, vec!["One".to_owned()]);
    assert_eq!(config.typing.type_ms, 10);
    assert_eq!(config.typing.delete_ms, 40);
    assert_eq!(config.contact_recipient, DEFAULT_CONTACT_RECIPIENT);
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(SiteConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
}

#[test]
fn out_of_range_threshold_is_rejected() {
    assert!(matches!(
        SiteConfig::from_json(r#"{ "progress_threshold": 0 }"#),
        Err(ConfigError::Threshold(_))
    ));
    assert!(matches!(
        SiteConfig::from_json(r#"{ "progress_threshold": 1.5 }"#),
        Err(ConfigError::Threshold(_))
    ));
}

#[test]
fn out_of_range_default_percent_is_rejected() {
    assert!(matches!(
        SiteConfig::from_json(r#"{ "progress_default_percent": 500 }"#),
        Err(ConfigError::DefaultPercent(_))
    ));
    assert!(matches!(
        SiteConfig::from_json(r#"{ "progress_default_percent": -1 }"#),
        Err(ConfigError::DefaultPercent(_))
    ));
    assert!(SiteConfig::from_json(r#"{ "progress_default_percent": 100 }"#).is_ok());
}

#[test]
fn blank_recipient_is_rejected() {
    assert!(matches!(
        SiteConfig::from_json(r#"{ "contact_recipient": "  " }"#),
        Err(ConfigError::EmptyRecipient)
    ));
}

#[test]
fn from_json_or_default_falls_back() {
    assert_eq!(SiteConfig::from_json_or_default(None), SiteConfig::default());
    assert_eq!(SiteConfig::from_json_or_default(Some("   ")), SiteConfig::default());
    assert_eq!(SiteConfig::from_json_or_default(Some("[1, 2]")), SiteConfig::default());
}

#[test]
fn timing_durations_are_milliseconds() {
    let timing = TypingTiming::default();
    assert_eq!(timing.type_delay(), Duration::from_millis(80));
    assert_eq!(timing.delete_delay(), Duration::from_millis(40));
    assert_eq!(timing.hold_full(), Duration::from_millis(900));
    assert_eq!(timing.hold_empty(), Duration::from_millis(300));
}
