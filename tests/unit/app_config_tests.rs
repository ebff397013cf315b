/*!
 * Tests for application configuration functionality
 */

use fanyi::app_config::{Config, LogLevel, PolishConfig};
use fanyi::PolishLanguage;
use log::LevelFilter;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.polish.default_language, "zh");
    assert!(!config.polish.strict_language);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.polish.default_language = "en".to_string();
    assert!(config.validate().is_ok());

    // Permissive mode only accepts the two exact tags
    config.polish.default_language = "zho".to_string();
    assert!(config.validate().is_err());

    // Strict mode accepts any ISO spelling of Chinese or English
    config.polish.strict_language = true;
    assert!(config.validate().is_ok());

    config.polish.default_language = "fr".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_resolvePolishLanguage_permissive_shouldFallBackToEnglish() {
    let config = Config::default();

    assert_eq!(config.resolve_polish_language(None).unwrap(), PolishLanguage::Chinese);
    assert_eq!(config.resolve_polish_language(Some("en")).unwrap(), PolishLanguage::English);
    assert_eq!(config.resolve_polish_language(Some("fr")).unwrap(), PolishLanguage::English);
}

#[test]
fn test_resolvePolishLanguage_strict_shouldReportUnsupportedTags() {
    let config = Config {
        polish: PolishConfig {
            default_language: "eng".to_string(),
            strict_language: true,
        },
        ..Config::default()
    };

    assert_eq!(config.resolve_polish_language(None).unwrap(), PolishLanguage::English);
    assert_eq!(config.resolve_polish_language(Some("chi")).unwrap(), PolishLanguage::Chinese);

    let err = config.resolve_polish_language(Some("fr")).unwrap_err();
    assert!(err.to_string().contains("French"));
}

#[test]
fn test_config_deserialize_withMissingFields_shouldUseDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());

    let config: Config = serde_json::from_str(r#"{"log_level": "debug", "polish": {"strict_language": true}}"#).unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.polish.default_language, "zh");
    assert!(config.polish.strict_language);
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapEveryLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
}
