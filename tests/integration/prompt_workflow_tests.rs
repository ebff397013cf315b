/*!
 * Integration tests: config file on disk through to a rendered prompt
 */

use anyhow::Result;
use fanyi::app_config::Config;
use fanyi::{build_polish_prompt, PromptRequest};

use crate::common::{create_temp_dir, create_test_file, init_test_logging};

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    init_test_logging();
    let temp_dir = create_temp_dir()?;
    let config_path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&config_path)?;

    assert!(config_path.exists());
    assert_eq!(config, Config::default());

    let reloaded = Config::load_or_create(&config_path)?;
    assert_eq!(reloaded, config);
    Ok(())
}

#[test]
fn test_loadOrCreate_withInvalidJson_shouldFailWithContext() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let config_path = create_test_file(temp_dir.path(), "conf.json", "{ polish: ")?;

    let err = Config::load_or_create(&config_path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_polishWorkflow_withEnglishDefault_shouldRenderEnglishPrompt() -> Result<()> {
    init_test_logging();
    let temp_dir = create_temp_dir()?;
    let config_path = create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"polish": {"default_language": "en"}, "log_level": "trace"}"#,
    )?;

    let config = Config::load_or_create(&config_path)?;
    config.validate()?;

    let request = PromptRequest::Polish {
        text: "This is a test.".to_string(),
        language: config.resolve_polish_language(None)?,
    };
    let prompt = request.build();

    assert_eq!(prompt, build_polish_prompt("This is a test.", "en"));
    assert!(prompt.contains("英文"));
    Ok(())
}

#[test]
fn test_polishWorkflow_withStrictConfig_shouldRejectFrench() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let config_path = create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"polish": {"default_language": "zh", "strict_language": true}}"#,
    )?;

    let config = Config::load_or_create(&config_path)?;
    config.validate()?;

    assert!(config.resolve_polish_language(Some("fr")).is_err());
    assert!(config.resolve_polish_language(Some("zh")).is_ok());
    Ok(())
}

#[test]
fn test_translationWorkflow_withRequestsFromJson_shouldRenderEach() -> Result<()> {
    init_test_logging();
    let requests: Vec<PromptRequest> = serde_json::from_str(
        r#"[
            {"kind": "zh2en", "text": "你好"},
            {"kind": "en2zh", "text": "hello"},
            {"kind": "polish", "text": "测试文本", "language": "zh"}
        ]"#,
    )?;

    let prompts: Vec<String> = requests.iter().map(PromptRequest::build).collect();

    assert!(prompts[0].starts_with("请将以下中文翻译成英文"));
    assert!(prompts[1].starts_with("请将以下英文翻译成中文"));
    assert!(prompts[2].starts_with("请对以下中文文本进行润色"));
    for (request, prompt) in requests.iter().zip(&prompts) {
        assert!(prompt.contains(request.text()));
        assert_eq!(prompt.contains("JSON"), request.kind().expects_json());
    }
    Ok(())
}
