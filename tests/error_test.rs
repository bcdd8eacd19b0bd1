use mctest::{McTestError, Result};

#[test]
fn test_config_error() {
    let err = McTestError::ConfigError("missing file".to_string());
    assert_eq!(err.to_string(), "Config error: missing file");
}

#[test]
fn test_error_conversion_from_anyhow() {
    let anyhow_err = anyhow::anyhow!("test anyhow error");
    let mctest_err: McTestError = anyhow_err.into();
    assert!(mctest_err.to_string().contains("test anyhow error"));
}

#[test]
fn test_error_conversion_from_toml() {
    let toml_err = toml::from_str::<toml::Table>("report = [").unwrap_err();
    let mctest_err: McTestError = toml_err.into();
    assert!(mctest_err.to_string().starts_with("Config parse error:"));
}

#[test]
fn test_result_type() {
    fn returns_error() -> Result<()> {
        Err(McTestError::ConfigError("test".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
    match result {
        Err(McTestError::ConfigError(msg)) => assert_eq!(msg, "test"),
        _ => panic!("Expected ConfigError"),
    }
}
