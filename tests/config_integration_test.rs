use anyhow::Result;
use small_deob::utils::validation::Validate;
use small_deob::{
    CleanupEngine, DeobError, LocalStorage, Technique, TomlConfig, TransformPipeline,
};
use tempfile::TempDir;

const SAMPLE: &str = "function computeChecksum(data)\nlocal s = \"\\x68\\x69\"\nreturn s\nend";

#[test]
fn test_config_file_drives_pipeline() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("deob.toml");
    std::fs::write(
        &config_path,
        r#"
[stages]
variables = false
hex = false

[format]
indent_width = 4
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let engine = CleanupEngine::new(TransformPipeline::from_settings(&config.settings()));
    let result = engine.run(SAMPLE)?;

    assert_eq!(
        result.text,
        "function func_1(data)\n    local s = \"\\x68\\x69\"\n    return s\nend"
    );
    assert_eq!(
        result.techniques,
        vec![Technique::FunctionRenaming, Technique::CodeFormatting]
    );
    Ok(())
}

#[test]
fn test_default_config_on_sample() -> Result<()> {
    let engine = CleanupEngine::new(TransformPipeline::default());
    let result = engine.run(SAMPLE)?;

    // tokens: function(1) computeChecksum(2) data(3) ...
    assert_eq!(
        result.text,
        "function var_2(data)\n  local s = \"hi\"\n  return s\nend"
    );
    assert_eq!(
        result.labels(),
        vec![
            "Variable name simplification",
            "Function name simplification",
            "Hex string decoding",
            "Hex string decoding",
            "Code formatting",
        ]
    );
    Ok(())
}

#[test]
fn test_source_file_round_trip_through_storage() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("input.lua");
    let output_path = temp_dir.path().join("out/clean.lua");
    std::fs::write(&input_path, "print(\"Hello\"   ..   \"World\")")?;

    let storage = LocalStorage::new();
    let source = storage.read_source(input_path.to_str())?;
    let result = CleanupEngine::new(TransformPipeline::default()).run(&source)?;
    storage.write_file(output_path.to_str().unwrap(), &result.text)?;

    assert_eq!(std::fs::read_to_string(&output_path)?, "print(\"HelloWorld\")");
    assert_eq!(
        result.techniques,
        vec![
            Technique::WhitespaceNormalization,
            Technique::ConcatenationSimplification
        ]
    );
    Ok(())
}

#[test]
fn test_json_rendering() -> Result<()> {
    let result = CleanupEngine::new(TransformPipeline::default()).run("x = \"\\x41\"")?;
    let json: serde_json::Value = serde_json::from_str(&serde_json::to_string_pretty(&result)?)?;

    assert_eq!(json["text"], "x = \"A\"");
    assert_eq!(json["techniques"], serde_json::json!(["Hex string decoding"]));
    Ok(())
}

#[test]
fn test_blank_source_is_rejected_by_engine() {
    let engine = CleanupEngine::new(TransformPipeline::default());
    let err = engine.run("   \n").unwrap_err();
    assert!(matches!(err, DeobError::EmptyInputError));
    assert_eq!(err.severity(), small_deob::utils::error::ErrorSeverity::Low);
}
