use small_deob::{transform, PipelineSettings, Technique, TransformPipeline, TransformResult};

fn pipeline_without_variable_renaming() -> TransformPipeline {
    let mut settings = PipelineSettings::default();
    settings.stages.variables = false;
    TransformPipeline::from_settings(&settings)
}

#[test]
fn test_empty_input_returns_empty_result() {
    let result = transform("");
    assert_eq!(
        result,
        TransformResult {
            text: String::new(),
            techniques: vec![],
        }
    );
}

#[test]
fn test_short_whitespace_runs_never_trigger_normalization() {
    let inputs = [
        "local  x = 1\nprint(x)",
        "a b  c",
        "if x then\n y()\nend",
        "\t\tz = 2",
    ];

    for input in inputs {
        let result = transform(input);
        assert!(
            !result.has(Technique::WhitespaceNormalization),
            "unexpected whitespace normalization for {:?}",
            input
        );
    }

    assert!(transform("a   b").has(Technique::WhitespaceNormalization));
}

#[test]
fn test_string_concatenation_is_folded() {
    let result = transform(r#"print("Hello" .. "World")"#);
    assert!(result.text.contains(r#""HelloWorld""#));
    assert!(result.has(Technique::ConcatenationSimplification));
}

#[test]
fn test_base64_literal_is_decoded() {
    let result = pipeline_without_variable_renaming().run(r#"print("SGVsbG8gV29ybGQ=")"#);
    assert_eq!(result.text, r#"print("Hello World")"#);
    assert!(result.count(Technique::Base64Decoding) >= 1);

    // 短的 payload 不會被變數改名影響
    let result = transform(r#"print("aGVsbG8=", "d29ybGQ=")"#);
    assert_eq!(result.text, r#"print("hello", "world")"#);
    assert_eq!(result.count(Technique::Base64Decoding), 2);
}

#[test]
fn test_long_base64_payload_is_renamed_before_decoding() {
    // 變數改名在 base64 之前執行，而且不理會引號
    let result = transform(r#"print("SGVsbG8gV29ybGQ=")"#);
    assert_eq!(result.text, r#"print("var_2=")"#);
    assert_eq!(result.techniques, vec![Technique::VariableRenaming]);
}

#[test]
fn test_hex_escape_is_decoded() {
    let result = transform(r#"s = "\x41""#);
    assert_eq!(result.text, r#"s = "A""#);
    assert_eq!(result.techniques, vec![Technique::HexDecoding]);
}

#[test]
fn test_repeated_long_identifier_shares_one_label() {
    let result = transform("local counterName = counterName + 1");
    assert_eq!(result.text, "local var_3 = var_3 + 1");

    let result = transform("local counterName = counterName + anotherLongName");
    assert_eq!(result.text, "local var_3 = var_3 + var_4");
    assert_eq!(result.count(Technique::VariableRenaming), 1);
}

#[test]
fn test_long_function_name_is_replaced_everywhere() {
    let input = "function reallyLongFunctionName(x)\nreturn x\nend\nreallyLongFunctionName(1)";
    let result = pipeline_without_variable_renaming().run(input);

    assert_eq!(result.text, "function func_1(x)\n  return x\nend\nfunc_1(1)");
    assert_eq!(
        result.techniques,
        vec![Technique::FunctionRenaming, Technique::CodeFormatting]
    );
}

#[test]
fn test_function_label_fires_even_after_variable_renaming() {
    let result = transform("function reallyLongFunctionName(x) return x end");

    // 名稱已經先被改成 var_2，函式步驟找不到可以替換的文字
    assert_eq!(result.text, "function var_2(x) return x end");
    assert_eq!(
        result.techniques,
        vec![Technique::VariableRenaming, Technique::FunctionRenaming]
    );
}

#[test]
fn test_not_idempotent() {
    let first = transform(r#"x = "a" .. "b" .. "c""#);
    assert_eq!(first.text, r#"x = "ab" .. "c""#);

    let second = transform(&first.text);
    assert_eq!(second.text, r#"x = "abc""#);
    assert_ne!(first.text, second.text);
}

#[test]
fn test_renamed_output_is_stable_on_second_run() {
    let first = transform("local playerHealth = 100");
    assert_eq!(first.text, "local var_2 = 100");
    assert_eq!(first.techniques, vec![Technique::VariableRenaming]);

    // var_N 不超過門檻，所以第二次沒有任何步驟觸發
    let second = transform(&first.text);
    assert_eq!(second.text, first.text);
    assert!(second.techniques.is_empty());
}

#[test]
fn test_escapes_feed_the_formatter() {
    let result = transform(r"if ok then\nrun()\nend");
    assert_eq!(result.text, "if ok then\n  run()\nend");
    assert_eq!(result.techniques, vec![Technique::CodeFormatting]);
}
