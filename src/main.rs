use clap::Parser;
use small_deob::utils::error::ErrorSeverity;
use small_deob::utils::{logger, validation::Validate};
use small_deob::{
    CleanupEngine, CliConfig, DeobError, LocalStorage, TomlConfig, TransformPipeline,
};

fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::debug!("CLI config: {:?}", args);

    if let Err(e) = run(&args) {
        tracing::error!(
            "❌ Cleanup failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(args: &CliConfig) -> Result<(), DeobError> {
    let config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    config.validate()?;

    let output = config.resolve_output(args.json, args.output.as_deref());

    let storage = LocalStorage::new();
    let source = storage.read_source(args.input.as_deref())?;

    let pipeline = TransformPipeline::from_settings(&config.settings());
    let engine = CleanupEngine::new_with_monitoring(pipeline, args.monitor);
    let result = engine.run(&source)?;

    if args.verbose {
        let labels = result.labels();
        if labels.is_empty() {
            eprintln!("No techniques applied");
        }
        for label in labels {
            eprintln!("• {}", label);
        }
    }

    let rendered = if output.json {
        serde_json::to_string_pretty(&result)?
    } else {
        result.text
    };

    match output.path {
        Some(path) => {
            storage.write_file(&path, &rendered)?;
            tracing::info!("📁 Output saved to: {}", path);
        }
        None => storage.write_stdout(&rendered)?,
    }

    Ok(())
}
