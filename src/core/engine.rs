use crate::core::pipeline::TransformPipeline;
use crate::domain::model::TransformResult;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::validate_source_text;

/// 呼叫端外殼：先擋掉空白輸入，再交給 pipeline
pub struct CleanupEngine {
    pipeline: TransformPipeline,
    monitor_enabled: bool,
}

impl CleanupEngine {
    pub fn new(pipeline: TransformPipeline) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: TransformPipeline, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    pub fn run(&self, source: &str) -> Result<TransformResult> {
        validate_source_text(source)?;

        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        monitor.log_stats("Before transform");

        tracing::info!("Transforming {} bytes of source", source.len());
        let result = self.pipeline.run(source);
        tracing::info!(
            "Applied {} technique(s), output is {} bytes",
            result.techniques.len(),
            result.text.len()
        );

        monitor.log_stats("After transform");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DeobError;

    #[test]
    fn test_rejects_whitespace_only_input() {
        let engine = CleanupEngine::new(TransformPipeline::default());
        assert!(matches!(engine.run(" \n\t"), Err(DeobError::EmptyInputError)));
        assert!(matches!(engine.run(""), Err(DeobError::EmptyInputError)));
    }

    #[test]
    fn test_runs_pipeline() {
        let engine = CleanupEngine::new_with_monitoring(TransformPipeline::default(), true);
        let result = engine.run(r#"print("Hello" .. "World")"#).unwrap();
        assert_eq!(result.text, r#"print("HelloWorld")"#);
    }
}
