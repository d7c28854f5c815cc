use crate::app::stages::{
    Base64Stage, ConcatenationStage, EscapeStage, FormattingStage, FunctionRenameStage, HexStage,
    VariableRenameStage, WhitespaceStage,
};
use crate::core::settings::PipelineSettings;
use crate::domain::model::TransformResult;
use crate::domain::ports::{PipelineContext, Stage};

/// 固定順序的改寫流程。每一步都吃前一步的輸出，不會失敗
pub struct TransformPipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl TransformPipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn from_settings(settings: &PipelineSettings) -> Self {
        let toggles = &settings.stages;
        let min_length = settings.rename.min_length;

        let mut stages: Vec<Box<dyn Stage>> = Vec::new();
        let mut add = |enabled: bool, stage: Box<dyn Stage>| {
            if enabled {
                stages.push(stage);
            } else {
                tracing::debug!("Stage '{}' disabled by config", stage.name());
            }
        };

        add(toggles.whitespace, Box::new(WhitespaceStage));
        add(toggles.concatenation, Box::new(ConcatenationStage));
        add(toggles.variables, Box::new(VariableRenameStage::new(min_length)));
        add(toggles.functions, Box::new(FunctionRenameStage::new(min_length)));
        add(toggles.base64, Box::new(Base64Stage));
        add(toggles.hex, Box::new(HexStage));
        add(toggles.escapes, Box::new(EscapeStage));
        add(
            toggles.formatting,
            Box::new(FormattingStage::new(settings.format.indent_width)),
        );

        Self::new(stages)
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn run(&self, input: &str) -> TransformResult {
        let mut context = PipelineContext::new(input);
        let mut text = input.to_string();

        for stage in &self.stages {
            let fired_before = context.techniques().len();
            text = stage.apply(text, &mut context);
            tracing::debug!(
                "Stage '{}' recorded {} technique(s)",
                stage.name(),
                context.techniques().len() - fired_before
            );
        }

        TransformResult {
            text,
            techniques: context.into_techniques(),
        }
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::from_settings(&PipelineSettings::default())
    }
}

/// 以預設設定跑完整流程
pub fn transform(input: &str) -> TransformResult {
    TransformPipeline::default().run(input)
}
