use crate::domain::model::Technique;

/// 單次執行的共享狀態：原始輸入與已觸發的技巧
#[derive(Debug)]
pub struct PipelineContext<'a> {
    original: &'a str,
    techniques: Vec<Technique>,
}

impl<'a> PipelineContext<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            techniques: Vec::new(),
        }
    }

    /// 尚未被任何步驟改寫的輸入
    pub fn original(&self) -> &'a str {
        self.original
    }

    pub fn record(&mut self, technique: Technique) {
        self.techniques.push(technique);
    }

    pub fn techniques(&self) -> &[Technique] {
        &self.techniques
    }

    pub fn into_techniques(self) -> Vec<Technique> {
        self.techniques
    }
}

/// 一個改寫步驟。沒有觸發時必須原樣回傳文字且不記錄標籤
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, text: String, context: &mut PipelineContext<'_>) -> String;
}
