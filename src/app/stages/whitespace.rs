use crate::domain::model::Technique;
use crate::domain::ports::{PipelineContext, Stage};
use regex::Regex;
use std::sync::LazyLock;

static LONG_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{3,}").unwrap());
static ANY_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// 有連續三個以上空白時，把所有空白壓成單一空格並去頭尾
pub struct WhitespaceStage;

impl Stage for WhitespaceStage {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn apply(&self, text: String, context: &mut PipelineContext<'_>) -> String {
        if !LONG_WHITESPACE.is_match(&text) {
            return text;
        }

        context.record(Technique::WhitespaceNormalization);
        ANY_WHITESPACE.replace_all(&text, " ").trim().to_string()
    }
}
