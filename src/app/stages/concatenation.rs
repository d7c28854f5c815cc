use crate::domain::model::Technique;
use crate::domain::ports::{PipelineContext, Stage};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// 兩邊必須是同一種引號；regex crate 沒有 backreference，所以拆成兩個分支
static ADJACENT_LITERALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"\n]*)"\s*\.\.\s*"([^"\n]*)"|'([^'\n]*)'\s*\.\.\s*'([^'\n]*)'"#).unwrap()
});

/// `"a" .. "b"` -> `"ab"`，單次掃描，不遞迴
pub struct ConcatenationStage;

fn fold(caps: &Captures<'_>) -> String {
    match (caps.get(1), caps.get(2)) {
        (Some(left), Some(right)) => format!("\"{}{}\"", left.as_str(), right.as_str()),
        _ => format!("'{}{}'", &caps[3], &caps[4]),
    }
}

impl Stage for ConcatenationStage {
    fn name(&self) -> &'static str {
        "concatenation"
    }

    fn apply(&self, text: String, context: &mut PipelineContext<'_>) -> String {
        if !text.contains("..") {
            return text;
        }

        context.record(Technique::ConcatenationSimplification);
        ADJACENT_LITERALS.replace_all(&text, fold).into_owned()
    }
}
