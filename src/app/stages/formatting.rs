use crate::core::settings::DEFAULT_INDENT_WIDTH;
use crate::domain::model::Technique;
use crate::domain::ports::{PipelineContext, Stage};

const CLOSERS: [&str; 2] = ["end", "}"];
const OPENERS: [&str; 6] = ["function", "if", "for", "while", "do", "{"];

/// 逐行計數的縮排。只做子字串比對，`endpoint` 也會被當成 `end`
pub struct FormattingStage {
    indent_unit: String,
}

impl FormattingStage {
    pub fn new(indent_width: usize) -> Self {
        Self {
            indent_unit: " ".repeat(indent_width),
        }
    }
}

impl Default for FormattingStage {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

pub fn reindent(text: &str, indent_unit: &str) -> String {
    let mut level = 0usize;
    let mut lines = Vec::new();

    for line in text.split('\n') {
        let trimmed = line.trim();

        // 先減再輸出，輸出後才加
        if CLOSERS.iter().any(|token| trimmed.contains(token)) {
            level = level.saturating_sub(1);
        }
        lines.push(format!("{}{}", indent_unit.repeat(level), trimmed));
        if OPENERS.iter().any(|token| trimmed.contains(token)) {
            level += 1;
        }
    }

    lines.join("\n")
}

impl Stage for FormattingStage {
    fn name(&self) -> &'static str {
        "formatting"
    }

    fn apply(&self, text: String, context: &mut PipelineContext<'_>) -> String {
        let formatted = reindent(&text, &self.indent_unit);
        if formatted == text {
            return text;
        }

        context.record(Technique::CodeFormatting);
        formatted
    }
}
