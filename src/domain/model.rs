use serde::{Serialize, Serializer};
use std::fmt;

/// 轉換步驟觸發時記錄的技巧標籤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    WhitespaceNormalization,
    ConcatenationSimplification,
    VariableRenaming,
    FunctionRenaming,
    Base64Decoding,
    HexDecoding,
    CodeFormatting,
}

impl Technique {
    pub fn label(&self) -> &'static str {
        match self {
            Technique::WhitespaceNormalization => "Whitespace normalization",
            Technique::ConcatenationSimplification => "String concatenation simplification",
            Technique::VariableRenaming => "Variable name simplification",
            Technique::FunctionRenaming => "Function name simplification",
            Technique::Base64Decoding => "Base64 decoding",
            Technique::HexDecoding => "Hex string decoding",
            Technique::CodeFormatting => "Code formatting",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Technique {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// 一次轉換的輸出。`techniques` 依步驟執行順序排列，允許重複
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransformResult {
    pub text: String,
    pub techniques: Vec<Technique>,
}

impl TransformResult {
    /// 依執行順序列出標籤文字，`--verbose` 輸出用
    pub fn labels(&self) -> Vec<&'static str> {
        self.techniques.iter().map(Technique::label).collect()
    }

    pub fn count(&self, technique: Technique) -> usize {
        self.techniques.iter().filter(|t| **t == technique).count()
    }

    pub fn has(&self, technique: Technique) -> bool {
        self.techniques.contains(&technique)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_labels() {
        let result = TransformResult {
            text: "print(\"hi\")".to_string(),
            techniques: vec![Technique::Base64Decoding, Technique::Base64Decoding],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["text"], "print(\"hi\")");
        assert_eq!(
            json["techniques"],
            serde_json::json!(["Base64 decoding", "Base64 decoding"])
        );
        assert_eq!(result.count(Technique::Base64Decoding), 2);
    }
}
