use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_NAME_LENGTH: usize = 10;
pub const DEFAULT_INDENT_WIDTH: usize = 2;
pub const MAX_INDENT_WIDTH: usize = 16;

/// 各步驟的開關，預設全部啟用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageToggles {
    pub whitespace: bool,
    pub concatenation: bool,
    pub variables: bool,
    pub functions: bool,
    pub base64: bool,
    pub hex: bool,
    pub escapes: bool,
    pub formatting: bool,
}

impl Default for StageToggles {
    fn default() -> Self {
        Self {
            whitespace: true,
            concatenation: true,
            variables: true,
            functions: true,
            base64: true,
            hex: true,
            escapes: true,
            formatting: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameSettings {
    /// 名稱長度超過這個值才會被改寫
    pub min_length: usize,
}

impl Default for RenameSettings {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_NAME_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    pub indent_width: usize,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    pub stages: StageToggles,
    pub rename: RenameSettings,
    pub format: FormatSettings,
}

impl Validate for PipelineSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("rename.min_length", self.rename.min_length, 1)?;
        validate_range("format.indent_width", self.format.indent_width, 0, MAX_INDENT_WIDTH)?;
        Ok(())
    }
}
