use crate::core::settings::{FormatSettings, PipelineSettings, RenameSettings, StageToggles};
use crate::utils::error::{DeobError, Result};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// 輸出完整 JSON 結果而不是純文字
    pub json: bool,
    /// 寫入檔案；未設定時輸出到 stdout
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub stages: StageToggles,
    pub rename: RenameSettings,
    pub format: FormatSettings,
    pub output: OutputConfig,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content, &path.as_ref().display().to_string())
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| DeobError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 命令列參數優先於 `[output]`；`--json` 只能開啟，不能關閉設定檔的 json
    pub fn resolve_output(&self, cli_json: bool, cli_path: Option<&str>) -> OutputConfig {
        OutputConfig {
            json: cli_json || self.output.json,
            path: cli_path
                .map(str::to_string)
                .or_else(|| self.output.path.clone()),
        }
    }

    pub fn settings(&self) -> PipelineSettings {
        PipelineSettings {
            stages: self.stages.clone(),
            rename: self.rename.clone(),
            format: self.format.clone(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.settings().validate()?;
        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }
        Ok(())
    }
}
