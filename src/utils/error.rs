use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeobError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to parse config '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input is empty or whitespace-only")]
    EmptyInputError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl DeobError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeobError::EmptyInputError => ErrorCategory::Input,
            DeobError::ConfigParseError { .. } | DeobError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DeobError::IoError(_) | DeobError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// 決定 CLI 的退出碼：Low 視為警告
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DeobError::EmptyInputError => ErrorSeverity::Low,
            DeobError::ConfigParseError { .. } | DeobError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            DeobError::IoError(_) => ErrorSeverity::High,
            DeobError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DeobError::EmptyInputError => "Paste some code or pass a non-empty file",
            DeobError::ConfigParseError { .. } => "Check the config file for TOML syntax errors",
            DeobError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file"
            }
            DeobError::IoError(_) => "Check that the input/output paths exist and are accessible",
            DeobError::SerializationError(_) => "Retry without --json",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DeobError::EmptyInputError => "Nothing to clean up: input is empty".to_string(),
            DeobError::IoError(e) => format!("Could not read or write file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeobError>;
