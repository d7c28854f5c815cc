pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    engine::CleanupEngine,
    pipeline::{transform, TransformPipeline},
    settings::PipelineSettings,
};
pub use crate::domain::model::{Technique, TransformResult};
pub use crate::utils::error::{DeobError, Result};
