pub mod engine;
pub mod pipeline;
pub mod settings;

pub use crate::domain::model::{Technique, TransformResult};
pub use crate::domain::ports::{PipelineContext, Stage};
pub use crate::utils::error::Result;
