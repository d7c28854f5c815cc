pub mod concatenation;
pub mod formatting;
pub mod literals;
pub mod renaming;
pub mod whitespace;

pub use concatenation::ConcatenationStage;
pub use formatting::FormattingStage;
pub use literals::{Base64Stage, EscapeStage, HexStage};
pub use renaming::{FunctionRenameStage, VariableRenameStage};
pub use whitespace::WhitespaceStage;
