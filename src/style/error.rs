//! Style parsing errors.

use thiserror::Error;

/// Error returned when a style name or style path cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStyleError {
    /// The name is not one of the fixed style identifiers.
    #[error("unknown style '{name}'")]
    UnknownStyle { name: String },
    /// A dotted style path contained no styles, or an empty segment.
    #[error("empty style path '{path}'")]
    EmptyPath { path: String },
}
