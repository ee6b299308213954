//! Error types for the layout engine

use thiserror::Error;

/// Layout error types
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Input violates a layout precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
