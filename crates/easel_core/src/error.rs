//! Core error types

use thiserror::Error;

/// Errors raised while parsing drawing styles
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Not a recognizable CSS color
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Unknown line cap name
    #[error("Invalid line cap: {0:?} (expected butt, round or square)")]
    InvalidLineCap(String),

    /// Unknown line join name
    #[error("Invalid line join: {0:?} (expected miter, round or bevel)")]
    InvalidLineJoin(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
