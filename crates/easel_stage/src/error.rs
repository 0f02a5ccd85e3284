//! Error types for easel_stage

use easel_core::CoreError;
use thiserror::Error;

/// Errors that can occur while building stages, entities and scenes
#[derive(Error, Debug)]
pub enum StageError {
    /// The surface has no 2D canvas context
    #[error("Surface {name:?} is a <{kind}>, not a canvas; no 2D context available")]
    NotACanvas { name: String, kind: String },

    /// A value that is neither an entity nor a list of entities
    #[error("Invalid stage target: {0}")]
    InvalidTarget(String),

    /// Anchor name outside the nine supported positions
    #[error("Unknown anchor: {0:?}")]
    UnknownAnchor(String),

    /// Scene file with an extension we cannot parse
    #[error("Unsupported scene format: {0}")]
    UnsupportedFormat(String),

    /// Style parsing error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// TOML scene parsing error
    #[error("Scene parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON scene parsing error
    #[error("Scene parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error when reading a scene file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for stage operations
pub type Result<T> = std::result::Result<T, StageError>;
