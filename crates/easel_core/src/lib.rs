//! Easel Core
//!
//! Foundational drawing types for the Easel 2D stage:
//!
//! - **Geometry**: points, sizes, rects and 2D affine transforms
//! - **Color**: RGBA colors parsed from CSS color strings
//! - **Paths and strokes**: path commands with bounds, line cap/join styles
//! - **Canvas Context**: the immediate-mode drawing trait entities render to,
//!   plus a recording implementation for inspection and replay

pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;

pub use color::Color;
pub use draw::{
    CanvasContext, ContextState, DrawCommand, LineCap, LineJoin, Path, PathCommand,
    RecordingContext, Stroke,
};
pub use error::{CoreError, Result};
pub use geometry::{Affine2D, Point, Rect, Size};
