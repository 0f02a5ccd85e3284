//! Easel Stage
//!
//! A small 2D drawing facade over a canvas-like context:
//!
//! - **Stage**: binds a surface to its 2D context, resolves the drawing size
//!   and tracks frame timing
//! - **Entities**: drawable shapes with stored options, metrics and a render
//!   routine ([`Polygon`], [`Rectangle`], [`Circle`])
//! - **Options**: anchor, opacity, transform, fill and stroke styles, merged
//!   from per-call overrides
//! - **Scenes**: stage and entity descriptions loaded from TOML or JSON
//!
//! # Example
//!
//! ```rust
//! use easel_stage::{Anchor, Color, DrawCommand, OptionOverrides, Polygon, Stage};
//!
//! let square = Polygon::new(
//!     OptionOverrides::new()
//!         .points([[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]])
//!         .anchor(Anchor::Center)
//!         .fill_style(Color::RED),
//! );
//!
//! let mut stage: Stage = Stage::new("main", Some(200), Some(100));
//! stage.add_to_stage(&square, Some(&OptionOverrides::new().position(100.0, 50.0)));
//!
//! let commands = stage.context().unwrap().commands();
//! assert_eq!(commands[1], DrawCommand::Translate(95.0, 45.0));
//! assert!(commands.contains(&DrawCommand::Fill));
//! ```

pub mod entity;
pub mod error;
pub mod metrics;
pub mod options;
pub mod scene;
pub mod shapes;
pub mod stage;
pub mod surface;

pub use entity::{apply_transform, paint, Entity};
pub use error::{Result, StageError};
pub use metrics::Metrics;
pub use options::{segments_from_tuples, Anchor, EntityOptions, OptionOverrides, Segment};
pub use scene::{entities_from_value, EntitySpec, SceneConfig, StageConfig};
pub use shapes::{Circle, Polygon, Rectangle};
pub use stage::{FrameCallback, FrameTiming, Stage, StageTarget};
pub use surface::{
    Surface, SurfaceContext, SurfaceKind, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
};

// Core drawing types used throughout the public API
pub use easel_core::{
    CanvasContext, Color, CoreError, DrawCommand, LineCap, LineJoin, Path, PathCommand, Point,
    Rect, RecordingContext, Size, Stroke,
};
