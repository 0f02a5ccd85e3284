//! Canvas Context - the 2D drawing API entities render against
//!
//! [`CanvasContext`] mirrors the immediate-mode 2D canvas API: a state stack
//! (save/restore), transform calls that post-multiply the current matrix, style
//! setters, and a single current path built with `begin_path` / `move_to` /
//! `line_to` / `arc` / `bezier_curve_to` and consumed by `fill` / `stroke`.
//!
//! Hosts plug a real surface in by implementing the trait. [`RecordingContext`]
//! is the in-process implementation: it records every call as a
//! [`DrawCommand`] and tracks the resulting state so callers can inspect it.
//!
//! # Example
//!
//! ```rust
//! use easel_core::{CanvasContext, DrawCommand, Point, RecordingContext, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));
//! ctx.begin_path();
//! ctx.move_to(0.0, 0.0);
//! ctx.line_to(10.0, 0.0);
//! ctx.stroke();
//!
//! assert_eq!(ctx.commands()[2], DrawCommand::LineTo(Point::new(10.0, 0.0)));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::color::Color;
use crate::error::CoreError;
use crate::geometry::{Affine2D, Point, Rect, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

impl LineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

impl FromStr for LineCap {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "butt" => Ok(LineCap::Butt),
            "round" => Ok(LineCap::Round),
            "square" => Ok(LineCap::Square),
            _ => Err(CoreError::InvalidLineCap(s.to_string())),
        }
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Miter join (sharp corner)
    #[default]
    Miter,
    /// Round join
    Round,
    /// Bevel join (flat corner)
    Bevel,
}

impl LineJoin {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

impl FromStr for LineJoin {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "miter" => Ok(LineJoin::Miter),
            "round" => Ok(LineJoin::Round),
            "bevel" => Ok(LineJoin::Bevel),
            _ => Err(CoreError::InvalidLineJoin(s.to_string())),
        }
    }
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stroke style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set line cap style
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set line join style
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Circular arc around `center`, angles in radians
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    },
    /// Close the current subpath
    Close,
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a command
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Move to a point
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Cubic Bézier curve
    pub fn cubic_to(mut self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    /// Clockwise circular arc
    pub fn arc(mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) -> Self {
        self.commands.push(PathCommand::Arc {
            center: Point::new(x, y),
            radius,
            start_angle,
            end_angle,
            anticlockwise: false,
        });
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Calculate the bounding rectangle of this path
    ///
    /// Curves contribute their control points and arcs their full circle, so
    /// the result may be larger than the painted area but never smaller.
    pub fn bounds(&self) -> Rect {
        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        let mut include = |p: Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(*p),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(*control1);
                    include(*control2);
                    include(*end);
                }
                PathCommand::Arc { center, radius, .. } => {
                    let r = radius.abs();
                    include(Point::new(center.x - r, center.y - r));
                    include(Point::new(center.x + r, center.y + r));
                }
                PathCommand::Close => {}
            }
        }

        if min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite() {
            Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
        } else {
            Rect::ZERO
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Canvas Context Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Immediate-mode 2D drawing context
///
/// Angles are radians. Transform calls post-multiply the current matrix, so the
/// last call is applied to coordinates first.
pub trait CanvasContext {
    // ─────────────────────────────────────────────────────────────────────────
    // State Stack
    // ─────────────────────────────────────────────────────────────────────────

    /// Push the current transform and styles
    fn save(&mut self);

    /// Pop the last saved transform and styles
    fn restore(&mut self);

    // ─────────────────────────────────────────────────────────────────────────
    // Transforms
    // ─────────────────────────────────────────────────────────────────────────

    fn translate(&mut self, x: f32, y: f32);

    fn rotate(&mut self, angle: f32);

    fn scale(&mut self, sx: f32, sy: f32);

    // ─────────────────────────────────────────────────────────────────────────
    // Styles
    // ─────────────────────────────────────────────────────────────────────────

    /// Global alpha in `0.0..=1.0`
    fn set_global_alpha(&mut self, alpha: f32);

    fn set_fill_style(&mut self, color: Color);

    fn set_stroke_style(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    fn set_line_cap(&mut self, cap: LineCap);

    fn set_line_join(&mut self, join: LineJoin);

    // ─────────────────────────────────────────────────────────────────────────
    // Path Construction
    // ─────────────────────────────────────────────────────────────────────────

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f32, y: f32);

    fn line_to(&mut self, x: f32, y: f32);

    fn arc(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    );

    fn bezier_curve_to(&mut self, cp1x: f32, cp1y: f32, cp2x: f32, cp2y: f32, x: f32, y: f32);

    fn close_path(&mut self);

    // ─────────────────────────────────────────────────────────────────────────
    // Painting
    // ─────────────────────────────────────────────────────────────────────────

    /// Fill the current path with the current fill style
    fn fill(&mut self);

    /// Stroke the current path with the current stroke style
    fn stroke(&mut self);

    /// Clear a rectangle to transparent
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Apply a whole stroke configuration at once
    fn set_stroke(&mut self, stroke: &Stroke) {
        self.set_line_width(stroke.width);
        self.set_line_cap(stroke.cap);
        self.set_line_join(stroke.join);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Context
// ─────────────────────────────────────────────────────────────────────────────

/// A recorded canvas call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    // State
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    Scale(f32, f32),
    SetGlobalAlpha(f32),
    SetFillStyle(Color),
    SetStrokeStyle(Color),
    SetLineWidth(f32),
    SetLineCap(LineCap),
    SetLineJoin(LineJoin),

    // Path
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    },
    BezierCurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    ClosePath,

    // Painting
    Fill,
    Stroke,
    ClearRect(Rect),
}

impl DrawCommand {
    /// True for calls that add to the current path
    pub fn is_path_primitive(&self) -> bool {
        matches!(
            self,
            DrawCommand::LineTo(_) | DrawCommand::Arc { .. } | DrawCommand::BezierCurveTo { .. }
        )
    }
}

/// Context state covered by save/restore
#[derive(Clone, Debug, PartialEq)]
pub struct ContextState {
    pub transform: Affine2D,
    pub global_alpha: f32,
    pub fill_style: Color,
    pub stroke_style: Color,
    pub stroke: Stroke,
}

impl Default for ContextState {
    fn default() -> Self {
        Self {
            transform: Affine2D::IDENTITY,
            global_alpha: 1.0,
            fill_style: Color::BLACK,
            stroke_style: Color::BLACK,
            stroke: Stroke::default(),
        }
    }
}

/// A canvas context that records calls for inspection or replay
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    state: ContextState,
    saved: SmallVec<[ContextState; 4]>,
    path: Path,
    viewport: Size,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands and reset state
    pub fn clear(&mut self) {
        self.commands.clear();
        self.state = ContextState::default();
        self.saved.clear();
        self.path = Path::new();
    }

    /// State as of the last call
    pub fn state(&self) -> &ContextState {
        &self.state
    }

    pub fn current_transform(&self) -> Affine2D {
        self.state.transform
    }

    /// The path under construction, in the coordinates it was given
    pub fn current_path(&self) -> &Path {
        &self.path
    }

    /// Depth of the save/restore stack
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Replay the recorded calls onto another context
    pub fn replay(&self, target: &mut dyn CanvasContext) {
        for command in &self.commands {
            match command {
                DrawCommand::Save => target.save(),
                DrawCommand::Restore => target.restore(),
                DrawCommand::Translate(x, y) => target.translate(*x, *y),
                DrawCommand::Rotate(angle) => target.rotate(*angle),
                DrawCommand::Scale(sx, sy) => target.scale(*sx, *sy),
                DrawCommand::SetGlobalAlpha(alpha) => target.set_global_alpha(*alpha),
                DrawCommand::SetFillStyle(color) => target.set_fill_style(*color),
                DrawCommand::SetStrokeStyle(color) => target.set_stroke_style(*color),
                DrawCommand::SetLineWidth(width) => target.set_line_width(*width),
                DrawCommand::SetLineCap(cap) => target.set_line_cap(*cap),
                DrawCommand::SetLineJoin(join) => target.set_line_join(*join),
                DrawCommand::BeginPath => target.begin_path(),
                DrawCommand::MoveTo(p) => target.move_to(p.x, p.y),
                DrawCommand::LineTo(p) => target.line_to(p.x, p.y),
                DrawCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    anticlockwise,
                } => target.arc(
                    center.x,
                    center.y,
                    *radius,
                    *start_angle,
                    *end_angle,
                    *anticlockwise,
                ),
                DrawCommand::BezierCurveTo {
                    control1,
                    control2,
                    end,
                } => target.bezier_curve_to(
                    control1.x, control1.y, control2.x, control2.y, end.x, end.y,
                ),
                DrawCommand::ClosePath => target.close_path(),
                DrawCommand::Fill => target.fill(),
                DrawCommand::Stroke => target.stroke(),
                DrawCommand::ClearRect(rect) => {
                    target.clear_rect(rect.x(), rect.y(), rect.width(), rect.height())
                }
            }
        }
    }
}

impl CanvasContext for RecordingContext {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
        // Unbalanced restore is a no-op, as on a browser canvas
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate(x, y));
        self.state.transform = self.state.transform.then(&Affine2D::translation(x, y));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
        self.state.transform = self.state.transform.then(&Affine2D::rotation(angle));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.commands.push(DrawCommand::Scale(sx, sy));
        self.state.transform = self.state.transform.then(&Affine2D::scale(sx, sy));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::SetGlobalAlpha(alpha));
        // Out-of-range values are ignored, matching canvas behavior
        if (0.0..=1.0).contains(&alpha) {
            self.state.global_alpha = alpha;
        }
    }

    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillStyle(color));
        self.state.fill_style = color;
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeStyle(color));
        self.state.stroke_style = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::SetLineWidth(width));
        if width.is_finite() && width > 0.0 {
            self.state.stroke.width = width;
        }
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.commands.push(DrawCommand::SetLineCap(cap));
        self.state.stroke.cap = cap;
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.commands.push(DrawCommand::SetLineJoin(join));
        self.state.stroke.join = join;
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
        self.path = Path::new();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let p = Point::new(x, y);
        self.commands.push(DrawCommand::MoveTo(p));
        self.path.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = Point::new(x, y);
        self.commands.push(DrawCommand::LineTo(p));
        self.path.push(PathCommand::LineTo(p));
    }

    fn arc(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) {
        let center = Point::new(x, y);
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
        self.path.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    fn bezier_curve_to(&mut self, cp1x: f32, cp1y: f32, cp2x: f32, cp2y: f32, x: f32, y: f32) {
        let (control1, control2, end) = (
            Point::new(cp1x, cp1y),
            Point::new(cp2x, cp2y),
            Point::new(x, y),
        );
        self.commands.push(DrawCommand::BezierCurveTo {
            control1,
            control2,
            end,
        });
        self.path.push(PathCommand::CubicTo {
            control1,
            control2,
            end,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
        self.path.push(PathCommand::Close);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands
            .push(DrawCommand::ClearRect(Rect::new(x, y, width, height)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_context() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        ctx.save();
        ctx.translate(10.0, 20.0);
        ctx.begin_path();
        ctx.move_to(0.0, 0.0);
        ctx.line_to(100.0, 0.0);
        ctx.fill();
        ctx.restore();

        assert_eq!(ctx.commands().len(), 7);
        assert_eq!(ctx.commands()[1], DrawCommand::Translate(10.0, 20.0));
        assert_eq!(ctx.current_path().commands().len(), 2);
        assert_eq!(ctx.viewport_size(), Size::new(800.0, 600.0));
    }

    #[test]
    fn test_path_builder() {
        let path = Path::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 0.0)
            .line_to(100.0, 100.0)
            .line_to(0.0, 100.0)
            .close();

        assert_eq!(path.commands().len(), 5);
        assert_eq!(path.bounds(), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_path_bounds_with_curves_and_arcs() {
        let path = Path::new()
            .move_to(0.0, 0.0)
            .cubic_to(-5.0, 10.0, 20.0, 30.0, 10.0, 0.0)
            .arc(50.0, 50.0, 10.0, 0.0, std::f32::consts::PI);

        assert_eq!(path.bounds(), Rect::new(-5.0, 0.0, 65.0, 60.0));
        assert_eq!(Path::new().bounds(), Rect::ZERO);
    }

    #[test]
    fn test_save_restore_state() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));

        ctx.set_global_alpha(0.5);
        ctx.save();
        ctx.translate(5.0, 5.0);
        ctx.scale(2.0, 2.0);
        ctx.set_fill_style(Color::RED);
        ctx.set_global_alpha(0.25);
        assert_eq!(
            ctx.current_transform().transform_point(Point::new(1.0, 1.0)),
            Point::new(7.0, 7.0)
        );
        assert_eq!(ctx.save_depth(), 1);

        ctx.restore();
        assert!(ctx.current_transform().is_identity());
        assert_eq!(ctx.state().fill_style, Color::BLACK);
        assert_eq!(ctx.state().global_alpha, 0.5);

        // Should not panic when restoring past the root
        ctx.restore();
        assert_eq!(ctx.save_depth(), 0);
    }

    #[test]
    fn test_invalid_style_values_are_ignored() {
        let mut ctx = RecordingContext::new(Size::ZERO);
        ctx.set_global_alpha(2.0);
        ctx.set_line_width(0.0);
        ctx.set_line_width(f32::NAN);

        assert_eq!(ctx.state().global_alpha, 1.0);
        assert_eq!(ctx.state().stroke.width, 1.0);
        // Calls are still recorded
        assert_eq!(ctx.commands().len(), 3);
    }

    #[test]
    fn test_replay_reproduces_calls() {
        let mut source = RecordingContext::new(Size::new(10.0, 10.0));
        source.begin_path();
        source.arc(5.0, 5.0, 2.0, 0.0, 1.0, false);
        source.bezier_curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        source.close_path();
        source.set_stroke(&Stroke::new(3.0).with_cap(LineCap::Round));
        source.stroke();
        source.clear_rect(0.0, 0.0, 10.0, 10.0);

        let mut target = RecordingContext::new(Size::new(10.0, 10.0));
        source.replay(&mut target);

        assert_eq!(source.commands(), target.commands());
        assert_eq!(target.state().stroke.cap, LineCap::Round);
        assert_eq!(target.current_path(), source.current_path());
    }

    #[test]
    fn test_line_style_names() {
        assert_eq!("Round".parse::<LineCap>().unwrap(), LineCap::Round);
        assert_eq!("bevel".parse::<LineJoin>().unwrap(), LineJoin::Bevel);
        assert_eq!(LineCap::Square.to_string(), "square");
        assert!(matches!(
            "pointy".parse::<LineJoin>(),
            Err(CoreError::InvalidLineJoin(_))
        ));
        assert!(matches!(
            "flat".parse::<LineCap>(),
            Err(CoreError::InvalidLineCap(_))
        ));
    }

    #[test]
    fn test_primitive_classification() {
        assert!(DrawCommand::LineTo(Point::ZERO).is_path_primitive());
        assert!(!DrawCommand::MoveTo(Point::ZERO).is_path_primitive());
        assert!(!DrawCommand::Fill.is_path_primitive());
    }
}
