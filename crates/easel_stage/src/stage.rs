//! Stage - a drawing surface, its 2D context and frame timing
//!
//! The stage owns the one context that every entity draws into. Entities are
//! handed to [`Stage::add_to_stage`] one at a time or as an ordered list, and
//! each draws itself with the stage's context and the caller's per-call
//! overrides. Problems at this level (a surface without a 2D context, a value
//! that is not an entity) are reported through `tracing` and never abort.
//!
//! # Example
//!
//! ```rust
//! use easel_stage::{OptionOverrides, Polygon, Stage};
//!
//! let triangle = Polygon::new(
//!     OptionOverrides::new().points([[0.0, 0.0], [20.0, 0.0], [10.0, 15.0]]),
//! );
//!
//! let mut stage: Stage = Stage::new("main", Some(640), Some(480));
//! stage
//!     .add_to_stage(&triangle, None)
//!     .add_to_stage(&triangle, Some(&OptionOverrides::new().position(100.0, 0.0)));
//!
//! assert!(!stage.context().unwrap().commands().is_empty());
//! ```

use std::fmt;

use easel_core::{RecordingContext, Size};
use smallvec::SmallVec;

use crate::entity::Entity;
use crate::options::OptionOverrides;
use crate::scene;
use crate::surface::{Surface, SurfaceContext};

// ─────────────────────────────────────────────────────────────────────────────
// Frame Timing
// ─────────────────────────────────────────────────────────────────────────────

/// Timing of the most recent frame, all times in milliseconds
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTiming {
    /// Timestamp of the previous tick
    pub last: Option<f64>,
    /// Time since the previous tick
    pub dt: f64,
    /// Frames per second derived from `dt`; 0 until two ticks have happened
    pub fps: f64,
    /// Timestamp of the current frame
    pub ftime: f64,
    /// Number of ticks so far
    pub frame: u64,
}

/// Callback invoked after each tick
pub type FrameCallback = Box<dyn FnMut(&FrameTiming)>;

// ─────────────────────────────────────────────────────────────────────────────
// Stage Targets
// ─────────────────────────────────────────────────────────────────────────────

/// What can be added to a stage: one entity or an ordered list of them
pub enum StageTarget<'a> {
    One(&'a dyn Entity),
    Many(SmallVec<[&'a dyn Entity; 8]>),
}

impl<'a, E: Entity + 'a> From<&'a E> for StageTarget<'a> {
    fn from(entity: &'a E) -> Self {
        StageTarget::One(entity)
    }
}

impl<'a> From<&'a dyn Entity> for StageTarget<'a> {
    fn from(entity: &'a dyn Entity) -> Self {
        StageTarget::One(entity)
    }
}

impl<'a> From<&'a [&'a dyn Entity]> for StageTarget<'a> {
    fn from(entities: &'a [&'a dyn Entity]) -> Self {
        StageTarget::Many(entities.iter().copied().collect())
    }
}

impl<'a, const N: usize> From<[&'a dyn Entity; N]> for StageTarget<'a> {
    fn from(entities: [&'a dyn Entity; N]) -> Self {
        StageTarget::Many(entities.into_iter().collect())
    }
}

impl<'a> From<&'a [Box<dyn Entity>]> for StageTarget<'a> {
    fn from(entities: &'a [Box<dyn Entity>]) -> Self {
        StageTarget::Many(
            entities
                .iter()
                .map(|entity| -> &'a dyn Entity { entity.as_ref() })
                .collect(),
        )
    }
}

impl<'a> From<&'a Vec<Box<dyn Entity>>> for StageTarget<'a> {
    fn from(entities: &'a Vec<Box<dyn Entity>>) -> Self {
        StageTarget::from(entities.as_slice())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Stage
// ─────────────────────────────────────────────────────────────────────────────

/// A drawing surface with its 2D context and frame timing
pub struct Stage<C: SurfaceContext = RecordingContext> {
    surface: Surface,
    context: Option<C>,
    width: u32,
    height: u32,
    timing: FrameTiming,
    on_frame: Option<FrameCallback>,
    animation_handle: Option<u64>,
}

impl<C: SurfaceContext> Stage<C> {
    /// Create a stage on an existing surface, or on a new canvas when given a name
    ///
    /// Size resolves from the explicit arguments, then the surface's declared
    /// attributes, then its rendered size. A surface that is not a canvas still
    /// yields a stage, but one without a context; an error is logged.
    pub fn new(surface: impl Into<Surface>, width: Option<u32>, height: Option<u32>) -> Self {
        let mut surface = surface.into();
        let (width, height) = surface.resolve_size(width, height);

        if surface.is_canvas() {
            surface.set_size(width, height);
        }

        let context = match surface.context_2d::<C>() {
            Ok(context) => Some(context),
            Err(err) => {
                tracing::error!(surface = surface.name(), "{err}");
                None
            }
        };

        tracing::debug!(surface = surface.name(), width, height, "stage created");

        Self {
            surface,
            context,
            width,
            height,
            timing: FrameTiming::default(),
            on_frame: None,
            animation_handle: None,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// The 2D context, if the surface provided one
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }

    pub fn context_mut(&mut self) -> Option<&mut C> {
        self.context.as_mut()
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    /// Resize the stage and its surface attributes
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        if self.surface.is_canvas() {
            self.surface.set_size(width, height);
        }
    }

    /// Clear the whole stage
    pub fn clear(&mut self) -> &mut Self {
        let (width, height) = (self.width as f32, self.height as f32);
        match self.context.as_mut() {
            Some(ctx) => ctx.clear_rect(0.0, 0.0, width, height),
            None => tracing::warn!(surface = self.surface.name(), "clear skipped: no 2D context"),
        }
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Drawing
    // ─────────────────────────────────────────────────────────────────────────

    /// Draw one entity, or each entity of a list in order
    ///
    /// `overrides` apply to this call only and are forwarded to every entity.
    pub fn add_to_stage<'a>(
        &mut self,
        target: impl Into<StageTarget<'a>>,
        overrides: Option<&OptionOverrides>,
    ) -> &mut Self {
        let Some(ctx) = self.context.as_mut() else {
            tracing::warn!(surface = self.surface.name(), "nothing drawn: no 2D context");
            return self;
        };

        match target.into() {
            StageTarget::One(entity) => {
                tracing::trace!(kind = entity.kind(), "drawing entity");
                entity.draw(&mut *ctx, overrides);
            }
            StageTarget::Many(entities) => {
                tracing::trace!(count = entities.len(), "drawing entity list");
                for entity in entities {
                    entity.draw(&mut *ctx, overrides);
                }
            }
        }
        self
    }

    /// Draw an entity description (or a list of them) given as a JSON value
    ///
    /// Anything that is not an entity description or a list of them is
    /// reported once and nothing is drawn.
    pub fn add_value(
        &mut self,
        value: &serde_json::Value,
        overrides: Option<&OptionOverrides>,
    ) -> &mut Self {
        match scene::entities_from_value(value) {
            Ok(entities) => self.add_to_stage(&entities, overrides),
            Err(err) => {
                tracing::error!(surface = self.surface.name(), "{err}");
                self
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Frame Timing
    // ─────────────────────────────────────────────────────────────────────────

    /// Advance frame timing to `timestamp_ms` and run the frame callback
    pub fn tick(&mut self, timestamp_ms: f64) -> FrameTiming {
        let dt = self
            .timing
            .last
            .map(|last| (timestamp_ms - last).max(0.0))
            .unwrap_or(0.0);

        self.timing = FrameTiming {
            last: Some(timestamp_ms),
            dt,
            fps: if dt > 0.0 { 1000.0 / dt } else { 0.0 },
            ftime: timestamp_ms,
            frame: self.timing.frame + 1,
        };

        if let Some(callback) = self.on_frame.as_mut() {
            callback(&self.timing);
        }
        self.timing
    }

    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    pub fn dt(&self) -> f64 {
        self.timing.dt
    }

    pub fn fps(&self) -> f64 {
        self.timing.fps
    }

    pub fn ftime(&self) -> f64 {
        self.timing.ftime
    }

    /// Register the per-frame callback, replacing any previous one
    pub fn on_frame(&mut self, callback: impl FnMut(&FrameTiming) + 'static) -> &mut Self {
        self.on_frame = Some(Box::new(callback));
        self
    }

    pub fn clear_frame_callback(&mut self) {
        self.on_frame = None;
    }

    /// Store the host's animation-loop handle
    pub fn set_animation_handle(&mut self, handle: u64) {
        self.animation_handle = Some(handle);
    }

    pub fn animation_handle(&self) -> Option<u64> {
        self.animation_handle
    }

    /// Remove and return the animation handle, e.g. to cancel the loop
    pub fn take_animation_handle(&mut self) -> Option<u64> {
        self.animation_handle.take()
    }
}

impl<C: SurfaceContext> fmt::Debug for Stage<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("surface", &self.surface)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_context", &self.context.is_some())
            .field("timing", &self.timing)
            .field("animation_handle", &self.animation_handle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Polygon};
    use easel_core::DrawCommand;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_stage_size_resolution() {
        let stage: Stage = Stage::new("a", Some(800), Some(600));
        assert_eq!((stage.width(), stage.height()), (800, 600));
        assert_eq!(stage.surface().width_attribute(), Some(800));

        let surface = Surface::canvas("b")
            .with_attributes(Some(400), None)
            .with_client_size(120, 90);
        let stage: Stage = Stage::new(surface, None, None);
        assert_eq!((stage.width(), stage.height()), (400, 90));
        assert_eq!(
            stage.context().unwrap().viewport_size(),
            Size::new(400.0, 90.0)
        );
    }

    #[test]
    fn test_non_canvas_surface_has_no_context() {
        let mut stage: Stage = Stage::new(Surface::element("panel", "div"), None, None);
        assert!(!stage.has_context());
        assert_eq!((stage.width(), stage.height()), (300, 150));

        // Drawing degrades to a no-op
        let polygon = Polygon::new(OptionOverrides::new().points([[0.0, 0.0], [1.0, 1.0]]));
        stage.add_to_stage(&polygon, None).clear();
        assert!(stage.context().is_none());
    }

    #[test]
    fn test_list_draws_in_order() {
        let first = Polygon::new(OptionOverrides::new().points([[1.0, 1.0]]));
        let second = Circle::new(3.0, OptionOverrides::new());
        let third = Polygon::new(OptionOverrides::new().points([[3.0, 3.0]]));

        let mut stage: Stage = Stage::new("list", None, None);
        stage.add_to_stage([&first as &dyn Entity, &second, &third], None);

        let primitives: Vec<DrawCommand> = stage
            .context()
            .unwrap()
            .commands()
            .iter()
            .filter(|c| c.is_path_primitive())
            .cloned()
            .collect();
        assert_eq!(primitives.len(), 3);
        assert_eq!(primitives[0], DrawCommand::LineTo(easel_core::Point::new(1.0, 1.0)));
        assert!(matches!(primitives[1], DrawCommand::Arc { radius, .. } if radius == 3.0));
        assert_eq!(primitives[2], DrawCommand::LineTo(easel_core::Point::new(3.0, 3.0)));
    }

    #[test]
    fn test_chaining_and_clear() {
        let polygon = Polygon::new(OptionOverrides::new().points([[0.0, 0.0], [5.0, 5.0]]));
        let mut stage: Stage = Stage::new("chain", Some(50), Some(40));
        stage
            .clear()
            .add_to_stage(&polygon, None)
            .add_to_stage(&polygon, None);

        let commands = stage.context().unwrap().commands();
        assert_eq!(
            commands[0],
            DrawCommand::ClearRect(easel_core::Rect::new(0.0, 0.0, 50.0, 40.0))
        );
        let fills = commands.iter().filter(|c| **c == DrawCommand::Fill).count();
        assert_eq!(fills, 2);
    }

    #[test]
    fn test_tick_updates_timing_and_runs_callback() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut stage: Stage = Stage::new("timed", None, None);
        stage.on_frame(move |timing| sink.borrow_mut().push(timing.frame));

        let first = stage.tick(1000.0);
        assert_eq!(first.dt, 0.0);
        assert_eq!(first.fps, 0.0);

        let second = stage.tick(1020.0);
        assert_eq!(second.dt, 20.0);
        assert_eq!(second.fps, 50.0);
        assert_eq!(stage.ftime(), 1020.0);

        // Clock going backwards never yields a negative delta
        stage.tick(1010.0);
        assert_eq!(stage.dt(), 0.0);

        assert_eq!(*seen.borrow(), vec![1, 2, 3]);

        stage.clear_frame_callback();
        stage.tick(1030.0);
        assert_eq!(seen.borrow().len(), 3);
        assert_eq!(stage.fps(), 50.0);
    }

    #[test]
    fn test_animation_handle() {
        let mut stage: Stage = Stage::new("anim", None, None);
        assert_eq!(stage.animation_handle(), None);
        stage.set_animation_handle(42);
        assert_eq!(stage.take_animation_handle(), Some(42));
        assert_eq!(stage.animation_handle(), None);
    }

    #[test]
    fn test_resize_updates_surface() {
        let mut stage: Stage = Stage::new("r", None, None);
        stage.resize(1024, 768);
        assert_eq!(stage.size(), Size::new(1024.0, 768.0));
        assert_eq!(stage.surface().height_attribute(), Some(768));
    }
}
