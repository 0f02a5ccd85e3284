//! The Entity capability
//!
//! An entity is a drawable shape with a stored option set, metrics derived
//! from it, and a `render` routine that issues primitive calls against a
//! [`CanvasContext`]. [`Entity::draw`] is the shared entry point: it merges
//! transient overrides, re-measures if needed and hands off to `render`.
//!
//! Shapes share the transform and paint steps through [`apply_transform`] and
//! [`paint`] so each `render` only has to build its path.

use std::fmt;

use easel_core::{CanvasContext, Stroke};

use crate::metrics::Metrics;
use crate::options::{EntityOptions, OptionOverrides};

/// A drawable shape
pub trait Entity: fmt::Debug {
    /// Short shape name used in diagnostics
    fn kind(&self) -> &'static str;

    /// Current stored options
    fn options(&self) -> &EntityOptions;

    /// Metrics for the stored options
    fn metrics(&self) -> &Metrics;

    /// Replace the stored options and recompute metrics
    fn set_options(&mut self, options: EntityOptions);

    /// Compute metrics for an arbitrary option set
    fn measure(&self, options: &EntityOptions) -> Metrics;

    /// Issue drawing calls for the given options and metrics
    fn render(&self, ctx: &mut dyn CanvasContext, options: &EntityOptions, metrics: &Metrics);

    /// Merge `overrides` into the stored options for good
    fn update(&mut self, overrides: &OptionOverrides) {
        let merged = self.options().merged(overrides);
        self.set_options(merged);
    }

    /// Draw with optional per-call overrides that are not persisted
    fn draw(&self, ctx: &mut dyn CanvasContext, overrides: Option<&OptionOverrides>) {
        match overrides {
            Some(overrides) if !overrides.is_empty() => {
                let options = self.options().merged(overrides);
                let metrics = self.measure(&options);
                self.render(ctx, &options, &metrics);
            }
            _ => self.render(ctx, self.options(), self.metrics()),
        }
    }
}

/// Apply the anchored position, then rotation and scale, to the context
///
/// The translation places the anchor point on `options.position`. Rotation
/// and scale follow it and are skipped when they are the identity.
pub fn apply_transform(ctx: &mut dyn CanvasContext, options: &EntityOptions, metrics: &Metrics) {
    let anchor = metrics.anchor_point;
    ctx.translate(
        options.position.x - anchor.x,
        options.position.y - anchor.y,
    );

    if options.rotation != 0.0 {
        ctx.rotate(options.rotation_radians());
    }
    if options.scale != 1.0 {
        ctx.scale(options.scale, options.scale);
    }
}

/// Fill and stroke the current path according to the options
///
/// Fills when a fill style is set; strokes only when the line width is positive.
pub fn paint(ctx: &mut dyn CanvasContext, options: &EntityOptions) {
    if let Some(fill) = options.fill_style {
        ctx.set_fill_style(fill);
        ctx.fill();
    }

    if options.line_width > 0.0 {
        if let Some(stroke) = options.stroke_style {
            ctx.set_stroke_style(stroke);
        }
        ctx.set_stroke(
            &Stroke::new(options.line_width)
                .with_cap(options.line_cap)
                .with_join(options.line_join),
        );
        ctx.stroke();
    }
}
