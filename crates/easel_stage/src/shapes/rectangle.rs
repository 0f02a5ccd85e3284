//! Rectangle entity

use easel_core::{CanvasContext, Path};

use crate::entity::{apply_transform, paint, Entity};
use crate::metrics::Metrics;
use crate::options::{EntityOptions, OptionOverrides};

/// Axis-aligned rectangle with its top-left corner at the local origin
///
/// `points` and `close_path` are ignored; the outline is always closed.
#[derive(Clone, Debug)]
pub struct Rectangle {
    width: f32,
    height: f32,
    options: EntityOptions,
    metrics: Metrics,
}

impl Rectangle {
    pub fn new(width: f32, height: f32, overrides: OptionOverrides) -> Self {
        let options = EntityOptions::default().merged(&overrides);
        let metrics = Self::measure_rect(width, height, &options);
        Self {
            width,
            height,
            options,
            metrics,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Change the rectangle size and recompute metrics
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.metrics = Self::measure_rect(width, height, &self.options);
    }

    /// Closed outline, in local coordinates
    pub fn outline(&self) -> Path {
        rect_outline(self.width, self.height)
    }

    fn measure_rect(width: f32, height: f32, options: &EntityOptions) -> Metrics {
        Metrics::new(rect_outline(width, height).bounds(), options.anchor)
    }
}

fn rect_outline(width: f32, height: f32) -> Path {
    Path::new()
        .move_to(0.0, 0.0)
        .line_to(width, 0.0)
        .line_to(width, height)
        .line_to(0.0, height)
        .close()
}

impl Entity for Rectangle {
    fn kind(&self) -> &'static str {
        "rectangle"
    }

    fn options(&self) -> &EntityOptions {
        &self.options
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn set_options(&mut self, options: EntityOptions) {
        self.metrics = Self::measure_rect(self.width, self.height, &options);
        self.options = options;
    }

    fn measure(&self, options: &EntityOptions) -> Metrics {
        Self::measure_rect(self.width, self.height, options)
    }

    fn render(&self, ctx: &mut dyn CanvasContext, options: &EntityOptions, metrics: &Metrics) {
        ctx.save();
        apply_transform(ctx, options, metrics);
        ctx.set_global_alpha(options.alpha());

        ctx.begin_path();
        ctx.move_to(0.0, 0.0);
        ctx.line_to(self.width, 0.0);
        ctx.line_to(self.width, self.height);
        ctx.line_to(0.0, self.height);
        ctx.close_path();
        paint(ctx, options);

        ctx.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Anchor;
    use easel_core::{DrawCommand, Point, RecordingContext, Rect, Size};

    #[test]
    fn test_rectangle_outline() {
        let rect = Rectangle::new(30.0, 20.0, OptionOverrides::new().position(5.0, 5.0));
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        rect.draw(&mut ctx, None);

        let lines: Vec<&DrawCommand> = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::LineTo(_)))
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], &DrawCommand::LineTo(Point::new(30.0, 20.0)));
        assert!(ctx.commands().contains(&DrawCommand::ClosePath));
        assert!(ctx.commands().contains(&DrawCommand::Fill));
    }

    #[test]
    fn test_resize_moves_anchor() {
        let mut rect = Rectangle::new(30.0, 20.0, OptionOverrides::new().anchor(Anchor::Center));
        assert_eq!(rect.metrics().anchor_point, Point::new(15.0, 10.0));

        rect.resize(10.0, 10.0);
        assert_eq!(rect.metrics().anchor_point, Point::new(5.0, 5.0));
        assert_eq!(rect.width(), 10.0);
        assert_eq!(rect.outline().commands().len(), 5);
        assert_eq!(rect.outline().bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }
}
