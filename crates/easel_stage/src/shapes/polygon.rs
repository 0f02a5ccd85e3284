//! Polygon - an outline of lines, arcs and Bézier curves

use easel_core::{CanvasContext, Path, Point};

use crate::entity::{apply_transform, paint, Entity};
use crate::metrics::Metrics;
use crate::options::{EntityOptions, OptionOverrides, Segment};

/// A path entity built from its `points` segments
#[derive(Clone, Debug)]
pub struct Polygon {
    options: EntityOptions,
    metrics: Metrics,
}

impl Polygon {
    /// Class defaults for polygons
    pub fn defaults() -> EntityOptions {
        EntityOptions::default()
    }

    /// Create a polygon from overrides on top of the class defaults
    pub fn new(overrides: OptionOverrides) -> Self {
        Self::with_options(Self::defaults().merged(&overrides))
    }

    /// Create a polygon from a complete option set
    pub fn with_options(options: EntityOptions) -> Self {
        let metrics = measure_segments(&options);
        Self { options, metrics }
    }

    /// Outline as a path value, in local coordinates
    pub fn outline(options: &EntityOptions) -> Path {
        let path = options
            .points
            .iter()
            .fold(Path::new(), |path, segment| match *segment {
                Segment::Line(p) => path.line_to(p.x, p.y),
                Segment::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => path.arc(center.x, center.y, radius, start_angle, end_angle),
                Segment::Curve {
                    control1,
                    control2,
                    end,
                } => path.cubic_to(
                    control1.x, control1.y, control2.x, control2.y, end.x, end.y,
                ),
            });
        if options.close_path && !path.is_empty() {
            path.close()
        } else {
            path
        }
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::with_options(Self::defaults())
    }
}

fn measure_segments(options: &EntityOptions) -> Metrics {
    Metrics::new(Polygon::outline(options).bounds(), options.anchor)
}

impl Entity for Polygon {
    fn kind(&self) -> &'static str {
        "polygon"
    }

    fn options(&self) -> &EntityOptions {
        &self.options
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn set_options(&mut self, options: EntityOptions) {
        self.metrics = measure_segments(&options);
        self.options = options;
    }

    fn measure(&self, options: &EntityOptions) -> Metrics {
        measure_segments(options)
    }

    fn render(&self, ctx: &mut dyn CanvasContext, options: &EntityOptions, metrics: &Metrics) {
        ctx.save();
        apply_transform(ctx, options, metrics);
        ctx.set_global_alpha(options.alpha());

        if let Some(last) = options.points.last() {
            ctx.begin_path();
            for segment in &options.points {
                match *segment {
                    Segment::Curve {
                        control1,
                        control2,
                        end,
                    } => ctx.bezier_curve_to(
                        control1.x, control1.y, control2.x, control2.y, end.x, end.y,
                    ),
                    Segment::Arc {
                        center,
                        radius,
                        start_angle,
                        end_angle,
                    } => ctx.arc(center.x, center.y, radius, start_angle, end_angle, false),
                    Segment::Line(Point { x, y }) => ctx.line_to(x, y),
                }
            }

            if options.close_path {
                ctx.close_path();
            } else {
                let end = last.end_point();
                ctx.move_to(end.x, end.y);
            }

            paint(ctx, options);
        }

        ctx.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::{Color, DrawCommand, LineCap, LineJoin, PathCommand, RecordingContext, Size};

    fn recorder() -> RecordingContext {
        RecordingContext::new(Size::new(200.0, 200.0))
    }

    #[test]
    fn test_open_polyline_call_sequence() {
        let polygon = Polygon::new(
            OptionOverrides::new()
                .points([[0.0, 0.0], [10.0, 0.0]])
                .close_path(false),
        );
        let mut ctx = recorder();
        polygon.draw(&mut ctx, None);

        assert_eq!(
            ctx.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::Translate(0.0, 0.0),
                DrawCommand::SetGlobalAlpha(1.0),
                DrawCommand::BeginPath,
                DrawCommand::LineTo(Point::new(0.0, 0.0)),
                DrawCommand::LineTo(Point::new(10.0, 0.0)),
                DrawCommand::MoveTo(Point::new(10.0, 0.0)),
                DrawCommand::SetFillStyle(Color::BLACK),
                DrawCommand::Fill,
                DrawCommand::Restore,
            ]
        );
    }

    #[test]
    fn test_each_arity_yields_one_primitive() {
        let polygon = Polygon::new(OptionOverrides::new().points(vec![
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![0.0, 0.0, 5.0, 0.0, 1.0],
            vec![9.0, 9.0],
            vec![1.0, 1.0, 1.0],
        ]));
        let mut ctx = recorder();
        polygon.draw(&mut ctx, None);

        let primitives: Vec<&DrawCommand> = ctx
            .commands()
            .iter()
            .filter(|c| c.is_path_primitive())
            .collect();
        assert_eq!(primitives.len(), 3);
        assert!(matches!(primitives[0], DrawCommand::BezierCurveTo { .. }));
        assert!(matches!(
            primitives[1],
            DrawCommand::Arc { anticlockwise: false, .. }
        ));
        assert_eq!(primitives[2], &DrawCommand::LineTo(Point::new(9.0, 9.0)));

        // Closed by default
        assert!(ctx.commands().contains(&DrawCommand::ClosePath));
        assert!(!ctx
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::MoveTo(_))));
    }

    #[test]
    fn test_empty_points_draw_no_path() {
        let polygon = Polygon::default();
        let mut ctx = recorder();
        polygon.draw(&mut ctx, None);

        assert!(!ctx.commands().contains(&DrawCommand::BeginPath));
        assert!(!ctx.commands().contains(&DrawCommand::Fill));
        assert_eq!(ctx.save_depth(), 0);
    }

    #[test]
    fn test_stroke_only_with_positive_width() {
        let polygon = Polygon::new(
            OptionOverrides::new()
                .points([[0.0, 0.0], [10.0, 10.0]])
                .no_fill()
                .stroke_style(Color::RED)
                .line_width(2.0)
                .line_cap(LineCap::Round)
                .line_join(LineJoin::Bevel),
        );
        let mut ctx = recorder();
        polygon.draw(&mut ctx, None);

        let cmds = ctx.commands();
        assert!(!cmds.contains(&DrawCommand::Fill));
        let tail = &cmds[cmds.len() - 6..];
        assert_eq!(
            tail,
            &[
                DrawCommand::SetStrokeStyle(Color::RED),
                DrawCommand::SetLineWidth(2.0),
                DrawCommand::SetLineCap(LineCap::Round),
                DrawCommand::SetLineJoin(LineJoin::Bevel),
                DrawCommand::Stroke,
                DrawCommand::Restore,
            ]
        );

        // Stroke style without width paints nothing
        let thin = Polygon::new(
            OptionOverrides::new()
                .points([[0.0, 0.0], [10.0, 10.0]])
                .no_fill()
                .stroke_style(Color::RED),
        );
        let mut ctx = recorder();
        thin.draw(&mut ctx, None);
        assert!(!ctx.commands().contains(&DrawCommand::Stroke));
    }

    #[test]
    fn test_transform_steps() {
        let polygon = Polygon::new(
            OptionOverrides::new()
                .points([[0.0, 0.0], [20.0, 0.0], [20.0, 10.0], [0.0, 10.0]])
                .position(100.0, 50.0)
                .rotation(90.0)
                .scale(2.0)
                .anchor(crate::options::Anchor::Center)
                .opacity(40.0),
        );
        let mut ctx = recorder();
        polygon.draw(&mut ctx, None);

        let cmds = ctx.commands();
        assert_eq!(
            &cmds[..5],
            &[
                DrawCommand::Save,
                DrawCommand::Translate(90.0, 45.0),
                DrawCommand::Rotate(90f32.to_radians()),
                DrawCommand::Scale(2.0, 2.0),
                DrawCommand::SetGlobalAlpha(0.4),
            ]
        );
    }

    #[test]
    fn test_anchor_lands_on_position() {
        let polygon = Polygon::new(
            OptionOverrides::new()
                .points([[0.0, 0.0], [20.0, 0.0], [20.0, 10.0], [0.0, 10.0]])
                .position(100.0, 50.0)
                .anchor(crate::options::Anchor::Center),
        );
        let mut ctx = recorder();
        apply_transform(&mut ctx, polygon.options(), polygon.metrics());
        let center = ctx
            .current_transform()
            .transform_point(polygon.metrics().bounds.center());
        assert_eq!(center, Point::new(100.0, 50.0));
    }

    #[test]
    fn test_scale_applies_after_anchored_translation() {
        let polygon = Polygon::new(
            OptionOverrides::new()
                .points([[0.0, 0.0], [20.0, 0.0], [20.0, 10.0], [0.0, 10.0]])
                .position(100.0, 50.0)
                .anchor(crate::options::Anchor::Center)
                .scale(2.0),
        );
        let mut ctx = recorder();
        polygon.draw(&mut ctx, None);

        let cmds = ctx.commands();
        assert_eq!(cmds[1], DrawCommand::Translate(90.0, 45.0));
        assert_eq!(cmds[2], DrawCommand::Scale(2.0, 2.0));
        assert_eq!(
            cmds.iter()
                .filter(|c| matches!(c, DrawCommand::Translate(..)))
                .count(),
            1
        );

        // Scaling pivots on the anchored origin, not the anchor itself
        let mut ctx = recorder();
        apply_transform(&mut ctx, polygon.options(), polygon.metrics());
        let transform = ctx.current_transform();
        assert_eq!(transform.transform_point(Point::ZERO), Point::new(90.0, 45.0));
        assert_eq!(
            transform.transform_point(Point::new(20.0, 10.0)),
            Point::new(130.0, 65.0)
        );
    }

    #[test]
    fn test_overrides_are_not_persisted() {
        let polygon = Polygon::new(OptionOverrides::new().points([[0.0, 0.0], [4.0, 4.0]]));
        let before = polygon.options().clone();

        let mut ctx = recorder();
        let overrides = OptionOverrides::new()
            .fill_style(Color::BLUE)
            .points([[0.0, 0.0], [8.0, 8.0]]);
        polygon.draw(&mut ctx, Some(&overrides));

        assert!(ctx
            .commands()
            .contains(&DrawCommand::SetFillStyle(Color::BLUE)));
        assert!(ctx
            .commands()
            .contains(&DrawCommand::LineTo(Point::new(8.0, 8.0))));
        assert_eq!(polygon.options(), &before);
        assert_eq!(polygon.metrics().width(), 4.0);
    }

    #[test]
    fn test_update_recomputes_metrics() {
        let mut polygon = Polygon::new(OptionOverrides::new().points([[0.0, 0.0], [4.0, 2.0]]));
        assert_eq!(polygon.metrics().size(), Size::new(4.0, 2.0));

        polygon.update(&OptionOverrides::new().points([[0.0, 0.0], [10.0, 30.0]]));
        assert_eq!(polygon.metrics().size(), Size::new(10.0, 30.0));

        polygon.update(&OptionOverrides::new().anchor(crate::options::Anchor::BottomRight));
        assert_eq!(polygon.metrics().anchor_point, Point::new(10.0, 30.0));
        assert_eq!(polygon.options().points.len(), 2);
    }

    #[test]
    fn test_outline_path() {
        let options = Polygon::defaults().merged(
            &OptionOverrides::new().points(vec![vec![0.0, 0.0], vec![5.0, 5.0, 1.0, 0.0, 1.0]]),
        );
        let path = Polygon::outline(&options);
        assert_eq!(path.commands().len(), 3);
        assert_eq!(path.commands()[2], PathCommand::Close);

        let open = Polygon::defaults().merged(
            &OptionOverrides::new()
                .points([[0.0, 0.0, 10.0, 0.0, 10.0, 20.0]])
                .close_path(false),
        );
        let path = Polygon::outline(&open);
        assert_eq!(
            path.commands(),
            &[PathCommand::CubicTo {
                control1: Point::new(0.0, 0.0),
                control2: Point::new(10.0, 0.0),
                end: Point::new(10.0, 20.0),
            }]
        );
    }
}
