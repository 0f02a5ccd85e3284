//! Circle entity

use std::f32::consts::TAU;

use easel_core::{CanvasContext, Path};

use crate::entity::{apply_transform, paint, Entity};
use crate::metrics::Metrics;
use crate::options::{EntityOptions, OptionOverrides};

/// Full circle centered on the local origin
#[derive(Clone, Debug)]
pub struct Circle {
    radius: f32,
    options: EntityOptions,
    metrics: Metrics,
}

impl Circle {
    pub fn new(radius: f32, overrides: OptionOverrides) -> Self {
        let options = EntityOptions::default().merged(&overrides);
        let metrics = Self::measure_circle(radius, &options);
        Self {
            radius,
            options,
            metrics,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Closed full-circle outline around the local origin
    pub fn outline(&self) -> Path {
        circle_outline(self.radius)
    }

    fn measure_circle(radius: f32, options: &EntityOptions) -> Metrics {
        Metrics::new(circle_outline(radius).bounds(), options.anchor)
    }
}

fn circle_outline(radius: f32) -> Path {
    Path::new().arc(0.0, 0.0, radius.abs(), 0.0, TAU).close()
}

impl Entity for Circle {
    fn kind(&self) -> &'static str {
        "circle"
    }

    fn options(&self) -> &EntityOptions {
        &self.options
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn set_options(&mut self, options: EntityOptions) {
        self.metrics = Self::measure_circle(self.radius, &options);
        self.options = options;
    }

    fn measure(&self, options: &EntityOptions) -> Metrics {
        Self::measure_circle(self.radius, options)
    }

    fn render(&self, ctx: &mut dyn CanvasContext, options: &EntityOptions, metrics: &Metrics) {
        ctx.save();
        apply_transform(ctx, options, metrics);
        ctx.set_global_alpha(options.alpha());

        ctx.begin_path();
        ctx.arc(0.0, 0.0, self.radius.abs(), 0.0, TAU, false);
        ctx.close_path();
        paint(ctx, options);

        ctx.restore();
    }
}
