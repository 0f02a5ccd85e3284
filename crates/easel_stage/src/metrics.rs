//! Derived entity geometry

use easel_core::{Point, Rect, Size};

use crate::options::Anchor;

/// Geometry computed from an option set
///
/// Metrics are never edited directly. Entities rebuild them whenever their
/// options change, and per-draw overrides get a fresh, unsaved copy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Metrics {
    /// Bounds of the outline in local (untransformed) coordinates
    pub bounds: Rect,
    /// Local point that lands on the entity's position
    pub anchor_point: Point,
}

impl Metrics {
    pub fn new(bounds: Rect, anchor: Anchor) -> Self {
        let (fx, fy) = anchor.fraction();
        Self {
            bounds,
            anchor_point: Point::new(
                bounds.x() + bounds.width() * fx,
                bounds.y() + bounds.height() * fy,
            ),
        }
    }

    pub fn size(&self) -> Size {
        self.bounds.size
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_points() {
        let bounds = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert_eq!(
            Metrics::new(bounds, Anchor::TopLeft).anchor_point,
            Point::new(10.0, 20.0)
        );
        assert_eq!(
            Metrics::new(bounds, Anchor::Center).anchor_point,
            Point::new(60.0, 45.0)
        );
        assert_eq!(
            Metrics::new(bounds, Anchor::BottomRight).anchor_point,
            Point::new(110.0, 70.0)
        );
        assert_eq!(
            Metrics::new(bounds, Anchor::Top).anchor_point,
            Point::new(60.0, 20.0)
        );
        assert_eq!(Metrics::new(bounds, Anchor::Left).size(), Size::new(100.0, 50.0));
    }
}
