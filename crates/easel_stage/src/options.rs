//! Entity options
//!
//! Every entity carries a complete [`EntityOptions`] set. Callers never build
//! one field by field; they describe what differs from the class defaults with
//! [`OptionOverrides`] and the two are merged shallowly, caller keys winning.
//! Per-draw overrides use the same merge but are never stored.
//!
//! Path geometry is a list of [`Segment`]s. Raw numeric tuples are accepted
//! and converted once, by arity: two values make a line, five an arc, six a
//! cubic Bézier. Tuples of any other length are dropped.

use std::fmt;
use std::str::FromStr;

use easel_core::{Color, LineCap, LineJoin, Point};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StageError;

// ─────────────────────────────────────────────────────────────────────────────
// Anchor
// ─────────────────────────────────────────────────────────────────────────────

/// Named reference point of an entity's bounds that is placed at its position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::Top,
        Anchor::TopRight,
        Anchor::Left,
        Anchor::Center,
        Anchor::Right,
        Anchor::BottomLeft,
        Anchor::Bottom,
        Anchor::BottomRight,
    ];

    /// Horizontal and vertical fraction of the bounds, each 0, 0.5 or 1
    pub fn fraction(&self) -> (f32, f32) {
        match self {
            Anchor::TopLeft => (0.0, 0.0),
            Anchor::Top => (0.5, 0.0),
            Anchor::TopRight => (1.0, 0.0),
            Anchor::Left => (0.0, 0.5),
            Anchor::Center => (0.5, 0.5),
            Anchor::Right => (1.0, 0.5),
            Anchor::BottomLeft => (0.0, 1.0),
            Anchor::Bottom => (0.5, 1.0),
            Anchor::BottomRight => (1.0, 1.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::Top => "top",
            Anchor::TopRight => "top-right",
            Anchor::Left => "left",
            Anchor::Center => "center",
            Anchor::Right => "right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::Bottom => "bottom",
            Anchor::BottomRight => "bottom-right",
        }
    }
}

impl FromStr for Anchor {
    type Err = StageError;

    /// Accepts `top-left`, `top left`, `top_left` and `topLeft` spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "topleft" | "lefttop" => Ok(Anchor::TopLeft),
            "top" | "topcenter" => Ok(Anchor::Top),
            "topright" | "righttop" => Ok(Anchor::TopRight),
            "left" | "centerleft" => Ok(Anchor::Left),
            "center" | "middle" => Ok(Anchor::Center),
            "right" | "centerright" => Ok(Anchor::Right),
            "bottomleft" | "leftbottom" => Ok(Anchor::BottomLeft),
            "bottom" | "bottomcenter" => Ok(Anchor::Bottom),
            "bottomright" | "rightbottom" => Ok(Anchor::BottomRight),
            _ => Err(StageError::UnknownAnchor(s.to_string())),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Segments
// ─────────────────────────────────────────────────────────────────────────────

/// One path primitive of an entity outline
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Straight line to a point
    Line(Point),
    /// Clockwise circular arc, angles in radians
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    /// Cubic Bézier curve
    Curve {
        control1: Point,
        control2: Point,
        end: Point,
    },
}

impl Segment {
    pub fn line(x: f32, y: f32) -> Self {
        Segment::Line(Point::new(x, y))
    }

    pub fn arc(x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) -> Self {
        Segment::Arc {
            center: Point::new(x, y),
            radius,
            start_angle,
            end_angle,
        }
    }

    pub fn curve(cp1x: f32, cp1y: f32, cp2x: f32, cp2y: f32, x: f32, y: f32) -> Self {
        Segment::Curve {
            control1: Point::new(cp1x, cp1y),
            control2: Point::new(cp2x, cp2y),
            end: Point::new(x, y),
        }
    }

    /// Build a segment from a raw tuple; `None` for unsupported arities
    pub fn from_values(values: &[f32]) -> Option<Self> {
        match *values {
            [x, y] => Some(Segment::line(x, y)),
            [x, y, radius, start, end] => Some(Segment::arc(x, y, radius, start, end)),
            [cp1x, cp1y, cp2x, cp2y, x, y] => Some(Segment::curve(cp1x, cp1y, cp2x, cp2y, x, y)),
            _ => None,
        }
    }

    /// The raw tuple form
    pub fn to_values(&self) -> Vec<f32> {
        match *self {
            Segment::Line(p) => vec![p.x, p.y],
            Segment::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => vec![center.x, center.y, radius, start_angle, end_angle],
            Segment::Curve {
                control1,
                control2,
                end,
            } => vec![control1.x, control1.y, control2.x, control2.y, end.x, end.y],
        }
    }

    /// Where the pen rests after this segment
    pub fn end_point(&self) -> Point {
        match *self {
            Segment::Line(p) => p,
            Segment::Arc {
                center,
                radius,
                end_angle,
                ..
            } => Point::new(
                center.x + radius * end_angle.cos(),
                center.y + radius * end_angle.sin(),
            ),
            Segment::Curve { end, .. } => end,
        }
    }
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_values().serialize(serializer)
    }
}

/// Convert raw tuples into segments, skipping unsupported arities
pub fn segments_from_tuples<I, T>(tuples: I) -> Vec<Segment>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[f32]>,
{
    tuples
        .into_iter()
        .enumerate()
        .filter_map(|(index, tuple)| {
            let values = tuple.as_ref();
            let segment = Segment::from_values(values);
            if segment.is_none() {
                tracing::debug!(
                    index,
                    arity = values.len(),
                    "skipping point tuple with unsupported arity"
                );
            }
            segment
        })
        .collect()
}

fn deserialize_segments<'de, D>(deserializer: D) -> Result<Vec<Segment>, D::Error>
where
    D: Deserializer<'de>,
{
    let tuples = Vec::<Vec<f32>>::deserialize(deserializer)?;
    Ok(segments_from_tuples(tuples))
}

fn deserialize_some_segments<'de, D>(deserializer: D) -> Result<Option<Vec<Segment>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_segments(deserializer).map(Some)
}

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`)
fn explicit<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ─────────────────────────────────────────────────────────────────────────────
// Options
// ─────────────────────────────────────────────────────────────────────────────

/// Complete rendering option set of an entity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityOptions {
    /// Point of the bounds placed at `position`
    pub anchor: Anchor,
    /// Opacity in percent, 0 to 100
    pub opacity: f32,
    pub position: Point,
    /// Rotation in degrees, clockwise
    pub rotation: f32,
    pub scale: f32,
    /// Fill color; `None` disables filling
    #[serde(alias = "fillStyle")]
    pub fill_style: Option<Color>,
    /// Stroke color; `None` keeps the context's current stroke style
    #[serde(alias = "strokeStyle")]
    pub stroke_style: Option<Color>,
    /// Stroke width; strokes are only painted when positive
    #[serde(alias = "lineWidth")]
    pub line_width: f32,
    #[serde(alias = "lineCap")]
    pub line_cap: LineCap,
    #[serde(alias = "lineJoin")]
    pub line_join: LineJoin,
    #[serde(alias = "closePath")]
    pub close_path: bool,
    #[serde(deserialize_with = "deserialize_segments")]
    pub points: Vec<Segment>,
}

impl Default for EntityOptions {
    fn default() -> Self {
        Self {
            anchor: Anchor::TopLeft,
            opacity: 100.0,
            position: Point::ZERO,
            rotation: 0.0,
            scale: 1.0,
            fill_style: Some(Color::BLACK),
            stroke_style: None,
            line_width: 0.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            close_path: true,
            points: Vec::new(),
        }
    }
}

impl EntityOptions {
    /// Shallow merge: every key set in `overrides` replaces ours
    pub fn merged(&self, overrides: &OptionOverrides) -> EntityOptions {
        let mut merged = self.clone();
        merged.apply(overrides);
        merged
    }

    /// In-place form of [`merged`](Self::merged)
    pub fn apply(&mut self, overrides: &OptionOverrides) {
        let o = overrides;
        if let Some(anchor) = o.anchor {
            self.anchor = anchor;
        }
        if let Some(opacity) = o.opacity {
            self.opacity = opacity;
        }
        if let Some(position) = o.position {
            self.position = position;
        }
        if let Some(rotation) = o.rotation {
            self.rotation = rotation;
        }
        if let Some(scale) = o.scale {
            self.scale = scale;
        }
        if let Some(fill_style) = o.fill_style {
            self.fill_style = fill_style;
        }
        if let Some(stroke_style) = o.stroke_style {
            self.stroke_style = stroke_style;
        }
        if let Some(line_width) = o.line_width {
            self.line_width = line_width;
        }
        if let Some(line_cap) = o.line_cap {
            self.line_cap = line_cap;
        }
        if let Some(line_join) = o.line_join {
            self.line_join = line_join;
        }
        if let Some(close_path) = o.close_path {
            self.close_path = close_path;
        }
        if let Some(points) = &o.points {
            self.points = points.clone();
        }
    }

    /// Global alpha for the context, opacity clamped to 0..=100
    pub fn alpha(&self) -> f32 {
        if self.opacity.is_nan() {
            return 1.0;
        }
        self.opacity.clamp(0.0, 100.0) / 100.0
    }

    /// Rotation in radians
    pub fn rotation_radians(&self) -> f32 {
        self.rotation.to_radians()
    }
}

/// Partial option set; unset keys leave the base value alone
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OptionOverrides {
    pub anchor: Option<Anchor>,
    pub opacity: Option<f32>,
    pub position: Option<Point>,
    pub rotation: Option<f32>,
    pub scale: Option<f32>,
    #[serde(alias = "fillStyle", deserialize_with = "explicit")]
    pub fill_style: Option<Option<Color>>,
    #[serde(alias = "strokeStyle", deserialize_with = "explicit")]
    pub stroke_style: Option<Option<Color>>,
    #[serde(alias = "lineWidth")]
    pub line_width: Option<f32>,
    #[serde(alias = "lineCap")]
    pub line_cap: Option<LineCap>,
    #[serde(alias = "lineJoin")]
    pub line_join: Option<LineJoin>,
    #[serde(alias = "closePath")]
    pub close_path: Option<bool>,
    #[serde(deserialize_with = "deserialize_some_segments")]
    pub points: Option<Vec<Segment>>,
}

impl OptionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no key is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = Some(Point::new(x, y));
        self
    }

    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn fill_style(mut self, color: Color) -> Self {
        self.fill_style = Some(Some(color));
        self
    }

    /// Disable filling
    pub fn no_fill(mut self) -> Self {
        self.fill_style = Some(None);
        self
    }

    pub fn stroke_style(mut self, color: Color) -> Self {
        self.stroke_style = Some(Some(color));
        self
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn line_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = Some(cap);
        self
    }

    pub fn line_join(mut self, join: LineJoin) -> Self {
        self.line_join = Some(join);
        self
    }

    pub fn close_path(mut self, close: bool) -> Self {
        self.close_path = Some(close);
        self
    }

    pub fn segments(mut self, segments: Vec<Segment>) -> Self {
        self.points = Some(segments);
        self
    }

    /// Set points from raw tuples, dropping unsupported arities
    pub fn points<I, T>(self, tuples: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[f32]>,
    {
        self.segments(segments_from_tuples(tuples))
    }
}
