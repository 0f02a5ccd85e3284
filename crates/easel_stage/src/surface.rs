//! Drawing surfaces
//!
//! A [`Surface`] describes the host element a stage draws into: its name, what
//! kind of element it is, the `width`/`height` attributes it declares and the
//! size it is rendered at. Only canvas surfaces hand out a 2D context.

use std::fmt;

use easel_core::{RecordingContext, Size};

use crate::error::{Result, StageError};

/// Width of a canvas created without attributes
pub const DEFAULT_CANVAS_WIDTH: u32 = 300;
/// Height of a canvas created without attributes
pub const DEFAULT_CANVAS_HEIGHT: u32 = 150;

/// Kind of host element behind a surface
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    Canvas,
    /// Any other element, by tag name
    Element(String),
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceKind::Canvas => f.write_str("canvas"),
            SurfaceKind::Element(tag) => f.write_str(tag),
        }
    }
}

/// Handle to a drawing surface
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    name: String,
    kind: SurfaceKind,
    width_attr: Option<u32>,
    height_attr: Option<u32>,
    client_width: u32,
    client_height: u32,
}

impl Surface {
    /// A fresh canvas with no size attributes, rendered at the canvas default
    pub fn canvas(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SurfaceKind::Canvas,
            width_attr: None,
            height_attr: None,
            client_width: DEFAULT_CANVAS_WIDTH,
            client_height: DEFAULT_CANVAS_HEIGHT,
        }
    }

    /// A non-canvas element; it has no 2D context
    pub fn element(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            kind: SurfaceKind::Element(tag.into()),
            ..Self::canvas(name)
        }
    }

    /// Set the declared `width`/`height` attributes
    pub fn with_attributes(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.width_attr = width;
        self.height_attr = height;
        self
    }

    /// Set the rendered (client) size
    pub fn with_client_size(mut self, width: u32, height: u32) -> Self {
        self.client_width = width;
        self.client_height = height;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &SurfaceKind {
        &self.kind
    }

    pub fn is_canvas(&self) -> bool {
        self.kind == SurfaceKind::Canvas
    }

    pub fn width_attribute(&self) -> Option<u32> {
        self.width_attr
    }

    pub fn height_attribute(&self) -> Option<u32> {
        self.height_attr
    }

    pub fn client_size(&self) -> (u32, u32) {
        (self.client_width, self.client_height)
    }

    /// Resolve the drawing size: explicit value, then attribute, then client size
    pub fn resolve_size(&self, width: Option<u32>, height: Option<u32>) -> (u32, u32) {
        (
            width.or(self.width_attr).unwrap_or(self.client_width),
            height.or(self.height_attr).unwrap_or(self.client_height),
        )
    }

    /// Write the size attributes, as a canvas does when resized
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width_attr = Some(width);
        self.height_attr = Some(height);
    }

    /// Obtain the 2D context of a canvas surface
    pub fn context_2d<C: SurfaceContext>(&self) -> Result<C> {
        if !self.is_canvas() {
            return Err(StageError::NotACanvas {
                name: self.name.clone(),
                kind: self.kind.to_string(),
            });
        }
        let (width, height) = self.resolve_size(None, None);
        Ok(C::attach(Size::new(width as f32, height as f32)))
    }
}

impl From<&str> for Surface {
    fn from(name: &str) -> Self {
        Surface::canvas(name)
    }
}

impl From<String> for Surface {
    fn from(name: String) -> Self {
        Surface::canvas(name)
    }
}

/// A canvas context that can be attached to a canvas surface
pub trait SurfaceContext: easel_core::CanvasContext + Sized {
    fn attach(size: Size) -> Self;
}

impl SurfaceContext for RecordingContext {
    fn attach(size: Size) -> Self {
        RecordingContext::new(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_precedence() {
        let surface = Surface::canvas("main")
            .with_attributes(Some(640), None)
            .with_client_size(320, 240);

        // explicit > attribute > client size
        assert_eq!(surface.resolve_size(Some(100), Some(50)), (100, 50));
        assert_eq!(surface.resolve_size(None, None), (640, 240));
        assert_eq!(surface.resolve_size(None, Some(10)), (640, 10));
    }

    #[test]
    fn test_named_canvas_defaults() {
        let surface: Surface = "stage".into();
        assert!(surface.is_canvas());
        assert_eq!(surface.name(), "stage");
        assert_eq!(surface.resolve_size(None, None), (300, 150));
    }

    #[test]
    fn test_context_requires_canvas() {
        let canvas = Surface::canvas("ok").with_attributes(Some(20), Some(10));
        let ctx: RecordingContext = canvas.context_2d().unwrap();
        assert_eq!(ctx.viewport_size(), Size::new(20.0, 10.0));

        let div = Surface::element("box", "div");
        let err = div.context_2d::<RecordingContext>().unwrap_err();
        assert!(matches!(err, StageError::NotACanvas { ref kind, .. } if kind == "div"));
    }
}
