//! Colors and CSS color-string parsing
//!
//! Fill and stroke styles arrive as CSS strings (`"#000"`, `"rgba(0, 0, 0, 0.5)"`,
//! `"red"`). They are parsed once into a [`Color`] and serialize back to hex.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// RGBA color, components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    fn channel(v: f32) -> u8 {
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Hex form, `#rrggbb` when opaque and `#rrggbbaa` otherwise
    pub fn to_css(&self) -> String {
        let (r, g, b) = (
            Self::channel(self.r),
            Self::channel(self.g),
            Self::channel(self.b),
        );
        if self.a >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{:02x}", Self::channel(self.a))
        }
    }

    /// Parse a CSS color string
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let s = input.trim();
        let invalid = || CoreError::InvalidColor(input.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(args).ok_or_else(invalid);
        }

        named(&lower).ok_or_else(invalid)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl TryFrom<&str> for Color {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::parse(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
        4 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn parse_functional(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let component = |s: &str| s.parse::<f32>().ok().map(|v| v.clamp(0.0, 255.0) / 255.0);

    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(component(r)?, component(g)?, component(b)?)),
        [r, g, b, a] => Some(Color::rgba(
            component(r)?,
            component(g)?,
            component(b)?,
            a.parse::<f32>().ok()?.clamp(0.0, 1.0),
        )),
        _ => None,
    }
}

fn named(name: &str) -> Option<Color> {
    let hex = match name {
        "black" => 0x000000,
        "white" => 0xFFFFFF,
        "red" => 0xFF0000,
        "green" => 0x008000,
        "lime" => 0x00FF00,
        "blue" => 0x0000FF,
        "yellow" => 0xFFFF00,
        "cyan" | "aqua" => 0x00FFFF,
        "magenta" | "fuchsia" => 0xFF00FF,
        "gray" | "grey" => 0x808080,
        "orange" => 0xFFA500,
        "purple" => 0x800080,
        "transparent" => return Some(Color::TRANSPARENT),
        _ => return None,
    };
    Some(Color::from_hex(hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hex() {
        assert_eq!(Color::parse("#000").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        let c = Color::parse("#f008").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.a - 136.0 / 255.0).abs() < 0.001);
    }

    #[test]
    fn test_long_hex() {
        let c = Color::parse("#FF5500").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.g - 85.0 / 255.0).abs() < 0.001);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.to_css(), "#ff5500");

        let translucent = Color::parse("#00000080").unwrap();
        assert_eq!(translucent.to_css(), "#00000080");
    }

    #[test]
    fn test_functional_and_named() {
        assert_eq!(Color::parse("rgb(255, 0, 0)").unwrap(), Color::RED);
        let c = Color::parse("rgba(0, 0, 255, 0.5)").unwrap();
        assert_eq!(c, Color::BLUE.with_alpha(0.5));
        assert_eq!(Color::parse(" Blue ").unwrap(), Color::BLUE);
        assert_eq!(Color::parse("transparent").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn test_invalid_colors() {
        for bad in ["", "#12", "#ggg", "rgb(1,2)", "chartreuse-ish", "#ééé"] {
            assert!(
                matches!(Color::parse(bad), Err(CoreError::InvalidColor(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_serde_as_string() {
        let c: Color = serde_json::from_str("\"#00f\"").unwrap();
        assert_eq!(c, Color::BLUE);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#0000ff\"");
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
