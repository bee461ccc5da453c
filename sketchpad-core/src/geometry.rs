//! Axis-aligned geometry and fill colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CoreError, CoreResult};

/// An axis-aligned rectangle in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of the left edge.
    pub x: f32,
    /// Y position of the top edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point lies strictly inside this rectangle.
    ///
    /// Points on an edge are outside.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.x < x && x < self.x + self.width && self.y < y && y < self.y + self.height
    }

    /// Center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// An opaque RGB fill color.
///
/// Parsed from `#RRGGBB` or `#RGB`, displayed as uppercase `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure red.
    pub const RED: Self = Self::rgb(0xFF, 0x00, 0x00);
    /// Pure green.
    pub const GREEN: Self = Self::rgb(0x00, 0xFF, 0x00);
    /// Pure blue, the default highlight stroke.
    pub const BLUE: Self = Self::rgb(0x00, 0x00, 0xFF);

    /// Create a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draw a uniformly random 24-bit color.
    #[must_use]
    pub fn random() -> Self {
        let bytes = Uuid::new_v4().into_bytes();
        Self::rgb(bytes[0], bytes[1], bytes[2])
    }

    /// Channels as an RGBA array with full opacity.
    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xFF]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 0x11);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_strict() {
        let rect = Rect::new(200.0, 50.0, 100.0, 100.0);
        assert!(rect.contains(250.0, 100.0));
        assert!(!rect.contains(200.0, 100.0));
        assert!(!rect.contains(300.0, 100.0));
        assert!(!rect.contains(250.0, 50.0));
        assert!(!rect.contains(250.0, 150.0));
    }

    #[test]
    fn test_zero_size_contains_nothing() {
        let rect = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert!(!rect.contains(10.0, 10.0));
    }

    #[test]
    fn test_center() {
        let rect = Rect::new(200.0, 50.0, 100.0, 100.0);
        assert_eq!(rect.center(), (250.0, 100.0));
    }

    #[test]
    fn test_color_parse_and_display() {
        let red: Color = "#FF0000".parse().expect("valid color");
        assert_eq!(red, Color::RED);
        assert_eq!(red.to_string(), "#FF0000");

        let green: Color = "#00ff00".parse().expect("valid color");
        assert_eq!(green.to_string(), "#00FF00");

        let short: Color = "#0f0".parse().expect("valid short color");
        assert_eq!(short, Color::GREEN);
    }

    #[test]
    fn test_color_parse_rejects_garbage() {
        for bad in ["FF0000", "#FF00", "#GG0000", "blue", "", "#", "#ÿÿÿ"] {
            assert!(
                matches!(bad.parse::<Color>(), Err(CoreError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_random_color_is_six_digits() {
        for _ in 0..32 {
            let text = Color::random().to_string();
            assert_eq!(text.len(), 7);
            assert_eq!(text.parse::<Color>().expect("round trip").to_string(), text);
        }
    }

    #[test]
    fn test_color_serde_as_string() {
        let json = serde_json::to_string(&Color::BLUE).expect("serialize");
        assert_eq!(json, "\"#0000FF\"");
        let back: Color = serde_json::from_str("\"#0000ff\"").expect("deserialize");
        assert_eq!(back, Color::BLUE);
    }
}
