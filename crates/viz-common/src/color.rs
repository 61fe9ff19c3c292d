//! Color parsing and normalization.
//!
//! Annotations accept colors either as a name (`"black"`, `"#1f77b4"`) or as a
//! sequence of 3 or 4 components on the 0-255 scale. Every color is reduced to
//! a canonical [`Rgba`] before it reaches a plotting surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical 4-byte RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba([0, 0, 0, 0]);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba([r, g, b, a])
    }

    pub fn r(&self) -> u8 {
        self.0[0]
    }

    pub fn g(&self) -> u8 {
        self.0[1]
    }

    pub fn b(&self) -> u8 {
        self.0[2]
    }

    pub fn a(&self) -> u8 {
        self.0[3]
    }

    /// Hex form `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// User-facing color value: a name, hex string or 0-255 components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Named color or hex string: "black", "#RRGGBB", "#RRGGBBAA"
    Name(String),

    /// Component sequence on the 0-255 scale: [r, g, b] or [r, g, b, a]
    Components(Vec<i64>),
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Name(name.into())
    }

    /// Normalize into a canonical RGBA value.
    pub fn normalize(&self) -> Result<Rgba, ColorError> {
        match self {
            Color::Name(name) => parse_color_name(name),
            Color::Components(components) => parse_components(components),
        }
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::Components(rgba.0.iter().map(|&c| c as i64).collect())
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Name(name.to_string())
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Color::Components(rgb.iter().map(|&c| c as i64).collect())
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Rgba(rgba).into()
    }
}

fn parse_components(components: &[i64]) -> Result<Rgba, ColorError> {
    if components.len() != 3 && components.len() != 4 {
        return Err(ColorError::InvalidLength(components.len()));
    }

    let mut bytes = [0u8, 0, 0, 255];
    for (slot, &value) in bytes.iter_mut().zip(components) {
        *slot = u8::try_from(value).map_err(|_| ColorError::ComponentOutOfRange(value))?;
    }
    Ok(Rgba(bytes))
}

fn parse_color_name(name: &str) -> Result<Rgba, ColorError> {
    let trimmed = name.trim();
    if trimmed.starts_with('#') {
        return parse_hex_color(trimmed);
    }

    named_color(&trimmed.to_lowercase())
        .ok_or_else(|| ColorError::UnknownName(name.to_string()))
}

fn parse_hex_color(s: &str) -> Result<Rgba, ColorError> {
    let hex = s.trim_start_matches('#');
    let invalid = || ColorError::InvalidHex(s.to_string());

    if !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

    match hex.len() {
        6 => Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 255])),
        8 => Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, channel(6)?])),
        _ => Err(invalid()),
    }
}

fn named_color(name: &str) -> Option<Rgba> {
    let (r, g, b, a) = match name {
        "none" | "transparent" => (0, 0, 0, 0),
        "black" | "k" => (0, 0, 0, 255),
        "white" | "w" => (255, 255, 255, 255),
        "red" | "r" => (255, 0, 0, 255),
        "green" | "g" => (0, 128, 0, 255),
        "lime" => (0, 255, 0, 255),
        "blue" | "b" => (0, 0, 255, 255),
        "yellow" | "y" => (255, 255, 0, 255),
        "cyan" | "aqua" | "c" => (0, 255, 255, 255),
        "magenta" | "fuchsia" | "m" => (255, 0, 255, 255),
        "orange" => (255, 165, 0, 255),
        "purple" => (128, 0, 128, 255),
        "gray" | "grey" => (128, 128, 128, 255),
        "darkgray" | "darkgrey" => (169, 169, 169, 255),
        "lightgray" | "lightgrey" => (211, 211, 211, 255),
        "dimgray" | "dimgrey" => (105, 105, 105, 255),
        "silver" => (192, 192, 192, 255),
        "brown" => (165, 42, 42, 255),
        "maroon" => (128, 0, 0, 255),
        "navy" => (0, 0, 128, 255),
        "teal" => (0, 128, 128, 255),
        "olive" => (128, 128, 0, 255),
        "pink" => (255, 192, 203, 255),
        "gold" => (255, 215, 0, 255),
        "tan" => (210, 180, 140, 255),
        "beige" => (245, 245, 220, 255),
        "khaki" => (240, 230, 140, 255),
        "salmon" => (250, 128, 114, 255),
        "coral" => (255, 127, 80, 255),
        "crimson" => (220, 20, 60, 255),
        "indigo" => (75, 0, 130, 255),
        "violet" => (238, 130, 238, 255),
        "turquoise" => (64, 224, 208, 255),
        "darkblue" => (0, 0, 139, 255),
        "lightblue" => (173, 216, 230, 255),
        "skyblue" => (135, 206, 235, 255),
        "steelblue" => (70, 130, 180, 255),
        "royalblue" => (65, 105, 225, 255),
        "darkgreen" => (0, 100, 0, 255),
        "forestgreen" => (34, 139, 34, 255),
        "darkred" => (139, 0, 0, 255),
        "sienna" => (160, 82, 45, 255),
        "snow" => (255, 250, 250, 255),
        "whitesmoke" => (245, 245, 245, 255),
        "aliceblue" => (240, 248, 255, 255),
        "lightcyan" => (224, 255, 255, 255),
        _ => return None,
    };
    Some(Rgba([r, g, b, a]))
}

/// Color parsing errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("Unknown color name: '{0}'")]
    UnknownName(String),

    #[error("Invalid hex color: '{0}'. Expected '#RRGGBB' or '#RRGGBBAA'")]
    InvalidHex(String),

    #[error("Color sequence must have 3 or 4 components, got {0}")]
    InvalidLength(usize),

    #[error("Color component {0} is outside the 0-255 range")]
    ComponentOutOfRange(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::named("black").normalize(), Ok(Rgba::new(0, 0, 0, 255)));
        assert_eq!(Color::named("Blue").normalize(), Ok(Rgba::new(0, 0, 255, 255)));
        assert_eq!(Color::named(" none ").normalize(), Ok(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(
            Color::named("#FF5500").normalize(),
            Ok(Rgba::new(255, 85, 0, 255))
        );
        assert_eq!(
            Color::named("#ff550080").normalize(),
            Ok(Rgba::new(255, 85, 0, 128))
        );
        assert!(matches!(
            Color::named("#GGGGGG").normalize(),
            Err(ColorError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::named("#FFF").normalize(),
            Err(ColorError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_component_colors() {
        assert_eq!(
            Color::Components(vec![100, 150, 200]).normalize(),
            Ok(Rgba::new(100, 150, 200, 255))
        );
        assert_eq!(
            Color::Components(vec![1, 2, 3, 4]).normalize(),
            Ok(Rgba::new(1, 2, 3, 4))
        );
        assert_eq!(
            Color::Components(vec![1, 2]).normalize(),
            Err(ColorError::InvalidLength(2))
        );
        assert_eq!(
            Color::Components(vec![0, 256, 0]).normalize(),
            Err(ColorError::ComponentOutOfRange(256))
        );
        assert_eq!(
            Color::Components(vec![-1, 0, 0]).normalize(),
            Err(ColorError::ComponentOutOfRange(-1))
        );
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            Color::named("glacier").normalize(),
            Err(ColorError::UnknownName("glacier".to_string()))
        );
    }

    #[test]
    fn test_rgba_hex() {
        assert_eq!(Rgba::new(255, 0, 16, 255).to_hex(), "#ff0010ff");
    }
}
