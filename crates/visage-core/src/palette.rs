//! Series colours
//!
//! Attributes are coloured by position, cycling through a short palette.
//! The same index colours an attribute in every view.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Default series colours, in assignment order
pub const DEFAULT_COLORS: [&str; 5] = ["#8884d8", "#82ca9d", "#ff7300", "#ff0000", "#0088fe"];

/// An opaque RGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from hex string (e.g., "#FF5733" or "FF5733")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::rgb(r, g, b))
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s).ok_or_else(|| ConfigError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Non-empty cyclic list of colours
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build from colours; an empty list is rejected
    pub fn new(colors: Vec<Color>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Parse a list of hex strings
    pub fn from_hex_list<S: AsRef<str>>(hex: &[S]) -> Result<Self, ConfigError> {
        let colors = hex
            .iter()
            .map(|h| h.as_ref().parse())
            .collect::<Result<Vec<Color>, _>>()?;
        Self::new(colors)
    }

    /// Colour for the attribute at `index`, wrapping around
    pub fn color_for(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::rgb(0x88, 0x84, 0xd8),
                Color::rgb(0x82, 0xca, 0x9d),
                Color::rgb(0xff, 0x73, 0x00),
                Color::rgb(0xff, 0x00, 0x00),
                Color::rgb(0x00, 0x88, 0xfe),
            ],
        }
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let colors = Vec::<Color>::deserialize(deserializer)?;
        Palette::new(colors).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let color = Color::from_hex("#FF7300").unwrap();
        assert_eq!(color, Color::rgb(255, 115, 0));
        assert_eq!(color.to_hex(), "#ff7300");
        assert_eq!(Color::from_hex("0088fe"), Some(Color::rgb(0, 136, 254)));
    }

    #[test]
    fn test_color_invalid() {
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#ffé000"), None);
        assert!(matches!(
            "red".parse::<Color>(),
            Err(ConfigError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_default_matches_hex_list() {
        let palette = Palette::default();
        assert_eq!(palette, Palette::from_hex_list(&DEFAULT_COLORS).unwrap());
        assert_eq!(palette.len(), 5);
    }

    #[test]
    fn test_color_for_wraps() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(0).to_hex(), "#8884d8");
        assert_eq!(palette.color_for(4).to_hex(), "#0088fe");
        assert_eq!(palette.color_for(5), palette.color_for(0));
        assert_eq!(palette.color_for(12), palette.color_for(2));
    }

    #[test]
    fn test_empty_palette_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Palette::from_hex_list(&empty),
            Err(ConfigError::EmptyPalette)
        ));
    }

    #[test]
    fn test_serde_as_hex_strings() {
        let json = serde_json::to_string(&Palette::default()).unwrap();
        assert!(json.starts_with("[\"#8884d8\""));

        let parsed: Palette = serde_json::from_str("[\"#000000\", \"#FFFFFF\"]").unwrap();
        assert_eq!(parsed.color_for(1), Color::rgb(255, 255, 255));
        assert!(serde_json::from_str::<Palette>("[]").is_err());
        assert!(serde_json::from_str::<Palette>("[\"blue\"]").is_err());
    }
}
