//! Color tokens and ramps for choropleth classes
//!
//! A ramp is a fixed ordered sequence of colors, one per class,
//! assigned by position. Ramps are static configuration, not derived
//! data; the default demand ramp is a sequential yellow-to-red scale.

use serde::{Deserialize, Serialize};

/// An RGB color token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a hex string (e.g., "#FFEDA0" or "FFEDA0")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::rgb(r, g, b))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// White, used for polygon outlines
pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
};

/// An ordered sequence of color tokens, one per class
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorRamp {
    /// Name of the ramp
    pub name: String,
    /// Colors in class order (lowest class first)
    colors: Vec<Color>,
}

impl ColorRamp {
    /// Create a ramp from a list of colors
    pub fn from_colors(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Create a ramp from hex tokens; `None` if any token is malformed
    pub fn from_hex_tokens(name: impl Into<String>, tokens: &[&str]) -> Option<Self> {
        let colors = tokens
            .iter()
            .map(|t| Color::from_hex(t))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::from_colors(name, colors))
    }

    /// Color for a class index, `None` when the ramp is too short
    pub fn color(&self, class: usize) -> Option<Color> {
        self.colors.get(class).copied()
    }

    /// Number of colors in the ramp
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the ramp has no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// The default demand ramp: 7 sequential yellow-to-red tokens
pub fn demand_ramp() -> ColorRamp {
    ColorRamp::from_hex_tokens(
        "demand",
        &[
            "#FFEDA0", "#FED976", "#FEB24C", "#FD8D3C", "#FC4E2A", "#E31A1C", "#BD0026",
        ],
    )
    .expect("built-in ramp tokens are valid hex")
}
