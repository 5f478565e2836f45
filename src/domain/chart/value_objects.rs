use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - Chart kind understood by the charting library
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Bar")]
    #[strum(serialize = "bar")]
    Bar,
}

impl ChartKind {
    /// Line charts scroll horizontally, bar charts are laid out along y and scroll vertically.
    pub fn scroll_orientation(self) -> Orientation {
        match self {
            ChartKind::Line => Orientation::Horizontal,
            ChartKind::Bar => Orientation::Vertical,
        }
    }

    /// Axis the charting library should index categories on.
    pub fn index_axis(self) -> &'static str {
        match self {
            ChartKind::Line => "x",
            ChartKind::Bar => "y",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ChartKind::Line => ChartKind::Bar,
            ChartKind::Bar => ChartKind::Line,
        }
    }
}

/// Value Object - Scroll axis of the scrollbar overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Orientation {
    #[display(fmt = "horizontal")]
    Horizontal,
    #[display(fmt = "vertical")]
    Vertical,
}

impl Orientation {
    /// Component of a 2D point (or size) that lies along this axis.
    pub fn along(self, x: f64, y: f64) -> f64 {
        match self {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        }
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        let r = (self.r * 255.0).round() as u32;
        let g = (self.g * 255.0).round() as u32;
        let b = (self.b * 255.0).round() as u32;
        (r << 16) | (g << 8) | b
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// CSS color string for canvas fill styles
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:06x}", self.to_hex())
        } else {
            let hex = self.to_hex();
            format!(
                "rgba({}, {}, {}, {})",
                (hex >> 16) & 0xFF,
                (hex >> 8) & 0xFF,
                hex & 0xFF,
                self.a
            )
        }
    }

    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl FromStr for Color {
    type Err = String;

    /// Parses `#rrggbb` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(format!("expected #rrggbb, got {:?}", s));
        }
        u32::from_str_radix(digits, 16)
            .map(Color::from_hex)
            .map_err(|e| format!("invalid color {:?}: {}", s, e))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

/// Value Object - Options handed to the charting library on creation
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub dataset_label: String,
    pub begin_at_zero: bool,
}

impl ChartConfig {
    pub fn new(kind: ChartKind, dataset_label: impl Into<String>) -> Self {
        Self { kind, dataset_label: dataset_label.into(), begin_at_zero: true }
    }

    pub fn index_axis(&self) -> &'static str {
        self.kind.index_axis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_hex_strings() {
        let color: Color = "#ff8000".parse().expect("valid color");
        assert_eq!(color.to_hex(), 0xff8000);
        assert_eq!(color.to_css(), "#ff8000");
        assert!("#fff".parse::<Color>().is_err());
    }

    #[test]
    fn translucent_color_renders_rgba() {
        let color = Color::from_hex(0x102030).with_alpha(0.5);
        assert_eq!(color.to_css(), "rgba(16, 32, 48, 0.5)");
    }
}
