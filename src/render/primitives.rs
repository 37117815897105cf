use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as `#rrggbb` (or `#rrggbbaa` when translucent) so theme and
/// dataset colors round-trip through JSON in the same notation hosts use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().strip_prefix('#').unwrap_or(input.trim());
        let channel = |pair: &str| -> ChartResult<f64> {
            u8::from_str_radix(pair, 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| ChartError::InvalidData(format!("invalid hex color `{input}`")))
        };
        if !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "invalid hex color `{input}`"
            )));
        }
        match digits.len() {
            3 => {
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                Self::from_hex(&expanded)
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            8 => Ok(Self::rgba(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                channel(&digits[6..8])?,
            )),
            _ => Err(ChartError::InvalidData(format!(
                "invalid hex color `{input}`"
            ))),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.alpha >= 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}",
                byte(self.red),
                byte(self.green),
                byte(self.blue)
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.red),
                byte(self.green),
                byte(self.blue),
                byte(self.alpha)
            )
        }
    }

    /// Multiplies alpha by `factor` (clamped to `[0, 1]`).
    #[must_use]
    pub fn faded(self, factor: f64) -> Self {
        Self {
            alpha: (self.alpha * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// One straight segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke(self.stroke_width)?;
        self.color.validate()
    }
}

/// Connected path through `points`, stroked with bevel joins and butt caps.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub points: Vec<(f64, f64)>,
    pub stroke_width: f64,
    pub color: Color,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>, stroke_width: f64, color: Color) -> Self {
        Self {
            points,
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 2 {
            return Err(ChartError::InvalidData(
                "polyline needs at least 2 points".to_owned(),
            ));
        }
        if self
            .points
            .iter()
            .any(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(ChartError::InvalidData(
                "polyline coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke(self.stroke_width)?;
        self.color.validate()
    }
}

/// Filled axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ChartError::InvalidData(
                "rect size must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Filled and stroked circle, used for selection markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill_color: Color,
    pub stroke_width: f64,
    pub stroke_color: Color,
}

impl CirclePrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        validate_stroke(self.stroke_width)?;
        self.fill_color.validate()?;
        self.stroke_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// One label in pixel space; `y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

fn validate_stroke(stroke_width: f64) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Color, PolylinePrimitive};

    #[test]
    fn hex_colors_parse_in_all_notations() {
        assert_eq!(
            Color::from_hex("#ff0000").expect("6 digits"),
            Color::rgb(1.0, 0.0, 0.0)
        );
        assert_eq!(
            Color::from_hex("#f00").expect("3 digits"),
            Color::rgb(1.0, 0.0, 0.0)
        );
        let translucent = Color::from_hex("#00000080").expect("8 digits");
        assert!((translucent.alpha - 128.0 / 255.0).abs() < 1e-12);
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn hex_serialization_round_trips_through_json() {
        let color = Color::from_hex("#3dc23f").expect("hex");
        let json = serde_json::to_string(&color).expect("serialize");
        assert_eq!(json, "\"#3dc23f\"");
        let back: Color = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, color);
    }

    #[test]
    fn faded_scales_alpha() {
        let color = Color::rgba(0.1, 0.2, 0.3, 0.5).faded(0.5);
        assert_eq!(color.alpha, 0.25);
    }

    #[test]
    fn polyline_needs_two_finite_points() {
        let color = Color::rgb(0.0, 0.0, 0.0);
        assert!(PolylinePrimitive::new(vec![(0.0, 0.0)], 1.0, color).validate().is_err());
        assert!(
            PolylinePrimitive::new(vec![(0.0, 0.0), (f64::NAN, 1.0)], 1.0, color)
                .validate()
                .is_err()
        );
        assert!(
            PolylinePrimitive::new(vec![(0.0, 0.0), (1.0, 1.0)], 1.0, color)
                .validate()
                .is_ok()
        );
    }
}
