use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors shared by both panes; series colors come from the dataset.
///
/// Serialized colors are `#rrggbb` / `#rrggbbaa` strings so hosts can keep
/// themes next to their stylesheet values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    /// Horizontal grid rows.
    pub grid_line: Color,
    /// Baseline under the detail plot.
    pub zero_line: Color,
    /// Vertical crosshair at the selected sample.
    pub crosshair_line: Color,
    /// Fill of the selection markers.
    pub marker_fill: Color,
    /// Axis label text.
    pub text: Color,
    /// Overview area outside the selection window.
    pub mask: Color,
    pub mask_alpha: f64,
    /// Selection window handles and borders.
    pub handle: Color,
    pub handle_alpha: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl ChartTheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            grid_line: Color::rgb(0.949, 0.953, 0.957),
            zero_line: Color::rgb(0.882, 0.890, 0.898),
            crosshair_line: Color::rgb(0.882, 0.890, 0.898),
            marker_fill: Color::rgb(1.0, 1.0, 1.0),
            text: Color::rgb(0.588, 0.635, 0.667),
            mask: Color::rgb(0.949, 0.961, 0.973),
            mask_alpha: 0.8,
            handle: Color::rgb(0.200, 0.400, 0.600),
            handle_alpha: 0.16,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            grid_line: Color::rgb(0.176, 0.220, 0.271),
            zero_line: Color::rgb(0.243, 0.290, 0.345),
            crosshair_line: Color::rgb(0.243, 0.290, 0.345),
            marker_fill: Color::rgb(0.141, 0.184, 0.239),
            text: Color::rgb(0.329, 0.404, 0.467),
            mask: Color::rgb(0.122, 0.165, 0.220),
            mask_alpha: 0.6,
            handle: Color::rgb(0.698, 0.788, 0.878),
            handle_alpha: 0.16,
        }
    }

    /// Overview mask color with its alpha applied.
    #[must_use]
    pub fn mask_fill(self) -> Color {
        self.mask.faded(self.mask_alpha)
    }

    #[must_use]
    pub fn handle_fill(self) -> Color {
        self.handle.faded(self.handle_alpha)
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.grid_line.validate()?;
        self.zero_line.validate()?;
        self.crosshair_line.validate()?;
        self.marker_fill.validate()?;
        self.text.validate()?;
        self.mask.validate()?;
        self.handle.validate()?;
        for (name, alpha) in [("mask_alpha", self.mask_alpha), ("handle_alpha", self.handle_alpha)] {
            if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be within [0, 1]"
                )));
            }
        }
        Ok(self)
    }
}
