use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Layout constants in CSS pixels.
///
/// The engine works in device pixels; [`LayoutMetrics::scaled`] converts the
/// whole set once per pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub overview_height: f64,
    /// Gap between the detail plot bottom and the overview band; x labels
    /// are drawn inside it.
    pub overview_margin_top: f64,
    /// Half-width of the grab zone around each selection handle.
    pub hit_zone: f64,
    pub handle_width: f64,
    pub handle_border_height: f64,
    pub grid_line_width: f64,
    pub overview_line_width: f64,
    pub detail_line_width: f64,
    pub marker_radius: f64,
    pub marker_stroke_width: f64,
    pub font_size: f64,
    /// Baseline offset of y labels relative to their grid row.
    pub y_label_offset: f64,
    /// Baseline offset of x labels below the detail plot.
    pub x_label_offset: f64,
    /// Nominal width of one date label; drives x label density.
    pub x_label_width: f64,
    /// Nominal height of one y-axis row; drives y label density.
    pub y_label_row_height: f64,
    pub detail_padding_top: f64,
    /// Horizontal inset of both panes.
    pub padding: f64,
    pub tooltip_left_margin: f64,
    pub tooltip_top_margin: f64,
    pub tooltip_touch_top_margin: f64,
    /// Distance from the pointer to the tooltip's reference line.
    pub tooltip_pointer_offset: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            overview_height: 38.0,
            overview_margin_top: 32.0,
            hit_zone: 20.0,
            handle_width: 4.0,
            handle_border_height: 1.0,
            grid_line_width: 1.0,
            overview_line_width: 1.0,
            detail_line_width: 2.0,
            marker_radius: 3.0,
            marker_stroke_width: 4.0,
            font_size: 10.0,
            y_label_offset: -6.0,
            x_label_offset: 16.0,
            x_label_width: 30.0,
            y_label_row_height: 45.0,
            detail_padding_top: 21.0,
            padding: 11.0,
            tooltip_left_margin: -25.0,
            tooltip_top_margin: 8.0,
            tooltip_touch_top_margin: 40.0,
            tooltip_pointer_offset: 39.0,
        }
    }
}

impl LayoutMetrics {
    /// Every metric multiplied by `pixel_ratio`.
    #[must_use]
    pub fn scaled(self, pixel_ratio: f64) -> Self {
        Self {
            overview_height: self.overview_height * pixel_ratio,
            overview_margin_top: self.overview_margin_top * pixel_ratio,
            hit_zone: self.hit_zone * pixel_ratio,
            handle_width: self.handle_width * pixel_ratio,
            handle_border_height: self.handle_border_height * pixel_ratio,
            grid_line_width: self.grid_line_width * pixel_ratio,
            overview_line_width: self.overview_line_width * pixel_ratio,
            detail_line_width: self.detail_line_width * pixel_ratio,
            marker_radius: self.marker_radius * pixel_ratio,
            marker_stroke_width: self.marker_stroke_width * pixel_ratio,
            font_size: self.font_size * pixel_ratio,
            y_label_offset: self.y_label_offset * pixel_ratio,
            x_label_offset: self.x_label_offset * pixel_ratio,
            x_label_width: self.x_label_width * pixel_ratio,
            y_label_row_height: self.y_label_row_height * pixel_ratio,
            detail_padding_top: self.detail_padding_top * pixel_ratio,
            padding: self.padding * pixel_ratio,
            tooltip_left_margin: self.tooltip_left_margin * pixel_ratio,
            tooltip_top_margin: self.tooltip_top_margin * pixel_ratio,
            tooltip_touch_top_margin: self.tooltip_touch_top_margin * pixel_ratio,
            tooltip_pointer_offset: self.tooltip_pointer_offset * pixel_ratio,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        let positive = [
            ("overview_height", self.overview_height),
            ("hit_zone", self.hit_zone),
            ("handle_width", self.handle_width),
            ("handle_border_height", self.handle_border_height),
            ("grid_line_width", self.grid_line_width),
            ("overview_line_width", self.overview_line_width),
            ("detail_line_width", self.detail_line_width),
            ("marker_radius", self.marker_radius),
            ("marker_stroke_width", self.marker_stroke_width),
            ("font_size", self.font_size),
            ("x_label_width", self.x_label_width),
            ("y_label_row_height", self.y_label_row_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "layout `{name}` must be finite and > 0"
                )));
            }
        }
        let non_negative = [
            ("overview_margin_top", self.overview_margin_top),
            ("detail_padding_top", self.detail_padding_top),
            ("padding", self.padding),
            ("tooltip_top_margin", self.tooltip_top_margin),
            ("tooltip_touch_top_margin", self.tooltip_touch_top_margin),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "layout `{name}` must be finite and >= 0"
                )));
            }
        }
        let offsets = [
            ("y_label_offset", self.y_label_offset),
            ("x_label_offset", self.x_label_offset),
            ("tooltip_left_margin", self.tooltip_left_margin),
            ("tooltip_pointer_offset", self.tooltip_pointer_offset),
        ];
        for (name, value) in offsets {
            if !value.is_finite() {
                return Err(ChartError::InvalidConfig(format!(
                    "layout `{name}` must be finite"
                )));
            }
        }
        Ok(self)
    }
}

/// Animation durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTimings {
    /// Vertical rescale and series fade duration.
    pub scale_duration: f64,
    /// Cross-fade duration of x-axis label generations.
    pub x_label_fade: f64,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            scale_duration: 400.0,
            x_label_fade: 200.0,
        }
    }
}

impl AnimationTimings {
    /// Overview fade duration; also the delay before a shown series fades
    /// into the overview.
    #[must_use]
    pub fn overview_fade(self) -> f64 {
        self.scale_duration / 2.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("scale_duration", self.scale_duration),
            ("x_label_fade", self.x_label_fade),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "animation `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    /// Initial surface size in device pixels.
    pub viewport: Viewport,
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f64,
    #[serde(default)]
    pub layout: LayoutMetrics,
    #[serde(default)]
    pub animation: AnimationTimings,
    /// Share of the remaining distance the dragged pointer covers per tick.
    #[serde(default = "default_drag_smoothing")]
    pub drag_smoothing: f64,
    /// Pins the vertical minimum of both panes; `None` takes it from data.
    #[serde(default)]
    pub force_min_y: Option<f64>,
    /// Switches the tooltip to the larger touch top margin.
    #[serde(default)]
    pub touch_device: bool,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            pixel_ratio: default_pixel_ratio(),
            layout: LayoutMetrics::default(),
            animation: AnimationTimings::default(),
            drag_smoothing: default_drag_smoothing(),
            force_min_y: None,
            touch_device: false,
        }
    }

    #[must_use]
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutMetrics) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationTimings) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn with_drag_smoothing(mut self, factor: f64) -> Self {
        self.drag_smoothing = factor;
        self
    }

    /// Pins the vertical minimum of both panes, e.g. `Some(0.0)` to keep
    /// the baseline at zero.
    #[must_use]
    pub fn with_force_min_y(mut self, min: Option<f64>) -> Self {
        self.force_min_y = min;
        self
    }

    #[must_use]
    pub fn with_touch_device(mut self, touch_device: bool) -> Self {
        self.touch_device = touch_device;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "pixel ratio must be finite and > 0".to_owned(),
            ));
        }
        if !self.drag_smoothing.is_finite()
            || self.drag_smoothing <= 0.0
            || self.drag_smoothing > 1.0
        {
            return Err(ChartError::InvalidConfig(
                "drag smoothing must be in (0, 1]".to_owned(),
            ));
        }
        if let Some(min) = self.force_min_y {
            if !min.is_finite() {
                return Err(ChartError::InvalidConfig(
                    "forced vertical minimum must be finite".to_owned(),
                ));
            }
        }
        self.layout.validate()?;
        self.animation.validate()?;
        Ok(self)
    }

    /// Layout metrics in device pixels.
    #[must_use]
    pub fn device_metrics(self) -> LayoutMetrics {
        self.layout.scaled(self.pixel_ratio)
    }

    /// Tooltip distance above (or below) the pointer, in CSS pixels.
    #[must_use]
    pub fn tooltip_top_margin(self) -> f64 {
        if self.touch_device {
            self.layout.tooltip_touch_top_margin
        } else {
            self.layout.tooltip_top_margin
        }
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_pixel_ratio() -> f64 {
    1.0
}

fn default_drag_smoothing() -> f64 {
    0.5
}
