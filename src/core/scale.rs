use serde::{Deserialize, Serialize};

/// Smallest domain span or pixel extent a transform is built from.
pub const MIN_EXTENT: f64 = 1e-9;

/// Smallest value extent relative to the magnitude of the values it spans.
pub const RELATIVE_MIN_EXTENT: f64 = 1e-6;

/// Affine map `screen = value * scale + offset` for one pane axis.
///
/// Constructors floor degenerate spans and drawable sizes so `scale` is always
/// finite and non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTransform {
    pub scale: f64,
    pub offset: f64,
}

impl Default for AxisTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: 0.0,
        }
    }
}

impl AxisTransform {
    /// Horizontal fit: `[domain_min, domain_max]` spans `drawable` minus
    /// `padding` on both sides.
    #[must_use]
    pub fn fit_horizontal(drawable: f64, padding: f64, domain_min: f64, domain_max: f64) -> Self {
        let span = floor_extent(domain_max - domain_min);
        let usable = floor_pixels(drawable - padding * 2.0);
        let scale = usable / span;
        let domain_min = if domain_min.is_finite() { domain_min } else { 0.0 };
        Self {
            scale,
            offset: -domain_min * scale + padding,
        }
    }

    /// Vertical fit with the value axis growing upwards: `min` lands on
    /// `bottom` and `min + extent` lands `height` pixels above it.
    #[must_use]
    pub fn fit_vertical(bottom: f64, height: f64, min: f64, extent: f64) -> Self {
        let min = if min.is_finite() { min } else { 0.0 };
        let scale = -floor_pixels(height) / floor_value_extent(extent, min);
        Self {
            scale,
            offset: bottom - min * scale,
        }
    }

    #[must_use]
    pub fn to_screen(self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    #[must_use]
    pub fn to_domain(self, screen: f64) -> f64 {
        (screen - self.offset) / self.scale
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.scale.is_finite() && self.offset.is_finite() && self.scale != 0.0
    }
}

/// Clamps a value span to at least `MIN_EXTENT`.
#[must_use]
pub fn floor_extent(span: f64) -> f64 {
    if span.is_finite() && span > MIN_EXTENT {
        span
    } else {
        MIN_EXTENT
    }
}

/// Clamps a value extent to `RELATIVE_MIN_EXTENT` of `max(|reference|, 1)`.
///
/// An absolute floor would blow the scale up for flat series far from zero,
/// and `to_screen` would then lose every digit to cancellation.
#[must_use]
pub fn floor_value_extent(extent: f64, reference: f64) -> f64 {
    let magnitude = if reference.is_finite() {
        reference.abs().max(1.0)
    } else {
        1.0
    };
    let floor = magnitude * RELATIVE_MIN_EXTENT;
    if extent.is_finite() && extent > floor {
        extent
    } else {
        floor
    }
}

fn floor_pixels(pixels: f64) -> f64 {
    if pixels.is_finite() && pixels >= 1.0 {
        pixels
    } else {
        1.0
    }
}
