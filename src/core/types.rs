use serde::{Deserialize, Serialize};

/// Drawing surface size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Converts a host-reported CSS size into device pixels.
    ///
    /// Negative or non-finite inputs collapse to zero, which the tick loop
    /// treats as "nothing to draw".
    #[must_use]
    pub fn from_css(width: f64, height: f64, pixel_ratio: f64) -> Self {
        let to_device = |value: f64| -> u32 {
            let scaled = value * pixel_ratio;
            if scaled.is_finite() && scaled > 0.0 {
                scaled.round().min(f64::from(u32::MAX)) as u32
            } else {
                0
            }
        };
        Self {
            width: to_device(width),
            height: to_device(height),
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }
}
