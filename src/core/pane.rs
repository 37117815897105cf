use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::render::PaneRegion;

/// The two panes sharing one drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaneId {
    /// Zoomed, interactive view of the selected window.
    Detail,
    /// Full-range navigation strip with the draggable window.
    Overview,
}

/// Device-pixel geometry of both panes for the current surface size.
///
/// The detail plot occupies `[0, detail_bottom]` vertically, x-axis labels sit
/// in the gap below it, and the overview band fills the bottom
/// `overview_height` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaneGeometry {
    pub width: f64,
    pub height: f64,
    pub detail_bottom: f64,
    pub detail_padding_top: f64,
    pub overview_height: f64,
    pub padding: f64,
}

impl PaneGeometry {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        overview_height: f64,
        overview_margin_top: f64,
        detail_padding_top: f64,
        padding: f64,
    ) -> Self {
        let width = viewport.width_f64();
        let height = viewport.height_f64();
        Self {
            width,
            height,
            detail_bottom: (height - overview_height - overview_margin_top).max(0.0),
            detail_padding_top,
            overview_height,
            padding,
        }
    }

    #[must_use]
    pub fn overview_top(&self) -> f64 {
        self.height - self.overview_height
    }

    /// Usable horizontal span between the side paddings (at least 1px).
    #[must_use]
    pub fn drawable_width(&self) -> f64 {
        (self.width - self.padding * 2.0).max(1.0)
    }

    /// Vertical span the detail series are fitted into (at least 1px).
    #[must_use]
    pub fn detail_plot_height(&self) -> f64 {
        (self.detail_bottom - self.detail_padding_top).max(1.0)
    }

    /// Region cleared before repainting the detail pane, axis labels included.
    #[must_use]
    pub fn detail_region(&self) -> PaneRegion {
        PaneRegion::new(0.0, 0.0, self.width, self.overview_top().max(0.0))
    }

    /// Region cleared before repainting the overview band; one extra row above
    /// keeps anti-aliased line tops from lingering.
    #[must_use]
    pub fn overview_region(&self) -> PaneRegion {
        let top = (self.overview_top() - 1.0).max(0.0);
        PaneRegion::new(0.0, top, self.width, self.height - top)
    }

    /// Whether a device-pixel position hovers the detail pane.
    #[must_use]
    pub fn contains_detail(&self, x: f64, y: f64) -> bool {
        y > 0.0 && y < self.overview_top() && x > 0.0 && x < self.width
    }

    /// Whether a device-pixel position lies in the overview band, widened
    /// horizontally by `slack` so handles at the edges stay grabbable.
    #[must_use]
    pub fn contains_overview(&self, x: f64, y: f64, slack: f64) -> bool {
        y > self.overview_top() && y < self.height && x > -slack && x < self.width + slack
    }
}
