use serde::{Deserialize, Serialize};

use crate::render::Color;

/// One legend toggle the host should render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub series_index: usize,
    pub name: String,
    pub color: Color,
    pub visible: bool,
}

/// One series line of the tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub series_index: usize,
    pub name: String,
    pub color: Color,
    pub value: String,
    /// Hidden series keep their row so slots stay stable across toggles.
    pub visible: bool,
}

/// Where the tooltip goes, in CSS pixels, before its size is known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    /// Preferred left edge: the selected sample's x plus the left margin.
    pub anchor_x: f64,
    /// Reference line below the pointer the tooltip sits above.
    pub pointer_y: f64,
    pub top_margin: f64,
}

impl TooltipPlacement {
    /// Resolves the tooltip's top-left corner for a measured popup size.
    ///
    /// The popup is kept inside `[0, surface_width]` horizontally and flips
    /// below the pointer when there is no room above.
    #[must_use]
    pub fn resolve(self, popup_width: f64, popup_height: f64, surface_width: f64) -> (f64, f64) {
        let mut left = self.anchor_x.max(0.0);
        if left + popup_width > surface_width {
            left = (surface_width - popup_width).max(0.0);
        }
        let mut top = self.pointer_y - popup_height - self.top_margin;
        if top < 0.0 {
            top = self.pointer_y + self.top_margin;
        }
        (left, top)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    /// 1-based sample index the tooltip describes.
    pub sample_index: usize,
    pub title: String,
    pub rows: Vec<TooltipRow>,
    pub placement: TooltipPlacement,
}

/// Host-side collaborator owning the legend and tooltip widgets.
///
/// Both callbacks receive complete models; the host replaces whatever it
/// showed before.
pub trait ChartObserver {
    fn legend_rebuilt(&mut self, entries: &[LegendEntry]);

    /// `None` hides the tooltip.
    fn tooltip_changed(&mut self, tooltip: Option<&TooltipContent>);
}
