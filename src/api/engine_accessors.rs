use crate::core::{IndexWindow, PaneGeometry, Viewport};
use crate::interaction::{DragMode, HandlePositions, Selection};
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig, ChartTheme, LegendEntry, TooltipContent};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.core.config
    }

    #[must_use]
    pub fn theme(&self) -> ChartTheme {
        self.core.theme
    }

    /// Surface size currently laid out (pending resizes excluded).
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.viewport
    }

    #[must_use]
    pub fn geometry(&self) -> PaneGeometry {
        self.core.geometry
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        self.core.model.is_some()
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.core.destroyed
    }

    /// Domain range shown by the detail pane.
    #[must_use]
    pub fn detail_domain(&self) -> (f64, f64) {
        self.core.detail.domain()
    }

    /// Full data range shown by the overview pane.
    #[must_use]
    pub fn overview_domain(&self) -> (f64, f64) {
        self.core.overview.domain()
    }

    #[must_use]
    pub fn index_window(&self) -> IndexWindow {
        self.core.index_window
    }

    /// Target `(min, max)` of the detail vertical range.
    #[must_use]
    pub fn detail_vertical_range(&self) -> (f64, f64) {
        self.core.detail.vertical.target()
    }

    /// Target `(min, max)` of the overview vertical range.
    #[must_use]
    pub fn overview_vertical_range(&self) -> (f64, f64) {
        self.core.overview.vertical.target()
    }

    /// Currently displayed `(min, extent)` of the detail vertical range.
    #[must_use]
    pub fn detail_vertical_current(&self) -> (f64, f64) {
        self.core.detail.vertical.current()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.core.interaction.selection()
    }

    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        self.core.interaction.mode()
    }

    /// Whether the series is shown or fading in; `None` for unknown indices.
    #[must_use]
    pub fn series_visibility_target(&self, index: usize) -> Option<bool> {
        self.core
            .model
            .as_ref()?
            .visibility(index)
            .map(|visibility| visibility.is_shown())
    }

    /// Screen x of the selection window edges in the overview band.
    #[must_use]
    pub fn handle_positions(&self) -> HandlePositions {
        self.core.handles
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipContent> {
        self.core.tooltip.as_ref()
    }

    #[must_use]
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.legend_entries()
    }

    /// `(x, y)` label target counts for the current surface.
    #[must_use]
    pub fn label_counts(&self) -> (usize, usize) {
        (self.core.x_label_count, self.core.y_label_count)
    }
}
