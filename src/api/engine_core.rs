use crate::core::{DataModel, IndexWindow, LabelFade, PaneGeometry, PaneViewport, Viewport};
use crate::interaction::{HandlePositions, InteractionState};

use super::{
    ChartEngineConfig, ChartObserver, ChartTheme, LabelFormatters, LayoutMetrics,
    PaneInvalidation, TooltipContent,
};

/// Internal engine core state used by the public facade (`ChartEngine`).
pub(super) struct EngineCore {
    pub(super) config: ChartEngineConfig,
    /// `config.layout` in device pixels.
    pub(super) metrics: LayoutMetrics,
    pub(super) theme: ChartTheme,
    pub(super) formatters: LabelFormatters,
    pub(super) observer: Option<Box<dyn ChartObserver>>,

    pub(super) viewport: Viewport,
    pub(super) pending_viewport: Option<Viewport>,
    pub(super) geometry: PaneGeometry,
    pub(super) x_label_count: usize,
    pub(super) y_label_count: usize,

    pub(super) model: Option<DataModel>,
    pub(super) detail: PaneViewport,
    pub(super) overview: PaneViewport,
    pub(super) index_window: IndexWindow,
    pub(super) x_labels: LabelFade,
    pub(super) y_labels: LabelFade,

    pub(super) interaction: InteractionState,
    pub(super) handles: HandlePositions,
    pub(super) tooltip: Option<TooltipContent>,

    pub(super) invalidation: PaneInvalidation,
    /// Series of a loaded dataset are on the surface; a rejected dataset
    /// repaints the panes empty.
    pub(super) painted_series: bool,
    /// Timestamp of the latest tick; animations started between ticks
    /// begin here.
    pub(super) clock: f64,
    pub(super) destroyed: bool,
}
