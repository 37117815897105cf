use tracing::debug;

use crate::core::{IndexWindow, LabelFade, PaneViewport};
use crate::error::ChartResult;
use crate::interaction::{HandlePositions, InteractionState};
use crate::render::Renderer;

use super::{
    ChartEngine, ChartEngineConfig, ChartTheme, LabelFormatters, PaneInvalidation,
    engine_core::EngineCore,
};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with no data; nothing is drawn until
    /// [`ChartEngine::set_data`] receives a valid dataset.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let metrics = config.device_metrics();
        let scale_duration = config.animation.scale_duration;

        let mut engine = Self {
            renderer,
            core: EngineCore {
                config,
                metrics,
                theme: ChartTheme::default(),
                formatters: LabelFormatters::default(),
                observer: None,
                viewport: config.viewport,
                pending_viewport: None,
                geometry: Self::geometry_for(config.viewport, metrics),
                x_label_count: 1,
                y_label_count: 1,
                model: None,
                detail: PaneViewport::new(0.0, 1.0, scale_duration),
                overview: PaneViewport::new(0.0, 1.0, scale_duration),
                index_window: IndexWindow::full(1),
                x_labels: LabelFade::new(config.animation.x_label_fade),
                y_labels: LabelFade::new(scale_duration),
                interaction: InteractionState::default(),
                handles: HandlePositions::default(),
                tooltip: None,
                invalidation: PaneInvalidation::all(),
                painted_series: false,
                clock: 0.0,
                destroyed: false,
            },
        };
        engine.relayout();

        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            pixel_ratio = config.pixel_ratio,
            "chart engine created"
        );
        Ok(engine)
    }
}
