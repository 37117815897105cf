use tracing::debug;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::{
    ChartObserver, LabelFormatters, engine_core::EngineCore, render_coordinator::RenderCoordinator,
};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the dataset, both pane viewports, the animation state
/// and the interaction state machine. Input handlers only record; the host
/// calls [`ChartEngine::tick`] once per animation frame to apply input,
/// advance animations and repaint the panes that changed.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> ChartEngine<R> {
    /// Advances the chart to `now` (milliseconds on any monotonic clock).
    ///
    /// No-op once destroyed or while no dataset is loaded.
    pub fn tick(&mut self, now: f64) -> ChartResult<()> {
        RenderCoordinator::tick(self, now)
    }

    /// Tears the chart down: further events and ticks are ignored and the
    /// host's legend and tooltip are cleared.
    pub fn destroy(&mut self) {
        if self.core.destroyed {
            return;
        }
        self.core.model = None;
        self.core.tooltip = None;
        self.core.interaction.reset();
        self.core.pending_viewport = None;
        self.publish_legend();
        self.publish_tooltip();
        self.core.observer = None;
        self.core.destroyed = true;
        debug!("chart engine destroyed");
    }

    /// Installs the legend/tooltip collaborator and sends it the current
    /// legend.
    pub fn set_observer(&mut self, observer: Box<dyn ChartObserver>) {
        if self.core.destroyed {
            return;
        }
        self.core.observer = Some(observer);
        self.publish_legend();
        self.publish_tooltip();
    }

    pub fn set_label_formatters(&mut self, formatters: LabelFormatters) {
        self.core.formatters = formatters;
        self.core.invalidation.invalidate_all();
        self.refresh_tooltip();
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
