use tracing::{trace, warn};

use crate::core::PaneId;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    /// One animation frame: input, animation, then repaint of dirty panes.
    pub(super) fn tick<R: Renderer>(engine: &mut ChartEngine<R>, now: f64) -> ChartResult<()> {
        if engine.core.destroyed || !now.is_finite() {
            return Ok(());
        }
        engine.core.clock = now;
        engine.apply_pending_resize(now);
        if !engine.core.viewport.is_valid() {
            return Ok(());
        }
        if engine.core.model.is_none() {
            if engine.core.painted_series {
                Self::render_dirty_panes(engine)?;
                engine.core.painted_series = false;
                trace!("stale series cleared");
            }
            return Ok(());
        }

        let smoothing = engine.core.config.drag_smoothing;
        engine.core.interaction.smooth_pointer(smoothing);
        engine.apply_drag(now);
        engine.update_selection();
        Self::advance_animations(engine, now);
        Self::render_dirty_panes(engine)?;
        engine.core.painted_series = true;
        Ok(())
    }

    fn advance_animations<R: Renderer>(engine: &mut ChartEngine<R>, now: f64) {
        let core = &mut engine.core;
        let x_labels = core.x_labels.update(now);
        let y_labels = core.y_labels.update(now);
        let detail_range = core.detail.vertical.update(now);
        let overview_range = core.overview.vertical.update(now);
        let (detail_series, overview_series) = core
            .model
            .as_mut()
            .map_or((false, false), |model| model.update_visibility(now));

        core.invalidation.invalidate_if(
            PaneId::Detail,
            x_labels || y_labels || detail_range || detail_series,
        );
        core.invalidation
            .invalidate_if(PaneId::Overview, overview_range || overview_series);
    }

    /// Repaints pending panes, overview first.
    fn render_dirty_panes<R: Renderer>(engine: &mut ChartEngine<R>) -> ChartResult<()> {
        for pane in [PaneId::Overview, PaneId::Detail] {
            if !engine.core.invalidation.take(pane) {
                continue;
            }
            let frame = match pane {
                PaneId::Overview => engine.build_overview_frame(),
                PaneId::Detail => engine.build_detail_frame(),
            };
            if let Err(err) = engine.renderer.render(&frame) {
                warn!(?pane, error = %err, "pane render failed");
                engine.core.invalidation.invalidate(pane);
                return Err(err);
            }
            trace!(?pane, "pane repainted");
        }
        Ok(())
    }
}
