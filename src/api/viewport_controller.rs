use tracing::{debug, trace};

use crate::core::{
    AxisTransform, IndexWindow, PaneGeometry, PaneId, Viewport, floor_value_extent,
    x_label_step, y_label_step,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HandlePositions;
use crate::render::Renderer;

use super::{ChartEngine, LayoutMetrics};

impl<R: Renderer> ChartEngine<R> {
    /// Records a new surface size in CSS pixels; applied on the next tick.
    pub fn resize(&mut self, width_css: f64, height_css: f64) {
        if self.core.destroyed {
            return;
        }
        let viewport = Viewport::from_css(width_css, height_css, self.core.config.pixel_ratio);
        trace!(width = viewport.width, height = viewport.height, "resize requested");
        self.core.pending_viewport = Some(viewport);
    }

    /// Moves the detail window to `[min, max]`, clamped to the data range.
    ///
    /// The vertical range and labels animate toward the new window exactly
    /// as they do while dragging.
    pub fn set_detail_domain(&mut self, min: f64, max: f64) -> ChartResult<()> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidData(
                "detail domain must be finite with min < max".to_owned(),
            ));
        }
        if self.core.destroyed || self.core.model.is_none() {
            return Ok(());
        }
        let (full_min, full_max) = self.core.overview.domain();
        let (min, max) = (min.max(full_min), max.min(full_max));
        if min >= max {
            return Err(ChartError::InvalidData(
                "detail domain does not overlap the data range".to_owned(),
            ));
        }
        self.apply_detail_domain(min, max, self.core.clock);
        Ok(())
    }

    pub(super) fn geometry_for(viewport: Viewport, metrics: LayoutMetrics) -> PaneGeometry {
        PaneGeometry::new(
            viewport,
            metrics.overview_height,
            metrics.overview_margin_top,
            metrics.detail_padding_top,
            metrics.padding,
        )
    }

    /// Refits everything derived from the surface size.
    pub(super) fn relayout(&mut self) {
        let core = &mut self.core;
        core.geometry = Self::geometry_for(core.viewport, core.metrics);
        let width = core.geometry.width;
        core.x_label_count = label_count(width / (core.metrics.x_label_width * 2.0));
        core.y_label_count =
            label_count(core.geometry.detail_bottom / core.metrics.y_label_row_height);
        core.detail.fit_horizontal(width, core.geometry.padding);
        core.overview.fit_horizontal(width, core.geometry.padding);
        self.update_handles();
    }

    /// Applies a size recorded by [`ChartEngine::resize`]; returns `true` when
    /// the surface changed.
    pub(super) fn apply_pending_resize(&mut self, now: f64) -> bool {
        let Some(viewport) = self.core.pending_viewport.take() else {
            return false;
        };
        if viewport == self.core.viewport {
            return false;
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "surface resized"
        );
        self.core.viewport = viewport;
        self.relayout();
        if self.core.model.is_some() {
            self.refresh_detail_window(now, true);
            self.refresh_overview_range(now, true);
        }
        self.core.invalidation.invalidate_all();
        true
    }

    /// Sets the detail domain and everything depending on it; returns `false`
    /// when nothing changed.
    pub(super) fn apply_detail_domain(&mut self, min: f64, max: f64, now: f64) -> bool {
        if !(min < max) || self.core.detail.domain() == (min, max) {
            return false;
        }
        let core = &mut self.core;
        core.detail.set_domain(min, max);
        core.detail.fit_horizontal(core.geometry.width, core.geometry.padding);
        self.update_handles();
        self.refresh_detail_window(now, true);
        self.core.invalidation.invalidate_all();
        true
    }

    /// Recomputes the index window, x label step and detail vertical range.
    pub(super) fn refresh_detail_window(&mut self, now: f64, animate: bool) {
        let core = &mut self.core;
        let Some(model) = core.model.as_ref() else {
            return;
        };
        let axis = model.data().x();
        let (min, max) = core.detail.domain();
        let margin = core.geometry.padding / core.detail.horizontal().scale;
        core.index_window = IndexWindow::compute(
            axis.first(),
            axis.interval(),
            axis.sample_count(),
            min,
            max,
            margin,
        );

        let step = x_label_step(max - min, axis.interval(), core.x_label_count);
        if animate {
            core.x_labels.retarget_x(step, now);
        } else {
            core.x_labels.reset(step as f64, 0.0);
        }
        self.refresh_detail_range(now, animate);
    }

    /// Retargets the detail vertical range to the shown series inside the
    /// index window; y label rows cross-fade whenever the target moves.
    pub(super) fn refresh_detail_range(&mut self, now: f64, animate: bool) {
        let core = &mut self.core;
        let Some(model) = core.model.as_ref() else {
            return;
        };
        let (min, max) = model.detail_extent(core.index_window, core.config.force_min_y);
        let step = y_label_step(floor_value_extent(max - min, min), core.y_label_count);
        if !animate {
            core.detail.vertical.snap(min, max);
            core.y_labels.reset(step, min);
        } else if core.detail.vertical.play(min, max, now) {
            core.y_labels.retarget_y(step, min, now);
        }
    }

    pub(super) fn refresh_overview_range(&mut self, now: f64, animate: bool) {
        let core = &mut self.core;
        let Some(model) = core.model.as_ref() else {
            return;
        };
        let (min, max) = model.overview_extent(core.config.force_min_y);
        if animate {
            core.overview.vertical.play(min, max, now);
        } else {
            core.overview.vertical.snap(min, max);
        }
    }

    /// Screen x of the detail window edges inside the overview band.
    pub(super) fn update_handles(&mut self) {
        let core = &mut self.core;
        let overview = core.overview.horizontal();
        let (min, max) = core.detail.domain();
        core.handles = HandlePositions {
            min: overview.to_screen(min),
            max: overview.to_screen(max),
        };
    }

    /// Transform of the animated overview range across the overview band.
    pub(super) fn overview_vertical_transform(&self) -> AxisTransform {
        let geometry = self.core.geometry;
        self.core
            .overview
            .vertical
            .transform(geometry.height, geometry.overview_height)
    }

    pub(super) fn detail_vertical_transform(&self) -> AxisTransform {
        let geometry = self.core.geometry;
        self.core
            .detail
            .vertical
            .transform(geometry.detail_bottom, geometry.detail_plot_height())
    }

    pub(super) fn invalidate_pane(&mut self, pane: PaneId) {
        self.core.invalidation.invalidate(pane);
    }
}

fn label_count(ratio: f64) -> usize {
    if ratio.is_finite() && ratio >= 1.0 {
        ratio.floor() as usize
    } else {
        1
    }
}
