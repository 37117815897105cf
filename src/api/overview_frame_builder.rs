use crate::core::{AxisTransform, PaneId, decimated_indices};
use crate::render::{CanvasLayerKind, PolylinePrimitive, RectPrimitive, RenderFrame, Renderer};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Draw commands for the overview band: every series over the full
    /// range, the mask outside the selection window and the window handles.
    pub(super) fn build_overview_frame(&self) -> RenderFrame {
        let core = &self.core;
        let geometry = core.geometry;
        let mut frame =
            RenderFrame::for_pane(core.viewport, PaneId::Overview, geometry.overview_region());
        let Some(model) = core.model.as_ref() else {
            return frame;
        };

        let metrics = core.metrics;
        let axis = model.data().x();
        let horizontal = core.overview.horizontal();
        let shared = self.overview_vertical_transform();
        let (range_min, range_extent) = core.overview.vertical.current();

        for (_, series, visibility) in model.series_with_visibility() {
            let alpha = visibility.overview.current();
            if alpha <= 0.0 {
                continue;
            }
            // A fading-out series keeps the scale it was toggled at; a shown
            // series taller than the animated range gets its own until the
            // range catches up.
            let own_extent = series.max() - series.min();
            let vertical = if !visibility.is_shown() {
                visibility.saved_overview_transform.unwrap_or(shared)
            } else if own_extent > range_extent {
                AxisTransform::fit_vertical(
                    geometry.height,
                    geometry.overview_height,
                    range_min,
                    own_extent,
                )
            } else {
                shared
            };
            let points = decimated_indices(1, axis.sample_count(), geometry.drawable_width())
                .filter_map(|index| {
                    Some((
                        horizontal.to_screen(axis.value(index)?),
                        vertical.to_screen(series.value(index)?),
                    ))
                })
                .collect();
            frame.push_polyline(
                CanvasLayerKind::Series,
                PolylinePrimitive::new(
                    points,
                    metrics.overview_line_width,
                    series.color.faded(alpha),
                ),
            );
        }

        let top = geometry.overview_top();
        let band = geometry.overview_height;
        let pad = geometry.padding;
        let (ui_min, ui_max) = (core.handles.min, core.handles.max);

        let mask = core.theme.mask_fill();
        frame.push_rect(
            CanvasLayerKind::Overlay,
            RectPrimitive::new(pad, top, (ui_min - pad).max(0.0), band, mask),
        );
        frame.push_rect(
            CanvasLayerKind::Overlay,
            RectPrimitive::new(
                ui_max,
                top,
                (geometry.width - ui_max - pad).max(0.0),
                band,
                mask,
            ),
        );

        let handle = core.theme.handle_fill();
        let window_width = (ui_max - ui_min).max(0.0);
        let border = metrics.handle_border_height;
        for rect in [
            RectPrimitive::new(ui_min, top, metrics.handle_width, band, handle),
            RectPrimitive::new(ui_max - metrics.handle_width, top, metrics.handle_width, band, handle),
            RectPrimitive::new(ui_min, top, window_width, border, handle),
            RectPrimitive::new(ui_min, geometry.height - border, window_width, border, handle),
        ] {
            frame.push_rect(CanvasLayerKind::Overlay, rect);
        }

        frame
    }
}
