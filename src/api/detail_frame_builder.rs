use crate::core::{PaneId, decimated_indices, x_label_indices};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, PolylinePrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Draw commands for the detail pane: grid rows, baseline, series,
    /// crosshair with markers, then axis labels.
    pub(super) fn build_detail_frame(&self) -> RenderFrame {
        let core = &self.core;
        let geometry = core.geometry;
        let mut frame =
            RenderFrame::for_pane(core.viewport, PaneId::Detail, geometry.detail_region());
        let Some(model) = core.model.as_ref() else {
            return frame;
        };

        let metrics = core.metrics;
        let theme = core.theme;
        let axis = model.data().x();
        let horizontal = core.detail.horizontal();
        let vertical = self.detail_vertical_transform();
        let left = geometry.padding;
        let right = geometry.width - geometry.padding;

        for rows in [core.y_labels.old, core.y_labels.new] {
            if !rows.is_visible() {
                continue;
            }
            let color = theme.grid_line.faded(rows.alpha());
            for i in 1..core.y_label_count {
                let y = vertical.to_screen(rows.base + rows.step * i as f64);
                frame.push_line(
                    CanvasLayerKind::Grid,
                    LinePrimitive::new(left, y, right, y, metrics.grid_line_width, color),
                );
            }
        }
        frame.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(
                left,
                geometry.detail_bottom,
                right,
                geometry.detail_bottom,
                metrics.grid_line_width,
                theme.zero_line,
            ),
        );

        let window = core.index_window;
        for (_, series, visibility) in model.series_with_visibility() {
            let alpha = visibility.detail.current();
            if alpha <= 0.0 {
                continue;
            }
            let points = decimated_indices(window.min, window.max, geometry.drawable_width())
                .filter_map(|index| {
                    Some((
                        horizontal.to_screen(axis.value(index)?),
                        vertical.to_screen(series.value(index)?),
                    ))
                })
                .collect();
            frame.push_polyline(
                CanvasLayerKind::Series,
                PolylinePrimitive::new(points, metrics.detail_line_width, series.color.faded(alpha)),
            );
        }

        let selection = core.interaction.selection();
        if selection.active {
            frame.push_line(
                CanvasLayerKind::Crosshair,
                LinePrimitive::new(
                    selection.pixel_x,
                    0.0,
                    selection.pixel_x,
                    geometry.detail_bottom,
                    metrics.grid_line_width,
                    theme.crosshair_line,
                ),
            );
            for (_, series, visibility) in model.series_with_visibility() {
                if !visibility.is_shown() {
                    continue;
                }
                let Some(value) = series.value(selection.index) else {
                    continue;
                };
                frame.push_circle(
                    CanvasLayerKind::Crosshair,
                    CirclePrimitive {
                        x: selection.pixel_x,
                        y: vertical.to_screen(value),
                        radius: metrics.marker_radius,
                        fill_color: theme.marker_fill,
                        stroke_width: metrics.marker_stroke_width,
                        stroke_color: series.color,
                    },
                );
            }
        }

        let last = axis.sample_count();
        let (old_skips, new_skips) = core.x_labels.skip_flags();
        for (labels, skip) in [(core.x_labels.old, old_skips), (core.x_labels.new, new_skips)] {
            if !labels.is_visible() {
                continue;
            }
            let color = theme.text.faded(labels.alpha());
            for index in x_label_indices(last, window, labels.step as usize, skip) {
                let Some(value) = axis.value(index) else {
                    continue;
                };
                let h_align = if index == last {
                    TextHAlign::Right
                } else if index > 1 {
                    TextHAlign::Center
                } else {
                    TextHAlign::Left
                };
                frame.push_text(
                    CanvasLayerKind::Axis,
                    TextPrimitive::new(
                        core.formatters.date(value, true),
                        horizontal.to_screen(value),
                        geometry.detail_bottom + metrics.x_label_offset,
                        metrics.font_size,
                        color,
                        h_align,
                    ),
                );
            }
        }

        for rows in [core.y_labels.old, core.y_labels.new] {
            if !rows.is_visible() {
                continue;
            }
            let color = theme.text.faded(rows.alpha());
            for i in 1..core.y_label_count {
                let value = rows.base + rows.step * i as f64;
                frame.push_text(
                    CanvasLayerKind::Axis,
                    TextPrimitive::new(
                        core.formatters.number(value, true),
                        left,
                        vertical.to_screen(value) + metrics.y_label_offset,
                        metrics.font_size,
                        color,
                        TextHAlign::Left,
                    ),
                );
            }
        }

        let (range_min, _) = core.detail.vertical.current();
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                core.formatters.number(range_min, false),
                left,
                geometry.detail_bottom + metrics.y_label_offset,
                metrics.font_size,
                theme.text,
                TextHAlign::Left,
            ),
        );

        frame
    }
}
