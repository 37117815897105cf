use crate::core::PaneId;
use crate::interaction::{
    DragMode, Selection, classify_press, drag_end_target, drag_start_target, drag_window_target,
    nearest_index,
};
use crate::render::Renderer;

use super::{ChartEngine, TooltipContent, TooltipPlacement, TooltipRow};

/// Input handlers only record pointer state; geometry is applied per tick.
impl<R: Renderer> ChartEngine<R> {
    pub fn pointer_down(&mut self, x_css: f64, y_css: f64) {
        if self.core.destroyed {
            return;
        }
        let (x, y) = self.to_device(x_css, y_css);
        let core = &mut self.core;
        let hit_zone = core.metrics.hit_zone;
        let mode = if core.model.is_some() && core.geometry.contains_overview(x, y, hit_zone) {
            classify_press(x, core.handles, hit_zone)
        } else {
            DragMode::Idle
        };
        core.interaction
            .on_pointer_down(x, y, mode, core.handles, core.detail.domain_span());
    }

    pub fn pointer_move(&mut self, x_css: f64, y_css: f64) {
        if self.core.destroyed {
            return;
        }
        let (x, y) = self.to_device(x_css, y_css);
        self.core.interaction.on_pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        if self.core.destroyed {
            return;
        }
        self.core.interaction.on_pointer_up();
    }

    /// Touch input follows the first touch point.
    pub fn touch_start(&mut self, touches: &[(f64, f64)]) {
        if let Some(&(x, y)) = touches.first() {
            self.pointer_down(x, y);
        }
    }

    pub fn touch_move(&mut self, touches: &[(f64, f64)]) {
        if let Some(&(x, y)) = touches.first() {
            self.pointer_move(x, y);
        }
    }

    pub fn touch_end(&mut self) {
        self.pointer_up();
    }

    pub fn touch_cancel(&mut self) {
        self.pointer_up();
    }

    fn to_device(&self, x_css: f64, y_css: f64) -> (f64, f64) {
        let ratio = self.core.config.pixel_ratio;
        (x_css * ratio, y_css * ratio)
    }

    /// Moves the detail window after the smoothed pointer while dragging.
    pub(super) fn apply_drag(&mut self, now: f64) -> bool {
        let core = &self.core;
        let mode = core.interaction.mode();
        let (pointer_x, _) = core.interaction.pointer();
        let (full_min, full_max) = core.overview.domain();
        let (min, max) = core.detail.domain();
        let overview = core.overview.horizontal();
        let hit_zone = core.metrics.hit_zone;

        let (min, max) = match mode {
            DragMode::Idle => return false,
            DragMode::DragStart => (
                drag_start_target(pointer_x, core.handles, hit_zone, overview, full_min),
                max,
            ),
            DragMode::DragEnd => (
                min,
                drag_end_target(pointer_x, core.handles, hit_zone, overview, full_max),
            ),
            DragMode::DragWindow => {
                let (grab_offset, width) = core.interaction.window_grab();
                drag_window_target(pointer_x, grab_offset, width, overview, full_min, full_max)
            }
        };
        self.apply_detail_domain(min, max, now)
    }

    /// Snaps the selection to the sample nearest the hovering pointer, or
    /// clears it when the pointer is elsewhere or dragging.
    pub(super) fn update_selection(&mut self) {
        let core = &self.core;
        let Some(model) = core.model.as_ref() else {
            return;
        };
        let (x, y) = core.interaction.pointer();
        let hovering = core.interaction.has_pointer()
            && !core.interaction.mode().is_dragging()
            && core.geometry.contains_detail(x, y);
        if !hovering {
            if self.core.interaction.clear_selection() {
                self.core.tooltip = None;
                self.publish_tooltip();
                self.invalidate_pane(PaneId::Detail);
            }
            return;
        }

        let axis = model.data().x();
        let horizontal = core.detail.horizontal();
        let index = nearest_index(
            horizontal.to_domain(x.floor()),
            axis.first(),
            axis.interval(),
            axis.sample_count(),
        );
        let sample_x = axis.value(index).unwrap_or_else(|| axis.first());
        let selection = Selection {
            index,
            pixel_x: horizontal.to_screen(sample_x),
            pixel_y: y.floor(),
            active: true,
        };
        if self.core.interaction.set_selection(selection) {
            self.refresh_tooltip();
            self.invalidate_pane(PaneId::Detail);
        }
    }

    /// Rebuilds the tooltip for the current selection and notifies the host.
    pub(super) fn refresh_tooltip(&mut self) {
        let selection = self.core.interaction.selection();
        let tooltip = if selection.active {
            self.tooltip_for(selection)
        } else {
            None
        };
        if tooltip.is_none() && self.core.tooltip.is_none() {
            return;
        }
        self.core.tooltip = tooltip;
        self.publish_tooltip();
    }

    fn tooltip_for(&self, selection: Selection) -> Option<TooltipContent> {
        let core = &self.core;
        let model = core.model.as_ref()?;
        let x = model.data().x().value(selection.index)?;
        let rows = model
            .series_with_visibility()
            .map(|(series_index, series, visibility)| TooltipRow {
                series_index,
                name: series.name.clone(),
                color: series.color,
                value: series
                    .value(selection.index)
                    .map(|value| core.formatters.number(value, false))
                    .unwrap_or_default(),
                visible: visibility.is_shown(),
            })
            .collect();

        let ratio = core.config.pixel_ratio;
        let layout = core.config.layout;
        Some(TooltipContent {
            sample_index: selection.index,
            title: core.formatters.date(x, false),
            rows,
            placement: TooltipPlacement {
                anchor_x: selection.pixel_x / ratio + layout.tooltip_left_margin,
                pointer_y: selection.pixel_y / ratio + layout.tooltip_pointer_offset,
                top_margin: core.config.tooltip_top_margin(),
            },
        })
    }
}
