use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::AxisTransform;

/// What a pointer press on the overview band grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragMode {
    #[default]
    Idle,
    /// Left handle: moves the window start.
    DragStart,
    /// Right handle: moves the window end.
    DragEnd,
    /// Window body: translates the whole window.
    DragWindow,
}

impl DragMode {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        self != Self::Idle
    }
}

/// Screen x of the selection window edges in the overview band.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HandlePositions {
    pub min: f64,
    pub max: f64,
}

/// Nearest sample under the pointer in the detail pane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// 1-based sample index.
    pub index: usize,
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub active: bool,
}

/// Classifies a press at `x` inside the overview band against the handles.
///
/// Each handle owns a zone reaching `hit_zone` outward and `hit_zone / 2`
/// inward. When the window is narrower than `2 * hit_zone` those inward
/// halves would swallow the body, so the body wins everything between the
/// handles and the handles are only reachable from outside.
#[must_use]
pub fn classify_press(x: f64, handles: HandlePositions, hit_zone: f64) -> DragMode {
    let HandlePositions { min, max } = handles;
    let inward = if max - min < hit_zone * 2.0 {
        0.0
    } else {
        hit_zone / 2.0
    };

    if inward == 0.0 && x >= min && x <= max {
        DragMode::DragWindow
    } else if x > min - hit_zone && x < min + inward {
        DragMode::DragStart
    } else if x > max - inward && x < max + hit_zone {
        DragMode::DragEnd
    } else if x > min + inward && x < max - inward {
        DragMode::DragWindow
    } else {
        DragMode::Idle
    }
}

/// New window start while dragging the left handle.
///
/// The pointer may not come within `2 * hit_zone` pixels of the right handle,
/// and the start never precedes `full_min`.
#[must_use]
pub fn drag_start_target(
    pointer_x: f64,
    handles: HandlePositions,
    hit_zone: f64,
    overview: AxisTransform,
    full_min: f64,
) -> f64 {
    let x = pointer_x.min(handles.max - hit_zone * 2.0);
    overview.to_domain(x).max(full_min)
}

/// New window end while dragging the right handle; mirror of
/// [`drag_start_target`].
#[must_use]
pub fn drag_end_target(
    pointer_x: f64,
    handles: HandlePositions,
    hit_zone: f64,
    overview: AxisTransform,
    full_max: f64,
) -> f64 {
    let x = pointer_x.max(handles.min + hit_zone * 2.0);
    overview.to_domain(x).min(full_max)
}

/// Translated window while dragging its body; width is preserved and both
/// bounds stay inside `[full_min, full_max]`.
#[must_use]
pub fn drag_window_target(
    pointer_x: f64,
    grab_offset: f64,
    width: f64,
    overview: AxisTransform,
    full_min: f64,
    full_max: f64,
) -> (f64, f64) {
    let start = overview
        .to_domain(pointer_x + grab_offset)
        .max(full_min)
        .min(full_max - width);
    (start, (start + width).min(full_max))
}

/// Nearest 1-based sample index for a domain value, clamped to the data.
#[must_use]
pub fn nearest_index(x_domain: f64, x_base: f64, interval: f64, sample_count: usize) -> usize {
    let count = sample_count.max(1);
    let raw = ((x_domain - x_base) / interval).round() + 1.0;
    if raw.is_nan() || raw < 1.0 {
        1
    } else if raw >= count as f64 {
        count
    } else {
        raw as usize
    }
}

/// Pointer and drag state recorded by input handlers and consumed per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    mode: DragMode,
    pointer_x: f64,
    pointer_y: f64,
    target_x: f64,
    target_y: f64,
    grab_offset: f64,
    grab_width: f64,
    pointer_seen: bool,
    selection: Selection,
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Pointer position used for geometry (smoothed while dragging).
    #[must_use]
    pub fn pointer(&self) -> (f64, f64) {
        (self.pointer_x, self.pointer_y)
    }

    /// Latest raw pointer position reported by the host.
    #[must_use]
    pub fn target(&self) -> (f64, f64) {
        (self.target_x, self.target_y)
    }

    #[must_use]
    pub fn has_pointer(&self) -> bool {
        self.pointer_seen
    }

    /// `(grab_offset, window_width)` recorded when a window drag began.
    #[must_use]
    pub fn window_grab(&self) -> (f64, f64) {
        (self.grab_offset, self.grab_width)
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Records a press; `mode` comes from [`classify_press`] when the press
    /// landed on the overview band, `Idle` otherwise.
    pub fn on_pointer_down(
        &mut self,
        x: f64,
        y: f64,
        mode: DragMode,
        handles: HandlePositions,
        window_width: f64,
    ) {
        self.pointer_x = x;
        self.pointer_y = y;
        self.target_x = x;
        self.target_y = y;
        self.pointer_seen = true;
        if mode == DragMode::DragWindow {
            self.grab_offset = handles.min - x;
            self.grab_width = window_width;
        }
        if mode != self.mode {
            debug!(?mode, "drag mode changed");
        }
        self.mode = mode;
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.target_x = x;
        self.target_y = y;
        self.pointer_seen = true;
    }

    pub fn on_pointer_up(&mut self) {
        if self.mode.is_dragging() {
            debug!(from = ?self.mode, "drag released");
        }
        self.mode = DragMode::Idle;
    }

    /// Moves the working pointer toward the latest target.
    ///
    /// While dragging, it closes `factor` of the remaining distance per tick to
    /// damp jitter; when idle it jumps straight to the target.
    pub fn smooth_pointer(&mut self, factor: f64) {
        if self.mode.is_dragging() {
            self.pointer_x += (self.target_x - self.pointer_x) * factor;
            self.pointer_y += (self.target_y - self.pointer_y) * factor;
        } else {
            self.pointer_x = self.target_x;
            self.pointer_y = self.target_y;
        }
    }

    /// Replaces the selection; returns `true` when anything changed.
    pub fn set_selection(&mut self, selection: Selection) -> bool {
        if self.selection == selection {
            return false;
        }
        self.selection = selection;
        true
    }

    /// Deactivates the selection; returns `true` when it was active.
    pub fn clear_selection(&mut self) -> bool {
        if !self.selection.active {
            return false;
        }
        self.selection = Selection::default();
        true
    }

    /// Drops every pointer trace, e.g. on teardown or dataset replacement.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DragMode, HandlePositions, InteractionState, classify_press, drag_end_target,
        drag_start_target, drag_window_target, nearest_index,
    };
    use crate::core::AxisTransform;

    const HANDLES: HandlePositions = HandlePositions {
        min: 100.0,
        max: 200.0,
    };

    #[test]
    fn press_zones_follow_handles() {
        assert_eq!(classify_press(85.0, HANDLES, 20.0), DragMode::DragStart);
        assert_eq!(classify_press(105.0, HANDLES, 20.0), DragMode::DragStart);
        assert_eq!(classify_press(150.0, HANDLES, 20.0), DragMode::DragWindow);
        assert_eq!(classify_press(195.0, HANDLES, 20.0), DragMode::DragEnd);
        assert_eq!(classify_press(215.0, HANDLES, 20.0), DragMode::DragEnd);
        assert_eq!(classify_press(30.0, HANDLES, 20.0), DragMode::Idle);
        assert_eq!(classify_press(260.0, HANDLES, 20.0), DragMode::Idle);
    }

    #[test]
    fn narrow_window_prefers_body_between_handles() {
        let narrow = HandlePositions {
            min: 100.0,
            max: 130.0,
        };
        assert_eq!(classify_press(101.0, narrow, 20.0), DragMode::DragWindow);
        assert_eq!(classify_press(129.0, narrow, 20.0), DragMode::DragWindow);
        assert_eq!(classify_press(95.0, narrow, 20.0), DragMode::DragStart);
        assert_eq!(classify_press(135.0, narrow, 20.0), DragMode::DragEnd);
    }

    #[test]
    fn handle_drags_clamp_to_full_domain_and_min_gap() {
        let overview = AxisTransform {
            scale: 1.0,
            offset: 0.0,
        };
        assert_eq!(drag_start_target(-50.0, HANDLES, 20.0, overview, 0.0), 0.0);
        assert_eq!(drag_start_target(190.0, HANDLES, 20.0, overview, 0.0), 160.0);
        assert_eq!(drag_end_target(500.0, HANDLES, 20.0, overview, 300.0), 300.0);
        assert_eq!(drag_end_target(105.0, HANDLES, 20.0, overview, 300.0), 140.0);
    }

    #[test]
    fn window_drag_preserves_width() {
        let overview = AxisTransform {
            scale: 1.0,
            offset: 0.0,
        };
        assert_eq!(
            drag_window_target(280.0, -10.0, 100.0, overview, 0.0, 300.0),
            (200.0, 300.0)
        );
        assert_eq!(
            drag_window_target(5.0, -10.0, 100.0, overview, 0.0, 300.0),
            (0.0, 100.0)
        );
    }

    #[test]
    fn nearest_index_rounds_and_clamps() {
        assert_eq!(nearest_index(14.0, 0.0, 10.0, 5), 2);
        assert_eq!(nearest_index(16.0, 0.0, 10.0, 5), 3);
        assert_eq!(nearest_index(-100.0, 0.0, 10.0, 5), 1);
        assert_eq!(nearest_index(1_000.0, 0.0, 10.0, 5), 5);
    }

    #[test]
    fn pointer_smoothing_only_applies_while_dragging() {
        let mut state = InteractionState::default();
        state.on_pointer_down(0.0, 0.0, DragMode::DragWindow, HANDLES, 50.0);
        assert_eq!(state.window_grab(), (100.0, 50.0));
        state.on_pointer_move(10.0, 20.0);
        state.smooth_pointer(0.5);
        assert_eq!(state.pointer(), (5.0, 10.0));

        state.on_pointer_up();
        assert_eq!(state.mode(), DragMode::Idle);
        state.smooth_pointer(0.5);
        assert_eq!(state.pointer(), (10.0, 20.0));
    }
}
