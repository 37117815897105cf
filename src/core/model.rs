use smallvec::SmallVec;
use tracing::debug;

use crate::core::dataset::{ChartData, SeriesData};
use crate::core::scale::AxisTransform;
use crate::core::tween::Tween;
use crate::core::viewport::{IndexWindow, value_extent};

/// Per-series show/hide animation state.
///
/// `detail` drives the detail-pane opacity and whether the series counts
/// toward vertical ranges; `overview` drives the overview opacity and is
/// delayed on show so the overview cross-fades after the rescale settles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesVisibility {
    pub detail: Tween,
    pub overview: Tween,
    /// Overview vertical transform captured at the last toggle; a hidden
    /// series keeps being drawn with it while it fades out.
    pub saved_overview_transform: Option<AxisTransform>,
}

impl SeriesVisibility {
    #[must_use]
    pub fn shown(scale_duration: f64) -> Self {
        Self {
            detail: Tween::new(1.0, scale_duration),
            overview: Tween::new(1.0, scale_duration / 2.0),
            saved_overview_transform: None,
        }
    }

    /// Whether the series is (or is becoming) visible.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.detail.target() != 0.0
    }
}

/// Validated chart data plus the mutable per-series runtime state.
#[derive(Debug, Clone)]
pub struct DataModel {
    data: ChartData,
    visibility: SmallVec<[SeriesVisibility; 8]>,
    scale_duration: f64,
}

impl DataModel {
    #[must_use]
    pub fn new(data: ChartData, scale_duration: f64) -> Self {
        let visibility = data
            .series()
            .iter()
            .map(|_| SeriesVisibility::shown(scale_duration))
            .collect();
        Self {
            data,
            visibility,
            scale_duration,
        }
    }

    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.visibility.len()
    }

    #[must_use]
    pub fn visibility(&self, index: usize) -> Option<&SeriesVisibility> {
        self.visibility.get(index)
    }

    /// Series paired with their visibility state, in dataset order.
    pub fn series_with_visibility(
        &self,
    ) -> impl Iterator<Item = (usize, &SeriesData, &SeriesVisibility)> {
        self.data
            .series()
            .iter()
            .zip(self.visibility.iter())
            .enumerate()
            .map(|(index, (series, visibility))| (index, series, visibility))
    }

    /// Starts the show/hide animation of one series.
    ///
    /// Returns `false` for an unknown index. Repeated calls are last-call-wins:
    /// each one retargets the running tweens from their current values.
    pub fn set_visible(
        &mut self,
        index: usize,
        visible: bool,
        now: f64,
        overview_transform: AxisTransform,
    ) -> bool {
        let half = self.scale_duration / 2.0;
        let Some(state) = self.visibility.get_mut(index) else {
            return false;
        };
        let target = if visible { 1.0 } else { 0.0 };
        state.saved_overview_transform = Some(overview_transform);
        state.detail.play(target, now);
        state.overview.set_delay(if visible { half } else { 0.0 });
        state.overview.play(target, now);
        debug!(series = index, visible, "series visibility toggled");
        true
    }

    /// Advances every visibility tween; returns `(detail_changed, overview_changed)`.
    pub fn update_visibility(&mut self, now: f64) -> (bool, bool) {
        let mut detail_changed = false;
        let mut overview_changed = false;
        for state in &mut self.visibility {
            detail_changed |= state.detail.update(now);
            overview_changed |= state.overview.update(now);
        }
        (detail_changed, overview_changed)
    }

    /// Vertical `(min, max)` of shown series over the index window.
    #[must_use]
    pub fn detail_extent(&self, window: IndexWindow, force_min: Option<f64>) -> (f64, f64) {
        value_extent(
            self.series_with_visibility()
                .filter(|(_, _, visibility)| visibility.is_shown())
                .map(|(_, series, _)| series.span(window.min, window.max)),
            force_min,
        )
    }

    /// Vertical `(min, max)` of shown series over their whole length.
    #[must_use]
    pub fn overview_extent(&self, force_min: Option<f64>) -> (f64, f64) {
        let extrema: SmallVec<[[f64; 2]; 8]> = self
            .series_with_visibility()
            .filter(|(_, _, visibility)| visibility.is_shown())
            .map(|(_, series, _)| [series.min(), series.max()])
            .collect();
        value_extent(extrema.iter().map(|pair| &pair[..]), force_min)
    }
}
