use serde::{Deserialize, Serialize};

use crate::core::scale::{AxisTransform, floor_extent, floor_value_extent};
use crate::core::tween::Tween;

/// Inclusive span of 1-based sample indices drawn by the detail pane.
///
/// Always satisfies `1 <= min <= max <= sample_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexWindow {
    pub min: usize,
    pub max: usize,
}

impl IndexWindow {
    #[must_use]
    pub fn full(sample_count: usize) -> Self {
        Self {
            min: 1,
            max: sample_count.max(1),
        }
    }

    /// Samples covering `[domain_min, domain_max]` plus `margin` (domain
    /// units) on both sides, widened by one sample on the left and two on the
    /// right so polylines leave the plot before they end.
    #[must_use]
    pub fn compute(
        x_base: f64,
        interval: f64,
        sample_count: usize,
        domain_min: f64,
        domain_max: f64,
        margin: f64,
    ) -> Self {
        let count = sample_count.max(1);
        let interval = floor_extent(interval);

        let raw_min = ((domain_min - x_base - margin) / interval).floor() + 1.0;
        let min = if raw_min.is_finite() && raw_min > 1.0 {
            (raw_min as usize).min(count)
        } else {
            1
        };

        let raw_max = ((domain_max - x_base + margin) / interval).ceil() + 2.0;
        let max = if raw_max.is_nan() || raw_max >= count as f64 {
            count
        } else if raw_max < 1.0 {
            1
        } else {
            raw_max as usize
        };

        Self {
            min: min.min(max),
            max,
        }
    }

    #[must_use]
    pub fn span(self) -> usize {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        (self.min..=self.max).contains(&index)
    }
}

/// Animated vertical extent of a pane.
///
/// Both the lower bound and the extent ease toward their targets so a
/// rescale never snaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalRange {
    min: Tween,
    extent: Tween,
}

impl VerticalRange {
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self {
            min: Tween::new(0.0, duration),
            extent: Tween::new(1.0, duration),
        }
    }

    /// Target `(min, max)` the range is heading to.
    #[must_use]
    pub fn target(&self) -> (f64, f64) {
        let min = self.min.target();
        (min, min + self.extent.target())
    }

    /// Currently displayed `(min, extent)`.
    #[must_use]
    pub fn current(&self) -> (f64, f64) {
        (self.min.current(), self.extent.current())
    }

    /// Starts easing toward `[min, max]`; returns `false` when the target is
    /// unchanged.
    pub fn play(&mut self, min: f64, max: f64, now: f64) -> bool {
        let extent = floor_value_extent(max - min, min);
        if self.min.target() == min && self.extent.target() == extent {
            return false;
        }
        self.min.play(min, now);
        self.extent.play(extent, now);
        true
    }

    pub fn snap(&mut self, min: f64, max: f64) {
        self.min.snap(min);
        self.extent.snap(floor_value_extent(max - min, min));
    }

    pub fn update(&mut self, now: f64) -> bool {
        let min_changed = self.min.update(now);
        let extent_changed = self.extent.update(now);
        min_changed || extent_changed
    }

    /// Transform placing the displayed range between `bottom` and
    /// `bottom - height`.
    #[must_use]
    pub fn transform(&self, bottom: f64, height: f64) -> AxisTransform {
        let (min, extent) = self.current();
        AxisTransform::fit_vertical(bottom, height, min, extent)
    }
}

/// Domain, horizontal transform and vertical range of one pane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaneViewport {
    domain_min: f64,
    domain_max: f64,
    horizontal: AxisTransform,
    pub vertical: VerticalRange,
}

impl PaneViewport {
    #[must_use]
    pub fn new(domain_min: f64, domain_max: f64, scale_duration: f64) -> Self {
        Self {
            domain_min,
            domain_max,
            horizontal: AxisTransform::default(),
            vertical: VerticalRange::new(scale_duration),
        }
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn domain_span(&self) -> f64 {
        self.domain_max - self.domain_min
    }

    #[must_use]
    pub fn horizontal(&self) -> AxisTransform {
        self.horizontal
    }

    pub fn set_domain(&mut self, domain_min: f64, domain_max: f64) {
        self.domain_min = domain_min;
        self.domain_max = domain_max;
    }

    /// Refits the horizontal transform to the current domain.
    pub fn fit_horizontal(&mut self, surface_width: f64, padding: f64) {
        self.horizontal =
            AxisTransform::fit_horizontal(surface_width, padding, self.domain_min, self.domain_max);
    }
}

/// `(min, max)` over `values`, with the minimum optionally pinned.
///
/// With nothing to measure the result is `[pinned_or_zero, +1]`, which keeps
/// an empty pane's scale finite.
#[must_use]
pub fn value_extent<'a>(
    spans: impl IntoIterator<Item = &'a [f64]>,
    force_min: Option<f64>,
) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for span in spans {
        for &value in span {
            min = min.min(value);
            max = max.max(value);
        }
    }
    let min = match force_min {
        Some(pinned) => pinned,
        None if min.is_finite() => min,
        None => 0.0,
    };
    if !max.is_finite() {
        return (min, min + 1.0);
    }
    (min, max.max(min))
}

#[cfg(test)]
mod tests {
    use super::{IndexWindow, VerticalRange, value_extent};

    #[test]
    fn window_covers_full_three_sample_series() {
        let window = IndexWindow::compute(0.0, 86_400_000.0, 3, 0.0, 172_800_000.0, 1_000.0);
        assert_eq!(window, IndexWindow { min: 1, max: 3 });
    }

    #[test]
    fn window_adds_margin_samples_inside_long_series() {
        let window = IndexWindow::compute(0.0, 1.0, 100, 10.0, 20.0, 0.0);
        assert_eq!(window, IndexWindow { min: 11, max: 22 });
        assert_eq!(window.span(), 11);
        assert!(window.contains(15));
    }

    #[test]
    fn window_stays_ordered_for_out_of_range_domains() {
        let past_end = IndexWindow::compute(0.0, 1.0, 10, 50.0, 60.0, 0.0);
        assert_eq!(past_end, IndexWindow { min: 10, max: 10 });
        let before_start = IndexWindow::compute(0.0, 1.0, 10, -60.0, -50.0, 0.0);
        assert_eq!(before_start, IndexWindow { min: 1, max: 1 });
    }

    #[test]
    fn vertical_range_ignores_unchanged_target() {
        let mut range = VerticalRange::new(400.0);
        range.snap(0.0, 10.0);
        assert!(!range.play(0.0, 10.0, 5.0));
        assert!(range.play(0.0, 20.0, 5.0));
        assert_eq!(range.target(), (0.0, 20.0));
        assert_eq!(range.current(), (0.0, 10.0));
        assert!(range.update(105.0));
        assert!(range.update(405.0));
        assert_eq!(range.current(), (0.0, 20.0));
    }

    #[test]
    fn extent_handles_empty_and_pinned_inputs() {
        assert_eq!(value_extent(std::iter::empty::<&[f64]>(), None), (0.0, 1.0));
        let values = [10.0, 20.0, 15.0];
        assert_eq!(value_extent([&values[..]], None), (10.0, 20.0));
        assert_eq!(value_extent([&values[..]], Some(0.0)), (0.0, 20.0));
    }
}
