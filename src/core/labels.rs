use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::tween::Tween;
use crate::core::viewport::IndexWindow;

/// Smallest power of two `>= samples_visible / target_count`, at least 1.
///
/// Power-of-two steps nest: every label of a coarser step is also a label of
/// the finer one, which is what lets two generations cross-fade cleanly.
#[must_use]
pub fn x_label_step(domain_span: f64, interval: f64, target_count: usize) -> usize {
    let ratio = domain_span / interval / target_count.max(1) as f64;
    if !ratio.is_finite() || ratio <= 1.0 {
        return 1;
    }
    let mut step = 1usize;
    while (step as f64) < ratio && step < usize::MAX / 2 {
        step *= 2;
    }
    step
}

/// Value spacing between y-axis grid rows for a vertical extent.
#[must_use]
pub fn y_label_step(extent: f64, target_count: usize) -> f64 {
    let raw = extent / target_count.max(1) as f64;
    let floored = raw.floor();
    if floored > 0.0 { floored } else { raw }
}

/// Sample indices carrying an x label, walking down from the last sample.
///
/// Anchoring at the last sample keeps labels fixed to their samples while the
/// window pans. With `skip` only the labels between those of a twice-coarser
/// step are produced. Indices start at the highest one inside `window` and
/// stop one sample before `window.min`.
pub fn x_label_indices(
    last: usize,
    window: IndexWindow,
    step: usize,
    skip: bool,
) -> impl Iterator<Item = usize> {
    let step = step.max(1);
    let stride = if skip { step * 2 } else { step };
    let lower = window.min.saturating_sub(1).max(1);
    let anchor = if skip { last.checked_sub(step) } else { Some(last) };
    let start = anchor
        .and_then(|anchor| {
            if anchor > window.max {
                let behind = (anchor - window.max).div_ceil(stride) * stride;
                anchor.checked_sub(behind)
            } else {
                Some(anchor)
            }
        })
        .filter(|&start| start >= lower);
    std::iter::successors(start, move |&index| {
        index.checked_sub(stride).filter(|&next| next >= lower)
    })
}

/// One set of axis labels sharing a step, faded in or out as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelGeneration {
    pub step: f64,
    /// Value the y-axis rows count up from; unused for the x-axis.
    pub base: f64,
    pub fade: Tween,
}

impl LabelGeneration {
    fn new(duration: f64) -> Self {
        Self {
            step: 1.0,
            base: 0.0,
            fade: Tween::new(0.0, duration),
        }
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.fade.current()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.alpha() > 0.0
    }
}

/// Outgoing and incoming label generations of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelFade {
    pub old: LabelGeneration,
    pub new: LabelGeneration,
}

impl LabelFade {
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self {
            old: LabelGeneration::new(duration),
            new: LabelGeneration::new(duration),
        }
    }

    /// Shows `step` immediately with no outgoing generation.
    pub fn reset(&mut self, step: f64, base: f64) {
        self.old.step = step;
        self.old.base = base;
        self.old.fade.snap(0.0);
        self.new.step = step;
        self.new.base = base;
        self.new.fade.snap(1.0);
    }

    /// Retargets the x-axis label density; returns `true` when the step changed.
    ///
    /// A finer step keeps the coarse labels fully opaque and fades the extra
    /// ones in; a coarser step keeps the survivors opaque and fades the
    /// dropped ones out.
    pub fn retarget_x(&mut self, step: usize, now: f64) -> bool {
        let step = step as f64;
        if step == self.new.step {
            return false;
        }
        trace!(from = self.new.step, to = step, "x label step changed");
        if step < self.new.step {
            self.old.step = self.new.step;
            self.old.fade.set_current(1.0);
            self.old.fade.play(1.0, now);

            self.new.step = step;
            self.new.fade.set_current(0.0);
            self.new.fade.play(1.0, now);
        } else {
            self.old.step = self.new.step;
            self.old.fade.set_current(self.new.fade.current());
            self.old.fade.play(0.0, now);

            self.new.step = step;
            self.new.fade.set_current(1.0);
            self.new.fade.play(1.0, now);
        }
        true
    }

    /// Replaces the y-axis rows after a vertical rescale; the outgoing rows
    /// fade out from wherever the incoming ones had reached.
    pub fn retarget_y(&mut self, step: f64, base: f64, now: f64) {
        trace!(step, base, "y label rows changed");
        self.old.step = self.new.step;
        self.old.base = self.new.base;
        self.old.fade.set_current(self.new.fade.current());
        self.old.fade.play(0.0, now);

        self.new.step = step;
        self.new.base = base;
        self.new.fade.set_current(1.0 - self.old.fade.current());
        self.new.fade.play(1.0, now);
    }

    pub fn update(&mut self, now: f64) -> bool {
        let old_changed = self.old.fade.update(now);
        let new_changed = self.new.fade.update(now);
        old_changed || new_changed
    }

    /// `(old_skips, new_skips)`: the finer generation only draws the labels
    /// the coarser one lacks, so no position is painted twice.
    #[must_use]
    pub fn skip_flags(&self) -> (bool, bool) {
        let new_is_finer = self.old.step > self.new.step;
        (!new_is_finer, new_is_finer)
    }
}
