use serde::{Deserialize, Serialize};

/// Quadratic ease-out: `ease(0) = 0`, `ease(1) = 1`, monotonic on `[0, 1]`.
#[must_use]
pub fn ease_out_quad(progress: f64) -> f64 {
    -progress * (progress - 2.0)
}

/// Timed interpolation between two values driven by absolute clock time.
///
/// The interpolated value is a pure function of `now - start_time`, so a tween
/// advances identically regardless of how often or how irregularly it is
/// updated. `current` caches the value produced by the last `update` call and
/// is what renderers read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    from: f64,
    to: f64,
    current: f64,
    start_time: f64,
    duration: f64,
    delay: f64,
}

impl Tween {
    /// Creates a stationary tween resting at `value`.
    #[must_use]
    pub fn new(value: f64, duration: f64) -> Self {
        Self {
            from: value,
            to: value,
            current: value,
            start_time: 0.0,
            duration: duration.max(0.0),
            delay: 0.0,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.set_delay(delay);
        self
    }

    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.from
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn set_delay(&mut self, delay: f64) {
        self.delay = if delay.is_finite() { delay.max(0.0) } else { 0.0 };
    }

    #[must_use]
    pub fn is_stationary(&self) -> bool {
        self.current == self.to
    }

    /// Retargets the tween, continuing from the current value.
    ///
    /// Calls made before a previous run completes win over it: the new run
    /// starts wherever the old one had reached, so there is no visual jump.
    pub fn play(&mut self, target: f64, now: f64) {
        self.from = self.current;
        self.to = target;
        self.start_time = now;
    }

    /// Places the tween at rest on `value` without animating.
    pub fn snap(&mut self, value: f64) {
        self.from = value;
        self.to = value;
        self.current = value;
    }

    /// Overrides the current value while keeping the target.
    ///
    /// Used when a cross-fade restarts from a known alpha; the next `play`
    /// picks up from here.
    pub fn set_current(&mut self, value: f64) {
        self.current = value;
    }

    /// Interpolated value at `now`; does not mutate the tween.
    #[must_use]
    pub fn value_at(&self, now: f64) -> f64 {
        let progress = if self.duration > 0.0 {
            ((now - self.start_time - self.delay) / self.duration).clamp(0.0, 1.0)
        } else if now - self.start_time >= self.delay {
            1.0
        } else {
            0.0
        };
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_out_quad(progress)
    }

    /// Advances `current` to `now`; returns `true` when the value changed.
    pub fn update(&mut self, now: f64) -> bool {
        if self.is_stationary() {
            return false;
        }
        let next = self.value_at(now);
        let changed = next != self.current;
        self.current = next;
        changed
    }
}
