/// Index stride that keeps a polyline near one point per horizontal pixel.
///
/// Always `>= 1`. Rounds up: a floored stride overshoots the
/// `drawable_width + 2` point bound whenever the span is not a multiple of
/// the width.
#[must_use]
pub fn decimation_stride(min: usize, max: usize, drawable_width: f64) -> usize {
    let span = max.saturating_sub(min) as f64;
    let width = if drawable_width.is_finite() && drawable_width >= 1.0 {
        drawable_width.floor()
    } else {
        1.0
    };
    let stride = (span / width).ceil();
    if stride.is_finite() && stride > 1.0 {
        stride as usize
    } else {
        1
    }
}

/// 1-based sample indices to draw for the inclusive span `[min, max]`: the
/// first sample, then every `stride`-th sample after it.
///
/// Yields at most `drawable_width + 2` indices.
pub fn decimated_indices(
    min: usize,
    max: usize,
    drawable_width: f64,
) -> impl Iterator<Item = usize> {
    let stride = decimation_stride(min, max, drawable_width);
    std::iter::once(min).chain((min + 1..=max).step_by(stride))
}
