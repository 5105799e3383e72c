//! Progress scheduler: where a visit sits in its planned course.

/// Normalized completion of `visit_index` within a course of `total_count`
/// visits that starts at `start_index` (the anchor, progress 0.0). The last
/// planned visit reaches 1.0; indices outside the window are clamped.
pub fn progress(visit_index: u32, start_index: u32, total_count: u32) -> f64 {
    if visit_index <= start_index {
        return 0.0;
    }
    if total_count <= 1 {
        return 1.0;
    }
    let elapsed = f64::from(visit_index - start_index);
    let span = f64::from(total_count - 1);
    (elapsed / span).min(1.0)
}

/// Front-loaded response curve: most of the change lands early in the
/// course. Monotone on `[0, 1]` with `ease(0) = 0` and `ease(1) = 1`.
pub fn ease(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powf(1.5)
}
