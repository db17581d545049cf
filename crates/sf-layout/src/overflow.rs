//! Greedy prefix fit.

/// Number of leading items that fit beside the overflow control.
///
/// Items are taken in order while their running total stays within
/// `container_width - overflow_control_width`; a total exactly equal to the
/// available width still fits. The first item that does not fit ends the
/// prefix, even if later items are narrower.
///
/// Non-positive available width yields zero. A non-finite item width ends the
/// prefix, and negative widths count as zero.
#[must_use]
pub fn compute_visible_count(
    item_widths: &[f64],
    container_width: f64,
    overflow_control_width: f64,
) -> usize {
    let available = container_width - overflow_control_width;
    if available.is_nan() || available <= 0.0 {
        return 0;
    }

    let mut total = 0.0;
    for (i, &width) in item_widths.iter().enumerate() {
        if !width.is_finite() {
            return i;
        }
        total += width.max(0.0);
        if total > available {
            return i;
        }
    }

    item_widths.len()
}
