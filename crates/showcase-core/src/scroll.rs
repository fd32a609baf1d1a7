use crate::constants::{SCROLL_PERCENT_MAX, SCROLL_PERCENT_MIN};

/// Normalise a document scroll offset into a 0..=100 percentage.
///
/// `scroll_height - client_height` is the scrollable range. Pages that do not
/// scroll report 0.
#[inline]
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f32 {
    let range = scroll_height - client_height;
    if range.is_nan() || range <= 0.0 || !scroll_top.is_finite() {
        return SCROLL_PERCENT_MIN;
    }
    ((scroll_top / range * 100.0) as f32).clamp(SCROLL_PERCENT_MIN, SCROLL_PERCENT_MAX)
}
