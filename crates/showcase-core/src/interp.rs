//! Interpolation helpers used by every keyframe segment.

use glam::Vec3;

/// Linear interpolation between `x` and `y`.
///
/// `a` is not clamped: values outside \[0, 1\] extrapolate.
///
/// ```
/// use showcase_core::lerp;
/// assert_eq!(lerp(20.0, 60.0, 0.5), 40.0);
/// assert_eq!(lerp(-20.0, 60.0, 0.5), 20.0);
/// assert_eq!(lerp(20.0, 60.0, 0.75), 50.0);
/// ```
#[inline]
pub fn lerp(x: f32, y: f32, a: f32) -> f32 {
    (1.0 - a) * x + a * y
}

/// Component-wise [`lerp`].
#[inline]
pub fn lerp_vec3(from: Vec3, to: Vec3, a: f32) -> Vec3 {
    Vec3::new(
        lerp(from.x, to.x, a),
        lerp(from.y, to.y, a),
        lerp(from.z, to.z, a),
    )
}

/// Fractional progress of `percent` through the sub-range `[start, end]`.
///
/// Returns 0 at `start` and 1 at `end`. When `start == end` the result is
/// non-finite and flows into whatever consumes it.
#[inline]
pub fn scale_percent(percent: f32, start: f32, end: f32) -> f32 {
    (percent - start) / (end - start)
}
