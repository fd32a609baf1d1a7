// Host-side tests for the interpolation helpers and scroll normalisation.

use rand::prelude::*;
use showcase_core::{lerp, lerp_vec3, scale_percent, scroll_percent};

#[test]
fn lerp_matches_reference_values() {
    assert_eq!(lerp(20.0, 60.0, 0.5), 40.0);
    assert_eq!(lerp(-20.0, 60.0, 0.5), 20.0);
    assert_eq!(lerp(20.0, 60.0, 0.75), 50.0);
    assert!((lerp(-20.0, -10.0, 0.1) - (-19.0)).abs() < 1e-5);
}

#[test]
fn lerp_hits_endpoints_for_random_inputs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let x: f32 = rng.gen_range(-1000.0..1000.0);
        let y: f32 = rng.gen_range(-1000.0..1000.0);
        assert_eq!(lerp(x, y, 0.0), x, "lerp({x}, {y}, 0)");
        assert_eq!(lerp(x, y, 1.0), y, "lerp({x}, {y}, 1)");
    }
}

#[test]
fn lerp_extrapolates_outside_unit_range() {
    assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
    assert_eq!(lerp(0.0, 10.0, -1.0), -10.0);
}

#[test]
fn lerp_vec3_is_componentwise() {
    let a = glam::Vec3::new(0.0, 10.0, -4.0);
    let b = glam::Vec3::new(2.0, 20.0, 4.0);
    let m = lerp_vec3(a, b, 0.5);
    assert_eq!(m, glam::Vec3::new(1.0, 15.0, 0.0));
}

#[test]
fn scale_percent_is_zero_at_start_and_one_at_end() {
    assert_eq!(scale_percent(12.0, 12.0, 19.0), 0.0);
    assert_eq!(scale_percent(19.0, 12.0, 19.0), 1.0);
    assert_eq!(scale_percent(15.5, 12.0, 19.0), 0.5);
}

#[test]
fn scale_percent_is_linear_between_bounds() {
    let (start, end) = (30.0_f32, 37.0_f32);
    let mut prev = scale_percent(start, start, end);
    let step = 0.25;
    let mut p = start + step;
    while p <= end {
        let cur = scale_percent(p, start, end);
        let delta = cur - prev;
        assert!((delta - step / (end - start)).abs() < 1e-5, "delta {delta} at {p}");
        prev = cur;
        p += step;
    }
}

#[test]
fn scale_percent_with_empty_range_is_not_finite() {
    assert!(!scale_percent(5.0, 5.0, 5.0).is_finite());
    assert!(!scale_percent(6.0, 5.0, 5.0).is_finite());
}

#[test]
fn scroll_percent_normalises_and_clamps() {
    assert_eq!(scroll_percent(0.0, 2000.0, 1000.0), 0.0);
    assert_eq!(scroll_percent(500.0, 2000.0, 1000.0), 50.0);
    assert_eq!(scroll_percent(1000.0, 2000.0, 1000.0), 100.0);
    // overscroll bounce
    assert_eq!(scroll_percent(1100.0, 2000.0, 1000.0), 100.0);
    assert_eq!(scroll_percent(-40.0, 2000.0, 1000.0), 0.0);
}

#[test]
fn scroll_percent_without_scroll_range_is_zero() {
    assert_eq!(scroll_percent(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_percent(10.0, 600.0, 800.0), 0.0);
    assert_eq!(scroll_percent(f64::NAN, 2000.0, 1000.0), 0.0);
}
