// Host-side tests for the web front end's DOM hooks and render settings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use showcase_core::SECTION_COUNT;

#[test]
fn section_selectors_match_page_markup() {
    assert_eq!(section_selector(0), "#section-0 .section-content");
    assert_eq!(
        section_selector(SECTION_COUNT - 1),
        "#section-11 .section-content"
    );
}

#[test]
fn asset_urls_are_rooted_and_encoded() {
    assert_eq!(asset_url("fan.glb"), "/fan.glb");
    assert_eq!(asset_url("coffee grinder.glb"), "/coffee%20grinder.glb");
    for a in showcase_core::CATALOG.iter() {
        let url = asset_url(a.path);
        assert!(url.starts_with(ASSET_BASE_URL));
        assert!(!url.contains(' '), "{url}");
    }
}

#[test]
fn opacity_css_is_clamped() {
    assert_eq!(opacity_css(0.5), "0.5000");
    assert_eq!(opacity_css(1.7), "1.0000");
    assert_eq!(opacity_css(-0.2), "0.0000");
}

#[test]
fn backing_size_scales_by_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    // never zero-sized, never poisoned by a bad ratio
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(640.0, 480.0, f64::NAN), (640, 480));
    assert_eq!(backing_size(640.0, 480.0, 0.0), (640, 480));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_settings_are_sane() {
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(OPACITY_WRITE_EPSILON > 0.0 && OPACITY_WRITE_EPSILON < 0.01);
    assert!(CANVAS_STYLE.contains("position:fixed"));
}
