// DOM hooks and render settings for the web front end.
// Kept free of `web_sys` and `wgpu` types so host tests can include it.

// Canvas the renderer draws into; created and appended to <body> if missing
pub const CANVAS_ID: &str = "showcase-canvas";

// Text sections are `#section-N .section-content`, N in 0..SECTION_COUNT
pub const SECTION_ID_PREFIX: &str = "section-";
pub const SECTION_CONTENT_CLASS: &str = "section-content";

// Product meshes are served from the site root
pub const ASSET_BASE_URL: &str = "/";

// White page background behind the wall
pub const CLEAR_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];

// Multisample count for the scene pass
pub const MSAA_SAMPLES: u32 = 4;

// Opacity changes smaller than this are not written back to the DOM
pub const OPACITY_WRITE_EPSILON: f32 = 1e-4;

// Canvas stays fixed behind the scrolling text
pub const CANVAS_STYLE: &str =
    "position:fixed;top:0;left:0;width:100vw;height:100vh;z-index:-1;display:block";

/// Selector for the content block of section `index`.
pub fn section_selector(index: usize) -> String {
    format!("#{SECTION_ID_PREFIX}{index} .{SECTION_CONTENT_CLASS}")
}

/// URL for an asset path, with spaces percent-encoded.
pub fn asset_url(path: &str) -> String {
    format!("{ASSET_BASE_URL}{}", path.replace(' ', "%20"))
}

/// CSS `opacity` value for a section.
pub fn opacity_css(value: f32) -> String {
    format!("{:.4}", value.clamp(0.0, 1.0))
}

/// Backing-store size for a CSS box at the given device pixel ratio.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let w = (css_width * dpr).max(0.0) as u32;
    let h = (css_height * dpr).max(0.0) as u32;
    (w.max(1), h.max(1))
}
