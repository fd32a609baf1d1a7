use glam::Vec3;

// Shared tuning constants for the tour and the renderer.

// Page layout
pub const SECTION_COUNT: usize = 12; // text sections stacked down the page
pub const SCROLL_PERCENT_MIN: f32 = 0.0;
pub const SCROLL_PERCENT_MAX: f32 = 100.0;

// Camera projection
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.001;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Opening shot: straight at the shelf from three units out
pub const INITIAL_EYE: Vec3 = Vec3::new(-0.075, 0.0, 3.0);
pub const INITIAL_LOOK_TARGET: Vec3 = Vec3::new(-0.075, 0.0, 0.0);

// Max distance between the pose one segment leaves and the next one starts from
pub const CONTINUITY_TOLERANCE: f32 = 1e-4;

// Fades: previous section out over the first 2 points, next section in over the last 0.5
pub const FADE_OUT_SPAN: f32 = 2.0;
pub const FADE_IN_SPAN: f32 = 0.5;

#[inline]
pub fn camera_fovy_radians() -> f32 {
    CAMERA_FOVY_DEGREES.to_radians()
}
