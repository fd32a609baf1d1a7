//! Scene-side state the sequencer mutates each tick.
//!
//! These types avoid platform-specific APIs so they can be driven from host
//! tests as well as from the web frontend, which turns them into camera
//! matrices and DOM opacity writes.

use crate::constants::{
    camera_fovy_radians, CAMERA_ZFAR, CAMERA_ZNEAR, INITIAL_EYE, INITIAL_LOOK_TARGET,
    SECTION_COUNT,
};
use glam::{Mat4, Vec3};

/// Where the camera sits and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub look_target: Vec3,
}

impl CameraPose {
    pub const INITIAL: CameraPose = CameraPose {
        eye: INITIAL_EYE,
        look_target: INITIAL_LOOK_TARGET,
    };

    pub fn new(eye: Vec3, look_target: Vec3) -> Self {
        Self { eye, look_target }
    }

    /// True when both channels are within `tolerance` of `other`.
    pub fn approx_eq(&self, other: &CameraPose, tolerance: f32) -> bool {
        self.eye.abs_diff_eq(other.eye, tolerance)
            && self.look_target.abs_diff_eq(other.look_target, tolerance)
    }

    pub fn is_finite(&self) -> bool {
        self.eye.is_finite() && self.look_target.is_finite()
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Showcase camera at the opening pose for a viewport of the given aspect.
    pub fn showcase(aspect: f32) -> Self {
        Self {
            eye: INITIAL_EYE,
            target: INITIAL_LOOK_TARGET,
            up: Vec3::Y,
            aspect,
            fovy_radians: camera_fovy_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn set_pose(&mut self, pose: &CameraPose) {
        self.eye = pose.eye;
        self.target = pose.look_target;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    ///
    /// Several tour shots aim the camera at its own position; in that case it
    /// looks down -Z.
    pub fn view_matrix(&self) -> Mat4 {
        let target = if (self.target - self.eye).length_squared() <= f32::EPSILON {
            self.eye - Vec3::Z
        } else {
            self.target
        };
        Mat4::look_at_rh(self.eye, target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Opacity of each text section, always within \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionOpacity([f32; SECTION_COUNT]);

impl SectionOpacity {
    /// Every section hidden.
    pub const HIDDEN: SectionOpacity = SectionOpacity([0.0; SECTION_COUNT]);

    pub fn get(&self, section: usize) -> Option<f32> {
        self.0.get(section).copied()
    }

    /// Store `value` clamped to \[0, 1\].
    ///
    /// NaN is ignored and the previous value kept, matching how the browser
    /// drops an invalid `opacity` declaration.
    pub fn set(&mut self, section: usize, value: f32) {
        if value.is_nan() {
            return;
        }
        match self.0.get_mut(section) {
            Some(slot) => *slot = value.clamp(0.0, 1.0),
            None => log::warn!("opacity write to unknown section {section}"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.0.iter().copied().enumerate()
    }

    /// Index of the most opaque section, `None` when all are hidden.
    ///
    /// Ties go to the later section.
    pub fn most_visible(&self) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, v) in self.iter() {
            if v <= 0.0 {
                continue;
            }
            match best {
                Some((_, bv)) if v < bv => {}
                _ => best = Some((i, v)),
            }
        }
        best.map(|(i, _)| i)
    }

    pub fn as_array(&self) -> &[f32; SECTION_COUNT] {
        &self.0
    }
}

impl Default for SectionOpacity {
    fn default() -> Self {
        Self::HIDDEN
    }
}

/// Everything a segment may touch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneState {
    pub camera: CameraPose,
    pub sections: SectionOpacity,
}
