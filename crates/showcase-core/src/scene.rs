//! Fixed scene furniture: backdrop boxes and lights.

use glam::{Mat4, Vec3};

/// Axis-aligned box placed once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropBox {
    pub name: &'static str,
    pub size: Vec3,
    pub position: Vec3,
    pub color: [f32; 3],
}

impl BackdropBox {
    /// Transform of a unit cube (half extent 1) scaled to `size`.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(self.size * 0.5)
    }
}

pub const WALL: BackdropBox = BackdropBox {
    name: "wall",
    size: Vec3::new(50.0, 50.0, 0.01),
    position: Vec3::new(0.0, 0.25, 0.0),
    color: [0.953, 0.953, 0.953], // #f3f3f3
};

pub const FLOOR: BackdropBox = BackdropBox {
    name: "floor",
    size: Vec3::new(50.0, 0.01, 3.5),
    position: Vec3::new(0.0, -1.5, 1.75),
    color: [0.639, 0.639, 0.639], // #a3a3a3
};

pub const BACKDROP: [BackdropBox; 2] = [WALL, FLOOR];

// Shininess used for the backdrop and for products that keep their authored material
pub const BACKDROP_SHININESS: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector from the scene origin towards the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

// Soft yellow light, #fffefb
pub const WARM_WHITE: [f32; 3] = [1.0, 0.996, 0.984];

/// Two warm key lights plus a flat ambient term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightRig {
    pub key: DirectionalLight,
    pub fill: DirectionalLight,
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
}

pub const LIGHT_RIG: LightRig = LightRig {
    key: DirectionalLight {
        position: Vec3::new(-10.0, 12.5, 5.0),
        color: WARM_WHITE,
        intensity: 1.5,
    },
    fill: DirectionalLight {
        position: Vec3::new(-15.0, 15.0, 10.0),
        color: WARM_WHITE,
        intensity: 1.0,
    },
    ambient_color: WARM_WHITE,
    ambient_intensity: 0.5,
};

// Tone mapping exposure applied in the scene shader
pub const EXPOSURE: f32 = 1.5;
