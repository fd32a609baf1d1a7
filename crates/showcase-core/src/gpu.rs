//! GPU-facing packed data for the scene shader.
//!
//! Layouts mirror the structs in `shaders/scene.wgsl`.

use crate::catalog::ProductAsset;
use crate::inventory::SceneInventory;
use crate::materials::finish_for;
use crate::scene::{LightRig, BACKDROP, BACKDROP_SHININESS, EXPOSURE};
use crate::state::Camera;
use glam::Mat4;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
    // xyz direction towards the light, w intensity
    pub key_dir: [f32; 4],
    pub key_color: [f32; 4],
    pub fill_dir: [f32; 4],
    pub fill_color: [f32; 4],
    // rgb ambient color, a intensity
    pub ambient: [f32; 4],
    // x exposure, yzw unused
    pub params: [f32; 4],
}

impl SceneUniforms {
    pub fn new(camera: &Camera, lights: &LightRig) -> Self {
        let rgb1 = |c: [f32; 3]| [c[0], c[1], c[2], 1.0];
        let kd = lights.key.direction();
        let fd = lights.fill.direction();
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            key_dir: [kd.x, kd.y, kd.z, lights.key.intensity],
            key_color: rgb1(lights.key.color),
            fill_dir: [fd.x, fd.y, fd.z, lights.fill.intensity],
            fill_color: rgb1(lights.fill.color),
            ambient: [
                lights.ambient_color[0],
                lights.ambient_color[1],
                lights.ambient_color[2],
                lights.ambient_intensity,
            ],
            params: [EXPOSURE, 0.0, 0.0, 0.0],
        }
    }
}

/// Per-instance data for one unit cube.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    // rgb base color, a opacity
    pub color: [f32; 4],
    // x shininess, y roughness (0..100), zw unused
    pub finish: [f32; 4],
}

impl InstanceRaw {
    pub fn new(model: Mat4, color: [f32; 3], opacity: f32, shininess: f32, roughness: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], opacity],
            finish: [shininess, roughness, 0.0, 0.0],
        }
    }

    pub fn is_translucent(&self) -> bool {
        self.color[3] < 1.0
    }

    /// Stand-in for a placed product, shaded with the finish its body material gets.
    pub fn stand_in(asset: &ProductAsset) -> Self {
        let (shininess, roughness, opacity) = match finish_for(asset.product, asset.body) {
            Some(f) => (f.shininess, f.roughness, f.opacity.unwrap_or(1.0)),
            None => (BACKDROP_SHININESS, 50.0, 1.0),
        };
        Self::new(
            asset.stand_in_transform(),
            asset.stand_in.color,
            opacity,
            shininess,
            roughness,
        )
    }
}

/// Backdrop boxes, then opaque placed products, then translucent ones.
///
/// Returns the number of opaque instances at the front of `out`.
pub fn scene_instances(inventory: &SceneInventory, out: &mut Vec<InstanceRaw>) -> usize {
    out.clear();
    for b in BACKDROP.iter() {
        out.push(InstanceRaw::new(
            b.transform(),
            b.color,
            1.0,
            BACKDROP_SHININESS,
            0.0,
        ));
    }
    out.extend(inventory.placed().map(InstanceRaw::stand_in));
    order_for_blending(out)
}

/// Move translucent instances behind the opaque ones, keeping relative order
/// within each group. Returns the opaque count.
pub fn order_for_blending(instances: &mut [InstanceRaw]) -> usize {
    instances.sort_by_key(InstanceRaw::is_translucent);
    instances.iter().take_while(|i| !i.is_translucent()).count()
}
