// Host-side tests for asset bookkeeping and the packed GPU data.

use glam::Vec3;
use showcase_core::glb::{parse_header, GlbHeader, GLB_MAGIC};
use showcase_core::gpu::{order_for_blending, scene_instances, InstanceRaw, SceneUniforms};
use showcase_core::scene::{BACKDROP, EXPOSURE, LIGHT_RIG};
use showcase_core::{asset, AssetState, Camera, CameraPose, Product, SceneInventory, ShowcaseError};

fn glb(version: u32, length: u32, total: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(total);
    bytes.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    bytes.extend_from_slice(&version.to_le_bytes());
    bytes.extend_from_slice(&length.to_le_bytes());
    bytes.resize(total, 0);
    bytes
}

#[test]
fn glb_header_is_accepted() {
    let bytes = glb(2, 64, 64);
    assert_eq!(
        parse_header("fan.glb", &bytes),
        Ok(GlbHeader {
            version: 2,
            length: 64
        })
    );
    assert_eq!(&bytes[..4], b"glTF");
}

#[test]
fn malformed_glb_headers_are_rejected() {
    let cases = [
        ("short", glb(2, 12, 12)[..8].to_vec()),
        ("version", glb(1, 12, 12)),
        ("too long", glb(2, 100, 64)),
        ("too short", glb(2, 4, 64)),
        ("html", b"<!DOCTYPE html><html></html>".to_vec()),
    ];
    for (what, bytes) in cases {
        match parse_header("x.glb", &bytes) {
            Err(ShowcaseError::InvalidGlb { path, .. }) => assert_eq!(path, "x.glb", "{what}"),
            other => panic!("{what}: {other:?}"),
        }
    }
}

#[test]
fn inventory_tracks_outcomes_per_product() {
    let mut inv = SceneInventory::new();
    assert_eq!(inv.pending_count(), Product::COUNT);
    assert_eq!(inv.placed().count(), 0);

    let header = GlbHeader {
        version: 2,
        length: 1024,
    };
    inv.record(Product::Radio, Ok(header));
    inv.record(Product::Shelf, Ok(header));
    let err = ShowcaseError::AssetLoad {
        path: "clock.glb".into(),
        reason: "404".into(),
    };
    inv.record(Product::Clock, Err(err.clone()));

    assert_eq!(inv.pending_count(), Product::COUNT - 3);
    assert!(inv.is_placed(Product::Radio));
    assert!(!inv.is_placed(Product::Clock));
    assert_eq!(inv.state(Product::Fan), &AssetState::Pending);
    // catalogue order, not arrival order
    let placed: Vec<_> = inv.placed().map(|a| a.product).collect();
    assert_eq!(placed, vec![Product::Shelf, Product::Radio]);
    let failed: Vec<_> = inv.failed().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].0.product, Product::Clock);
    assert_eq!(failed[0].1, &err);
}

#[test]
fn instances_are_backdrop_then_placed_products() {
    let mut inv = SceneInventory::new();
    let mut out = vec![InstanceRaw::new(glam::Mat4::IDENTITY, [0.0; 3], 1.0, 0.0, 0.0)];
    scene_instances(&inv, &mut out);
    assert_eq!(out.len(), BACKDROP.len());

    let header = GlbHeader {
        version: 2,
        length: 12,
    };
    inv.record(Product::Tp1, Ok(header));
    inv.record(Product::Juicer, Ok(header));
    let opaque = scene_instances(&inv, &mut out);
    assert_eq!(out.len(), BACKDROP.len() + 2);
    assert_eq!(opaque, out.len());

    let juicer = &out[BACKDROP.len()];
    assert_eq!(juicer.finish[0], 100.0);
    assert_eq!(juicer.finish[1], 0.0);
    assert_eq!(juicer.color[3], 1.0);
    assert_eq!(*juicer, InstanceRaw::stand_in(asset(Product::Juicer)));
}

#[test]
fn translucent_instances_are_drawn_last() {
    let at = |x: f32, opacity: f32| {
        InstanceRaw::new(
            glam::Mat4::from_translation(Vec3::new(x, 0.0, 0.0)),
            [0.5; 3],
            opacity,
            100.0,
            0.0,
        )
    };
    let mut instances = vec![at(0.0, 1.0), at(1.0, 0.6), at(2.0, 1.0), at(3.0, 0.3), at(4.0, 1.0)];
    let opaque = order_for_blending(&mut instances);

    assert_eq!(opaque, 3);
    assert_eq!(instances, vec![at(0.0, 1.0), at(2.0, 1.0), at(4.0, 1.0), at(1.0, 0.6), at(3.0, 0.3)]);
    assert!(instances[opaque..].iter().all(InstanceRaw::is_translucent));

    let mut all_opaque = vec![at(0.0, 1.0), at(1.0, 1.0)];
    assert_eq!(order_for_blending(&mut all_opaque), 2);
}

#[test]
fn uniforms_carry_camera_and_lights() {
    let mut camera = Camera::showcase(16.0 / 9.0);
    camera.set_pose(&CameraPose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO));
    let u = SceneUniforms::new(&camera, &LIGHT_RIG);
    assert_eq!(u.eye, [1.0, 2.0, 3.0, 1.0]);
    assert_eq!(u.params[0], EXPOSURE);
    assert_eq!(u.key_dir[3], LIGHT_RIG.key.intensity);
    let key = Vec3::new(u.key_dir[0], u.key_dir[1], u.key_dir[2]);
    assert!((key.length() - 1.0).abs() < 1e-5);
    assert_eq!(u.view_proj, camera.view_projection().to_cols_array_2d());
}
