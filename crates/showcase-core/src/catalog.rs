//! Products on the shelf and where they sit.
//!
//! Positions and rotations are in world units (the shelf's back wall is the
//! z = 0 plane). Meshes are loaded from `path`; until one arrives, or if it
//! never does, the product is simply absent from the scene.

use crate::materials::{MaterialClass, Sheen, Substance};
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Product {
    Shelf,
    CoffeeGrinder,
    Radio,
    Clock,
    LargeSpeaker,
    RecordPlayer,
    Juicer,
    Fan,
    Razor,
    Tp1,
    Calculator,
}

impl Product {
    pub const COUNT: usize = 11;

    /// Stable index into per-product tables, matching [`CATALOG`] order.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        CATALOG[self.index()].name
    }
}

/// Box drawn in place of a mesh: half extents and base colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StandIn {
    pub half_extents: Vec3,
    pub color: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductAsset {
    pub product: Product,
    pub name: &'static str,
    pub path: &'static str,
    pub position: Vec3,
    pub rotation_degrees: Vec3,
    pub stand_in: StandIn,
    /// Class of the product's main body material.
    pub body: MaterialClass,
}

impl ProductAsset {
    /// Local-to-world transform (XYZ Euler, then translation).
    pub fn transform(&self) -> Mat4 {
        let r = self.rotation_degrees;
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            r.x.to_radians(),
            r.y.to_radians(),
            r.z.to_radians(),
        );
        Mat4::from_rotation_translation(rotation, self.position)
    }

    /// Transform of the stand-in box, scaled to its extents.
    pub fn stand_in_transform(&self) -> Mat4 {
        self.transform() * Mat4::from_scale(self.stand_in.half_extents)
    }
}

const fn stand_in(half_extents: Vec3, color: [f32; 3]) -> StandIn {
    StandIn {
        half_extents,
        color,
    }
}

/// All products, in load order.
pub static CATALOG: [ProductAsset; Product::COUNT] = [
    ProductAsset {
        product: Product::Shelf,
        name: "shelf",
        path: "shelf.glb",
        position: Vec3::new(0.0, -1.0, 0.0),
        rotation_degrees: Vec3::ZERO,
        stand_in: stand_in(Vec3::new(1.6, 0.02, 0.3), [0.55, 0.4, 0.28]),
        body: MaterialClass::plain(),
    },
    ProductAsset {
        product: Product::CoffeeGrinder,
        name: "coffee grinder",
        path: "coffee grinder.glb",
        position: Vec3::new(-0.75, 0.755, 0.1),
        rotation_degrees: Vec3::ZERO,
        stand_in: stand_in(Vec3::new(0.06, 0.1, 0.06), [0.2, 0.2, 0.22]),
        body: MaterialClass::new(Substance::Paint, Sheen::Unspecified),
    },
    ProductAsset {
        product: Product::Radio,
        name: "radio",
        path: "radio.glb",
        position: Vec3::new(-0.25, -0.12, 0.25),
        rotation_degrees: Vec3::ZERO,
        stand_in: stand_in(Vec3::new(0.14, 0.08, 0.06), [0.75, 0.3, 0.2]),
        body: MaterialClass::plain(),
    },
    ProductAsset {
        product: Product::Clock,
        name: "clock",
        path: "clock.glb",
        position: Vec3::new(1.0, -0.1625, 0.1),
        rotation_degrees: Vec3::ZERO,
        stand_in: stand_in(Vec3::new(0.08, 0.08, 0.03), [0.9, 0.88, 0.8]),
        body: MaterialClass::new(Substance::Plain, Sheen::Gloss),
    },
    ProductAsset {
        product: Product::LargeSpeaker,
        name: "large speaker",
        path: "large speaker.glb",
        position: Vec3::new(-1.375, 0.22, 0.25),
        rotation_degrees: Vec3::ZERO,
        stand_in: stand_in(Vec3::new(0.15, 0.25, 0.15), [0.12, 0.12, 0.12]),
        body: MaterialClass::plain(),
    },
    ProductAsset {
        product: Product::RecordPlayer,
        name: "record player",
        path: "record player.glb",
        position: Vec3::new(0.375, -0.423, 0.35),
        rotation_degrees: Vec3::ZERO,
        stand_in: stand_in(Vec3::new(0.2, 0.05, 0.17), [0.6, 0.45, 0.3]),
        body: MaterialClass::new(Substance::Paint, Sheen::Unspecified),
    },
    ProductAsset {
        product: Product::Juicer,
        name: "juicer",
        path: "juicer.glb",
        position: Vec3::new(-0.6, 0.865, 0.1),
        rotation_degrees: Vec3::ZERO,
        stand_in: stand_in(Vec3::new(0.05, 0.1, 0.05), [0.8, 0.15, 0.15]),
        body: MaterialClass::new(Substance::Paint, Sheen::Accent),
    },
    ProductAsset {
        product: Product::Fan,
        name: "fan",
        path: "fan.glb",
        position: Vec3::new(0.3, 0.825, 0.1),
        rotation_degrees: Vec3::ZERO,
        stand_in: stand_in(Vec3::new(0.1, 0.12, 0.05), [0.3, 0.55, 0.6]),
        body: MaterialClass::new(Substance::Plain, Sheen::Matte),
    },
    ProductAsset {
        product: Product::Razor,
        name: "razor",
        path: "razor.glb",
        position: Vec3::new(0.575, 0.348, 0.1),
        rotation_degrees: Vec3::ZERO,
        stand_in: stand_in(Vec3::new(0.02, 0.07, 0.02), [0.85, 0.85, 0.9]),
        body: MaterialClass::new(Substance::Paint, Sheen::Unspecified),
    },
    ProductAsset {
        product: Product::Tp1,
        name: "tp 1",
        path: "tp 1.glb",
        position: Vec3::new(-0.575, -0.042, 0.25),
        rotation_degrees: Vec3::ZERO,
        stand_in: stand_in(Vec3::new(0.06, 0.06, 0.06), [0.95, 0.95, 0.93]),
        body: MaterialClass::new(Substance::Paint, Sheen::Flat),
    },
    ProductAsset {
        product: Product::Calculator,
        name: "calculator",
        path: "calculator.glb",
        position: Vec3::new(1.2, -0.155, 0.2),
        rotation_degrees: Vec3::new(-90.0, 0.0, -60.0),
        stand_in: stand_in(Vec3::new(0.04, 0.06, 0.008), [0.25, 0.25, 0.28]),
        body: MaterialClass::new(Substance::Paint, Sheen::Unspecified),
    },
];

/// Asset entry for `product`.
pub fn asset(product: Product) -> &'static ProductAsset {
    &CATALOG[product.index()]
}
