// Host-side tests for the product catalogue and material finishes.

use glam::Vec3;
use showcase_core::{
    asset, finish_for, MaterialClass, PhongFinish, Product, ShowcaseError, Sheen, Substance,
    CATALOG,
};

const ALL: [Product; Product::COUNT] = [
    Product::Shelf,
    Product::CoffeeGrinder,
    Product::Radio,
    Product::Clock,
    Product::LargeSpeaker,
    Product::RecordPlayer,
    Product::Juicer,
    Product::Fan,
    Product::Razor,
    Product::Tp1,
    Product::Calculator,
];

fn class(tag: &str) -> MaterialClass {
    tag.parse().unwrap_or_else(|e| panic!("{tag}: {e}"))
}

#[test]
fn catalog_is_indexed_by_product() {
    for p in ALL {
        assert_eq!(CATALOG[p.index()].product, p);
        assert_eq!(asset(p).product, p);
    }
    assert_eq!(Product::Tp1.name(), "tp 1");
    assert_eq!(asset(Product::LargeSpeaker).path, "large speaker.glb");
}

#[test]
fn every_asset_path_is_a_glb_named_after_the_product() {
    for a in CATALOG.iter() {
        assert_eq!(a.path, format!("{}.glb", a.name));
        assert!(a.stand_in.half_extents.cmpgt(Vec3::ZERO).all(), "{}", a.name);
    }
}

#[test]
fn calculator_lies_flat_and_turned() {
    let calc = asset(Product::Calculator);
    assert_eq!(calc.rotation_degrees, Vec3::new(-90.0, 0.0, -60.0));
    // local +Y (the long edge) ends up lying in the shelf plane
    let up = calc.transform().transform_vector3(Vec3::Y);
    assert!(up.y.abs() < 1e-5, "{up:?}");
    let origin = calc.transform().transform_point3(Vec3::ZERO);
    assert!(origin.abs_diff_eq(calc.position, 1e-6));
}

#[test]
fn unrotated_products_only_translate() {
    let fan = asset(Product::Fan);
    let p = fan.transform().transform_point3(Vec3::X);
    assert!(p.abs_diff_eq(fan.position + Vec3::X, 1e-6));
}

#[test]
fn material_tags_parse_case_insensitively() {
    assert_eq!(
        class("Paint:Translucent"),
        MaterialClass::new(Substance::Paint, Sheen::Translucent)
    );
    assert_eq!(class(" glass "), MaterialClass::new(Substance::Glass, Sheen::Unspecified));
    assert_eq!(class(""), MaterialClass::plain());
    for tag in ["metal", "paint:flat", "plain:gloss", "glass:accent"] {
        assert_eq!(class(tag).to_string(), tag);
    }
}

#[test]
fn unknown_material_tags_are_rejected() {
    assert_eq!(
        "chrome".parse::<MaterialClass>(),
        Err(ShowcaseError::UnknownMaterialTag("chrome".into()))
    );
    assert!("paint:sparkly".parse::<MaterialClass>().is_err());
}

#[test]
fn clock_glass_keeps_its_authored_material() {
    assert_eq!(finish_for(Product::Clock, class("glass:gloss")), None);
    assert_eq!(
        finish_for(Product::Clock, class("plain:gloss")),
        Some(PhongFinish::new(100.0, 10.0))
    );
    assert_eq!(
        finish_for(Product::Clock, class("metal")),
        Some(PhongFinish::new(100.0, 100.0))
    );
}

#[test]
fn tp1_paints_pick_their_finish() {
    let translucent = finish_for(Product::Tp1, class("paint:translucent")).unwrap();
    assert_eq!(translucent.roughness, 0.0);
    assert_eq!(translucent.opacity, Some(0.6));
    assert_eq!(
        finish_for(Product::Tp1, class("paint:flat")),
        Some(PhongFinish::new(100.0, 100.0))
    );
    assert_eq!(
        finish_for(Product::Tp1, class("paint:gloss")),
        Some(PhongFinish::new(100.0, 50.0))
    );
    assert_eq!(finish_for(Product::Tp1, class("metal")), None);
}

#[test]
fn juicer_is_glossy_everywhere() {
    for tag in ["paint:accent", "plain", "metal", "glass"] {
        assert_eq!(
            finish_for(Product::Juicer, class(tag)),
            Some(PhongFinish::new(100.0, 0.0)),
            "{tag}"
        );
    }
}

#[test]
fn product_specific_rules() {
    assert_eq!(finish_for(Product::Shelf, class("metal")), None);
    assert_eq!(
        finish_for(Product::Shelf, class("plain")),
        Some(PhongFinish::new(100.0, 0.0))
    );
    assert_eq!(finish_for(Product::CoffeeGrinder, class("glass")), None);
    assert_eq!(
        finish_for(Product::Radio, class("metal")),
        Some(PhongFinish::new(50.0, 65.0))
    );
    assert_eq!(finish_for(Product::LargeSpeaker, class("paint")), None);
    assert_eq!(
        finish_for(Product::RecordPlayer, class("paint:gloss")),
        Some(PhongFinish::new(100.0, 40.0))
    );
    assert_eq!(finish_for(Product::Fan, class("plain")), None);
    assert_eq!(
        finish_for(Product::Fan, class("metal:matte")),
        Some(PhongFinish::new(100.0, 50.0))
    );
    assert_eq!(
        finish_for(Product::Razor, class("paint:accent")),
        Some(PhongFinish::new(100.0, 25.0))
    );
    assert_eq!(
        finish_for(Product::Calculator, class("paint")),
        Some(PhongFinish::new(100.0, 50.0))
    );
    assert_eq!(
        finish_for(Product::Calculator, class("paint:accent")),
        Some(PhongFinish::new(100.0, 25.0))
    );
}

#[test]
fn replacement_finishes_are_flat_shaded() {
    for p in ALL {
        if let Some(f) = finish_for(p, asset(p).body) {
            assert!(f.flat_shading, "{}", p.name());
        }
    }
}
