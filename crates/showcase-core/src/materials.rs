//! Material finishes for product meshes.
//!
//! Each authored material carries an explicit class tag such as `"glass"` or
//! `"paint:translucent"`. The tag is set when the asset is authored and
//! decides which Phong finish (if any) replaces the authored material.

use crate::catalog::Product;
use crate::error::ShowcaseError;
use std::fmt;
use std::str::FromStr;

/// What a surface is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Substance {
    Glass,
    Metal,
    Paint,
    Plain,
}

/// Optional finish qualifier authored next to the substance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sheen {
    #[default]
    Unspecified,
    Gloss,
    Matte,
    Translucent,
    /// Solid, unreflective colour (the red, brown and white paints).
    Flat,
    /// Any other named variant of the substance.
    Accent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialClass {
    pub substance: Substance,
    pub sheen: Sheen,
}

impl MaterialClass {
    pub const fn new(substance: Substance, sheen: Sheen) -> Self {
        Self { substance, sheen }
    }

    pub const fn plain() -> Self {
        Self::new(Substance::Plain, Sheen::Unspecified)
    }
}

impl FromStr for MaterialClass {
    type Err = ShowcaseError;

    /// Parse `substance[:sheen]`, case-insensitive.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let unknown = || ShowcaseError::UnknownMaterialTag(tag.to_string());
        let lower = tag.trim().to_ascii_lowercase();
        let (substance, sheen) = match lower.split_once(':') {
            Some((s, f)) => (s, Some(f)),
            None => (lower.as_str(), None),
        };
        let substance = match substance {
            "glass" => Substance::Glass,
            "metal" => Substance::Metal,
            "paint" => Substance::Paint,
            "plain" | "" => Substance::Plain,
            _ => return Err(unknown()),
        };
        let sheen = match sheen {
            None => Sheen::Unspecified,
            Some("gloss") => Sheen::Gloss,
            Some("matte") => Sheen::Matte,
            Some("translucent") => Sheen::Translucent,
            Some("flat") => Sheen::Flat,
            Some("accent") => Sheen::Accent,
            Some(_) => return Err(unknown()),
        };
        Ok(Self { substance, sheen })
    }
}

impl fmt::Display for MaterialClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let substance = match self.substance {
            Substance::Glass => "glass",
            Substance::Metal => "metal",
            Substance::Paint => "paint",
            Substance::Plain => "plain",
        };
        let sheen = match self.sheen {
            Sheen::Unspecified => return f.write_str(substance),
            Sheen::Gloss => "gloss",
            Sheen::Matte => "matte",
            Sheen::Translucent => "translucent",
            Sheen::Flat => "flat",
            Sheen::Accent => "accent",
        };
        write!(f, "{substance}:{sheen}")
    }
}

/// Flat-shaded Phong parameters that replace an authored material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhongFinish {
    pub shininess: f32,
    pub roughness: f32,
    pub flat_shading: bool,
    /// `Some` marks the finish as transparent with this opacity.
    pub opacity: Option<f32>,
}

impl PhongFinish {
    pub const fn new(shininess: f32, roughness: f32) -> Self {
        Self {
            shininess,
            roughness,
            flat_shading: true,
            opacity: None,
        }
    }

    pub const fn translucent(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// Finish to apply to a material of `class` on `product`.
///
/// `None` keeps the authored material untouched.
pub fn finish_for(product: Product, class: MaterialClass) -> Option<PhongFinish> {
    use Sheen::*;
    use Substance::*;
    match product {
        Product::Shelf => (class.substance != Metal).then(|| PhongFinish::new(100.0, 0.0)),
        Product::CoffeeGrinder => {
            matches!(class.substance, Paint | Plain).then(|| PhongFinish::new(100.0, 0.0))
        }
        Product::Radio => Some(PhongFinish::new(50.0, 65.0)),
        Product::Clock => match (class.substance, class.sheen) {
            (Glass, _) => None,
            (_, Gloss) => Some(PhongFinish::new(100.0, 10.0)),
            _ => Some(PhongFinish::new(100.0, 100.0)),
        },
        Product::LargeSpeaker => None,
        Product::RecordPlayer => (class.substance == Paint).then(|| PhongFinish::new(100.0, 40.0)),
        // Every juicer material ends up glossy, black and red trim included.
        Product::Juicer => Some(PhongFinish::new(100.0, 0.0)),
        Product::Fan => (class.sheen == Matte).then(|| PhongFinish::new(100.0, 50.0)),
        Product::Razor => (class.substance == Paint).then(|| PhongFinish::new(100.0, 25.0)),
        Product::Tp1 => match (class.substance, class.sheen) {
            (Paint, Translucent) => Some(PhongFinish::new(100.0, 0.0).translucent(0.6)),
            (Paint, Flat) => Some(PhongFinish::new(100.0, 100.0)),
            (Paint, _) => Some(PhongFinish::new(100.0, 50.0)),
            _ => None,
        },
        Product::Calculator => match (class.substance, class.sheen) {
            (Paint, Unspecified) => Some(PhongFinish::new(100.0, 50.0)),
            (Paint, _) => Some(PhongFinish::new(100.0, 25.0)),
            _ => None,
        },
    }
}
