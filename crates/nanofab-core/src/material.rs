use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Material held by one voxel.
///
/// Persisted by its string tag (see [`Material::tag`]); the `u8`
/// discriminant is only used for in-memory comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Material {
    #[default]
    Empty = 0,
    Substrate = 1,
    Copper = 2,
    SiliconOxide = 3,
    AmorphousSilicon = 4,
    Photoresist = 5,
}

/// Every material, in discriminant order.
pub const ALL_MATERIALS: [Material; 6] = [
    Material::Empty,
    Material::Substrate,
    Material::Copper,
    Material::SiliconOxide,
    Material::AmorphousSilicon,
    Material::Photoresist,
];

impl Material {
    /// Stable tag used by saved snapshots and level data.
    pub fn tag(self) -> &'static str {
        match self {
            Material::Empty => "empty",
            Material::Substrate => "substrate",
            Material::Copper => "copper",
            Material::SiliconOxide => "silicon_oxide",
            Material::AmorphousSilicon => "amorphous_silicon",
            Material::Photoresist => "photoresist",
        }
    }

    /// Decode a tag produced by [`Material::tag`]. Unknown tags return None.
    pub fn from_tag(tag: &str) -> Option<Material> {
        ALL_MATERIALS.iter().copied().find(|m| m.tag() == tag)
    }

    /// Human-readable name for logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Material::Empty => "Empty",
            Material::Substrate => "Substrate",
            Material::Copper => "Cu",
            Material::SiliconOxide => "SiO2",
            Material::AmorphousSilicon => "a-Si",
            Material::Photoresist => "Photoresist",
        }
    }

    pub fn is_empty(self) -> bool {
        self == Material::Empty
    }
}

/// Written as a unit variant named by its tag: a bare identifier in RON, a
/// string in JSON.
impl Serialize for Material {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit_variant("Material", *self as u32, self.tag())
    }
}

/// Decoded only through [`Material::from_tag`].
impl<'de> Deserialize<'de> for Material {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_identifier(TagVisitor)
    }
}

struct TagVisitor;

impl<'de> Visitor<'de> for TagVisitor {
    type Value = Material;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a material tag")
    }

    fn visit_str<E: de::Error>(self, tag: &str) -> Result<Material, E> {
        Material::from_tag(tag).ok_or_else(|| E::unknown_variant(tag, &MATERIAL_TAGS))
    }
}

const MATERIAL_TAGS: [&str; 6] = [
    "empty",
    "substrate",
    "copper",
    "silicon_oxide",
    "amorphous_silicon",
    "photoresist",
];

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
