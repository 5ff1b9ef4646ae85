use serde::{Deserialize, Serialize};

use super::{ColorData, Skin, Texture, TextureTransform};
use crate::material::Material;

/// Sidecar description of one exported M2 model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct M2 {
    #[serde(rename = "fileDataID")]
    pub file_data_id: u32,
    pub file_name: String,
    pub internal_name: String,
    pub skin: Option<Skin>,
    pub textures: Vec<Texture>,
    pub texture_types: Vec<i16>,
    pub materials: Vec<Material>,
    pub texture_combos: Vec<i16>,
    pub colors: Vec<ColorData>,
    pub texture_transforms: Vec<TextureTransform>,
    pub texture_transforms_lookup: Vec<u32>,
}

impl M2 {
    /// Position of the first texture bound to `material_name`
    pub fn texture_index_for(&self, material_name: &str) -> Option<usize> {
        self.textures
            .iter()
            .position(|texture| texture.is_for_material(material_name))
    }
}
