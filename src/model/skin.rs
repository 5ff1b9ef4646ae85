use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skin {
    pub sub_meshes: Vec<SubMesh>,
    pub texture_units: Vec<TextureUnit>,
}

impl Skin {
    /// First texture unit drawing the given geoset
    pub fn unit_for_geoset(&self, geoset_index: usize) -> Option<&TextureUnit> {
        self.texture_units
            .iter()
            .find(|unit| unit.geoset_index as usize == geoset_index)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubMesh {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextureUnit {
    pub skin_selection_index: u32,
    pub geoset_index: u32,
    pub color_index: u32,
}
