use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Texture {
    pub file_name_internal: Option<String>,
    pub file_name_external: Option<String>,
    pub mtl_name: Option<String>,
    pub flag: i16,
    #[serde(rename = "fileDataID")]
    pub file_data_id: u32,
}

impl Texture {
    pub fn is_for_material(&self, material_name: &str) -> bool {
        self.mtl_name.as_deref() == Some(material_name)
    }
}
