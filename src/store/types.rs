use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Material slot of an imported model, as the host importer produced it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportedMaterial {
    pub name: String,
    /// Asset path of the diffuse texture the importer found
    pub diffuse_texture: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportedRenderer {
    pub name: String,
    pub materials: Vec<ImportedMaterial>,
}

/// Imported model with its renderers and their shared materials
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportedModel {
    pub path: String,
    pub name: String,
    pub renderers: Vec<ImportedRenderer>,
}

impl ImportedModel {
    /// Every material slot in renderer order, repeats included
    pub fn materials(&self) -> impl Iterator<Item = &ImportedMaterial> {
        self.renderers.iter().flat_map(|r| r.materials.iter())
    }
}

/// Node of an instantiated model hierarchy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrefabNode {
    pub name: String,
    pub is_static: bool,
    /// Material asset path per slot, or the imported name when not remapped
    pub materials: Vec<String>,
    pub children: Vec<PrefabNode>,
}

impl PrefabNode {
    /// Instantiate `model`, swapping imported materials for their remapped assets
    pub fn instantiate(model: &ImportedModel, remaps: &BTreeMap<String, String>) -> Self {
        let children = model
            .renderers
            .iter()
            .map(|renderer| PrefabNode {
                name: renderer.name.clone(),
                is_static: false,
                materials: renderer
                    .materials
                    .iter()
                    .map(|m| remaps.get(&m.name).cloned().unwrap_or_else(|| m.name.clone()))
                    .collect(),
                children: Vec::new(),
            })
            .collect();

        Self {
            name: model.name.clone(),
            is_static: false,
            materials: Vec::new(),
            children,
        }
    }

    /// Mark the node and its direct children static
    pub fn mark_static(&mut self) {
        self.is_static = true;
        for child in &mut self.children {
            child.is_static = true;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prefab {
    pub path: String,
    pub root: PrefabNode,
}
