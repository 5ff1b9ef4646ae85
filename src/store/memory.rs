use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::path::asset_key;
use super::{AssetStore, ImportedModel, Prefab, PrefabNode};
use crate::animation::AnimationClip;
use crate::error::ImportError;
use crate::material::MaterialAsset;

/// In-memory project, used by tests and by hosts that keep assets elsewhere
#[derive(Debug, Default)]
pub struct MemoryAssetStore {
    pub texts: BTreeMap<String, String>,
    pub models: BTreeMap<String, ImportedModel>,
    pub textures: BTreeSet<String>,
    pub materials: BTreeMap<String, MaterialAsset>,
    pub clips: BTreeMap<String, AnimationClip>,
    pub prefabs: BTreeMap<String, Prefab>,
    /// model path -> imported material name -> material asset path
    pub remaps: BTreeMap<String, BTreeMap<String, String>>,
    pub refresh_count: usize,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, path: &str, text: &str) -> Self {
        self.texts.insert(path.to_string(), text.to_string());
        self
    }

    pub fn with_model(mut self, model: ImportedModel) -> Self {
        self.models.insert(model.path.clone(), model);
        self
    }

    pub fn with_texture(mut self, path: &str) -> Self {
        self.textures.insert(path.to_string());
        self
    }

    pub fn with_material(mut self, path: &str, material: MaterialAsset) -> Self {
        self.materials.insert(path.to_string(), material);
        self
    }

    pub fn with_prefab(mut self, prefab: Prefab) -> Self {
        self.prefabs.insert(prefab.path.clone(), prefab);
        self
    }
}

impl AssetStore for MemoryAssetStore {
    fn read_text(&self, path: &Path) -> Result<Option<String>, ImportError> {
        Ok(self.texts.get(&asset_key(path)).cloned())
    }

    fn load_model(&self, path: &Path) -> Result<Option<ImportedModel>, ImportError> {
        Ok(self.models.get(&asset_key(path)).cloned())
    }

    fn load_texture(&self, path: &Path) -> Option<String> {
        let key = asset_key(path);
        self.textures.contains(&key).then_some(key)
    }

    fn exists(&self, path: &Path) -> bool {
        let key = asset_key(path);
        self.texts.contains_key(&key)
            || self.models.contains_key(&key)
            || self.textures.contains(&key)
            || self.materials.contains_key(&key)
            || self.clips.contains_key(&key)
            || self.prefabs.contains_key(&key)
    }

    fn create_material(
        &mut self,
        path: &Path,
        material: &MaterialAsset,
    ) -> Result<(), ImportError> {
        self.materials.insert(asset_key(path), material.clone());
        Ok(())
    }

    fn create_clip(&mut self, path: &Path, clip: &AnimationClip) -> Result<(), ImportError> {
        self.clips.insert(asset_key(path), clip.clone());
        Ok(())
    }

    fn instantiate(&self, model_path: &Path) -> Result<Option<PrefabNode>, ImportError> {
        let key = asset_key(model_path);
        let Some(model) = self.models.get(&key) else {
            return Ok(None);
        };
        let remaps = self.remaps.get(&key).cloned().unwrap_or_default();
        Ok(Some(PrefabNode::instantiate(model, &remaps)))
    }

    fn save_prefab(&mut self, root: &PrefabNode, path: &Path) -> Result<Prefab, ImportError> {
        let prefab = Prefab {
            path: asset_key(path),
            root: root.clone(),
        };
        self.prefabs.insert(prefab.path.clone(), prefab.clone());
        Ok(prefab)
    }

    fn remap_material(
        &mut self,
        model_path: &Path,
        material_name: &str,
        material_path: &Path,
    ) -> Result<(), ImportError> {
        self.remaps
            .entry(asset_key(model_path))
            .or_default()
            .insert(material_name.to_string(), asset_key(material_path));
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), ImportError> {
        self.refresh_count += 1;
        Ok(())
    }
}
