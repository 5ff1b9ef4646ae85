use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::path::{asset_key, reroot_at_assets};
use super::{AssetStore, ImportedMaterial, ImportedModel, ImportedRenderer, Prefab, PrefabNode};
use crate::animation::AnimationClip;
use crate::error::ImportError;
use crate::material::MaterialAsset;

/// Project directory on disk.
///
/// Models are read from Wavefront OBJ exports and their MTL libraries.
/// Generated materials, clips and prefabs are written as pretty JSON, and
/// material remaps live in a `<model>.import.json` file beside the model.
#[derive(Debug, Clone)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    fn import_settings_path(model_path: &Path) -> PathBuf {
        PathBuf::from(format!("{}.import.json", asset_key(model_path)))
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, ImportError> {
        match self.read_text(path)? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| ImportError::parse(path, e)),
            None => Ok(None),
        }
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), ImportError> {
        let full = self.full_path(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|e| ImportError::io(parent, e))?;
        }
        let text = serde_json::to_string_pretty(value).map_err(|source| ImportError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(&full, text).map_err(|e| ImportError::io(&full, e))
    }

    fn remaps_for(&self, model_path: &Path) -> Result<BTreeMap<String, String>, ImportError> {
        Ok(self
            .read_json(&Self::import_settings_path(model_path))?
            .unwrap_or_default())
    }

    fn load_obj(&self, path: &Path) -> Result<ImportedModel, ImportError> {
        let full = self.full_path(path);
        let (models, materials) = tobj::load_obj(&full, &tobj::LoadOptions::default())
            .map_err(|source| ImportError::ModelLoad {
                path: path.to_path_buf(),
                source,
            })?;

        let materials = materials.unwrap_or_else(|e| {
            log::warn!("No material library for {}: {}", path.display(), e);
            Vec::new()
        });

        let model_dir = path.parent().unwrap_or(Path::new(""));
        let imported: Vec<ImportedMaterial> = materials
            .iter()
            .map(|m| ImportedMaterial {
                name: m.name.clone(),
                diffuse_texture: m
                    .diffuse_texture
                    .as_ref()
                    .map(|t| asset_key(&reroot_at_assets(&model_dir.join(t.replace('\\', "/"))))),
            })
            .collect();

        let renderers = models
            .iter()
            .map(|m| ImportedRenderer {
                name: m.name.clone(),
                materials: m
                    .mesh
                    .material_id
                    .and_then(|id| imported.get(id).cloned())
                    .into_iter()
                    .collect(),
            })
            .collect();

        Ok(ImportedModel {
            path: asset_key(path),
            name: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            renderers,
        })
    }
}

impl AssetStore for FsAssetStore {
    fn read_text(&self, path: &Path) -> Result<Option<String>, ImportError> {
        let full = self.full_path(path);
        if !full.is_file() {
            return Ok(None);
        }
        fs::read_to_string(&full)
            .map(Some)
            .map_err(|e| ImportError::io(full, e))
    }

    fn load_model(&self, path: &Path) -> Result<Option<ImportedModel>, ImportError> {
        if !self.full_path(path).is_file() {
            return Ok(None);
        }
        let is_obj = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("obj"));
        if !is_obj {
            log::warn!("Unsupported model format: {}", path.display());
            return Ok(None);
        }
        self.load_obj(path).map(Some)
    }

    fn load_texture(&self, path: &Path) -> Option<String> {
        self.full_path(path).is_file().then(|| asset_key(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.full_path(path).is_file()
    }

    fn create_material(
        &mut self,
        path: &Path,
        material: &MaterialAsset,
    ) -> Result<(), ImportError> {
        self.write_json(path, material)
    }

    fn create_clip(&mut self, path: &Path, clip: &AnimationClip) -> Result<(), ImportError> {
        self.write_json(path, clip)
    }

    fn instantiate(&self, model_path: &Path) -> Result<Option<PrefabNode>, ImportError> {
        let Some(model) = self.load_model(model_path)? else {
            return Ok(None);
        };
        let remaps = self.remaps_for(model_path)?;
        Ok(Some(PrefabNode::instantiate(&model, &remaps)))
    }

    fn save_prefab(&mut self, root: &PrefabNode, path: &Path) -> Result<Prefab, ImportError> {
        let prefab = Prefab {
            path: asset_key(path),
            root: root.clone(),
        };
        self.write_json(path, &prefab)?;
        Ok(prefab)
    }

    fn remap_material(
        &mut self,
        model_path: &Path,
        material_name: &str,
        material_path: &Path,
    ) -> Result<(), ImportError> {
        let mut remaps = self.remaps_for(model_path)?;
        remaps.insert(material_name.to_string(), asset_key(material_path));
        self.write_json(&Self::import_settings_path(model_path), &remaps)
    }

    fn refresh(&mut self) -> Result<(), ImportError> {
        // Every write above lands on disk immediately
        log::debug!("Refreshed project at {}", self.root.display());
        Ok(())
    }
}
