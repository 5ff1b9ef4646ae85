//! Host asset pipeline seam.
//!
//! Everything that touches the project (reading sidecars, loading imported
//! models and textures, writing materials, clips and prefabs) goes through
//! [`AssetStore`], so the derivation code runs the same against a real
//! project directory and an in-memory fake.

mod fs;
mod memory;
pub mod path;
mod types;

pub use fs::FsAssetStore;
pub use memory::MemoryAssetStore;
pub use types::*;

use std::path::Path;

use crate::animation::AnimationClip;
use crate::error::ImportError;
use crate::material::MaterialAsset;

pub trait AssetStore {
    /// Text content of a project file, `None` when it does not exist
    fn read_text(&self, path: &Path) -> Result<Option<String>, ImportError>;

    fn load_model(&self, path: &Path) -> Result<Option<ImportedModel>, ImportError>;

    /// Asset path of the texture when it exists in the project
    fn load_texture(&self, path: &Path) -> Option<String>;

    /// Whether any asset, in any format, is stored at `path`
    fn exists(&self, path: &Path) -> bool;

    fn create_material(
        &mut self,
        path: &Path,
        material: &MaterialAsset,
    ) -> Result<(), ImportError>;

    fn create_clip(&mut self, path: &Path, clip: &AnimationClip) -> Result<(), ImportError>;

    /// Scene hierarchy of the imported model with current material remaps applied
    fn instantiate(&self, model_path: &Path) -> Result<Option<PrefabNode>, ImportError>;

    fn save_prefab(&mut self, root: &PrefabNode, path: &Path) -> Result<Prefab, ImportError>;

    /// Point the model's imported material `material_name` at an external asset
    fn remap_material(
        &mut self,
        model_path: &Path,
        material_name: &str,
        material_path: &Path,
    ) -> Result<(), ImportError>;

    fn refresh(&mut self) -> Result<(), ImportError>;
}
