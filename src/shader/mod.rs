//! Shader selection and parameter assignment for imported materials.
//!
//! Terrain chunk exports get the terrain shader; everything else is
//! configured for the active render pipeline.

pub mod terrain;
pub mod urp;

pub use terrain::{TERRAIN_CHUNK_SHADER, configure_terrain_material};
pub use urp::{
    LIT_SHADER, RENDER_QUEUE_TRANSPARENT, UNLIT_SHADER, apply_material_flags,
    configure_urp_material,
};

use std::path::Path;

use crate::error::ImportError;
use crate::material::MaterialAsset;
use crate::model::M2;
use crate::settings::{PipelineSettings, RenderPipeline};
use crate::store::{AssetStore, ImportedMaterial};
use crate::terrain::is_terrain_chunk;

/// Shader the host assigns to imported materials on the built-in pipeline
pub const BUILTIN_SHADER: &str = "Standard";

pub fn configure_material(
    imported: &ImportedMaterial,
    model_path: &Path,
    metadata: &M2,
    settings: &PipelineSettings,
    store: &dyn AssetStore,
) -> Result<MaterialAsset, ImportError> {
    let stem = model_path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    if is_terrain_chunk(&stem) {
        return configure_terrain_material(imported, model_path, store);
    }

    Ok(match settings.render_pipeline {
        RenderPipeline::Universal => configure_urp_material(imported, metadata),
        RenderPipeline::BuiltIn => builtin_material(imported),
    })
}

/// The material as the host importer produced it
fn builtin_material(imported: &ImportedMaterial) -> MaterialAsset {
    let mut material = MaterialAsset::new(&imported.name, BUILTIN_SHADER);
    if let Some(texture) = &imported.diffuse_texture {
        material.set_texture("_MainTex", texture);
    }
    material
}
