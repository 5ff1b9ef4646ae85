use std::path::Path;

use nalgebra_glm as glm;

use crate::error::ImportError;
use crate::material::MaterialAsset;
use crate::parser::read_chunk_for;
use crate::store::{AssetStore, ImportedMaterial, path::reroot_at_assets};
use crate::terrain::{Chunk, MAX_LAYERS};

pub const TERRAIN_CHUNK_SHADER: &str = "wow.unity/TerrainChunk";

/// Terrain chunk material: fixed shader, diffuse on `_BaseMap`, then one
/// `Layer_<i>` texture per chunk layer with all scales packed into `Scale`.
pub fn configure_terrain_material(
    imported: &ImportedMaterial,
    model_path: &Path,
    store: &dyn AssetStore,
) -> Result<MaterialAsset, ImportError> {
    let mut material = MaterialAsset::new(&imported.name, TERRAIN_CHUNK_SHADER);

    if let Some(texture) = &imported.diffuse_texture {
        material.set_texture("_BaseMap", texture);
    }

    match read_chunk_for(store, model_path, &imported.name)? {
        Some(chunk) => apply_layers(&mut material, &chunk, model_path, store),
        None => log::warn!(
            "No layer description for terrain material {} of {}",
            imported.name,
            model_path.display()
        ),
    }

    Ok(material)
}

fn apply_layers(
    material: &mut MaterialAsset,
    chunk: &Chunk,
    model_path: &Path,
    store: &dyn AssetStore,
) {
    let dir = model_path.parent().unwrap_or(Path::new(""));
    let mut scale = glm::Vec4::zeros();

    if chunk.layers.len() > MAX_LAYERS {
        log::warn!(
            "Terrain material {} has {} layers, only the first {} are bound",
            material.name,
            chunk.layers.len(),
            MAX_LAYERS
        );
    }

    for (i, layer) in chunk.layers.iter().take(MAX_LAYERS).enumerate() {
        let texture_path = reroot_at_assets(&dir.join(&layer.file));
        match store.load_texture(&texture_path) {
            Some(texture) => material.set_texture(&format!("Layer_{}", i), texture),
            None => {
                let missing = ImportError::missing_source(&texture_path);
                log::warn!("Terrain layer {}: {} ({})", i, missing, missing.key());
            }
        }
        scale[i] = layer.scale;
    }

    material.set_vector("Scale", scale);
}
