use std::path::Path;

use crate::error::ImportError;
use crate::model::M2;
use crate::store::AssetStore;
use crate::store::path::sidecar_path;
use crate::terrain::Chunk;

/// Read the sidecar metadata next to `asset_path`.
///
/// A missing sidecar is common and yields `Ok(None)`. A sidecar that exists
/// but does not parse is an error for this asset only.
pub fn read_metadata_for(
    store: &dyn AssetStore,
    asset_path: &Path,
    extension: &str,
) -> Result<Option<M2>, ImportError> {
    let metadata_path = sidecar_path(asset_path, extension);
    read_json(store, &metadata_path)
}

/// Read the layer description for a terrain chunk material.
///
/// Lives beside the model, named after the material.
pub fn read_chunk_for(
    store: &dyn AssetStore,
    model_path: &Path,
    material_name: &str,
) -> Result<Option<Chunk>, ImportError> {
    let dir = model_path.parent().unwrap_or(Path::new(""));
    let chunk_path = dir.join(format!("{}.json", material_name));
    read_json(store, &chunk_path)
}

fn read_json<T: serde::de::DeserializeOwned>(
    store: &dyn AssetStore,
    path: &Path,
) -> Result<Option<T>, ImportError> {
    let Some(text) = store.read_text(path)? else {
        log::debug!("No sidecar at {}", path.display());
        return Ok(None);
    };

    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| ImportError::parse(path, e))
}
