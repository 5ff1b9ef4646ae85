use std::path::{Path, PathBuf};

use crate::error::ImportError;
use crate::material::MaterialAsset;
use crate::model::M2;
use crate::settings::PipelineSettings;
use crate::shader::configure_material;
use crate::store::{AssetStore, ImportedModel, Prefab, path::asset_key};

pub fn prefab_path_for(model_path: &Path, settings: &PipelineSettings) -> PathBuf {
    model_path.with_extension(&settings.prefab_extension)
}

pub fn material_path_for(material_name: &str, settings: &PipelineSettings) -> PathBuf {
    Path::new(&settings.materials_dir).join(format!("{}.mat", material_name))
}

/// Asset path of the model's prefab. An existing prefab is reused as-is,
/// whatever its format; otherwise one is generated.
pub fn find_or_create_prefab(
    model_path: &Path,
    metadata: &M2,
    store: &mut dyn AssetStore,
    settings: &PipelineSettings,
) -> Result<Option<String>, ImportError> {
    let prefab_path = prefab_path_for(model_path, settings);
    if store.exists(&prefab_path) {
        log::debug!("Reusing prefab {}", prefab_path.display());
        return Ok(Some(asset_key(&prefab_path)));
    }

    Ok(generate_prefab(model_path, metadata, store, settings)?.map(|prefab| prefab.path))
}

/// Configure and extract every material of the imported model, then save
/// a static instance of it as a prefab.
///
/// Returns `Ok(None)` when the imported model is not in the store.
pub fn generate_prefab(
    model_path: &Path,
    metadata: &M2,
    store: &mut dyn AssetStore,
    settings: &PipelineSettings,
) -> Result<Option<Prefab>, ImportError> {
    let Some(model) = store.load_model(model_path)? else {
        let missing = ImportError::missing_source(model_path);
        log::warn!("Tried to create prefab: {} ({})", missing, missing.key());
        return Ok(None);
    };

    configure_renderer_materials(&model, model_path, metadata, store, settings)?;

    let Some(mut root) = store.instantiate(model_path)? else {
        let missing = ImportError::missing_source(model_path);
        log::warn!("Could not instantiate imported model: {} ({})", missing, missing.key());
        return Ok(None);
    };

    if settings.mark_static {
        root.mark_static();
    }

    let prefab = store.save_prefab(&root, &prefab_path_for(model_path, settings))?;
    store.refresh()?;

    Ok(Some(prefab))
}

fn configure_renderer_materials(
    model: &ImportedModel,
    model_path: &Path,
    metadata: &M2,
    store: &mut dyn AssetStore,
    settings: &PipelineSettings,
) -> Result<(), ImportError> {
    // Repeated material names are fine, extraction never overwrites
    for imported in model.materials() {
        let material = configure_material(imported, model_path, metadata, settings, &*store)?;
        extract_material(&material, model_path, store, settings)?;
    }
    store.refresh()
}

/// Write the material to the materials directory unless one with that name
/// already exists, and remap the model's imported material to it.
pub fn extract_material(
    material: &MaterialAsset,
    model_path: &Path,
    store: &mut dyn AssetStore,
    settings: &PipelineSettings,
) -> Result<PathBuf, ImportError> {
    let material_path = material_path_for(&material.name, settings);

    if !store.exists(&material_path) {
        store.create_material(&material_path, material)?;
    }

    store.remap_material(model_path, &material.name, &material_path)?;
    Ok(material_path)
}
