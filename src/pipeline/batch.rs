use std::path::{Path, PathBuf};

use super::prefab::find_or_create_prefab;
use crate::animation::create_animation_clip;
use crate::error::ImportError;
use crate::model::M2;
use crate::parser::read_metadata_for;
use crate::settings::PipelineSettings;
use crate::store::AssetStore;
use crate::store::path::asset_key;

/// Model paths collected during one import, owned by the caller
#[derive(Debug, Clone, Default)]
pub struct ImportBatch {
    paths: Vec<PathBuf>,
}

impl ImportBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Process every queued path in order. The queue is empty afterwards,
    /// whatever happened to the individual assets.
    pub fn post_process(
        &mut self,
        store: &mut dyn AssetStore,
        settings: &PipelineSettings,
    ) -> BatchReport {
        let paths = std::mem::take(&mut self.paths);
        post_process(&paths, store, settings)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedAsset {
    pub path: PathBuf,
    pub prefab: Option<String>,
    pub clips: Vec<String>,
    pub clip_errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetFailure {
    pub path: PathBuf,
    pub key: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub processed: Vec<ProcessedAsset>,
    /// Assets without a metadata sidecar
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<AssetFailure>,
}

impl BatchReport {
    pub fn clip_count(&self) -> usize {
        self.processed.iter().map(|p| p.clips.len()).sum()
    }
}

/// Post-process `paths` sequentially. A failing asset is logged and recorded;
/// it never stops the assets after it.
pub fn post_process(
    paths: &[PathBuf],
    store: &mut dyn AssetStore,
    settings: &PipelineSettings,
) -> BatchReport {
    let mut report = BatchReport::default();

    for path in paths {
        match process_asset(path, store, settings) {
            Ok(Some(processed)) => report.processed.push(processed),
            Ok(None) => report.skipped.push(path.clone()),
            Err(e) => {
                log::error!("Failed to process {}: {}", path.display(), e);
                report.failed.push(AssetFailure {
                    path: path.clone(),
                    key: e.key(),
                    message: e.to_string(),
                });
            }
        }
    }

    report
}

fn process_asset(
    path: &Path,
    store: &mut dyn AssetStore,
    settings: &PipelineSettings,
) -> Result<Option<ProcessedAsset>, ImportError> {
    let Some(metadata) = read_metadata_for(&*store, path, &settings.metadata_extension)? else {
        return Ok(None);
    };

    log::info!("Processing metadata for: {}", metadata.file_name);

    let prefab = find_or_create_prefab(path, &metadata, store, settings)?;
    let (clips, clip_errors) = create_animation_clips(path, &metadata, store);

    Ok(Some(ProcessedAsset {
        path: path.to_path_buf(),
        prefab,
        clips,
        clip_errors,
    }))
}

/// `<dir>/<stem>[<index>].anim`
pub fn clip_path_for(model_path: &Path, index: usize) -> PathBuf {
    model_path.with_file_name(format!("{}.anim", clip_name_for(model_path, index)))
}

fn clip_name_for(model_path: &Path, index: usize) -> String {
    let stem = model_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}[{}]", stem, index)
}

/// One clip per texture transform with translation keys. A failing clip is
/// logged and skipped.
fn create_animation_clips(
    model_path: &Path,
    metadata: &M2,
    store: &mut dyn AssetStore,
) -> (Vec<String>, Vec<String>) {
    let mut clips = Vec::new();
    let mut errors = Vec::new();

    for (index, transform) in metadata.texture_transforms.iter().enumerate() {
        if !transform.translation.has_keyframes() {
            continue;
        }

        log::info!("Creating animation clip {} for: {}", index, metadata.file_name);
        log::debug!(
            "translation timestamp groups: {}, value groups: {}",
            transform.translation.timestamps.len(),
            transform.translation.values.len()
        );

        let clip_path = clip_path_for(model_path, index);
        let result = create_animation_clip(index, &clip_name_for(model_path, index), transform)
            .and_then(|clip| store.create_clip(&clip_path, &clip));

        match result {
            Ok(()) => clips.push(asset_key(&clip_path)),
            Err(e) => {
                log::error!("Failed to create animation clip for: {}: {}", metadata.file_name, e);
                errors.push(e.to_string());
            }
        }
    }

    (clips, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_path() {
        assert_eq!(
            clip_path_for(Path::new("Assets/world/crystal.obj"), 2),
            PathBuf::from("Assets/world/crystal[2].anim")
        );
    }

    #[test]
    fn test_queue_drains() {
        let mut batch = ImportBatch::new();
        batch.queue("Assets/a.obj");
        batch.queue("Assets/b.obj");
        assert_eq!(batch.len(), 2);

        let mut store = crate::store::MemoryAssetStore::new();
        let report = batch.post_process(&mut store, &PipelineSettings::default());
        assert!(batch.is_empty());
        assert_eq!(report.skipped.len(), 2);
    }
}
