//! Prefab assembly: drives metadata loading, material configuration and
//! clip creation for each queued model against an [`AssetStore`].
//!
//! [`AssetStore`]: crate::store::AssetStore

pub mod batch;
pub mod prefab;

pub use batch::{
    AssetFailure, BatchReport, ImportBatch, ProcessedAsset, clip_path_for, post_process,
};
pub use prefab::{
    extract_material, find_or_create_prefab, generate_prefab, material_path_for, prefab_path_for,
};
