//! Post-processing for exported M2 models.
//!
//! Reads the JSON sidecar written next to each exported model, derives
//! engine materials (shader, blend state, textures, base color) and texture
//! animation clips from it, and assembles a static prefab through an
//! [`store::AssetStore`].

pub mod animation;
pub mod error;
pub mod material;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod settings;
pub mod shader;
pub mod store;
pub mod terrain;

pub use error::ImportError;
pub use pipeline::{BatchReport, ImportBatch, post_process};
pub use settings::PipelineSettings;
