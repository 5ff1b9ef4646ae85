use serde::{Deserialize, Serialize};

use crate::error::ImportError;

pub const CONFY_APP_NAME: &str = "m2prefab";
const CONFY_CONFIG_NAME: &str = "pipeline";

/// Render pipeline the generated materials target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderPipeline {
    #[default]
    Universal,
    BuiltIn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    pub render_pipeline: RenderPipeline,
    pub materials_dir: String,
    pub metadata_extension: String,
    pub prefab_extension: String,
    pub mark_static: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            render_pipeline: RenderPipeline::Universal,
            materials_dir: "Assets/Materials".to_string(),
            metadata_extension: "json".to_string(),
            prefab_extension: "prefab".to_string(),
            mark_static: true,
        }
    }
}

impl PipelineSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, CONFY_CONFIG_NAME).unwrap_or_else(|e| {
            log::warn!("Using default pipeline settings: {}", e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<(), ImportError> {
        confy::store(CONFY_APP_NAME, CONFY_CONFIG_NAME, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: PipelineSettings =
            serde_json::from_str(r#"{ "render_pipeline": "BuiltIn" }"#).unwrap();
        assert_eq!(settings.render_pipeline, RenderPipeline::BuiltIn);
        assert_eq!(settings.materials_dir, "Assets/Materials");
        assert!(settings.mark_static);
    }
}
