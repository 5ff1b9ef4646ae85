use std::collections::BTreeMap;

use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

/// Host-neutral material description written to the materials directory.
///
/// Mirrors what an engine material exposes: a shader name plus named texture,
/// color, float and vector properties, shader keywords, override tags, a
/// render queue and per-pass enablement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialAsset {
    pub name: String,
    pub shader: String,
    pub textures: BTreeMap<String, String>,
    pub colors: BTreeMap<String, [f32; 4]>,
    pub floats: BTreeMap<String, f32>,
    pub vectors: BTreeMap<String, [f32; 4]>,
    pub keywords: BTreeMap<String, bool>,
    pub tags: BTreeMap<String, String>,
    pub render_queue: Option<i32>,
    pub shader_passes: BTreeMap<String, bool>,
    pub double_sided_gi: bool,
}

impl MaterialAsset {
    pub fn new(name: impl Into<String>, shader: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shader: shader.into(),
            ..Default::default()
        }
    }

    pub fn set_texture(&mut self, slot: &str, texture_path: impl Into<String>) {
        self.textures.insert(slot.to_string(), texture_path.into());
    }

    pub fn set_color(&mut self, property: &str, color: glm::Vec4) {
        self.colors
            .insert(property.to_string(), [color.x, color.y, color.z, color.w]);
    }

    pub fn set_float(&mut self, property: &str, value: f32) {
        self.floats.insert(property.to_string(), value);
    }

    pub fn set_vector(&mut self, property: &str, value: glm::Vec4) {
        self.vectors
            .insert(property.to_string(), [value.x, value.y, value.z, value.w]);
    }

    pub fn enable_keyword(&mut self, keyword: &str) {
        self.keywords.insert(keyword.to_string(), true);
    }

    pub fn disable_keyword(&mut self, keyword: &str) {
        self.keywords.insert(keyword.to_string(), false);
    }

    pub fn is_keyword_enabled(&self, keyword: &str) -> bool {
        self.keywords.get(keyword).copied().unwrap_or(false)
    }

    pub fn set_override_tag(&mut self, tag: &str, value: &str) {
        self.tags.insert(tag.to_string(), value.to_string());
    }

    pub fn set_shader_pass_enabled(&mut self, pass: &str, enabled: bool) {
        self.shader_passes.insert(pass.to_string(), enabled);
    }

    /// Passes are enabled unless explicitly switched off
    pub fn is_shader_pass_enabled(&self, pass: &str) -> bool {
        self.shader_passes.get(pass).copied().unwrap_or(true)
    }

    pub fn float(&self, property: &str) -> Option<f32> {
        self.floats.get(property).copied()
    }
}
