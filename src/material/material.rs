use serde::{Deserialize, Serialize};
use super::{BlendMode, MaterialFlags};

/// Raw material record from the sidecar
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Material {
    pub flags: i16,
    pub blending_mode: u32,
}

impl Material {
    pub fn flags(&self) -> MaterialFlags {
        MaterialFlags::from_bits(self.flags)
    }

    pub fn blend_mode(&self) -> BlendMode {
        BlendMode::from_u32(self.blending_mode)
    }

    pub fn resolve(&self) -> ResolvedMaterial {
        ResolvedMaterial {
            flags: self.flags(),
            blend_mode: self.blend_mode(),
        }
    }
}

/// Typed flags and blend mode for one material
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedMaterial {
    pub flags: MaterialFlags,
    pub blend_mode: BlendMode,
}
