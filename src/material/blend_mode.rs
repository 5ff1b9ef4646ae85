use serde::{Deserialize, Serialize};

/// Blending mode for M2 materials
/// Mapping according to the M2 format:
/// 0 = Opaque
/// 1 = AlphaKey
/// 2 = Alpha
/// 3 = NoAlphaAdd
/// 4 = Add
/// 5 = Mod
/// 6 = Mod2X
/// 7 = BlendAdd
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlendMode {
    #[default]
    Opaque, // 0
    AlphaKey,   // 1
    Alpha,      // 2
    NoAlphaAdd, // 3
    Add,        // 4
    Mod,        // 5
    Mod2X,      // 6
    BlendAdd,   // 7
}

impl BlendMode {
    /// Parse BlendMode from the raw sidecar value
    pub fn from_u32(value: u32) -> Self {
        match value {
            0 => Self::Opaque,
            1 => Self::AlphaKey,
            2 => Self::Alpha,
            3 => Self::NoAlphaAdd,
            4 => Self::Add,
            5 => Self::Mod,
            6 => Self::Mod2X,
            7 => Self::BlendAdd,
            _ => {
                log::warn!("Unknown blending mode: {}, defaulting to Opaque", value);
                Self::Opaque
            }
        }
    }

    pub fn to_u32(self) -> u32 {
        match self {
            Self::Opaque => 0,
            Self::AlphaKey => 1,
            Self::Alpha => 2,
            Self::NoAlphaAdd => 3,
            Self::Add => 4,
            Self::Mod => 5,
            Self::Mod2X => 6,
            Self::BlendAdd => 7,
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Self::Opaque => "Opaque",
            Self::AlphaKey => "AlphaKey",
            Self::Alpha => "Alpha",
            Self::NoAlphaAdd => "NoAlphaAdd",
            Self::Add => "Add",
            Self::Mod => "Mod",
            Self::Mod2X => "Mod2X",
            Self::BlendAdd => "BlendAdd",
        }
    }
}
