use serde::{Deserialize, Serialize};

/// Interpolation code stored on every M2 track
/// 0 = None (step)
/// 1 = Linear
/// 2 = Bezier
/// 3 = Hermite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpolation {
    None,
    #[default]
    Linear,
    Bezier,
    Hermite,
}

impl Interpolation {
    /// Parse from the raw sidecar code, unknown codes fall back to linear
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Linear,
            2 => Self::Bezier,
            3 => Self::Hermite,
            _ => {
                log::warn!("Unknown interpolation code: {}, defaulting to Linear", value);
                Self::Linear
            }
        }
    }
}

/// Keyframed track as exported in the sidecar.
///
/// `timestamps[g]` and `values[g]` describe keyframe group `g`, one value per
/// timestamp. Groups are disjoint segments and never blend into each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Track<V> {
    pub global_seq: u32,
    pub interpolation: i32,
    pub timestamps: Vec<Vec<u32>>,
    pub values: Vec<Vec<V>>,
}

impl<V> Default for Track<V> {
    fn default() -> Self {
        Self {
            global_seq: 0,
            interpolation: 0,
            timestamps: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<V> Track<V> {
    pub fn interpolation(&self) -> Interpolation {
        Interpolation::from_i32(self.interpolation)
    }

    /// True when at least one group carries at least one timestamp
    pub fn has_keyframes(&self) -> bool {
        self.timestamps.iter().any(|group| !group.is_empty())
    }

    /// Total keyframe count across all groups
    pub fn keyframe_count(&self) -> usize {
        self.timestamps.iter().map(Vec::len).sum()
    }
}

/// Vector-valued track (translation, rotation, scaling, rgb)
pub type MultiValueTrack = Track<Vec<f32>>;

/// Scalar track (alpha)
pub type SingleValueTrack = Track<f32>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorData {
    pub color: MultiValueTrack,
    pub alpha: SingleValueTrack,
}

impl ColorData {
    /// First rgb sample of the first keyframe group, if any
    pub fn first_rgb(&self) -> Option<[f32; 3]> {
        let sample = self.color.values.first()?.first()?;
        match sample.as_slice() {
            [r, g, b, ..] => Some([*r, *g, *b]),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureTransform {
    pub translation: MultiValueTrack,
    pub rotation: MultiValueTrack,
    pub scaling: MultiValueTrack,
}
