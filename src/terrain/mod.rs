//! Terrain chunk layer descriptions (`<material>.json` beside an ADT export).

use serde::{Deserialize, Serialize};

/// The chunk shader packs layer scales into one 4-lane vector
pub const MAX_LAYERS: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layer {
    pub file: String,
    pub scale: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chunk {
    pub layers: Vec<Layer>,
}

/// True for ADT tile exports: the file stem contains `adt_NN_NN`
pub fn is_terrain_chunk(file_stem: &str) -> bool {
    file_stem.as_bytes().windows(9).any(|w| {
        w.starts_with(b"adt_")
            && w[4].is_ascii_digit()
            && w[5].is_ascii_digit()
            && w[6] == b'_'
            && w[7].is_ascii_digit()
            && w[8].is_ascii_digit()
    })
}
