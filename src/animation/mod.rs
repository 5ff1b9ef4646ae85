// Animation clips derived from texture transform tracks

pub mod clip;
pub mod interpolation;
pub mod types;

pub use clip::create_animation_clip;
pub use interpolation::*;
pub use types::*;
