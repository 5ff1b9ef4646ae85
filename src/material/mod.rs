mod asset;
mod blend_mode;
mod flags;
mod material;
mod resolver;

pub use asset::*;
pub use blend_mode::*;
pub use flags::*;
pub use material::*;
pub use resolver::*;
