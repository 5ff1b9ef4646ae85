pub mod load;

pub use load::{read_chunk_for, read_metadata_for};
