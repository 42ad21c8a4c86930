pub mod matrix;

pub use matrix::{estimated_bytes, SimilarityMatrix};
