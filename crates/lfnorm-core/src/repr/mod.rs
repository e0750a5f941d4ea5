pub mod stats;
pub mod text_norm;
