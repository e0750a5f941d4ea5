pub mod error;
pub mod validate;

pub mod normalizer;
pub mod options;
pub mod repr;
pub mod source;

pub use crate::error::{Capability, NormalizeError, Result};
pub use crate::normalizer::LineEndingNormalizer;
pub use crate::options::NormalizeOptions;
pub use crate::repr::text_norm::normalize_newlines;
pub use crate::source::{ByteSource, ReadSource};
