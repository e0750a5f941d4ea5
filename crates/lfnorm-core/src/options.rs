// crates/lfnorm-core/src/options.rs

/// Construction-time knobs for [`crate::LineEndingNormalizer`].
///
/// Immutable once the normalizer is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Guarantee the output ends with `\n`, appending one synthetic LF if the
    /// input did not already end with a line ending.
    pub append_trailing_lf: bool,
}

impl NormalizeOptions {
    pub fn new(append_trailing_lf: bool) -> Self {
        Self { append_trailing_lf }
    }
}
