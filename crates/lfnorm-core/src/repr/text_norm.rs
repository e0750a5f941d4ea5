// crates/lfnorm-core/src/repr/text_norm.rs
//
// Whole-buffer newline normalization on top of the streaming filter.
//
// Rules:
// - Convert CRLF and CR to LF.
// - Leave all other bytes unchanged.
// - Optionally guarantee a trailing LF.

use std::io::Read;

use crate::error::Result;
use crate::normalizer::LineEndingNormalizer;

pub fn normalize_newlines(input: &[u8], append_trailing_lf: bool) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() + usize::from(append_trailing_lf));
    LineEndingNormalizer::from_reader(input, append_trailing_lf).read_to_end(&mut out)?;
    Ok(out)
}
