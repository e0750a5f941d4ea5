use crate::error::{NormalizeError, Result};

/// Check that `bytes` is already in canonical LF form.
///
/// Reports the first `\r` found, then (if requested) a missing trailing LF.
/// Empty input with `require_trailing_lf` fails at offset 0, matching the
/// single `\n` the normalizer would emit for it.
pub fn ensure_normalized(bytes: &[u8], require_trailing_lf: bool) -> Result<()> {
    if let Some(offset) = bytes.iter().position(|&b| b == b'\r') {
        let reason = if bytes.get(offset + 1) == Some(&b'\n') {
            "CRLF line ending"
        } else {
            "lone CR line ending"
        };
        return Err(NormalizeError::NotNormalized { offset, reason });
    }

    if require_trailing_lf && bytes.last() != Some(&b'\n') {
        return Err(NormalizeError::NotNormalized {
            offset: bytes.len(),
            reason: "missing trailing LF",
        });
    }

    Ok(())
}
