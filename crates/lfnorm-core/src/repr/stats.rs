// crates/lfnorm-core/src/repr/stats.rs

/// Line-ending census of a raw (un-normalized) buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineEndingStats {
    pub bytes: u64,
    pub crlf: u64,
    pub lone_cr: u64,
    pub lone_lf: u64,
    /// Last byte is `\r` or `\n`.
    pub ends_with_line_ending: bool,
}

impl LineEndingStats {
    pub fn scan(input: &[u8]) -> Self {
        let mut s = Self {
            bytes: input.len() as u64,
            ..Self::default()
        };
        let mut i = 0usize;
        while i < input.len() {
            match input[i] {
                b'\r' if input.get(i + 1) == Some(&b'\n') => {
                    s.crlf += 1;
                    i += 2;
                    continue;
                }
                b'\r' => s.lone_cr += 1,
                b'\n' => s.lone_lf += 1,
                _ => {}
            }
            i += 1;
        }
        s.ends_with_line_ending = matches!(input.last(), Some(b'\r' | b'\n'));
        s
    }

    /// Total line endings; each becomes exactly one `\n` after normalization.
    pub fn line_endings(&self) -> u64 {
        self.crlf + self.lone_cr + self.lone_lf
    }

    /// No `\r` anywhere.
    pub fn is_normalized(&self) -> bool {
        self.crlf == 0 && self.lone_cr == 0
    }

    /// Exact length of the normalized output for this input.
    pub fn normalized_len(&self, append_trailing_lf: bool) -> u64 {
        let synthetic = append_trailing_lf && !self.ends_with_line_ending;
        self.bytes - self.crlf + u64::from(synthetic)
    }
}
