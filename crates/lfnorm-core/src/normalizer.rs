// crates/lfnorm-core/src/normalizer.rs
//
// Streaming CR / CRLF -> LF filter.
//
// Per call: at most two raw reads from the source, at most one raw byte
// retained (`pending`) between calls. Output never contains '\r'.

use std::io::{self, Read};

use crate::error::{Capability, NormalizeError, Result};
use crate::options::NormalizeOptions;
use crate::source::{ByteSource, ReadSource};

const LF: u8 = b'\n';
const CR: u8 = b'\r';

/// Wraps a [`ByteSource`] and yields its bytes with every `\r\n`, lone `\r`
/// and lone `\n` collapsed to a single `\n`.
///
/// With `append_trailing_lf` the output is guaranteed to end with `\n`: one
/// synthetic LF is emitted at end-of-stream if the last emitted byte was not
/// already a line-feed.
///
/// Mark/reset are rejected: `\r\n` and `\n` map to the same output, so raw
/// positions cannot be recovered from output positions.
#[derive(Debug)]
pub struct LineEndingNormalizer<S> {
    source: S,
    options: NormalizeOptions,
    pending: Option<u8>,
    last_was_lf: bool,
    eof: bool,
    // Error hit by `read_into` after it had already produced bytes.
    deferred_err: Option<NormalizeError>,
}

impl<R: Read> LineEndingNormalizer<ReadSource<R>> {
    pub fn from_reader(reader: R, append_trailing_lf: bool) -> Self {
        Self::new(ReadSource::new(reader), append_trailing_lf)
    }
}

impl<S: ByteSource> LineEndingNormalizer<S> {
    pub fn new(source: S, append_trailing_lf: bool) -> Self {
        Self::with_options(source, NormalizeOptions::new(append_trailing_lf))
    }

    pub fn with_options(source: S, options: NormalizeOptions) -> Self {
        Self {
            source,
            options,
            pending: None,
            last_was_lf: false,
            eof: false,
            deferred_err: None,
        }
    }

    pub fn options(&self) -> NormalizeOptions {
        self.options
    }

    /// Next normalized byte, or `Ok(None)` at end-of-stream.
    ///
    /// Once `Ok(None)` has been returned every later call returns it too.
    pub fn read_one_byte(&mut self) -> Result<Option<u8>> {
        if let Some(e) = self.deferred_err.take() {
            return Err(e);
        }
        if self.eof {
            return Ok(self.complete());
        }

        let raw = match self.pending.take() {
            Some(b) => Some(b),
            None => self.source.read_byte()?,
        };

        match raw {
            None => {
                self.eof = true;
                Ok(self.complete())
            }
            Some(LF) => {
                self.last_was_lf = true;
                Ok(Some(LF))
            }
            Some(CR) => {
                let next = match self.source.read_byte() {
                    Ok(next) => next,
                    Err(e) => {
                        // Nothing consumed logically; a retry sees the CR again.
                        self.pending = Some(CR);
                        return Err(e.into());
                    }
                };
                match next {
                    Some(LF) => {}
                    None => self.eof = true,
                    Some(other) => {
                        log::trace!("lone CR, retaining look-ahead byte {:#04x}", other);
                        self.pending = Some(other);
                    }
                }
                self.last_was_lf = true;
                Ok(Some(LF))
            }
            Some(b) => {
                self.last_was_lf = false;
                Ok(Some(b))
            }
        }
    }

    // Runs on every call once the source is exhausted.
    fn complete(&mut self) -> Option<u8> {
        if !self.options.append_trailing_lf || self.last_was_lf {
            return None;
        }
        log::trace!("appending synthetic trailing LF");
        self.last_was_lf = true;
        Some(LF)
    }

    /// Fill `buf` by looping [`Self::read_one_byte`].
    ///
    /// Returns `Ok(0)` only at end-of-stream or for an empty `buf`. An error
    /// hit after some bytes were produced is held back: the partial count is
    /// returned now and the error is returned by the next read call.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut n = 0usize;
        for slot in buf.iter_mut() {
            match self.read_one_byte() {
                Ok(Some(b)) => {
                    *slot = b;
                    n += 1;
                }
                Ok(None) => break,
                Err(e) if n == 0 => return Err(e),
                Err(e) => {
                    log::debug!("deferring error after {} bytes: {}", n, e);
                    self.deferred_err = Some(e);
                    break;
                }
            }
        }
        Ok(n)
    }

    /// Close the underlying source, consuming the normalizer.
    pub fn close(mut self) -> Result<()> {
        log::debug!("closing normalizer (eof={})", self.eof);
        self.source.close()?;
        Ok(())
    }

    pub fn mark_supported(&self) -> bool {
        false
    }

    /// Always fails: the normalized view cannot be rewound.
    pub fn mark(&mut self, _limit: usize) -> Result<()> {
        Err(NormalizeError::UnsupportedCapability(Capability::Mark))
    }

    /// Always fails: the normalized view cannot be rewound.
    pub fn reset(&mut self) -> Result<()> {
        Err(NormalizeError::UnsupportedCapability(Capability::Reset))
    }
}

impl<S: ByteSource> Read for LineEndingNormalizer<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_into(buf)?)
    }
}
