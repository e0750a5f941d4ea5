// crates/lfnorm-core/src/source.rs

use std::io::{self, Read};

/// Minimal pull-based byte producer the normalizer wraps.
///
/// `Ok(None)` means the source is exhausted. Sources are expected to keep
/// returning `Ok(None)` once exhausted.
pub trait ByteSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Release the underlying resource. Default is a no-op.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// Adapts any [`Read`] into a [`ByteSource`].
///
/// Each `read_byte` issues a one-byte read, so wrap unbuffered handles
/// (files, sockets) in a `BufReader` first. `close` drops the reader.
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: Option<R>,
}

impl<R: Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner: Some(inner) }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let Some(inner) = self.inner.as_mut() else {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "read from closed source",
            ));
        };
        let mut b = [0u8; 1];
        loop {
            match inner.read(&mut b) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(b[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn close(&mut self) -> io::Result<()> {
        self.inner.take();
        Ok(())
    }
}
