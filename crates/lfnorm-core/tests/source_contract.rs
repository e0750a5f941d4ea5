// crates/lfnorm-core/tests/source_contract.rs

use std::cell::Cell;
use std::io::{self, Read};
use std::rc::Rc;

use lfnorm_core::{ByteSource, Capability, LineEndingNormalizer, NormalizeError};

/// Scripted source: yields `data`, fails once at `fail_at` (raw byte index),
/// and counts close calls.
struct Scripted {
    data: Vec<u8>,
    pos: usize,
    fail_at: Option<usize>,
    reads: Rc<Cell<usize>>,
    closes: Rc<Cell<usize>>,
    close_err: bool,
}

impl Scripted {
    fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            pos: 0,
            fail_at: None,
            reads: Rc::new(Cell::new(0)),
            closes: Rc::new(Cell::new(0)),
            close_err: false,
        }
    }
}

impl ByteSource for Scripted {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        self.reads.set(self.reads.get() + 1);
        if self.fail_at == Some(self.pos) {
            self.fail_at = None;
            return Err(io::Error::new(io::ErrorKind::TimedOut, "scripted failure"));
        }
        let b = self.data.get(self.pos).copied();
        if b.is_some() {
            self.pos += 1;
        }
        Ok(b)
    }

    fn close(&mut self) -> io::Result<()> {
        self.closes.set(self.closes.get() + 1);
        if self.close_err {
            return Err(io::Error::new(io::ErrorKind::Other, "close failed"));
        }
        Ok(())
    }
}

#[test]
fn construction_performs_no_io() {
    let src = Scripted::new(b"abc");
    let reads = src.reads.clone();
    let _n = LineEndingNormalizer::new(src, true);
    assert_eq!(reads.get(), 0);
}

#[test]
fn at_most_two_raw_reads_per_call() {
    let src = Scripted::new(b"a\r\nb\rc");
    let reads = src.reads.clone();
    let mut n = LineEndingNormalizer::new(src, true);
    loop {
        let before = reads.get();
        let b = n.read_one_byte().unwrap();
        assert!(reads.get() - before <= 2);
        if b.is_none() {
            break;
        }
    }
}

#[test]
fn read_error_propagates_verbatim() {
    let mut src = Scripted::new(b"ab");
    src.fail_at = Some(1);
    let mut n = LineEndingNormalizer::new(src, false);
    assert_eq!(n.read_one_byte().unwrap(), Some(b'a'));
    match n.read_one_byte() {
        Err(NormalizeError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::TimedOut),
        other => panic!("expected io error, got {other:?}"),
    }
    assert_eq!(n.read_one_byte().unwrap(), Some(b'b'));
    assert_eq!(n.read_one_byte().unwrap(), None);
}

#[test]
fn lookahead_failure_loses_no_input() {
    let mut src = Scripted::new(b"\r\nz");
    src.fail_at = Some(1);
    let mut n = LineEndingNormalizer::new(src, false);
    assert!(n.read_one_byte().is_err());
    assert_eq!(n.read_one_byte().unwrap(), Some(b'\n'));
    assert_eq!(n.read_one_byte().unwrap(), Some(b'z'));
    assert_eq!(n.read_one_byte().unwrap(), None);
}

#[test]
fn read_into_defers_error_after_partial_count() {
    let mut src = Scripted::new(b"abcd");
    src.fail_at = Some(2);
    let mut n = LineEndingNormalizer::new(src, false);
    let mut buf = [0u8; 8];
    assert_eq!(n.read_into(&mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], b"ab");
    match n.read_into(&mut buf) {
        Err(NormalizeError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::TimedOut),
        other => panic!("expected deferred io error, got {other:?}"),
    }
    let k = n.read_into(&mut buf).unwrap();
    assert_eq!(&buf[..k], b"cd");
    assert_eq!(n.read_into(&mut buf).unwrap(), 0);
}

#[test]
fn deferred_error_also_surfaces_through_read_one_byte() {
    let mut src = Scripted::new(b"a\rb");
    src.fail_at = Some(2);
    let mut n = LineEndingNormalizer::new(src, false);
    let mut buf = [0u8; 4];
    assert_eq!(n.read_into(&mut buf).unwrap(), 1);
    assert!(matches!(n.read_one_byte(), Err(NormalizeError::Io(_))));
    assert_eq!(n.read_one_byte().unwrap(), Some(b'\n'));
    assert_eq!(n.read_one_byte().unwrap(), Some(b'b'));
    assert_eq!(n.read_one_byte().unwrap(), None);
}

#[test]
fn read_trait_reports_transient_error() {
    let mut src = Scripted::new(b"xyz");
    src.fail_at = Some(1);
    let mut n = LineEndingNormalizer::new(src, true);
    let mut out = Vec::new();
    let err = n.read_to_end(&mut out).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    assert_eq!(out, b"x");
    n.read_to_end(&mut out).unwrap();
    assert_eq!(out, b"xyz\n");
}

#[test]
fn close_reaches_source_once() {
    let src = Scripted::new(b"abc");
    let closes = src.closes.clone();
    let n = LineEndingNormalizer::new(src, false);
    n.close().unwrap();
    assert_eq!(closes.get(), 1);
}

#[test]
fn close_error_propagates() {
    let mut src = Scripted::new(b"");
    src.close_err = true;
    let n = LineEndingNormalizer::new(src, false);
    assert!(matches!(n.close(), Err(NormalizeError::Io(_))));
}

#[test]
fn borrowed_source_survives_close() {
    let mut src = Scripted::new(b"a\rb");
    {
        let mut n = LineEndingNormalizer::new(&mut src, false);
        assert_eq!(n.read_one_byte().unwrap(), Some(b'a'));
        n.close().unwrap();
    }
    assert_eq!(src.closes.get(), 1);
    assert_eq!(src.pos, 1);
}

#[test]
fn mark_and_reset_always_fail() {
    let mut n = LineEndingNormalizer::from_reader(&b"abc"[..], false);
    for limit in [0usize, 1, 1024, usize::MAX] {
        assert!(matches!(
            n.mark(limit),
            Err(NormalizeError::UnsupportedCapability(Capability::Mark))
        ));
    }
    assert!(matches!(
        n.reset(),
        Err(NormalizeError::UnsupportedCapability(Capability::Reset))
    ));
    assert!(!n.mark_supported());
    // Rejection leaves the stream usable.
    assert_eq!(n.read_one_byte().unwrap(), Some(b'a'));
}
