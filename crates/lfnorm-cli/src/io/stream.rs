// crates/lfnorm-cli/src/io/stream.rs

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

use anyhow::Context;

/// "-" selects stdin / stdout.
pub const STDIO: &str = "-";

pub fn open_input(path: &str) -> anyhow::Result<Box<dyn Read>> {
    if path == STDIO {
        return Ok(Box::new(BufReader::new(std::io::stdin().lock())));
    }
    let f = File::open(path).with_context(|| format!("open input: {path}"))?;
    Ok(Box::new(BufReader::new(f)))
}

pub fn open_output(path: &str) -> anyhow::Result<Box<dyn Write>> {
    if path == STDIO {
        return Ok(Box::new(BufWriter::new(std::io::stdout().lock())));
    }
    let f = File::create(path).with_context(|| format!("create output: {path}"))?;
    Ok(Box::new(BufWriter::new(f)))
}

/// True when both paths name an existing file on disk and resolve to the
/// same one. Stdio never aliases a path.
pub fn same_file(a: &str, b: &str) -> bool {
    if a == STDIO || b == STDIO {
        return false;
    }
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

pub fn read_all(path: &str) -> anyhow::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    open_input(path)?
        .read_to_end(&mut bytes)
        .with_context(|| format!("read input: {path}"))?;
    Ok(bytes)
}
