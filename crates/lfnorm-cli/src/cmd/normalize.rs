use std::cell::Cell;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anyhow::Context;
use clap::Args;
use lfnorm_core::LineEndingNormalizer;
use tempfile::NamedTempFile;

use crate::io::stream::{self, STDIO};

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Input path ("-" for stdin)
    #[arg(long, default_value = STDIO)]
    pub r#in: String,

    /// Output path ("-" for stdout)
    #[arg(long, conflicts_with = "in_place")]
    pub out: Option<String>,

    /// Guarantee the output ends with a line feed
    #[arg(long)]
    pub ensure_final_lf: bool,

    /// Rewrite the input file; the original is replaced only after the whole stream succeeded
    #[arg(long)]
    pub in_place: bool,
}

struct CountingRead<'a, R> {
    inner: R,
    count: &'a Cell<u64>,
}

impl<R: Read> Read for CountingRead<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count.set(self.count.get() + n as u64);
        Ok(n)
    }
}

pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    if args.in_place {
        anyhow::ensure!(args.r#in != STDIO, "--in-place needs a file path, not stdin");
    }
    // Creating the output would truncate the input before it is read.
    let aliased = args
        .out
        .as_deref()
        .is_some_and(|out| stream::same_file(&args.r#in, out));
    if aliased {
        log::info!("--out is the input file, rewriting {} in place", args.r#in);
    }
    let in_place = args.in_place || aliased;

    let bytes_in = Cell::new(0u64);
    let input = CountingRead {
        inner: stream::open_input(&args.r#in)?,
        count: &bytes_in,
    };
    let mut norm = LineEndingNormalizer::from_reader(input, args.ensure_final_lf);

    let (dest, bytes_out) = if in_place {
        let dir = Path::new(&args.r#in)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("create temp file in {}", dir.display()))?;
        let mut w = BufWriter::new(tmp);
        let n = std::io::copy(&mut norm, &mut w).with_context(|| format!("normalize {}", args.r#in))?;
        let tmp = w
            .into_inner()
            .map_err(|e| e.into_error())
            .context("flush temp output")?;
        norm.close().context("close input")?;
        tmp.persist(&args.r#in)
            .map_err(|e| e.error)
            .with_context(|| format!("replace {}", args.r#in))?;
        (args.r#in.clone(), n)
    } else {
        let out = args.out.as_deref().unwrap_or(STDIO);
        let mut w = stream::open_output(out)?;
        let n = std::io::copy(&mut norm, &mut w).with_context(|| format!("normalize {}", args.r#in))?;
        w.flush().with_context(|| format!("flush output: {out}"))?;
        norm.close().context("close input")?;
        (out.to_string(), n)
    };

    log::info!("normalized {} -> {} ({} bytes)", args.r#in, dest, bytes_out);

    eprintln!("--- normalize ---");
    eprintln!("in              = {}", args.r#in);
    eprintln!("out             = {}", dest);
    eprintln!("ensure_final_lf = {}", args.ensure_final_lf);
    eprintln!("bytes_in        = {}", bytes_in.get());
    eprintln!("bytes_out       = {}", bytes_out);

    Ok(())
}
