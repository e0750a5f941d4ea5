use anyhow::Context;
use clap::Args;
use lfnorm_core::repr::stats::LineEndingStats;
use lfnorm_core::validate::ensure_normalized;

use crate::io::stream::{self, STDIO};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input path ("-" for stdin)
    #[arg(long, default_value = STDIO)]
    pub r#in: String,

    /// Also require the input to end with a line feed
    #[arg(long)]
    pub require_final_lf: bool,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let bytes = stream::read_all(&args.r#in)?;
    let stats = LineEndingStats::scan(&bytes);
    let normalized = lfnorm_core::normalize_newlines(&bytes, args.require_final_lf)?;

    eprintln!("--- check ---");
    eprintln!("file             = {}", args.r#in);
    eprintln!("bytes            = {}", stats.bytes);
    eprintln!("crlf             = {}", stats.crlf);
    eprintln!("lone_cr          = {}", stats.lone_cr);
    eprintln!("lone_lf          = {}", stats.lone_lf);
    eprintln!("ends_with_eol    = {}", stats.ends_with_line_ending);
    eprintln!("normalized_bytes = {}", normalized.len());
    eprintln!("crc32_raw        = {:08x}", crc32fast::hash(&bytes));
    eprintln!("crc32_normalized = {:08x}", crc32fast::hash(&normalized));

    ensure_normalized(&bytes, args.require_final_lf)
        .with_context(|| format!("{} is not LF-normalized", args.r#in))?;

    eprintln!("normalized       = true");
    Ok(())
}
