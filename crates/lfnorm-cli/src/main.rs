// crates/lfnorm-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "lfnorm")]
#[command(about = "Normalize CR / CRLF line endings to LF", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stream a file (or stdin) through the LF normalizer
    Normalize(cmd::normalize::NormalizeArgs),

    /// Report line-ending statistics; fails if the input is not LF-only
    Check(cmd::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Normalize(args) => cmd::normalize::run(args),
        Commands::Check(args) => cmd::check::run(args),
    }
}
