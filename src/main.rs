//! lsdir - list the entries of a directory as a sorted name list
//!
//! lsdir provides:
//! - Single-directory enumeration with `.`/`..` filtering
//! - Stable byte-wise sorted output
//! - Optional ANSI foreground colorization of entry names
//! - Unified output format (plain/jsonl/json)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
