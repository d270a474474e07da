//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::core::color::ColorConfig;
use crate::core::lister::DirLister;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};

/// lsdir - list the entries of one directory as a sorted name list.
#[derive(Parser, Debug)]
#[command(name = "lsdir")]
#[command(
    author,
    version,
    about,
    long_about = r#"lsdir enumerates a single directory (no recursion), skips the `.` and `..`
pseudo-entries, and prints the remaining entry names sorted ascending by
byte-wise comparison.

Output formats:
- plain: one name per line (default)
- jsonl: one JSON string per line
- json: a single JSON array

Names can be wrapped in ANSI foreground color escapes with --color; the
palette index selects among 20 colors (0-9 standard, 10-19 bright).

Examples:
    lsdir
    lsdir /etc --count
    lsdir src --color --color-index 13
    lsdir . --format json --pretty
"#
)]
pub struct Cli {
    /// Directory to list.
    #[arg(
        default_value = ".",
        value_name = "PATH",
        long_help = "Directory whose entries are listed (defaults to the current directory).\n\n\
Only the directory's own entries are reported; there is no recursion and\n\
no symlink resolution."
    )]
    pub path: PathBuf,

    /// Colorize entry names.
    #[arg(
        long,
        long_help = "Wrap every entry name in an ANSI foreground color escape.\n\n\
Coloring is applied unconditionally when this flag is set; lsdir performs\n\
no terminal detection, so piping colorized output to a file stores the\n\
raw escape bytes."
    )]
    pub color: bool,

    /// Palette index for colorized names (0-19).
    #[arg(
        long,
        default_value = "2",
        value_name = "N",
        env = "LSDIR_COLOR_INDEX",
        long_help = "Palette index used with --color.\n\n\
0-9 select the standard foreground colors (SGR 30-39), 10-19 the bright\n\
variants (SGR 90-99). Values outside [0, 19] reset to the default index 2\n\
(green)."
    )]
    pub color_index: i32,

    /// Output format (plain/jsonl/json).
    #[arg(
        long,
        default_value = "plain",
        value_parser = ["plain", "jsonl", "json"],
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- plain (default): one name per line\n\
- jsonl: one JSON string per line\n\
- json: a single JSON array"
    )]
    pub format: String,

    /// Pretty-print JSON output with indentation.
    #[arg(
        long,
        long_help = "Pretty-print JSON output with indentation for human readability.\n\n\
Has no effect on the plain/jsonl formats."
    )]
    pub pretty: bool,

    /// Print only the entry count.
    #[arg(
        long,
        long_help = "Print the number of entries (excluding `.` and `..`) instead of the\n\
listing itself."
    )]
    pub count: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Print the entry count to stderr before the listing. Intended for\n\
debugging; the listing on stdout is unaffected."
    )]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let color = ColorConfig {
        enabled: cli.color,
        index: cli.color_index,
    };

    let lister = DirLister::new(&cli.path, color)?;

    if cli.count {
        println!("{}", lister.count());
        return Ok(());
    }

    if cli.verbose {
        eprintln!("{} entries in {}", lister.count(), cli.path.display());
    }

    let list = lister.list_entries()?;

    match format {
        OutputFormat::Plain => {
            let stdout = io::stdout();
            list.print_to(stdout.lock())?;
        }
        OutputFormat::Jsonl | OutputFormat::Json => {
            let renderer = Renderer::with_config(render_config);
            println!("{}", renderer.render(&list));
        }
    }

    Ok(())
}
