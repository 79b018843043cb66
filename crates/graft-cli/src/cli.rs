//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Transplant named, comment-delimited blocks between text files
///
/// Scans SOURCE for blocks bounded by `// <<< name` / `// >>> name` marker
/// comments (`#` comments work too), then rewrites DESTINATION in place,
/// replacing every region that carries a matching name. The displaced
/// content can be saved to EXTRACTIONS and fed back later as a source to
/// revert the merge.
#[derive(Parser, Debug)]
#[command(name = "graft")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File holding the blocks to insert
    pub source: PathBuf,

    /// File rewritten in place
    pub destination: PathBuf,

    /// Where to save the displaced block content
    pub extractions: Option<PathBuf>,

    /// Skip the auto-inserted warning comments
    #[arg(long)]
    pub no_warn: bool,

    /// Name used in the annotation's "edit the source" line
    /// (defaults to the SOURCE path)
    #[arg(long, value_name = "NAME")]
    pub source_name: Option<String>,

    /// Replacement for a __NAME__ token, as NAME=VALUE (repeatable)
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// TOML file holding a table of token replacements
    #[arg(short, long, value_name = "FILE")]
    pub replacements: Option<PathBuf>,

    /// Print the merged result to stdout without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
