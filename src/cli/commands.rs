use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "same-same")]
#[command(about = "Ranks text files by pairwise similarity", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare every pair of matching files under a directory (default)
    Compare(CompareArgs),
    /// Print configuration values
    PrintConfig,
}

/// Anything left out here falls back to `SAME_SAME_*` settings, then a prompt.
#[derive(Debug, Default, Args)]
pub struct CompareArgs {
    /// Directory to scan, subdirectories included
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
    /// Space delimited file extensions, blank for all
    #[arg(short, long)]
    pub extensions: Option<String>,
    /// Space delimited file name prefixes, blank for all
    #[arg(short, long)]
    pub names: Option<String>,
    /// Diff tool printed next to each result row
    #[arg(long)]
    pub diff_tool: Option<String>,
    /// Do not draw the progress bar
    #[arg(long)]
    pub no_progress: bool,
}
