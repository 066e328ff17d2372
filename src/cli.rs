//! Command-line interface for bytediff

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bytediff")]
#[command(about = "A byte-level file and directory comparison tool")]
#[command(version)]
pub struct Cli {
    /// First file or directory to compare
    pub path1: PathBuf,

    /// Second file or directory to compare
    pub path2: PathBuf,

    /// Override config file location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Wait for Enter before exiting
    #[arg(long)]
    pub pause: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
