//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Push every crate onto a storage target.
#[derive(Parser, Debug)]
#[command(name = "sokoban_quiz")]
#[command(version)]
pub struct Cli {
    /// Level file to play; a bundled level is used when omitted
    pub level: Option<PathBuf>,

    /// Where tracing output goes, so it stays off the game screen
    #[arg(long, default_value = "sokoban_quiz.log")]
    pub log_file: PathBuf,

    /// Print the board line by line instead of using the full-screen view
    #[arg(long)]
    pub plain: bool,
}
