use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "awesome-export")]
#[command(about = "Export a markdown awesome list to JSON with French descriptions")]
#[command(version)]
pub struct Args {
    /// Config file (defaults to ./awesome-export.toml, then the user config directory)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Suppress progress and status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Increase diagnostic logging (-v for debug, -vv for trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}
