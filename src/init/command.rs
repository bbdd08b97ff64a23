use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct InitCommand {
    /// Overwrite existing files
    #[arg(short, long)]
    pub force: bool,

    /// Directory to initialize (defaults to current)
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}
