use crate::app::colors::ConsoleColor;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Print a directory as an indented, depth-colored tree"
)]
pub struct Cli {
    /// Directory to print
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Show hidden files and directories
    #[arg(short = 'H', long)]
    pub hidden: bool,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Colors cycled by depth, e.g. 'white,purple,yellow'
    #[arg(long, value_enum, value_delimiter = ',')]
    pub palette: Option<Vec<ConsoleColor>>,

    /// Glob patterns (relative to PATH) to leave out of the tree
    #[arg(long, num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Skip entries ignored by .gitignore and .ignore files
    #[arg(long)]
    pub gitignore: bool,

    /// Use a named preset from presets.toml instead of 'default'
    #[arg(long)]
    pub preset: Option<String>,
}
