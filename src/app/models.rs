use crate::app::colors::ColorSequence;
use std::path::PathBuf;

/// What the renderer needs to know about a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Directory to print. `None` renders nothing.
    pub root: Option<PathBuf>,
    pub show_hidden: bool,
    pub use_color: bool,
}

/// Represents the final configuration after merging presets and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub options: RenderOptions,
    pub palette: ColorSequence,
    pub exclude: Vec<String>,
    pub gitignore: bool,
}

/// A single filesystem entry as seen while walking. Dropped once printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_hidden: bool,
}

impl FileEntry {
    /// Name as printed in the tree: directories get a trailing `/`.
    pub fn display_name(&self) -> String {
        // Filesystem roots like `/` or `C:\` already end in a separator.
        if self.is_dir && !self.name.ends_with(['/', std::path::MAIN_SEPARATOR]) {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}
