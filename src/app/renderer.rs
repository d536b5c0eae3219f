use crate::app::colors::ColorSequence;
use crate::app::formatter::ColorWriter;
use crate::app::models::{FileEntry, RenderOptions};
use crate::app::scanner::FileSystem;
use crate::app::sorter::sort_entries;
use std::io;

const INDENT: &str = "   ";

/// Prints a directory tree depth-first, one line per visible entry.
pub struct TreeRenderer<'a, F: FileSystem> {
    fs: &'a F,
    options: &'a RenderOptions,
    palette: &'a ColorSequence,
}

impl<'a, F: FileSystem> TreeRenderer<'a, F> {
    pub fn new(fs: &'a F, options: &'a RenderOptions, palette: &'a ColorSequence) -> Self {
        Self { fs, options, palette }
    }

    /// Walks from the configured root. Without a root nothing is written.
    ///
    /// Only failures of the sink are returned; unreadable directories are
    /// printed without children.
    pub fn render<W: ColorWriter>(&self, out: &mut W) -> io::Result<()> {
        let Some(root) = &self.options.root else {
            return Ok(());
        };
        let entry = self.fs.entry(root);
        self.render_entry(&entry, 0, out)
    }

    fn render_entry<W: ColorWriter>(
        &self,
        entry: &FileEntry,
        depth: usize,
        out: &mut W,
    ) -> io::Result<()> {
        // Pruned before listing: nothing below a hidden entry is visited.
        if entry.is_hidden && !self.options.show_hidden {
            return Ok(());
        }

        let line = format!("{}{}", INDENT.repeat(depth), entry.display_name());
        let color = self
            .options
            .use_color
            .then(|| self.palette.color_at(depth));
        out.write_line(&line, color)?;

        if entry.is_dir {
            let mut children = self.fs.list_children(&entry.path);
            sort_entries(&mut children);
            for child in &children {
                self.render_entry(child, depth + 1, out)?;
            }
        }
        Ok(())
    }
}
