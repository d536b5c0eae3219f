use crate::app::models::{FileEntry, RuntimeConfig};
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of entries for the tree walk.
///
/// `list_children` returns siblings in no particular order. A directory that
/// cannot be read yields an empty list instead of an error.
pub trait FileSystem {
    fn entry(&self, path: &Path) -> FileEntry;
    fn list_children(&self, dir: &Path) -> Vec<FileEntry>;
}

/// Reads the real disk one directory level at a time.
pub struct DiskFileSystem {
    root: PathBuf,
    exclude_set: GlobSet,
    gitignore: bool,
}

impl DiskFileSystem {
    pub fn new(root: PathBuf, config: &RuntimeConfig) -> Result<Self> {
        Ok(Self {
            root,
            exclude_set: build_globset(&config.exclude)?,
            gitignore: config.gitignore,
        })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude_set.is_empty() {
            return false;
        }
        match diff_paths(path, &self.root) {
            Some(relative) => self.exclude_set.is_match(&relative),
            None => false,
        }
    }
}

impl FileSystem for DiskFileSystem {
    fn entry(&self, path: &Path) -> FileEntry {
        let name = entry_name(path);
        FileEntry {
            is_dir: path.is_dir(),
            is_hidden: is_hidden(&name, path),
            name,
            path: path.to_path_buf(),
        }
    }

    fn list_children(&self, dir: &Path) -> Vec<FileEntry> {
        let mut builder = WalkBuilder::new(dir);
        // Hidden entries must come through; the renderer decides on them.
        builder.standard_filters(false).max_depth(Some(1));
        if self.gitignore {
            builder
                .git_ignore(true)
                .git_global(true)
                .git_exclude(true)
                .ignore(true)
                .parents(true)
                .require_git(false);
        }

        let mut children = Vec::new();
        for result in builder.build() {
            match result {
                Ok(entry) => {
                    if entry.depth() == 0 {
                        continue;
                    }
                    let path = entry.path();
                    if self.is_excluded(path) {
                        log::debug!("Excluded {}", path.display());
                        continue;
                    }
                    let name = entry.file_name().to_string_lossy().into_owned();
                    children.push(FileEntry {
                        // Follows symlinks, same as the root.
                        is_dir: path.is_dir(),
                        is_hidden: is_hidden(&name, path),
                        name,
                        path: path.to_path_buf(),
                    });
                }
                Err(err) => log::warn!("Error listing {}: {}", dir.display(), err),
            }
        }
        children
    }
}

/// Base name of `path`. `.` and `..` resolve to the directory they point at.
fn entry_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    fs::canonicalize(path)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| path.display().to_string())
}

fn is_hidden(name: &str, path: &Path) -> bool {
    name.starts_with('.') || has_hidden_attribute(path)
}

#[cfg(windows)]
fn has_hidden_attribute(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    fs::symlink_metadata(path).is_ok_and(|m| m.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
}

#[cfg(not(windows))]
fn has_hidden_attribute(_path: &Path) -> bool {
    false
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).context(format!("Invalid glob pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}

/// In-memory tree for renderer tests.
#[cfg(test)]
pub mod fake {
    use super::FileSystem;
    use crate::app::models::FileEntry;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    pub struct MemoryFileSystem {
        entries: HashMap<PathBuf, FileEntry>,
        children: HashMap<PathBuf, Vec<PathBuf>>,
        broken: HashSet<PathBuf>,
        pub listed: RefCell<Vec<PathBuf>>,
    }

    impl MemoryFileSystem {
        pub fn new(root: &str) -> Self {
            let mut fs = Self::default();
            fs.insert(root, true);
            fs
        }

        pub fn dir(mut self, path: &str) -> Self {
            self.insert(path, true);
            self
        }

        pub fn file(mut self, path: &str) -> Self {
            self.insert(path, false);
            self
        }

        /// Directory whose listing fails, as with a permission error.
        pub fn unreadable_dir(mut self, path: &str) -> Self {
            self.insert(path, true);
            self.broken.insert(PathBuf::from(path));
            self
        }

        fn insert(&mut self, path: &str, is_dir: bool) {
            let path = PathBuf::from(path);
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if let Some(parent) = path.parent() {
                self.children
                    .entry(parent.to_path_buf())
                    .or_default()
                    .push(path.clone());
            }
            self.entries.insert(
                path.clone(),
                FileEntry {
                    is_hidden: name.starts_with('.'),
                    name,
                    path,
                    is_dir,
                },
            );
        }
    }

    impl FileSystem for MemoryFileSystem {
        fn entry(&self, path: &Path) -> FileEntry {
            self.entries.get(path).cloned().unwrap_or_else(|| FileEntry {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path: path.to_path_buf(),
                is_dir: false,
                is_hidden: false,
            })
        }

        // Reversed insertion order so callers cannot rely on listing order.
        fn list_children(&self, dir: &Path) -> Vec<FileEntry> {
            self.listed.borrow_mut().push(dir.to_path_buf());
            if self.broken.contains(dir) {
                return Vec::new();
            }
            self.children
                .get(dir)
                .map(|paths| {
                    paths
                        .iter()
                        .rev()
                        .filter_map(|p| self.entries.get(p).cloned())
                        .collect()
                })
                .unwrap_or_default()
        }
    }
}
