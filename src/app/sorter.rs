use crate::app::models::FileEntry;
use std::cmp::Ordering;

/// Case-insensitive name order, falling back to exact comparison so that
/// `Cat.png` lands before `cat.png`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Orders siblings in place. Files and directories are mixed, not grouped.
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
}
