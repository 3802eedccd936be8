//! An ordered selection of filesystem entries.

use std::path::{Path, PathBuf};

/// Files and/or directories a caller selected, in order.
///
/// Order is significant: results come back in selection order.
/// Directories stand for their immediate children only; nothing here is
/// recursive.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    entries: Vec<PathBuf>,
}

impl Selection {
    /// Empty selection.
    pub fn new() -> Self {
        Selection::default()
    }

    /// Append an entry.
    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(path.into());
    }

    /// Entries in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    /// Number of selected entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<PathBuf> for Selection {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Selection {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<PathBuf>> for Selection {
    fn from(entries: Vec<PathBuf>) -> Self {
        Selection { entries }
    }
}
