//! Filesystem resolution seam.
//!
//! The locator never touches the filesystem itself; it asks a
//! [`SourceResolver`] to turn selected paths into in-memory files.
//! Resolution failures are not errors: an entry that does not resolve
//! simply contributes nothing.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use erl_scan::scan_file;
use erl_syntax::{SharedInterner, SourceFile};

/// What a selected path resolved to.
pub enum ResolvedEntry {
    /// An Erlang source file.
    Source(Arc<SourceFile>),
    /// A directory; ask [`SourceResolver::immediate_children`] for its
    /// files.
    Directory(PathBuf),
}

/// Maps selected paths to in-memory source files.
pub trait SourceResolver {
    /// Resolve one selected entry. `None` when the path does not exist,
    /// is not Erlang source, or cannot be read.
    fn resolve(&self, path: &Path) -> Option<ResolvedEntry>;

    /// The directory's own source files, in enumeration order. Never
    /// descends into subdirectories.
    fn immediate_children(&self, dir: &Path) -> Vec<Arc<SourceFile>>;
}

/// Resolver over the real filesystem.
///
/// Reads and scans `.erl` files on every call; callers wanting caching
/// put it in front of this resolver. Children are enumerated in file-name
/// order so results are deterministic across platforms.
pub struct FsResolver {
    interner: SharedInterner,
}

impl FsResolver {
    /// Create a resolver minting names into `interner`.
    pub fn new(interner: SharedInterner) -> Self {
        FsResolver { interner }
    }

    fn load(&self, path: &Path) -> Option<Arc<SourceFile>> {
        if path.extension().and_then(OsStr::to_str) != Some("erl") {
            return None;
        }
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "unreadable file skipped");
                return None;
            }
        };
        match scan_file(path.to_owned(), text, &self.interner) {
            Ok(file) => Some(Arc::new(file)),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "unscannable file skipped");
                None
            }
        }
    }
}

impl SourceResolver for FsResolver {
    fn resolve(&self, path: &Path) -> Option<ResolvedEntry> {
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "entry did not resolve");
                return None;
            }
        };
        if meta.is_dir() {
            Some(ResolvedEntry::Directory(path.to_owned()))
        } else {
            self.load(path).map(ResolvedEntry::Source)
        }
    }

    fn immediate_children(&self, dir: &Path) -> Vec<Arc<SourceFile>> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "directory did not enumerate");
                return Vec::new();
            }
        };
        let mut paths: Vec<PathBuf> = entries
            .flatten()
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(OsStr::to_str) == Some("erl"))
            .collect();
        paths.sort();
        paths.iter().filter_map(|path| self.load(path)).collect()
    }
}

/// In-memory resolver for tests and embedders with their own file store.
///
/// Directory children come back in the order they were registered.
#[derive(Default)]
pub struct MemoryResolver {
    files: FxHashMap<PathBuf, Arc<SourceFile>>,
    dirs: FxHashMap<PathBuf, Vec<PathBuf>>,
}

impl MemoryResolver {
    /// Empty resolver.
    pub fn new() -> Self {
        MemoryResolver::default()
    }

    /// Register a file, returning the shared handle it will resolve to.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, file: SourceFile) -> Arc<SourceFile> {
        let handle = Arc::new(file);
        self.files.insert(path.into(), Arc::clone(&handle));
        handle
    }

    /// Register a directory with the given immediate children.
    pub fn add_dir(&mut self, path: impl Into<PathBuf>, children: Vec<PathBuf>) {
        self.dirs.insert(path.into(), children);
    }
}

impl SourceResolver for MemoryResolver {
    fn resolve(&self, path: &Path) -> Option<ResolvedEntry> {
        if let Some(file) = self.files.get(path) {
            return Some(ResolvedEntry::Source(Arc::clone(file)));
        }
        if self.dirs.contains_key(path) {
            return Some(ResolvedEntry::Directory(path.to_owned()));
        }
        None
    }

    fn immediate_children(&self, dir: &Path) -> Vec<Arc<SourceFile>> {
        self.dirs.get(dir).map_or_else(Vec::new, |children| {
            children
                .iter()
                .filter_map(|child| self.files.get(child).cloned())
                .collect()
        })
    }
}
