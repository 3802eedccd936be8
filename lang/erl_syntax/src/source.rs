//! A scanned source file: text, tree, and origin.

use std::path::{Path, PathBuf};

use crate::{Name, NodeId, NodeKind, SharedInterner, SyntaxTree};

/// An Erlang source file with its syntax tree.
///
/// Owned by whoever resolved it (typically behind an `Arc` handed out by a
/// resolver); read-only afterwards.
pub struct SourceFile {
    path: Option<PathBuf>,
    text: String,
    tree: SyntaxTree,
    interner: SharedInterner,
}

impl SourceFile {
    /// Wrap a scanned tree with its text and origin path.
    pub fn new(
        path: Option<PathBuf>,
        text: String,
        tree: SyntaxTree,
        interner: SharedInterner,
    ) -> Self {
        SourceFile {
            path,
            text,
            tree,
            interner,
        }
    }

    /// Filesystem origin, when the file came from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Full source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The syntax tree.
    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    /// The interner that minted this file's names.
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// The file node.
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Declared module name, from the `-module(...)` attribute.
    pub fn module_name(&self) -> Option<Name> {
        self.tree
            .children(self.tree.root())
            .iter()
            .find_map(|&c| match self.tree.kind(c) {
                NodeKind::ModuleAttr { name } => Some(name),
                _ => None,
            })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SourceFile({}, {} nodes)",
            self.path
                .as_deref()
                .map_or_else(|| "<memory>".into(), |p| p.display().to_string()),
            self.tree.len()
        )
    }
}
