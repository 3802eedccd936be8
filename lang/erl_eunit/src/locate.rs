//! The two locator operations.

use std::sync::Arc;

use tracing::trace;

use erl_syntax::{FunctionNode, NodeId, SourceFile};

use crate::classify::TestFileClassifier;
use crate::resolve::{ResolvedEntry, SourceResolver};
use crate::selection::Selection;

/// A position inside a scanned file's syntax tree.
#[derive(Copy, Clone)]
pub struct Position<'a> {
    /// The file containing the position.
    pub file: &'a SourceFile,
    /// The node under the position (any node; the locator walks up).
    pub node: NodeId,
}

/// The zero-or-one test functions a position denotes.
///
/// Empty when the position is absent, when the containing file is not a
/// test file (the file check short-circuits function matching), when no
/// function encloses the position, or when the enclosing function's arity
/// is not zero. Never errors: all of those are ordinary outcomes.
pub fn find_function_test_elements<'a>(
    position: Option<Position<'a>>,
    classifier: &dyn TestFileClassifier,
) -> Vec<FunctionNode<'a>> {
    let Some(position) = position else {
        return Vec::new();
    };
    if !classifier.is_test_file(position.file) {
        trace!("containing file is not a test file");
        return Vec::new();
    }
    zero_arity_function(position).into_iter().collect()
}

/// The nearest enclosing function, kept only at arity zero. EUnit test
/// cases are zero-arity by convention; arity is the sole structural
/// signal separating a test from a helper.
fn zero_arity_function(position: Position<'_>) -> Option<FunctionNode<'_>> {
    let function = position.file.tree().enclosing_function(position.node)?;
    (function.arity() == 0).then_some(function)
}

/// The test files a selection denotes, in selection/enumeration order.
///
/// Plain file entries are included iff they classify as test files.
/// Directory entries stand for their immediate children only; each child
/// is classified the same way. Entries that fail to resolve are skipped
/// silently. Duplicates are preserved: selecting the same file twice
/// yields it twice. An absent selection yields nothing, not an error.
pub fn find_file_test_elements(
    selection: Option<&Selection>,
    resolver: &dyn SourceResolver,
    classifier: &dyn TestFileClassifier,
) -> Vec<Arc<SourceFile>> {
    let Some(selection) = selection else {
        return Vec::new();
    };
    let mut test_files = Vec::with_capacity(selection.len());
    for path in selection.iter() {
        match resolver.resolve(path) {
            Some(ResolvedEntry::Source(file)) => {
                if classifier.is_test_file(&file) {
                    test_files.push(file);
                }
            }
            Some(ResolvedEntry::Directory(dir)) => {
                for file in resolver.immediate_children(&dir) {
                    if classifier.is_test_file(&file) {
                        test_files.push(file);
                    }
                }
            }
            None => trace!(path = %path.display(), "entry did not resolve; skipping"),
        }
    }
    test_files
}
