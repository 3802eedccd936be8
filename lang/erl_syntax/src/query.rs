//! Syntax-level queries used by EUnit test discovery.

use crate::{NodeKind, SourceFile};

/// Whether a file pulls in the EUnit testing facility.
///
/// True iff the file carries an `-include`/`-include_lib` attribute whose
/// path's final segment is `eunit.hrl`, or an `-import(eunit, ...)`
/// attribute. EUnit's convention is that test cases are zero-arity
/// functions in a module that includes this header; both halves of test
/// discovery consult this one predicate so file- and function-level
/// classification cannot diverge.
pub fn is_eunit_imported(file: &SourceFile) -> bool {
    let tree = file.tree();
    tree.children(tree.root()).iter().any(|&form| {
        match tree.kind(form) {
            NodeKind::IncludeAttr { path, .. } => file
                .interner()
                .lookup(path)
                .is_some_and(is_eunit_header_path),
            NodeKind::ImportAttr { module } => {
                file.interner().lookup(module) == Some("eunit")
            }
            _ => false,
        }
    })
}

/// `"eunit/include/eunit.hrl"`, `"eunit.hrl"`, and friends. Include paths
/// always use forward slashes, even on Windows.
fn is_eunit_header_path(path: &str) -> bool {
    path.rsplit('/').next() == Some("eunit.hrl")
}
