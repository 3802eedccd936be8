//! Scanner tests.
//!
//! - `scanner`: form-by-form structure recovery
//! - `arity_props`: property tests for head arity counting

mod scanner;

use erl_syntax::{Interner, SharedInterner, SyntaxTree};

use crate::scan_source;

/// Scan source that is expected to fit the span representation.
fn scan(source: &str) -> (SyntaxTree, SharedInterner) {
    let interner = Interner::shared();
    let tree = match scan_source(source, &interner) {
        Ok(tree) => tree,
        Err(e) => panic!("scan failed: {e}"),
    };
    (tree, interner)
}
