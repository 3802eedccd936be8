//! Locator tests.
//!
//! Everything here goes through `MemoryResolver` and scanner-built files,
//! so the locator is exercised against both the real EUnit classifier and
//! arbitrary oracles.


use erl_syntax::{SharedInterner, SourceFile};

use crate::classify::TestFileClassifier;
use crate::locate::Position;

/// A classifier with a fixed answer, for treating the file predicate as a
/// black-box oracle.
struct Always(bool);

impl TestFileClassifier for Always {
    fn is_test_file(&self, _file: &SourceFile) -> bool {
        self.0
    }
}

const EUNIT_HEADER: &str = "-include_lib(\"eunit/include/eunit.hrl\").\n";

fn mem_file(path: &str, text: &str, interner: &SharedInterner) -> SourceFile {
    let tree = match erl_scan::scan_source(text, interner) {
        Ok(tree) => tree,
        Err(e) => panic!("scan failed: {e}"),
    };
    SourceFile::new(Some(path.into()), text.to_owned(), tree, interner.clone())
}

/// Position at the first occurrence of `needle` in the file's text.
fn position_at<'a>(file: &'a SourceFile, needle: &str) -> Position<'a> {
    let Some(offset) = file.text().find(needle) else {
        panic!("needle {needle:?} not in source");
    };
    let Ok(offset) = u32::try_from(offset) else {
        panic!("offset out of span range");
    };
    let Some(node) = file.tree().node_at_offset(offset) else {
        panic!("no node at offset {offset}");
    };
    Position { file, node }
}
