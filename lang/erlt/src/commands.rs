//! Command implementations.

use std::path::PathBuf;

use erl_eunit::{
    find_file_test_elements, find_function_test_elements, EunitClassifier, FsResolver, Position,
    Selection,
};
use erl_syntax::Interner;

/// `erlt test-files <path>...`
///
/// Exits 0 whether or not anything was found; unresolvable paths are
/// skipped the way the locator skips them.
pub fn run_test_files(paths: &[String]) -> i32 {
    let resolver = FsResolver::new(Interner::shared());
    let selection: Selection = paths.iter().map(PathBuf::from).collect();
    let found = find_file_test_elements(Some(&selection), &resolver, &EunitClassifier);
    for file in &found {
        if let Some(path) = file.path() {
            println!("{}", path.display());
        }
    }
    0
}

/// `erlt test-at <file.erl> <byte-offset>`
///
/// Prints `name/0` for the test function under the offset, or nothing.
/// The file argument is explicit, so failing to read it is a usage-level
/// error (exit 1), unlike the locator's silent skips.
pub fn run_test_at(path: &str, offset: &str) -> i32 {
    let Ok(offset) = offset.parse::<u32>() else {
        eprintln!("error: offset must be a byte count, got {offset:?}");
        return 1;
    };

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read {path}: {e}");
            return 1;
        }
    };

    let interner = Interner::shared();
    let file = match erl_scan::scan_file(PathBuf::from(path), text, &interner) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };

    let position = file
        .tree()
        .node_at_offset(offset)
        .map(|node| Position { file: &file, node });
    for function in find_function_test_elements(position, &EunitClassifier) {
        let name = interner.lookup(function.name()).unwrap_or("?");
        println!("{name}/{}", function.arity());
    }
    0
}
