//! The test-file predicate seam.

use erl_syntax::SourceFile;

/// Decides whether a file counts as a test file.
///
/// Both locator operations go through the same classifier instance, so a
/// file-level answer and a function-level answer can never disagree about
/// the file.
pub trait TestFileClassifier {
    /// Whether `file` is a test file.
    fn is_test_file(&self, file: &SourceFile) -> bool;
}

/// The default classifier: a file is a test file iff it pulls in the
/// EUnit facility (see [`erl_syntax::is_eunit_imported`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct EunitClassifier;

impl TestFileClassifier for EunitClassifier {
    fn is_test_file(&self, file: &SourceFile) -> bool {
        erl_syntax::is_eunit_imported(file)
    }
}
