//! EUnit test discovery.
//!
//! Classifies positions in Erlang syntax trees and selections of
//! filesystem entries into the EUnit test functions and test files they
//! denote, for callers that want to run or list tests.
//!
//! Two operations, both pure and infallible:
//!
//! - [`find_function_test_elements`]: a position resolves to at most one
//!   zero-arity function, and only when its file pulls in EUnit.
//! - [`find_file_test_elements`]: an ordered selection of files and
//!   directories resolves to the test files it denotes, in order,
//!   duplicates preserved, unresolvable entries silently skipped.
//!
//! The file predicate is a seam ([`TestFileClassifier`]); the default
//! [`EunitClassifier`] keys on the `eunit.hrl` include. Filesystem access
//! is a seam too ([`SourceResolver`]): [`FsResolver`] reads real
//! directories, [`MemoryResolver`] serves tests and embedders.

mod classify;
mod locate;
mod resolve;
mod selection;

#[cfg(test)]
mod tests;

pub use classify::{EunitClassifier, TestFileClassifier};
pub use locate::{find_file_test_elements, find_function_test_elements, Position};
pub use resolve::{FsResolver, MemoryResolver, ResolvedEntry, SourceResolver};
pub use selection::Selection;
