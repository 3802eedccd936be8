//! Erlang syntax model.
//!
//! This crate contains the core data structures for Erlang source analysis:
//! - Spans for source locations
//! - Names for interned identifiers
//! - The arena-flattened syntax tree (`SyntaxTree`, `NodeId`, `NodeKind`)
//! - Typed node views (`FunctionNode`, `RemoteCallExpr`)
//! - `SourceFile` tying a tree to its text and origin
//! - Queries used by EUnit test discovery
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: atoms and module names become `Name(u32)`
//! - **Flatten the tree**: no `Box<Node>`, nodes are `NodeId(u32)` indices
//! - **Tagged kinds**: one `NodeKind` enum and ordinary pattern matching,
//!   no open-ended visitor hierarchy
//!
//! Trees are immutable once built; all queries are read-only.

mod interner;
mod name;
mod node;
mod query;
mod source;
mod span;
mod tree;

pub use interner::{InternError, Interner, SharedInterner};
pub use name::Name;
pub use node::{CallExprNode, FunctionNode, ModuleRefNode, RemoteCallExpr};
pub use query::is_eunit_imported;
pub use source::SourceFile;
pub use span::{Span, SpanError};
pub use tree::{Ancestors, NodeId, NodeKind, SyntaxTree, SyntaxTreeBuilder};
