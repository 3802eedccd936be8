//! Arena-flattened syntax tree.
//!
//! Nodes live in a single `Vec` and reference each other by `NodeId`
//! indices; no boxed recursion. The root node is always index 0 and has
//! kind [`NodeKind::Root`]. Trees are built once through
//! [`SyntaxTreeBuilder`] and immutable afterwards.

use smallvec::SmallVec;

use crate::node::{FunctionNode, RemoteCallExpr};
use crate::{Name, Span};

/// Index of a node within its [`SyntaxTree`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Debug for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Node kind: a tagged variant over the grammar productions the form
/// scanner recovers.
///
/// Attribute kinds carry their payload inline; list-shaped attributes
/// (`-import`, `-export`) put each `f/0` entry in a child
/// [`NodeKind::NameArity`] node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeKind {
    /// The file node; always the tree root.
    Root,
    /// `-module(m).`
    ModuleAttr { name: Name },
    /// `-include("...").` or `-include_lib("...").` (`lib` distinguishes).
    IncludeAttr { path: Name, lib: bool },
    /// `-import(m, [f/0, ...]).`; children are `NameArity` nodes.
    ImportAttr { module: Name },
    /// `-export([f/0, ...]).`; children are `NameArity` nodes.
    ExportAttr,
    /// Any other `-attr(...)` form.
    WildAttr { name: Name },
    /// A `name/arity` entry inside an import or export list.
    NameArity { name: Name, arity: u32 },
    /// A function definition; one node per form, covering all clauses.
    Function { name: Name, arity: u32 },
    /// Module-qualified call `m:f(...)`; children are a `ModuleRef` and
    /// the callee `Call`.
    RemoteCall,
    /// The module qualifier of a remote call.
    ModuleRef { name: Name },
    /// A call expression `f(...)` (local, or the callee of a remote call).
    Call { name: Name },
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    span: Span,
}

/// Immutable syntax tree over one source file.
#[derive(Debug)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// The file node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Kind of a node.
    #[inline]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.index()].kind
    }

    /// Span of a node.
    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    /// Parent of a node; `None` for the root.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    /// Children of a node, in source order.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Number of nodes in the tree (root included).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes. A built tree always has a root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ancestor chain of a node, nearest first. Excludes the node itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// The nearest enclosing function: the node itself if it is a
    /// function, otherwise its closest `Function` ancestor.
    pub fn enclosing_function(&self, id: NodeId) -> Option<FunctionNode<'_>> {
        if matches!(self.kind(id), NodeKind::Function { .. }) {
            return Some(FunctionNode::new(self, id));
        }
        self.ancestors(id)
            .find(|&anc| matches!(self.kind(anc), NodeKind::Function { .. }))
            .map(|anc| FunctionNode::new(self, anc))
    }

    /// Deepest node whose span contains the byte offset, or `None` when
    /// the offset is outside the file span.
    pub fn node_at_offset(&self, offset: u32) -> Option<NodeId> {
        let mut current = self.root();
        if !self.span(current).contains(offset) {
            return None;
        }
        loop {
            let child = self
                .children(current)
                .iter()
                .copied()
                .find(|&c| self.span(c).contains(offset));
            match child {
                Some(c) => current = c,
                None => return Some(current),
            }
        }
    }

    /// File-level functions, in source order.
    pub fn functions(&self) -> impl Iterator<Item = FunctionNode<'_>> + '_ {
        self.children(self.root())
            .iter()
            .copied()
            .filter(|&c| matches!(self.kind(c), NodeKind::Function { .. }))
            .map(|c| FunctionNode::new(self, c))
    }

    /// Typed view of a function node, if `id` is one.
    pub fn function(&self, id: NodeId) -> Option<FunctionNode<'_>> {
        matches!(self.kind(id), NodeKind::Function { .. }).then(|| FunctionNode::new(self, id))
    }

    /// Typed view of a remote call node, if `id` is one.
    pub fn remote_call(&self, id: NodeId) -> Option<RemoteCallExpr<'_>> {
        matches!(self.kind(id), NodeKind::RemoteCall).then(|| RemoteCallExpr::new(self, id))
    }
}

/// Iterator over a node's ancestor chain, nearest first.
pub struct Ancestors<'t> {
    tree: &'t SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Builder for [`SyntaxTree`].
///
/// `NodeId`s handed out by the builder are valid by construction, so
/// building is infallible.
pub struct SyntaxTreeBuilder {
    nodes: Vec<NodeData>,
}

impl SyntaxTreeBuilder {
    /// Start a tree whose root covers `file_span`.
    pub fn new(file_span: Span) -> Self {
        SyntaxTreeBuilder {
            nodes: vec![NodeData {
                kind: NodeKind::Root,
                parent: None,
                children: SmallVec::new(),
                span: file_span,
            }],
        }
    }

    /// The root node id, for pushing file-level forms.
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Append a node under `parent` and return its id.
    pub fn push(&mut self, kind: NodeKind, parent: NodeId, span: Span) -> NodeId {
        debug_assert!(parent.index() < self.nodes.len());
        #[expect(
            clippy::cast_possible_truncation,
            reason = "node count is bounded by the u32 span space of the source text"
        )]
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: SmallVec::new(),
            span,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Widen a node's span to include `end`. Used when a form's full
    /// extent is only known once its terminating dot is reached.
    pub fn widen(&mut self, id: NodeId, end: u32) {
        let span = self.nodes[id.index()].span;
        self.nodes[id.index()].span = span.extend_to(end);
    }

    /// Finish the tree.
    pub fn finish(self) -> SyntaxTree {
        SyntaxTree { nodes: self.nodes }
    }
}
