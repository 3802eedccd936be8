//! Typed views over tree nodes.
//!
//! A view pairs a tree with a node id whose kind is already known, and
//! exposes that kind's payload and structural children as methods. Views
//! are cheap `Copy` handles; they borrow the tree and never outlive it.

use crate::{Name, NodeId, NodeKind, Span, SyntaxTree};

/// A function definition node.
#[derive(Copy, Clone)]
pub struct FunctionNode<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> FunctionNode<'t> {
    pub(crate) fn new(tree: &'t SyntaxTree, id: NodeId) -> Self {
        debug_assert!(matches!(tree.kind(id), NodeKind::Function { .. }));
        FunctionNode { tree, id }
    }

    /// Underlying node id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Function name.
    pub fn name(&self) -> Name {
        match self.tree.kind(self.id) {
            NodeKind::Function { name, .. } => name,
            _ => Name::EMPTY,
        }
    }

    /// Number of formal parameters.
    pub fn arity(&self) -> u32 {
        match self.tree.kind(self.id) {
            NodeKind::Function { arity, .. } => arity,
            _ => 0,
        }
    }

    /// Span covering every clause of the function.
    pub fn span(&self) -> Span {
        self.tree.span(self.id)
    }
}

impl std::fmt::Debug for FunctionNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FunctionNode({:?}, arity {})", self.id, self.arity())
    }
}

/// A module-qualified function call `m:f(...)`.
///
/// Exposes its two structural children: the module reference and the
/// callee call expression.
#[derive(Copy, Clone)]
pub struct RemoteCallExpr<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> RemoteCallExpr<'t> {
    pub(crate) fn new(tree: &'t SyntaxTree, id: NodeId) -> Self {
        debug_assert!(matches!(tree.kind(id), NodeKind::RemoteCall));
        RemoteCallExpr { tree, id }
    }

    /// Underlying node id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The module qualifier. `None` only for a malformed hand-built tree.
    pub fn module_ref(&self) -> Option<ModuleRefNode<'t>> {
        self.tree
            .children(self.id)
            .iter()
            .copied()
            .find(|&c| matches!(self.tree.kind(c), NodeKind::ModuleRef { .. }))
            .map(|c| ModuleRefNode {
                tree: self.tree,
                id: c,
            })
    }

    /// The callee call expression. `None` only for a malformed hand-built
    /// tree.
    pub fn call(&self) -> Option<CallExprNode<'t>> {
        self.tree
            .children(self.id)
            .iter()
            .copied()
            .find(|&c| matches!(self.tree.kind(c), NodeKind::Call { .. }))
            .map(|c| CallExprNode {
                tree: self.tree,
                id: c,
            })
    }

    /// Span of the whole `m:f(...)` expression.
    pub fn span(&self) -> Span {
        self.tree.span(self.id)
    }
}

impl std::fmt::Debug for RemoteCallExpr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RemoteCallExpr({:?})", self.id)
    }
}

/// The module qualifier of a remote call.
#[derive(Copy, Clone, Debug)]
pub struct ModuleRefNode<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl ModuleRefNode<'_> {
    /// Underlying node id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Referenced module name.
    pub fn name(&self) -> Name {
        match self.tree.kind(self.id) {
            NodeKind::ModuleRef { name } => name,
            _ => Name::EMPTY,
        }
    }
}

/// A call expression node.
#[derive(Copy, Clone, Debug)]
pub struct CallExprNode<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl CallExprNode<'_> {
    /// Underlying node id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Called function name.
    pub fn name(&self) -> Name {
        match self.tree.kind(self.id) {
            NodeKind::Call { name } => name,
            _ => Name::EMPTY,
        }
    }
}
