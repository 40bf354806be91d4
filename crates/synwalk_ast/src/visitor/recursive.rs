//! Depth-first pre-order traversal.

use crate::Node;

use super::visit::{PassThrough, Tag, VisitFlow, Visitor};
use super::walk::walk_node;

/// Visitor variant supplying full-tree coverage.
///
/// Where a bare [`Visitor`] dispatches once and stops,
/// `RecursiveVisitor` drives the depth-first pre-order walk of
/// [`walk_node`]: every node reachable from the root is dispatched
/// exactly once, in source order, as long as results keep proceeding.
///
/// The wrapped reaction `V` receives every dispatch. It defaults to
/// [`PassThrough`], so the stock `RecursiveVisitor::new()` completes any
/// well-formed tree - which is also what makes it the usual inner
/// visitor of a [`KindFilter`](super::KindFilter): nodes the filter does
/// not match fall through to a reaction that keeps the walk alive.
///
/// # Example
///
/// ```rust
/// use synwalk_ast::{Node, NodeKind, Span, TreeArena};
/// use synwalk_ast::visitor::{RecursiveVisitor, Visitor};
///
/// let arena = TreeArena::new();
/// let root = Node::new(NodeKind::TranslationUnit, "tu", Span::new(0, 0), &[]);
/// assert!(RecursiveVisitor::new().visit(&root).unwrap());
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecursiveVisitor<V = PassThrough> {
    inner: V,
}

impl RecursiveVisitor {
    /// Stock recursive visitor whose reaction proceeds everywhere.
    pub fn new() -> Self {
        Self { inner: PassThrough }
    }
}

impl<V> RecursiveVisitor<V> {
    /// Wraps `reaction` so it receives every dispatch of a full walk.
    pub fn around(reaction: V) -> Self {
        Self { inner: reaction }
    }

    /// The wrapped reaction.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Mutable access to the wrapped reaction.
    pub fn inner_mut(&mut self) -> &mut V {
        &mut self.inner
    }

    /// Consumes the visitor, returning the wrapped reaction.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<'t, V: Visitor<'t>> Visitor<'t> for RecursiveVisitor<V> {
    #[inline]
    fn on_node(&mut self, tag: Tag, current: &Node<'t>, parent: &Node<'t>) -> VisitFlow {
        self.inner.on_node(tag, current, parent)
    }

    #[inline]
    fn drive<S: Visitor<'t>>(sink: &mut S, root: &Node<'t>, parent: &Node<'t>) -> VisitFlow {
        walk_node(sink, root, parent)
    }
}
