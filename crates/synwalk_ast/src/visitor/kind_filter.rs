//! Kind-filtering decorator.

use crate::{Node, NodeKind};

use super::recursive::RecursiveVisitor;
use super::visit::{Tag, VisitFlow, Visitor};

/// Decorator narrowing a reaction to one syntactic category.
///
/// A `KindFilter` owns a target [`NodeKind`], the reaction `R` invoked
/// for matching nodes, and an inner visitor `I` it delegates everything
/// else to. When a plain dispatch reaches a node whose kind equals the
/// target, the dispatch is re-tagged [`Tag::Filtered`] and routed to the
/// reaction; any other dispatch is forwarded unchanged to the inner
/// visitor.
///
/// Coverage is owned by the bottom of the composition: the filter's own
/// traversal is whatever the inner visitor type supplies. With the
/// default inner ([`RecursiveVisitor`]) the whole tree is enumerated and
/// only the reaction point narrows; over a non-recursive inner the
/// composition is well-defined but degenerate - only the root is ever
/// reachable.
///
/// A `Break` from the filtered reaction is an ordinary dispatch result
/// and aborts the whole traversal.
///
/// # Example
///
/// ```rust
/// use synwalk_ast::{Node, NodeKind, Span, TreeArena};
/// use synwalk_ast::visitor::{KindFilter, Tag, VisitFlow, Visitor};
/// use std::ops::ControlFlow;
///
/// struct Namespaces<'t>(Vec<&'t str>);
///
/// impl<'t> Visitor<'t> for Namespaces<'t> {
///     fn on_node(&mut self, _tag: Tag, current: &Node<'t>, _parent: &Node<'t>) -> VisitFlow {
///         self.0.push(current.spelling());
///         ControlFlow::Continue(())
///     }
/// }
///
/// let arena = TreeArena::new();
/// let ns = arena.alloc(Node::new(NodeKind::Namespace, "foo", Span::new(0, 16), &[]));
/// let children = arena.alloc_slice_copy(&[*ns]);
/// let root = Node::new(NodeKind::TranslationUnit, "tu", Span::new(0, 16), children);
///
/// let mut visitor = KindFilter::new(NodeKind::Namespace, Namespaces(Vec::new()));
/// assert!(visitor.visit(&root).unwrap());
/// assert_eq!(visitor.reaction().0, vec!["foo"]);
/// ```
#[derive(Debug, Clone)]
pub struct KindFilter<R, I = RecursiveVisitor> {
    target: NodeKind,
    reaction: R,
    inner: I,
}

impl<R> KindFilter<R> {
    /// Filter for `target` over a stock [`RecursiveVisitor`], the usual
    /// composition: full-tree coverage, reaction narrowed to `target`.
    pub fn new(target: NodeKind, reaction: R) -> Self {
        Self {
            target,
            reaction,
            inner: RecursiveVisitor::new(),
        }
    }
}

impl<R, I> KindFilter<R, I> {
    /// Filter for `target` delegating to an explicit inner visitor.
    pub fn with_inner(target: NodeKind, reaction: R, inner: I) -> Self {
        Self {
            target,
            reaction,
            inner,
        }
    }

    /// The kind this filter reacts to.
    pub fn target(&self) -> NodeKind {
        self.target
    }

    /// The reaction invoked for matching nodes.
    pub fn reaction(&self) -> &R {
        &self.reaction
    }

    /// Mutable access to the reaction.
    pub fn reaction_mut(&mut self) -> &mut R {
        &mut self.reaction
    }

    /// Consumes the filter, returning its target, reaction, and inner
    /// visitor.
    pub fn into_parts(self) -> (NodeKind, R, I) {
        (self.target, self.reaction, self.inner)
    }
}

impl<'t, R, I> Visitor<'t> for KindFilter<R, I>
where
    R: Visitor<'t>,
    I: Visitor<'t>,
{
    fn on_node(&mut self, tag: Tag, current: &Node<'t>, parent: &Node<'t>) -> VisitFlow {
        match tag {
            Tag::Plain if current.kind() == self.target => {
                self.reaction
                    .on_node(Tag::Filtered(self.target), current, parent)
            }
            _ => self.inner.on_node(tag, current, parent),
        }
    }

    #[inline]
    fn drive<S: Visitor<'t>>(sink: &mut S, root: &Node<'t>, parent: &Node<'t>) -> VisitFlow {
        I::drive(sink, root, parent)
    }
}
