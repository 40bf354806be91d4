//! The dispatch contract shared by every visitor variant.

use std::ops::ControlFlow;

use thiserror::Error;

use crate::{Node, NodeKind};

/// Result of one dispatch, governing traversal continuation.
///
/// - `ControlFlow::Continue(())` - the traversal may proceed
/// - `ControlFlow::Break(())` - abort the whole traversal
///
/// The `?` operator propagates `Break` through nested walks, which is how
/// a stop at any node prevents every node scheduled after it in pre-order
/// from being dispatched.
pub type VisitFlow = ControlFlow<()>;

/// How a dispatch reached the reaction.
///
/// `Plain` is the ordinary dispatch every node receives. `Filtered` marks
/// a dispatch that a [`KindFilter`](super::KindFilter) re-routed because
/// the node's kind matched the filter's target; the payload is that
/// target kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Ordinary dispatch reaching any node.
    Plain,
    /// Dispatch re-routed by a kind filter targeting this kind.
    Filtered(NodeKind),
}

/// Errors raised synchronously from [`Visitor::visit`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VisitError {
    /// Dispatch was attempted on the null handle a front-end returns for
    /// a failed ingestion. Null handles are non-traversable by contract.
    #[error("cannot traverse a null node handle")]
    NullNode,
}

/// The dispatch contract.
///
/// Implement [`on_node`](Visitor::on_node) on a concrete analysis to
/// react to dispatches; everything else is provided. A bare implementor
/// is the minimal primitive: [`visit`](Visitor::visit) dispatches exactly
/// once on the root and the traversal ends there, because no descent
/// logic exists at this layer. Whether descendants are covered is decided
/// entirely by composition - wrap the reaction in
/// [`RecursiveVisitor`](super::RecursiveVisitor) for full-tree coverage,
/// or in [`KindFilter`](super::KindFilter) to narrow the reaction point.
///
/// The default reaction aborts, so an unoverridden visitor stops after
/// the root and `visit` reports `Ok(false)`.
pub trait Visitor<'t>: Sized {
    /// Reaction to one dispatch of `current` with logical parent `parent`.
    ///
    /// Default: abort the traversal.
    #[inline]
    fn on_node(&mut self, tag: Tag, current: &Node<'t>, parent: &Node<'t>) -> VisitFlow {
        let _ = (tag, current, parent);
        ControlFlow::Break(())
    }

    /// The coverage this visitor type supplies, dispatching every reached
    /// node through `sink` rather than `self`.
    ///
    /// Decorators delegate to their inner type's `drive` to inherit its
    /// coverage while intercepting the dispatches; `sink` is always the
    /// outermost visitor of the composition. The base contract performs a
    /// single dispatch of `root` and no descent.
    #[inline]
    fn drive<S: Visitor<'t>>(sink: &mut S, root: &Node<'t>, parent: &Node<'t>) -> VisitFlow {
        sink.on_node(Tag::Plain, root, parent)
    }

    /// Runs a traversal rooted at `root`.
    ///
    /// The root is dispatched with its parent defaulted to `root` itself,
    /// since the root has no parent in the tree. Returns `Ok(true)` if
    /// the traversal exhausted every node it covers, `Ok(false)` if any
    /// dispatch aborted it, and [`VisitError::NullNode`] if `root` is the
    /// null handle.
    fn visit(&mut self, root: &Node<'t>) -> Result<bool, VisitError> {
        if root.is_null() {
            return Err(VisitError::NullNode);
        }
        Ok(Self::drive(self, root, root).is_continue())
    }
}

/// Stock reaction that lets every dispatch proceed.
///
/// This is the default inner reaction of
/// [`RecursiveVisitor`](super::RecursiveVisitor): nodes nobody reacts to
/// keep the walk alive instead of aborting it.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl<'t> Visitor<'t> for PassThrough {
    #[inline]
    fn on_node(&mut self, _tag: Tag, _current: &Node<'t>, _parent: &Node<'t>) -> VisitFlow {
        ControlFlow::Continue(())
    }
}
