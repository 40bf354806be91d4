//! The depth-first descent algorithm.
//!
//! These functions are the single traversal implementation every
//! recursive composition shares. Recursion is bounded by tree depth; the
//! tree is finite and acyclic by construction of the front-end, so no
//! node is dispatched twice within one walk.

use std::ops::ControlFlow;

use crate::Node;

use super::visit::{Tag, VisitFlow, Visitor};

/// Dispatches `node` and, if the dispatch proceeded, walks its subtree.
///
/// Pre-order: the node itself is dispatched before any of its children,
/// and children are walked in source lexical order with `node` as their
/// parent. A `Break` from any dispatch propagates immediately; siblings
/// and descendants scheduled after it are never dispatched.
pub fn walk_node<'t, V>(visitor: &mut V, node: &Node<'t>, parent: &Node<'t>) -> VisitFlow
where
    V: Visitor<'t>,
{
    visitor.on_node(Tag::Plain, node, parent)?;
    walk_children(visitor, node)
}

/// Walks every child of `node` in order, short-circuiting on `Break`.
#[inline]
pub fn walk_children<'t, V>(visitor: &mut V, node: &Node<'t>) -> VisitFlow
where
    V: Visitor<'t>,
{
    for child in node.children() {
        walk_node(visitor, child, node)?;
    }
    ControlFlow::Continue(())
}
