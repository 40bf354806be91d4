//! Node handle definition.
//!
//! A [`Node`] is a cheap-to-copy, read-only view into an arena-owned
//! syntax tree produced by a front-end. Handles carry no parent link; the
//! traversal engine passes the logical parent alongside the node at
//! dispatch time, since the same handle can be reached from different
//! traversal entry points.

use serde::Serialize;

use crate::{NodeKind, Span};

/// A read-only handle to one point in the syntax tree.
///
/// # Lifetime
///
/// The `'t` lifetime ties the handle to the [`TreeArena`](crate::TreeArena)
/// owning the tree; handles stay valid exactly as long as that arena.
///
/// # Null handles
///
/// A front-end whose ingestion fails produces the distinguished null
/// handle ([`Node::null`]). Null handles are non-traversable: dispatching
/// on one is a contract violation reported by
/// [`Visitor::visit`](crate::visitor::Visitor::visit), never silently
/// skipped.
#[derive(Debug, Clone, Copy)]
pub struct Node<'t> {
    kind: NodeKind,
    spelling: &'t str,
    span: Span,
    children: &'t [Node<'t>],
}

impl<'t> Node<'t> {
    /// Creates a new node. Intended for front-ends building a tree; the
    /// spelling and children slice must live in the same arena as the tree.
    #[inline]
    pub const fn new(
        kind: NodeKind,
        spelling: &'t str,
        span: Span,
        children: &'t [Node<'t>],
    ) -> Self {
        Self {
            kind,
            spelling,
            span,
            children,
        }
    }

    /// The distinguished non-traversable handle a front-end returns for a
    /// failed ingestion.
    #[inline]
    pub const fn null() -> Self {
        Self {
            kind: NodeKind::Null,
            spelling: "",
            span: Span::new(0, 0),
            children: &[],
        }
    }

    /// The syntactic category of this node.
    #[inline]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The declared name or lexical text of this node.
    ///
    /// Empty for anonymous constructs (e.g. an unnamed namespace).
    #[inline]
    pub const fn spelling(&self) -> &'t str {
        self.spelling
    }

    /// The byte range this node covers in its unit's source.
    #[inline]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Iterates over the direct children in source lexical order.
    ///
    /// The sequence is finite and restartable: every call returns a fresh
    /// iterator over the same underlying children.
    #[inline]
    pub fn children(&self) -> Children<'t> {
        Children {
            inner: self.children.iter(),
        }
    }

    /// Number of direct children.
    #[inline]
    pub const fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if this is the null handle.
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.kind.is_null()
    }
}

/// Iterator over the direct children of a [`Node`].
#[derive(Debug, Clone)]
pub struct Children<'t> {
    inner: std::slice::Iter<'t, Node<'t>>,
}

impl<'t> Iterator for Children<'t> {
    type Item = &'t Node<'t>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Children<'_> {}

impl Serialize for Node<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut len = 2; // kind, span
        if !self.spelling.is_empty() {
            len += 1;
        }
        if !self.children.is_empty() {
            len += 1;
        }

        let mut state = serializer.serialize_struct("Node", len)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("span", &[self.span.start, self.span.end])?;
        if !self.spelling.is_empty() {
            state.serialize_field("spelling", self.spelling)?;
        }
        if !self.children.is_empty() {
            state.serialize_field("children", self.children)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeArena;
    use pretty_assertions::assert_eq;

    fn leaf<'t>(arena: &'t TreeArena, kind: NodeKind, spelling: &str) -> &'t Node<'t> {
        arena.alloc(Node::new(
            kind,
            arena.alloc_str(spelling),
            Span::new(0, 0),
            &[],
        ))
    }

    #[test]
    fn accessors_expose_identity() {
        let arena = TreeArena::new();
        let node = leaf(&arena, NodeKind::ClassDecl, "Foo");
        assert_eq!(node.kind(), NodeKind::ClassDecl);
        assert_eq!(node.spelling(), "Foo");
        assert_eq!(node.child_count(), 0);
        assert!(!node.is_null());
    }

    #[test]
    fn children_are_restartable() {
        let arena = TreeArena::new();
        let a = leaf(&arena, NodeKind::Namespace, "a");
        let b = leaf(&arena, NodeKind::Namespace, "b");
        let children = arena.alloc_slice_copy(&[*a, *b]);
        let root = Node::new(NodeKind::TranslationUnit, "tu", Span::new(0, 0), children);

        let first: Vec<_> = root.children().map(|c| c.spelling()).collect();
        let second: Vec<_> = root.children().map(|c| c.spelling()).collect();
        assert_eq!(first, vec!["a", "b"]);
        assert_eq!(first, second);
        assert_eq!(root.children().len(), 2);
    }

    #[test]
    fn null_handle_is_distinguished() {
        let node = Node::null();
        assert!(node.is_null());
        assert_eq!(node.kind(), NodeKind::Null);
        assert_eq!(node.spelling(), "");
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn anonymous_spelling_is_empty() {
        let arena = TreeArena::new();
        let node = leaf(&arena, NodeKind::Namespace, "");
        assert_eq!(node.spelling(), "");
        assert!(!node.is_null());
    }

    #[test]
    fn serializes_without_empty_fields() {
        let arena = TreeArena::new();
        let class = leaf(&arena, NodeKind::ClassDecl, "Foo");
        let children = arena.alloc_slice_copy(&[*class]);
        let root = Node::new(NodeKind::TranslationUnit, "tu.hpp", Span::new(0, 12), children);

        let json = serde_json::to_value(root).unwrap();
        assert_eq!(json["kind"], "TranslationUnit");
        assert_eq!(json["spelling"], "tu.hpp");
        assert_eq!(json["children"][0]["kind"], "ClassDecl");
        // Leaf with no children serializes no children array
        assert!(json["children"][0].get("children").is_none());
    }
}
