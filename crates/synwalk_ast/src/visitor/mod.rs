//! Composable traversal over the syntax tree.
//!
//! # Overview
//!
//! - [`Visitor`] - the dispatch contract; on its own it dispatches exactly
//!   once on the root and never descends
//! - [`RecursiveVisitor`] - adds depth-first pre-order coverage of every
//!   reachable node
//! - [`KindFilter`] - decorator narrowing the reaction point to one
//!   [`NodeKind`](crate::NodeKind) while the inner visitor keeps supplying
//!   coverage
//! - [`walk_node`] / [`walk_children`] - the descent algorithm itself
//!
//! Every dispatch carries a [`Tag`] telling the reaction how it was
//! reached, and returns a [`VisitFlow`]: `Continue` to let the traversal
//! proceed, `Break` to abort it as a whole.
//!
//! # Example
//!
//! ```rust
//! use synwalk_ast::{Node, NodeKind, Span, TreeArena};
//! use synwalk_ast::visitor::{RecursiveVisitor, Tag, VisitFlow, Visitor};
//! use std::ops::ControlFlow;
//!
//! struct Counter {
//!     count: usize,
//! }
//!
//! impl<'t> Visitor<'t> for Counter {
//!     fn on_node(&mut self, _tag: Tag, _current: &Node<'t>, _parent: &Node<'t>) -> VisitFlow {
//!         self.count += 1;
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let arena = TreeArena::new();
//! let ns = arena.alloc(Node::new(NodeKind::Namespace, "foo", Span::new(0, 16), &[]));
//! let children = arena.alloc_slice_copy(&[*ns]);
//! let root = Node::new(NodeKind::TranslationUnit, "tu", Span::new(0, 16), children);
//!
//! // A bare visitor touches the root only.
//! let mut once = Counter { count: 0 };
//! assert!(once.visit(&root).unwrap());
//! assert_eq!(once.count, 1);
//!
//! // Wrapped in RecursiveVisitor, the same reaction covers the whole tree.
//! let mut walker = RecursiveVisitor::around(Counter { count: 0 });
//! assert!(walker.visit(&root).unwrap());
//! assert_eq!(walker.inner().count, 2);
//! ```

mod kind_filter;
mod recursive;
mod visit;
mod walk;

pub use kind_filter::KindFilter;
pub use recursive::RecursiveVisitor;
pub use visit::{PassThrough, Tag, VisitError, VisitFlow, Visitor};
pub use walk::{walk_children, walk_node};
