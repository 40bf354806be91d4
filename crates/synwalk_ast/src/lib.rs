//! # synwalk_ast
//!
//! Syntax tree types and the composable visitor engine for synwalk.
//!
//! This crate owns the in-memory representation of a syntax tree ingested
//! by an external front-end, plus the traversal primitives that client
//! analyses compose instead of re-implementing tree walking:
//!
//! - [`TreeArena`] - bump allocator owning every node of one ingested tree
//! - [`Node`] - cheap-to-copy, read-only handle into that tree
//! - [`NodeKind`] - closed enumeration of syntactic categories
//! - [`visitor`] - the dispatch contract and its stock compositions
//!
//! ## Architecture
//!
//! - All nodes of a translation unit live in a single arena (`bumpalo`)
//! - Handles are `Copy` views; a parent is passed at dispatch time, never
//!   stored on the handle
//! - Traversal variants differ only in the coverage they supply: a bare
//!   [`visitor::Visitor`] dispatches once, [`visitor::RecursiveVisitor`]
//!   walks depth-first pre-order, and [`visitor::KindFilter`] narrows the
//!   reaction point without narrowing coverage
//!
//! ## Example
//!
//! ```rust
//! use synwalk_ast::{Node, NodeKind, Span, TreeArena};
//! use synwalk_ast::visitor::{KindFilter, Tag, VisitFlow, Visitor};
//! use std::ops::ControlFlow;
//!
//! struct NameCollector<'t> {
//!     names: Vec<&'t str>,
//! }
//!
//! impl<'t> Visitor<'t> for NameCollector<'t> {
//!     fn on_node(&mut self, _tag: Tag, current: &Node<'t>, _parent: &Node<'t>) -> VisitFlow {
//!         self.names.push(current.spelling());
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let arena = TreeArena::new();
//! let class = arena.alloc(Node::new(NodeKind::ClassDecl, "Foo", Span::new(16, 28), &[]));
//! let children = arena.alloc_slice_copy(&[*class]);
//! let ns = arena.alloc(Node::new(NodeKind::Namespace, "foo", Span::new(0, 30), children));
//! let root_children = arena.alloc_slice_copy(&[*ns]);
//! let root = Node::new(NodeKind::TranslationUnit, "demo.hpp", Span::new(0, 30), root_children);
//!
//! let mut visitor = KindFilter::new(NodeKind::ClassDecl, NameCollector { names: Vec::new() });
//! assert!(visitor.visit(&root).unwrap());
//! assert_eq!(visitor.reaction().names, vec!["Foo"]);
//! ```

mod arena;
mod kind;
mod node;
mod span;
pub mod visitor;

pub use arena::TreeArena;
pub use kind::NodeKind;
pub use node::{Children, Node};
pub use span::Span;

// Re-export the visitor surface most callers need
pub use visitor::{KindFilter, RecursiveVisitor, Tag, VisitError, VisitFlow, Visitor};
