//! # synwalk_frontend
//!
//! Front-end ingestion boundary for synwalk.
//!
//! This crate provides:
//! - The [`Frontend`] trait every ingestion front-end implements
//! - [`CompileOptions`] - include-search directories and a
//!   language-[`Standard`] selector
//! - A built-in [`DeclParser`] front-end for a minimal C++ declaration
//!   subset, used to produce real trees for the visitor engine
//!
//! ## Architecture
//!
//! Front-ends convert a compilation unit's source text into
//! [`Node`](synwalk_ast::Node) trees allocated in a caller-supplied
//! [`TreeArena`](synwalk_ast::TreeArena). A failed ingestion surfaces as
//! a [`ParseError`] - or, through [`Frontend::parse_or_null`], as the
//! distinguished null handle the visitor engine refuses to traverse.
//!
//! ## Example
//!
//! ```rust
//! use synwalk_ast::{NodeKind, TreeArena};
//! use synwalk_frontend::{CompileOptions, DeclParser, Frontend, Standard};
//!
//! let arena = TreeArena::new();
//! let options = CompileOptions::new().std(Standard::Cpp11);
//! let unit = DeclParser::new()
//!     .parse(&arena, "demo.hpp", "namespace foo { class Foo {}; }", &options)
//!     .unwrap();
//!
//! assert_eq!(unit.kind(), NodeKind::TranslationUnit);
//! assert_eq!(unit.spelling(), "demo.hpp");
//! ```

mod decl;
mod error;
mod lexer;
mod options;
mod traits;

pub use decl::DeclParser;
pub use error::ParseError;
pub use options::{CompileOptions, Standard};
pub use traits::Frontend;
