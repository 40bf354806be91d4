//! Front-end trait definition.

use synwalk_ast::{Node, TreeArena};

use crate::{CompileOptions, ParseError};

/// Trait implemented by ingestion front-ends.
///
/// A front-end converts the source text of one compilation unit into a
/// syntax tree allocated in the caller's arena, returning the root
/// [`Node`]. The visitor engine consumes the result without knowing which
/// front-end produced it.
pub trait Frontend {
    /// Name of this front-end.
    fn name(&self) -> &str;

    /// File extensions this front-end handles, without the leading dot.
    fn extensions(&self) -> &[&str];

    /// Ingests `source` as the compilation unit `unit_name`.
    ///
    /// The root node is a `TranslationUnit` spelled with `unit_name`.
    /// Every node, spelling, and child slice of the tree is allocated in
    /// `arena` and stays valid for the arena's lifetime.
    fn parse<'a>(
        &self,
        arena: &'a TreeArena,
        unit_name: &str,
        source: &str,
        options: &CompileOptions,
    ) -> Result<Node<'a>, ParseError>;

    /// Returns true if this front-end can handle the given extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }

    /// Like [`parse`](Frontend::parse), but a failed ingestion yields the
    /// distinguished null handle instead of an error.
    ///
    /// The null handle is non-traversable: any visitor's `visit` rejects
    /// it, so a dropped error cannot be mistaken for an empty unit.
    fn parse_or_null<'a>(
        &self,
        arena: &'a TreeArena,
        unit_name: &str,
        source: &str,
        options: &CompileOptions,
    ) -> Node<'a> {
        match self.parse(arena, unit_name, source, options) {
            Ok(root) => root,
            Err(err) => {
                tracing::warn!(unit = unit_name, error = %err, "ingestion failed");
                Node::null()
            }
        }
    }
}
