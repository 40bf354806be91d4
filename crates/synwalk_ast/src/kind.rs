//! Syntactic category definitions.
//!
//! The set is closed: front-ends map whatever their native categorization
//! is onto these kinds, and the visitor engine treats them as opaque,
//! equality-comparable values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The syntactic category of a [`Node`](crate::Node).
///
/// `Null` is a distinguished sentinel carried only by the null handle a
/// front-end returns for a failed ingestion; it never appears inside a
/// well-formed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Root of an ingested compilation unit.
    TranslationUnit,
    /// Named or anonymous namespace.
    Namespace,
    /// `namespace A = B;` alias.
    NamespaceAlias,
    /// `using namespace X;` directive.
    UsingDirective,
    /// Class declaration or definition.
    ClassDecl,
    /// Struct declaration or definition.
    StructDecl,
    /// Data member inside a record.
    FieldDecl,
    /// Free or member function declaration.
    FunctionDecl,
    /// Enumeration declaration.
    EnumDecl,
    /// Enumerator inside an enumeration.
    EnumConstant,
    /// `#include` directive.
    InclusionDirective,
    /// Sentinel kind of the non-traversable null handle.
    Null,
}

impl NodeKind {
    /// Returns true if this kind introduces a declared entity.
    #[inline]
    pub const fn is_declaration(&self) -> bool {
        matches!(
            self,
            NodeKind::Namespace
                | NodeKind::NamespaceAlias
                | NodeKind::ClassDecl
                | NodeKind::StructDecl
                | NodeKind::FieldDecl
                | NodeKind::FunctionDecl
                | NodeKind::EnumDecl
                | NodeKind::EnumConstant
        )
    }

    /// Returns true if nodes of this kind can own child declarations.
    #[inline]
    pub const fn is_scope(&self) -> bool {
        matches!(
            self,
            NodeKind::TranslationUnit
                | NodeKind::Namespace
                | NodeKind::ClassDecl
                | NodeKind::StructDecl
                | NodeKind::EnumDecl
        )
    }

    /// Returns true if this is the null sentinel kind.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, NodeKind::Null)
    }

    /// Canonical name of the kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeKind::TranslationUnit => "TranslationUnit",
            NodeKind::Namespace => "Namespace",
            NodeKind::NamespaceAlias => "NamespaceAlias",
            NodeKind::UsingDirective => "UsingDirective",
            NodeKind::ClassDecl => "ClassDecl",
            NodeKind::StructDecl => "StructDecl",
            NodeKind::FieldDecl => "FieldDecl",
            NodeKind::FunctionDecl => "FunctionDecl",
            NodeKind::EnumDecl => "EnumDecl",
            NodeKind::EnumConstant => "EnumConstant",
            NodeKind::InclusionDirective => "InclusionDirective",
            NodeKind::Null => "Null",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn declaration_predicate() {
        assert!(NodeKind::Namespace.is_declaration());
        assert!(NodeKind::EnumConstant.is_declaration());
        assert!(!NodeKind::TranslationUnit.is_declaration());
        assert!(!NodeKind::InclusionDirective.is_declaration());
        assert!(!NodeKind::Null.is_declaration());
    }

    #[test]
    fn scope_predicate() {
        assert!(NodeKind::TranslationUnit.is_scope());
        assert!(NodeKind::Namespace.is_scope());
        assert!(!NodeKind::FieldDecl.is_scope());
        assert!(!NodeKind::UsingDirective.is_scope());
    }

    #[rstest::rstest]
    #[case(NodeKind::TranslationUnit, "TranslationUnit")]
    #[case(NodeKind::Namespace, "Namespace")]
    #[case(NodeKind::NamespaceAlias, "NamespaceAlias")]
    #[case(NodeKind::InclusionDirective, "InclusionDirective")]
    #[case(NodeKind::Null, "Null")]
    fn display_matches_canonical_name(#[case] kind: NodeKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
        assert_eq!(kind.as_str(), expected);
    }

    #[test]
    fn only_null_is_null() {
        assert!(NodeKind::Null.is_null());
        assert!(!NodeKind::Namespace.is_null());
    }
}
