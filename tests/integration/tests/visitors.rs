//! End-to-end traversal tests over trees produced by the built-in
//! declaration front-end.

use std::collections::HashMap;
use std::ops::ControlFlow;

use pretty_assertions::assert_eq;
use synwalk_ast::visitor::{KindFilter, RecursiveVisitor, Tag, VisitFlow, Visitor};
use synwalk_ast::{Node, NodeKind, TreeArena, VisitError};
use synwalk_frontend::{CompileOptions, DeclParser, Frontend, Standard};

const HEADER: &str = "\
#include <chrono>

namespace foo
{
    class Foo {};
    namespace bar {}
    namespace quux {};
    namespace foobar
    {
        namespace foobarquux {}
    }
}
";

fn parse_header(arena: &TreeArena) -> Node<'_> {
    DeclParser::new()
        .parse(
            arena,
            "visitors_test.hpp",
            HEADER,
            &CompileOptions::new()
                .include_dir("/usr/include")
                .std(Standard::Cpp11),
        )
        .expect("fixture header parses")
}

/// Counts every dispatch it receives and keeps going.
#[derive(Default)]
struct Counter {
    count: usize,
}

impl<'t> Visitor<'t> for Counter {
    fn on_node(&mut self, _tag: Tag, _current: &Node<'t>, _parent: &Node<'t>) -> VisitFlow {
        self.count += 1;
        ControlFlow::Continue(())
    }
}

/// Counts the single dispatch a bare visitor performs, then aborts like
/// the default reaction does.
#[derive(Default)]
struct AbortingCounter {
    count: usize,
}

impl<'t> Visitor<'t> for AbortingCounter {
    fn on_node(&mut self, _tag: Tag, _current: &Node<'t>, _parent: &Node<'t>) -> VisitFlow {
        self.count += 1;
        ControlFlow::Break(())
    }
}

#[test]
fn bare_visitor_aborts_after_the_translation_unit() {
    let arena = TreeArena::new();
    let unit = parse_header(&arena);

    assert_eq!(unit.kind(), NodeKind::TranslationUnit);
    assert_eq!(unit.spelling(), "visitors_test.hpp");

    let mut visitor = AbortingCounter::default();
    assert_eq!(visitor.visit(&unit), Ok(false));
    assert_eq!(visitor.count, 1);
}

#[test]
fn recursive_visitor_covers_the_whole_unit() {
    let arena = TreeArena::new();
    let unit = parse_header(&arena);

    // include + foo + Foo + bar + quux + foobar + foobarquux + root
    let mut visitor = RecursiveVisitor::around(Counter::default());
    assert_eq!(visitor.visit(&unit), Ok(true));
    assert_eq!(visitor.inner().count, 8);
}

/// Marks the namespaces it was primed with as visited.
struct NamespaceVisitor {
    namespaces: HashMap<&'static str, bool>,
}

impl NamespaceVisitor {
    fn new(expected: &[&'static str]) -> Self {
        Self {
            namespaces: expected.iter().map(|name| (*name, false)).collect(),
        }
    }
}

impl<'t> Visitor<'t> for NamespaceVisitor {
    fn on_node(&mut self, tag: Tag, current: &Node<'t>, _parent: &Node<'t>) -> VisitFlow {
        assert_eq!(tag, Tag::Filtered(NodeKind::Namespace));
        assert_eq!(current.kind(), NodeKind::Namespace);
        if let Some(visited) = self.namespaces.get_mut(current.spelling()) {
            *visited = true;
        }
        ControlFlow::Continue(())
    }
}

#[test]
fn namespace_filter_marks_all_namespaces_and_nothing_else() {
    let arena = TreeArena::new();
    let unit = parse_header(&arena);

    let reaction = NamespaceVisitor::new(&["foo", "bar", "quux", "foobar", "foobarquux"]);
    let mut visitor = KindFilter::new(NodeKind::Namespace, reaction);
    assert_eq!(visitor.visit(&unit), Ok(true));

    for (namespace, visited) in &visitor.reaction().namespaces {
        assert!(visited, "namespace `{namespace}` was not visited");
    }
    // The class inside `foo` is not a namespace and must not be marked.
    assert!(!visitor.reaction().namespaces.contains_key("Foo"));
}

#[test]
fn filter_matches_plus_forwarded_dispatches_cover_every_node() {
    let arena = TreeArena::new();
    let unit = parse_header(&arena);

    let inner = RecursiveVisitor::around(Counter::default());
    let mut visitor = KindFilter::with_inner(NodeKind::Namespace, Counter::default(), inner);
    assert_eq!(visitor.visit(&unit), Ok(true));

    let matches = visitor.reaction().count;
    let (_, _, inner) = visitor.into_parts();
    let forwarded = inner.into_inner().count;
    assert_eq!(matches, 5);
    assert_eq!(matches + forwarded, 8);
}

#[test]
fn null_ingestion_result_refuses_traversal() {
    let arena = TreeArena::new();
    let unit = DeclParser::new().parse_or_null(
        &arena,
        "broken.hpp",
        "namespace foo {", // unclosed body
        &CompileOptions::new(),
    );

    assert!(unit.is_null());
    assert_eq!(
        RecursiveVisitor::new().visit(&unit),
        Err(VisitError::NullNode)
    );
}

#[test]
fn independent_traversals_of_one_tree_may_run_concurrently() {
    let arena = TreeArena::new();
    let unit = parse_header(&arena);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let mut visitor = RecursiveVisitor::around(Counter::default());
                assert_eq!(visitor.visit(&unit), Ok(true));
                assert_eq!(visitor.inner().count, 8);
            });
        }
    });
}

#[test]
fn repeated_visits_produce_identical_results() {
    let arena = TreeArena::new();
    let unit = parse_header(&arena);

    let mut visitor = KindFilter::new(NodeKind::Namespace, Counter::default());
    assert_eq!(visitor.visit(&unit), Ok(true));
    assert_eq!(visitor.reaction().count, 5);
    assert_eq!(visitor.visit(&unit), Ok(true));
    assert_eq!(visitor.reaction().count, 10);
}
