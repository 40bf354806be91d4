//! Built-in declaration front-end.
//!
//! Parses a minimal C++ declaration subset - enough surface to produce
//! realistic trees for the visitor engine: `#include` directives,
//! namespaces (named, anonymous, aliases), `using namespace` directives,
//! class/struct declarations with field and function members, free
//! functions, and enums with their enumerators. Bodies of functions and
//! initializers are not supported; this front-end reads declaration
//! structure, nothing more.

use synwalk_ast::{Node, NodeKind, Span, TreeArena};
use tracing::debug;

use crate::lexer::{Lexer, Token, TokenKind};
use crate::{CompileOptions, Frontend, ParseError, Standard};

/// Declaration subset front-end.
pub struct DeclParser;

impl DeclParser {
    /// Creates a new declaration front-end.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DeclParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for DeclParser {
    fn name(&self) -> &str {
        "decl"
    }

    fn extensions(&self) -> &[&str] {
        &["hpp", "hh", "h"]
    }

    fn parse<'a>(
        &self,
        arena: &'a TreeArena,
        unit_name: &str,
        source: &str,
        options: &CompileOptions,
    ) -> Result<Node<'a>, ParseError> {
        debug!(
            unit = unit_name,
            bytes = source.len(),
            std = %options.standard(),
            include_dirs = options.include_dirs().len(),
            "ingesting translation unit"
        );

        let mut parser = Parse {
            arena,
            lexer: Lexer::new(source),
            peeked: None,
            standard: options.standard(),
        };
        let root = parser.translation_unit(unit_name, source.len())?;

        debug!(unit = unit_name, "ingestion complete");
        Ok(root)
    }
}

struct Parse<'a, 's> {
    arena: &'a TreeArena,
    lexer: Lexer<'s>,
    peeked: Option<Token<'s>>,
    standard: Standard,
}

impl<'a, 's> Parse<'a, 's> {
    fn peek(&mut self) -> Result<Token<'s>, ParseError> {
        if self.peeked.is_none() {
            self.peeked = Some(self.lexer.next_token()?);
        }
        Ok(self.peeked.unwrap())
    }

    fn bump(&mut self) -> Result<Token<'s>, ParseError> {
        let token = self.peek()?;
        self.peeked = None;
        Ok(token)
    }

    fn expect_ident(&mut self, what: &str) -> Result<(&'s str, Span), ParseError> {
        let token = self.bump()?;
        match token.kind {
            TokenKind::Ident(name) => Ok((name, token.span)),
            _ => Err(self.unexpected(token, what)),
        }
    }

    fn expect(&mut self, kind: TokenKind<'s>, what: &str) -> Result<Token<'s>, ParseError> {
        let token = self.bump()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(self.unexpected(token, what))
        }
    }

    fn eat(&mut self, kind: TokenKind<'s>) -> Result<bool, ParseError> {
        if self.peek()?.kind == kind {
            self.peeked = None;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn unexpected(&self, token: Token<'s>, what: &str) -> ParseError {
        let found = match token.kind {
            TokenKind::Ident(name) => format!("`{name}`"),
            TokenKind::Directive { keyword, .. } => format!("`#{keyword}`"),
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::LBrace => "`{`".to_string(),
            TokenKind::RBrace => "`}`".to_string(),
            TokenKind::LParen => "`(`".to_string(),
            TokenKind::RParen => "`)`".to_string(),
            TokenKind::Semi => "`;`".to_string(),
            TokenKind::Comma => "`,`".to_string(),
            TokenKind::Eq => "`=`".to_string(),
        };
        ParseError::invalid_source_at(
            format!("expected {what}, found {found}"),
            token.span.start as usize,
        )
    }

    fn node(&self, kind: NodeKind, spelling: &str, span: Span, children: Vec<Node<'a>>) -> Node<'a> {
        Node::new(
            kind,
            self.arena.alloc_str(spelling),
            span,
            self.arena.alloc_slice_copy(&children),
        )
    }

    fn translation_unit(&mut self, unit_name: &str, len: usize) -> Result<Node<'a>, ParseError> {
        let mut children = Vec::new();
        while self.peek()?.kind != TokenKind::Eof {
            children.push(self.declaration()?);
        }
        Ok(self.node(
            NodeKind::TranslationUnit,
            unit_name,
            Span::new(0, len as u32),
            children,
        ))
    }

    fn declaration(&mut self) -> Result<Node<'a>, ParseError> {
        let token = self.peek()?;
        match token.kind {
            TokenKind::Directive { keyword, argument } => {
                self.peeked = None;
                self.directive(keyword, argument, token.span)
            }
            TokenKind::Ident("namespace") => self.namespace(),
            TokenKind::Ident("class") => self.record(NodeKind::ClassDecl),
            TokenKind::Ident("struct") => self.record(NodeKind::StructDecl),
            TokenKind::Ident("enum") => self.enumeration(),
            TokenKind::Ident("using") => self.using_directive(),
            TokenKind::Ident(_) => self.typed_declaration(),
            _ => Err(self.unexpected(token, "a declaration")),
        }
    }

    fn directive(
        &mut self,
        keyword: &'s str,
        argument: &'s str,
        span: Span,
    ) -> Result<Node<'a>, ParseError> {
        if keyword != "include" {
            return Err(ParseError::unsupported(format!(
                "`#{keyword}` directive"
            )));
        }
        let header = argument
            .trim_matches(|c| matches!(c, '<' | '>' | '"'))
            .trim();
        Ok(self.node(NodeKind::InclusionDirective, header, span, Vec::new()))
    }

    fn namespace(&mut self) -> Result<Node<'a>, ParseError> {
        let (_, kw_span) = self.expect_ident("`namespace`")?;
        let token = self.peek()?;

        let (name, _) = match token.kind {
            TokenKind::Ident(name) => {
                self.peeked = None;
                (name, token.span)
            }
            // Anonymous namespace: the spelling stays empty.
            TokenKind::LBrace => ("", token.span),
            _ => return Err(self.unexpected(token, "a namespace name or `{`")),
        };

        // `namespace A = B;` alias.
        if self.eat(TokenKind::Eq)? {
            let (_, _) = self.expect_ident("the aliased namespace")?;
            let semi = self.expect(TokenKind::Semi, "`;` after namespace alias")?;
            let span = Span::new(kw_span.start, semi.span.end);
            return Ok(self.node(NodeKind::NamespaceAlias, name, span, Vec::new()));
        }

        self.expect(TokenKind::LBrace, "`{` after namespace name")?;
        let mut children = Vec::new();
        while self.peek()?.kind != TokenKind::RBrace {
            if self.peek()?.kind == TokenKind::Eof {
                let token = self.peek()?;
                return Err(self.unexpected(token, "`}` closing namespace body"));
            }
            children.push(self.declaration()?);
        }
        let close = self.bump()?; // RBrace
        let end = self.trailing_semi(close.span.end)?;
        let span = Span::new(kw_span.start, end);
        Ok(self.node(NodeKind::Namespace, name, span, children))
    }

    fn record(&mut self, kind: NodeKind) -> Result<Node<'a>, ParseError> {
        let (_, kw_span) = self.expect_ident("`class` or `struct`")?;
        let (name, _) = self.expect_ident("a record name")?;

        // Forward declaration.
        let token = self.peek()?;
        if token.kind == TokenKind::Semi {
            self.peeked = None;
            let span = Span::new(kw_span.start, token.span.end);
            return Ok(self.node(kind, name, span, Vec::new()));
        }

        self.expect(TokenKind::LBrace, "`{` or `;` after record name")?;
        let mut children = Vec::new();
        while self.peek()?.kind != TokenKind::RBrace {
            if self.peek()?.kind == TokenKind::Eof {
                let token = self.peek()?;
                return Err(self.unexpected(token, "`}` closing record body"));
            }
            children.push(self.declaration()?);
        }
        let close = self.bump()?; // RBrace
        let end = self.trailing_semi(close.span.end)?;
        Ok(self.node(kind, name, Span::new(kw_span.start, end), children))
    }

    fn enumeration(&mut self) -> Result<Node<'a>, ParseError> {
        let (_, kw_span) = self.expect_ident("`enum`")?;

        if self.peek()?.kind == TokenKind::Ident("class") {
            if !self.standard.supports_scoped_enums() {
                return Err(ParseError::unsupported(format!(
                    "`enum class` requires C++11 or later (selected standard: {})",
                    self.standard
                )));
            }
            self.peeked = None;
        }

        let (name, _) = self.expect_ident("an enum name")?;
        self.expect(TokenKind::LBrace, "`{` after enum name")?;

        let mut children = Vec::new();
        loop {
            let token = self.peek()?;
            match token.kind {
                TokenKind::RBrace => break,
                TokenKind::Ident(enumerator) => {
                    self.peeked = None;
                    children.push(self.node(
                        NodeKind::EnumConstant,
                        enumerator,
                        token.span,
                        Vec::new(),
                    ));
                    if !self.eat(TokenKind::Comma)? {
                        break;
                    }
                }
                _ => return Err(self.unexpected(token, "an enumerator or `}`")),
            }
        }
        let close = self.expect(TokenKind::RBrace, "`}` closing enum body")?;
        let end = self.trailing_semi(close.span.end)?;
        Ok(self.node(
            NodeKind::EnumDecl,
            name,
            Span::new(kw_span.start, end),
            children,
        ))
    }

    fn using_directive(&mut self) -> Result<Node<'a>, ParseError> {
        let (_, kw_span) = self.expect_ident("`using`")?;
        let token = self.bump()?;
        if token.kind != TokenKind::Ident("namespace") {
            return Err(self.unexpected(token, "`namespace` after `using`"));
        }
        let (name, _) = self.expect_ident("the used namespace")?;
        let semi = self.expect(TokenKind::Semi, "`;` after using directive")?;
        Ok(self.node(
            NodeKind::UsingDirective,
            name,
            Span::new(kw_span.start, semi.span.end),
            Vec::new(),
        ))
    }

    /// `type name;` (field) or `type name(...);` (function declaration).
    fn typed_declaration(&mut self) -> Result<Node<'a>, ParseError> {
        let (_, type_span) = self.expect_ident("a type name")?;
        let (name, _) = self.expect_ident("a declarator name")?;

        if self.eat(TokenKind::LParen)? {
            // Parameters carry no structure here; skip to the closing paren.
            loop {
                let token = self.bump()?;
                match token.kind {
                    TokenKind::RParen => break,
                    TokenKind::Eof => {
                        return Err(self.unexpected(token, "`)` closing parameter list"));
                    }
                    _ => {}
                }
            }
            let semi = self.expect(TokenKind::Semi, "`;` after function declaration")?;
            return Ok(self.node(
                NodeKind::FunctionDecl,
                name,
                Span::new(type_span.start, semi.span.end),
                Vec::new(),
            ));
        }

        let semi = self.expect(TokenKind::Semi, "`;` after declaration")?;
        Ok(self.node(
            NodeKind::FieldDecl,
            name,
            Span::new(type_span.start, semi.span.end),
            Vec::new(),
        ))
    }

    /// Consumes an optional `;` after a closing brace, returning the end
    /// offset of whichever token came last.
    fn trailing_semi(&mut self, brace_end: u32) -> Result<u32, ParseError> {
        let token = self.peek()?;
        if token.kind == TokenKind::Semi {
            self.peeked = None;
            Ok(token.span.end)
        } else {
            Ok(brace_end)
        }
    }
}
