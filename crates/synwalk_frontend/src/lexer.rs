//! Token scanner for the declaration subset.
//!
//! Produces just enough structure for [`DeclParser`](crate::DeclParser):
//! identifier paths (`foo::bar`), punctuation, and line-level
//! preprocessor directives. Comments and whitespace are skipped.

use synwalk_ast::Span;

use crate::ParseError;

/// One scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'s> {
    pub kind: TokenKind<'s>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind<'s> {
    /// Identifier or identifier path (`foo`, `foo::bar`). Keywords are
    /// recognized by the parser, not the scanner.
    Ident(&'s str),
    /// Line-level `#keyword argument` directive.
    Directive { keyword: &'s str, argument: &'s str },
    LBrace,
    RBrace,
    LParen,
    RParen,
    Semi,
    Comma,
    Eq,
    Eof,
}

pub(crate) struct Lexer<'s> {
    source: &'s str,
    pos: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source, pos: 0 }
    }

    fn rest(&self) -> &'s str {
        &self.source[self.pos..]
    }

    fn peek_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            let rest = self.rest();
            if let Some(stripped) = rest.strip_prefix(|c: char| c.is_whitespace()) {
                self.pos += rest.len() - stripped.len();
            } else if let Some(after) = rest.strip_prefix("//") {
                let line_len = after.find('\n').map_or(after.len(), |i| i + 1);
                self.pos += 2 + line_len;
            } else if let Some(after) = rest.strip_prefix("/*") {
                match after.find("*/") {
                    Some(end) => self.pos += 2 + end + 2,
                    None => {
                        return Err(ParseError::invalid_source_at(
                            "unterminated block comment",
                            self.pos,
                        ));
                    }
                }
            } else {
                return Ok(());
            }
        }
    }

    fn scan_ident(&mut self) -> &'s str {
        let start = self.pos;
        loop {
            let word_len = self
                .rest()
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(self.rest().len());
            self.pos += word_len;
            // Fold `a::b` paths into a single identifier token.
            let next_is_path = self.rest().starts_with("::")
                && self.source[self.pos + 2..]
                    .starts_with(|c: char| c.is_ascii_alphabetic() || c == '_');
            if next_is_path {
                self.pos += 2;
            } else {
                return &self.source[start..self.pos];
            }
        }
    }

    fn scan_directive(&mut self) -> Token<'s> {
        let start = self.pos;
        self.pos += 1; // '#'
        let keyword = self.scan_ident();
        let line_len = self.rest().find('\n').unwrap_or(self.rest().len());
        let argument = self.rest()[..line_len].trim();
        self.pos += line_len;
        Token {
            kind: TokenKind::Directive { keyword, argument },
            span: Span::new(start as u32, self.pos as u32),
        }
    }

    /// Scans the next token, skipping whitespace and comments.
    pub fn next_token(&mut self) -> Result<Token<'s>, ParseError> {
        self.skip_trivia()?;
        let start = self.pos;
        let single = |kind, end: usize| Token {
            kind,
            span: Span::new(start as u32, end as u32),
        };

        let Some(byte) = self.peek_byte() else {
            return Ok(single(TokenKind::Eof, start));
        };

        match byte {
            b'#' => Ok(self.scan_directive()),
            b'{' | b'}' | b'(' | b')' | b';' | b',' | b'=' => {
                self.pos += 1;
                let kind = match byte {
                    b'{' => TokenKind::LBrace,
                    b'}' => TokenKind::RBrace,
                    b'(' => TokenKind::LParen,
                    b')' => TokenKind::RParen,
                    b';' => TokenKind::Semi,
                    b',' => TokenKind::Comma,
                    _ => TokenKind::Eq,
                };
                Ok(single(kind, self.pos))
            }
            b if b.is_ascii_alphabetic() || b == b'_' => {
                let ident = self.scan_ident();
                Ok(single(TokenKind::Ident(ident), self.pos))
            }
            other => Err(ParseError::invalid_source_at(
                format!("unexpected character `{}`", other as char),
                start,
            )),
        }
    }
}
