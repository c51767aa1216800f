//! Recursive-descent reader for top-level type declarations.
//!
//! The parser walks the token stream looking for `type`, `interface` and
//! `enum` declarations at nesting depth zero. Everything else (imports,
//! functions, classes, namespaces) is skipped group by group. A declaration
//! the parser cannot read is dropped and scanning resumes after its first
//! token, so unsupported syntax never aborts extraction.

use std::ops::Range;

use crate::{
    lexer::{Token, tokenize},
    syntax::{AliasDecl, InterfaceDecl, Keyword, Member, Module, TypeExpr},
};

#[derive(Debug)]
struct ParseError {
    message: String,
    offset: usize,
}

type PResult<T> = std::result::Result<T, ParseError>;

/// Parse the top-level declarations of `src`.
pub fn parse(src: &str) -> Module {
    Parser::new(tokenize(src), src).parse_module()
}

struct Parser<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    pos: usize,
    src: &'src str,
}

impl<'src> Parser<'src> {
    fn new(tokens: Vec<(Token<'src>, Range<usize>)>, src: &'src str) -> Self {
        Self {
            tokens,
            pos: 0,
            src,
        }
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    fn peek(&self) -> Option<Token<'src>> {
        self.peek_at(0)
    }

    fn peek_at(&self, n: usize) -> Option<Token<'src>> {
        self.tokens.get(self.pos + n).map(|(t, _)| *t)
    }

    fn advance(&mut self) -> Option<Token<'src>> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn at(&self, token: Token<'_>) -> bool {
        self.peek() == Some(token)
    }

    fn at_ident(&self, ident: &str) -> bool {
        self.peek() == Some(Token::Ident(ident))
    }

    fn eat(&mut self, token: Token<'_>) -> bool {
        if self.at(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|(_, s)| s.start)
            .unwrap_or(self.src.len())
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            offset: self.offset(),
        }
    }

    fn expect(&mut self, token: Token<'_>) -> PResult<()> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.error(format!("expected {:?}, got {:?}", token, self.peek())))
        }
    }

    fn expect_ident(&mut self) -> PResult<&'src str> {
        match self.peek() {
            Some(Token::Ident(name)) => {
                self.pos += 1;
                Ok(name)
            }
            other => Err(self.error(format!("expected identifier, got {:?}", other))),
        }
    }

    /// Source text of the tokens from `start` up to the cursor, with
    /// whitespace runs collapsed.
    fn text_from(&self, start: usize) -> String {
        if start >= self.pos {
            return String::new();
        }
        let begin = self.tokens[start].1.start;
        let end = self.tokens[self.pos - 1].1.end;
        self.src[begin..end]
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    // =========================================================================
    // Grouping
    // =========================================================================

    fn is_open(token: Token<'_>) -> bool {
        matches!(token, Token::LBrace | Token::LParen | Token::LBracket)
    }

    fn is_close(token: Token<'_>) -> bool {
        matches!(token, Token::RBrace | Token::RParen | Token::RBracket)
    }

    /// Skip to just past the group closing the one opened by the token
    /// before the cursor.
    fn skip_group(&mut self) {
        let mut depth = 1usize;
        while let Some(token) = self.advance() {
            if Self::is_open(token) {
                depth += 1;
            } else if Self::is_close(token) {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
        }
    }

    /// Skip a `<...>` type parameter or argument list at the cursor.
    fn skip_angles(&mut self) -> PResult<()> {
        self.expect(Token::LAngle)?;
        let mut depth = 1usize;
        while let Some(token) = self.advance() {
            match token {
                Token::LAngle => depth += 1,
                Token::RAngle => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                t if Self::is_open(t) => self.skip_group(),
                _ => {}
            }
        }
        Err(self.error("unterminated type parameter list"))
    }

    /// Index of the token closing the group opened at `open`.
    fn matching_close(&self, open: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (i, (token, _)) in self.tokens.iter().enumerate().skip(open) {
            if Self::is_open(*token) {
                depth += 1;
            } else if Self::is_close(*token) {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
        }
        None
    }

    // =========================================================================
    // Module level
    // =========================================================================

    fn parse_module(mut self) -> Module {
        let mut module = Module::default();

        while let Some(token) = self.peek() {
            let start = self.pos;
            let result = match token {
                Token::Ident("type") if self.is_alias_start() => {
                    self.parse_alias().map(|alias| module.aliases.push(alias))
                }
                Token::Ident("interface") if matches!(self.peek_at(1), Some(Token::Ident(_))) => {
                    self.parse_interface().map(|i| module.interfaces.push(i))
                }
                Token::Ident("enum") if matches!(self.peek_at(1), Some(Token::Ident(_))) => {
                    self.parse_enum().map(|name| module.enums.push(name))
                }
                _ => {
                    self.skip_item();
                    Ok(())
                }
            };

            if let Err(err) = result {
                tracing::debug!(
                    offset = err.offset,
                    "skipping unreadable declaration: {}",
                    err.message
                );
                self.pos = start + 1;
            }
        }

        module
    }

    fn is_alias_start(&self) -> bool {
        matches!(self.peek_at(1), Some(Token::Ident(_)))
            && matches!(self.peek_at(2), Some(Token::Eq | Token::LAngle))
    }

    fn skip_item(&mut self) {
        if let Some(token) = self.advance() {
            if Self::is_open(token) {
                self.skip_group();
            }
        }
    }

    fn parse_alias(&mut self) -> PResult<AliasDecl> {
        self.expect(Token::Ident("type"))?;
        let name = self.expect_ident()?.to_string();
        let generic = self.at(Token::LAngle);
        if generic {
            self.skip_angles()?;
        }
        self.expect(Token::Eq)?;
        let ty = self.parse_type()?;
        self.eat(Token::Semi);
        Ok(AliasDecl { name, generic, ty })
    }

    fn parse_interface(&mut self) -> PResult<InterfaceDecl> {
        self.expect(Token::Ident("interface"))?;
        let name = self.expect_ident()?.to_string();
        let generic = self.at(Token::LAngle);
        if generic {
            self.skip_angles()?;
        }

        let mut extends = Vec::new();
        if self.at_ident("extends") {
            self.advance();
            loop {
                extends.push(self.parse_postfix()?);
                if !self.eat(Token::Comma) {
                    break;
                }
            }
        }

        self.expect(Token::LBrace)?;
        let members = self.parse_members()?;
        Ok(InterfaceDecl {
            name,
            generic,
            extends,
            members,
        })
    }

    fn parse_enum(&mut self) -> PResult<String> {
        self.expect(Token::Ident("enum"))?;
        let name = self.expect_ident()?.to_string();
        self.expect(Token::LBrace)?;
        self.skip_group();
        Ok(name)
    }

    // =========================================================================
    // Object members
    // =========================================================================

    /// Parse members up to and including the closing brace.
    fn parse_members(&mut self) -> PResult<Vec<Member>> {
        let mut members = Vec::new();

        loop {
            while self.eat(Token::Semi) || self.eat(Token::Comma) {}

            match self.peek() {
                None => return Err(self.error("unterminated object type")),
                Some(Token::RBrace) => {
                    self.advance();
                    return Ok(members);
                }
                // Index signature: not a property.
                Some(Token::LBracket) => {
                    self.advance();
                    self.skip_group();
                    self.eat(Token::Question);
                    if self.eat(Token::Colon) {
                        self.parse_type()?;
                    }
                    continue;
                }
                // Call and construct signatures.
                Some(Token::LParen | Token::LAngle) => {
                    self.skip_member();
                    continue;
                }
                Some(Token::Ident("new"))
                    if matches!(self.peek_at(1), Some(Token::LParen | Token::LAngle)) =>
                {
                    self.skip_member();
                    continue;
                }
                _ => {}
            }

            if self.at_ident("readonly") && self.is_member_name(1) {
                self.advance();
            }

            members.push(self.parse_member()?);
        }
    }

    fn is_member_name(&self, n: usize) -> bool {
        matches!(
            self.peek_at(n),
            Some(Token::Ident(_) | Token::Str(_) | Token::Number(_))
        )
    }

    fn parse_member(&mut self) -> PResult<Member> {
        let name = match self.advance() {
            Some(Token::Ident(name)) | Some(Token::Number(name)) => name.to_string(),
            Some(Token::Str(quoted)) => unquote(quoted),
            other => return Err(self.error(format!("expected member name, got {:?}", other))),
        };
        let optional = self.eat(Token::Question);

        let ty = if self.at(Token::LParen) || self.at(Token::LAngle) {
            self.parse_method_signature()?
        } else if self.eat(Token::Colon) {
            self.parse_type()?
        } else {
            TypeExpr::Keyword(Keyword::Any)
        };

        Ok(Member { name, optional, ty })
    }

    /// `(params): R` after a method name, reported as `(params) => R`.
    fn parse_method_signature(&mut self) -> PResult<TypeExpr> {
        let start = self.pos;
        if self.at(Token::LAngle) {
            self.skip_angles()?;
        }
        self.expect(Token::LParen)?;
        self.skip_group();
        let params = self.text_from(start);

        let ret = if self.eat(Token::Colon) {
            let ret_start = self.pos;
            self.parse_type()?;
            self.text_from(ret_start)
        } else {
            "any".to_string()
        };
        Ok(TypeExpr::Opaque(format!("{} => {}", params, ret)))
    }

    fn skip_member(&mut self) {
        while let Some(token) = self.peek() {
            match token {
                Token::Semi | Token::Comma => {
                    self.advance();
                    return;
                }
                Token::RBrace => return,
                _ => self.skip_item(),
            }
        }
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn parse_type(&mut self) -> PResult<TypeExpr> {
        self.eat(Token::Pipe);
        let first = self.parse_intersection()?;
        if !self.at(Token::Pipe) {
            return Ok(first);
        }

        let mut parts = vec![first];
        while self.eat(Token::Pipe) {
            parts.push(self.parse_intersection()?);
        }
        Ok(TypeExpr::Union(parts))
    }

    fn parse_intersection(&mut self) -> PResult<TypeExpr> {
        self.eat(Token::Amp);
        let first = self.parse_postfix()?;
        if !self.at(Token::Amp) {
            return Ok(first);
        }

        let mut parts = vec![first];
        while self.eat(Token::Amp) {
            parts.push(self.parse_postfix()?);
        }
        Ok(TypeExpr::Intersection(parts))
    }

    fn parse_postfix(&mut self) -> PResult<TypeExpr> {
        let start = self.pos;
        let mut ty = self.parse_prefix()?;

        while self.at(Token::LBracket) {
            self.advance();
            if self.eat(Token::RBracket) {
                ty = TypeExpr::Array(Box::new(ty));
            } else {
                // Indexed access `T[K]`.
                self.skip_group();
                ty = TypeExpr::Opaque(self.text_from(start));
            }
        }

        Ok(ty)
    }

    fn parse_prefix(&mut self) -> PResult<TypeExpr> {
        match self.peek() {
            // `readonly T[]` is the same array to a reader.
            Some(Token::Ident("readonly")) => {
                self.advance();
                self.parse_postfix()
            }
            Some(Token::Ident("keyof" | "typeof" | "unique" | "infer")) => {
                let start = self.pos;
                self.advance();
                self.parse_postfix()?;
                Ok(TypeExpr::Opaque(self.text_from(start)))
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> PResult<TypeExpr> {
        let start = self.pos;

        match self.peek() {
            Some(Token::LParen) if self.is_function_type() => self.parse_function_type(start),
            Some(Token::LAngle) => self.parse_function_type(start),
            Some(Token::Ident("new")) => {
                self.advance();
                self.parse_function_type(start)
            }
            Some(Token::LParen) => {
                self.advance();
                let ty = self.parse_type()?;
                self.expect(Token::RParen)?;
                Ok(ty)
            }
            Some(Token::LBrace) => {
                self.advance();
                if self.is_mapped_type() {
                    self.skip_group();
                    return Ok(TypeExpr::Opaque(self.text_from(start)));
                }
                Ok(TypeExpr::Object(self.parse_members()?))
            }
            Some(Token::LBracket) => {
                self.advance();
                self.skip_group();
                Ok(TypeExpr::Opaque(self.text_from(start)))
            }
            Some(Token::Str(s)) | Some(Token::Number(s)) => {
                self.advance();
                Ok(TypeExpr::Literal(s.to_string()))
            }
            Some(Token::Minus) if matches!(self.peek_at(1), Some(Token::Number(_))) => {
                self.advance();
                self.advance();
                Ok(TypeExpr::Literal(self.text_from(start).replace(' ', "")))
            }
            Some(Token::Template(s)) => {
                self.advance();
                Ok(TypeExpr::Opaque(s.to_string()))
            }
            Some(Token::Ident(ident @ ("true" | "false"))) => {
                self.advance();
                Ok(TypeExpr::Literal(ident.to_string()))
            }
            Some(Token::Ident("import")) if self.peek_at(1) == Some(Token::LParen) => {
                self.advance();
                self.advance();
                self.skip_group();
                while self.eat(Token::Dot) {
                    self.expect_ident()?;
                }
                if self.at(Token::LAngle) {
                    self.skip_angles()?;
                }
                Ok(TypeExpr::Opaque(self.text_from(start)))
            }
            Some(Token::Ident(ident)) => {
                self.advance();
                if let Some(keyword) = Keyword::from_ident(ident) {
                    return Ok(TypeExpr::Keyword(keyword));
                }
                self.parse_reference(ident)
            }
            other => Err(self.error(format!("expected type, got {:?}", other))),
        }
    }

    fn parse_reference(&mut self, first: &str) -> PResult<TypeExpr> {
        let mut name = first.to_string();
        while self.at(Token::Dot) && matches!(self.peek_at(1), Some(Token::Ident(_))) {
            self.advance();
            name.push('.');
            name.push_str(self.expect_ident()?);
        }

        let mut args = Vec::new();
        if self.eat(Token::LAngle) {
            loop {
                args.push(self.parse_type()?);
                if !self.eat(Token::Comma) {
                    break;
                }
            }
            self.expect(Token::RAngle)?;
        }

        Ok(TypeExpr::Reference { name, args })
    }

    /// At `(`: is this the parameter list of a function type?
    fn is_function_type(&self) -> bool {
        self.matching_close(self.pos)
            .and_then(|close| self.tokens.get(close + 1))
            .is_some_and(|(token, _)| *token == Token::Arrow)
    }

    /// After `{`: is this `{ [K in T]: ... }`?
    fn is_mapped_type(&self) -> bool {
        let mut n = 0;
        if matches!(self.peek_at(0), Some(Token::Ident("readonly")) | Some(Token::Minus)) {
            n += 1;
        }
        self.peek_at(n) == Some(Token::LBracket)
            && matches!(self.peek_at(n + 1), Some(Token::Ident(_)))
            && self.peek_at(n + 2) == Some(Token::Ident("in"))
    }

    /// `<T>(params) => R` from `start`; the cursor sits on `<` or `(`.
    fn parse_function_type(&mut self, start: usize) -> PResult<TypeExpr> {
        if self.at(Token::LAngle) {
            self.skip_angles()?;
        }
        self.expect(Token::LParen)?;
        self.skip_group();
        self.expect(Token::Arrow)?;
        self.parse_type()?;
        Ok(TypeExpr::Opaque(self.text_from(start)))
    }
}

/// Value of a string literal token: quotes stripped, escapes decoded.
fn unquote(quoted: &str) -> String {
    let inner = quoted
        .get(1..quoted.len().saturating_sub(1))
        .unwrap_or_default();
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('0') => out.push('\0'),
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                push_code_point(&mut out, &hex, "\\x");
            }
            Some('u') if chars.peek() == Some(&'{') => {
                chars.next();
                let hex: String = chars.by_ref().take_while(|&c| c != '}').collect();
                push_code_point(&mut out, &hex, "\\u");
            }
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                push_code_point(&mut out, &hex, "\\u");
            }
            // Line continuation.
            Some('\n') => {}
            Some('\r') => {
                chars.next_if_eq(&'\n');
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Push the character for a hex escape, or the escape text when invalid.
fn push_code_point(out: &mut String, hex: &str, prefix: &str) {
    match u32::from_str_radix(hex, 16).ok().and_then(char::from_u32) {
        Some(c) => out.push(c),
        None => {
            out.push_str(prefix);
            out.push_str(hex);
        }
    }
}
