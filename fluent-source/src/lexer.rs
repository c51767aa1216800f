//! Tokenizer for TypeScript source.
//!
//! Only the token classes needed to find and read type declarations are
//! distinguished; every other character becomes [`Token::Other`] so that
//! surrounding runtime code (regex literals, JSX text) can be skipped
//! without failing.

use std::ops::Range;

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f\u{feff}]+")]
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum Token<'src> {
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token("=>")]
    Arrow,

    #[token("=")]
    Eq,

    #[token(":")]
    Colon,

    #[token(";")]
    Semi,

    #[token(",")]
    Comma,

    #[token("?")]
    Question,

    #[token("|")]
    Pipe,

    #[token("&")]
    Amp,

    #[token(".")]
    Dot,

    #[token("-")]
    Minus,

    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}$]*", |lex| lex.slice())]
    Ident(&'src str),

    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| lex.slice())]
    #[regex(r#"'([^'\\\n]|\\.)*'"#, |lex| lex.slice())]
    Str(&'src str),

    #[regex(r"[0-9][0-9_]*(\.[0-9]+)?([eE][+-]?[0-9]+)?n?", |lex| lex.slice())]
    #[regex(r"0[xXbBoO][0-9a-fA-F_]+n?", |lex| lex.slice())]
    Number(&'src str),

    #[regex(r"`([^`\\]|\\.)*`", |lex| lex.slice())]
    Template(&'src str),

    #[regex(r"[!#%*+/\\~^@]", |lex| lex.slice())]
    Other(&'src str),
}

/// Tokenize `src`.
///
/// Input no token matches (an unterminated quote, a stray symbol) becomes a
/// one-character [`Token::Other`] and lexing resumes right after it.
pub fn tokenize(src: &str) -> Vec<(Token<'_>, Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(src);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                let width = src[span.start..].chars().next().map_or(1, char::len_utf8);
                let end = span.start + width;
                tracing::trace!(offset = span.start, "unrecognized character");
                tokens.push((Token::Other(&src[span.start..end]), span.start..end));
                if span.end != end {
                    lexer = Token::lexer(src);
                    lexer.bump(end);
                }
            }
        }
    }
    tokens
}
