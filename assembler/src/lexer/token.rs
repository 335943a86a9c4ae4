//! # Token Types
//!
//! Defines all token types for Hack assembly.

use n2t_common::Span;

/// A single lexical token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

/// Token kinds for Hack assembly.
///
/// Hack assembly has almost no punctuation: `@`, `(`, `)`, `=`, `;`, and
/// everything else — numbers, symbol names, and `comp` mnemonics like
/// `D+1` or `!A` — falls into a single greedy `Word`. The parser, not the
/// lexer, is responsible for telling a numeric literal apart from a
/// symbol and a `comp` expression apart from a `dest`/`jump` mnemonic.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    At,
    LParen,
    RParen,
    Equals,
    Semicolon,
    Word(String),
    Newline,
    Eof,
}
