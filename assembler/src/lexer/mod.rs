//! # Hack Assembly Lexer
//!
//! Tokenizes Hack assembly source into a stream of tokens. Comment and
//! whitespace stripping is handled upstream by `n2t_common::strip_comments`;
//! this lexer only needs to recognize the five punctuation characters and
//! greedily consume everything else as a `Word`.

pub mod cursor;
pub mod token;

#[cfg(test)]
mod tests;

use crate::error::AsmError;
use cursor::Cursor;
use token::{Token, TokenKind};

pub struct LexResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<AsmError>,
}

#[must_use]
pub fn tokenize(source: &str) -> LexResult {
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();
    let errors = Vec::new();

    while !cursor.is_at_end() {
        if let Some(token) = lex_token(&mut cursor) {
            tokens.push(token);
        }
    }

    let (l, c) = cursor.current_pos();
    tokens.push(Token {
        kind: TokenKind::Eof,
        lexeme: String::new(),
        span: cursor.make_span(l, c),
    });

    LexResult { tokens, errors }
}

fn lex_token(cursor: &mut Cursor) -> Option<Token> {
    while matches!(cursor.peek(), Some(' ' | '\t' | '\r')) {
        cursor.advance();
    }

    if cursor.is_at_end() {
        return None;
    }

    let (sl, sc) = cursor.current_pos();
    let ch = cursor.peek().unwrap();

    match ch {
        '\n' => {
            cursor.advance();
            Some(Token {
                kind: TokenKind::Newline,
                lexeme: "\n".into(),
                span: cursor.make_span(sl, sc),
            })
        }
        '@' => {
            cursor.advance();
            Some(Token {
                kind: TokenKind::At,
                lexeme: "@".into(),
                span: cursor.make_span(sl, sc),
            })
        }
        '(' => {
            cursor.advance();
            Some(Token {
                kind: TokenKind::LParen,
                lexeme: "(".into(),
                span: cursor.make_span(sl, sc),
            })
        }
        ')' => {
            cursor.advance();
            Some(Token {
                kind: TokenKind::RParen,
                lexeme: ")".into(),
                span: cursor.make_span(sl, sc),
            })
        }
        '=' => {
            cursor.advance();
            Some(Token {
                kind: TokenKind::Equals,
                lexeme: "=".into(),
                span: cursor.make_span(sl, sc),
            })
        }
        ';' => {
            cursor.advance();
            Some(Token {
                kind: TokenKind::Semicolon,
                lexeme: ";".into(),
                span: cursor.make_span(sl, sc),
            })
        }
        _ => lex_word(cursor, sl, sc),
    }
}

fn lex_word(cursor: &mut Cursor, sl: usize, sc: usize) -> Option<Token> {
    let mut word = String::new();
    while let Some(ch) = cursor.peek() {
        if matches!(ch, ' ' | '\t' | '\r' | '\n' | '@' | '(' | ')' | '=' | ';') {
            break;
        }
        word.push(ch);
        cursor.advance();
    }

    Some(Token {
        kind: TokenKind::Word(word.clone()),
        lexeme: word,
        span: cursor.make_span(sl, sc),
    })
}
