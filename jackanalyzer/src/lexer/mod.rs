//! Splits comment-stripped Jack source into a flat [`Token`] stream.
//!
//! Tokens are separated by whitespace and by any symbol in the Jack
//! symbol set, with string-constant contents (including embedded
//! whitespace) kept intact. Symbol lexemes needing XML-safe escapes are
//! escaped here, once, so no later stage has to think about it again.

mod cursor;

use cursor::Cursor;

use crate::error::JackError;
use crate::token::{self, Token, TokenKind};

const MAX_INTEGER_CONSTANT: i64 = 32768;

pub struct LexResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<JackError>,
}

#[must_use]
pub fn tokenize(source: &str) -> LexResult {
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(ch) = cursor.peek() {
        if ch.is_whitespace() {
            cursor.advance();
            continue;
        }

        let span = cursor.current_span();

        if token::is_symbol(ch) {
            cursor.advance();
            tokens.push(Token::new(TokenKind::Symbol, token::escape_symbol(ch), span));
            continue;
        }

        if ch == '"' {
            match lex_string_constant(&mut cursor, span) {
                Ok(token) => tokens.push(token),
                Err(err) => errors.push(err),
            }
            continue;
        }

        if ch.is_ascii_digit() {
            tokens_push_result(&mut tokens, &mut errors, lex_integer_constant(&mut cursor, span));
            continue;
        }

        if is_identifier_start(ch) {
            tokens.push(lex_word(&mut cursor, span));
            continue;
        }

        cursor.advance();
        errors.push(JackError::unexpected_character(ch, span));
    }

    LexResult { tokens, errors }
}

fn tokens_push_result(
    tokens: &mut Vec<Token>,
    errors: &mut Vec<JackError>,
    result: Result<Token, JackError>,
) {
    match result {
        Ok(token) => tokens.push(token),
        Err(err) => errors.push(err),
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn lex_word(cursor: &mut Cursor, span: n2t_common::Span) -> Token {
    let mut lexeme = String::new();
    while let Some(ch) = cursor.peek() {
        if !is_identifier_continue(ch) {
            break;
        }
        lexeme.push(ch);
        cursor.advance();
    }

    let kind = if token::KEYWORDS.contains(lexeme.as_str()) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };
    Token::new(kind, lexeme, span)
}

fn lex_integer_constant(cursor: &mut Cursor, span: n2t_common::Span) -> Result<Token, JackError> {
    let mut lexeme = String::new();
    while let Some(ch) = cursor.peek() {
        if !ch.is_ascii_digit() {
            break;
        }
        lexeme.push(ch);
        cursor.advance();
    }

    let value: i64 = lexeme.parse().unwrap_or(i64::MAX);
    if !(0..MAX_INTEGER_CONSTANT).contains(&value) {
        return Err(JackError::new(
            crate::error::ErrorKind::UnexpectedCharacter,
            format!("integer constant {lexeme} is out of range [0, 32768)"),
            span,
        ));
    }

    Ok(Token::new(TokenKind::IntegerConstant, lexeme, span))
}

fn lex_string_constant(cursor: &mut Cursor, span: n2t_common::Span) -> Result<Token, JackError> {
    cursor.advance(); // opening quote
    let mut lexeme = String::new();
    loop {
        match cursor.peek() {
            None | Some('\n') => return Err(JackError::unterminated_string(span)),
            Some('"') => {
                cursor.advance();
                break;
            }
            Some(ch) => {
                lexeme.push(ch);
                cursor.advance();
            }
        }
    }
    Ok(Token::new(TokenKind::StringConstant, lexeme, span))
}
