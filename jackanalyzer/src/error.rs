use n2t_common::Span;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ERROR (line {}:{}): {message}", span.line, span.col)]
pub struct JackError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
}

impl JackError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }

    pub fn unterminated_string(span: Span) -> Self {
        Self::new(ErrorKind::UnterminatedString, "unterminated string constant", span)
    }

    pub fn unexpected_character(ch: char, span: Span) -> Self {
        Self::new(
            ErrorKind::UnexpectedCharacter,
            format!("unexpected character '{ch}'"),
            span,
        )
    }

    pub fn unexpected_token(expected: &str, found: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::UnexpectedToken,
            format!("expected {expected}, found '{found}'"),
            span,
        )
    }

    pub fn unexpected_eof(expected: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::UnexpectedEof,
            format!("expected {expected}, found end of file"),
            span,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnterminatedString,
    UnexpectedCharacter,
    UnexpectedToken,
    UnexpectedEof,
}
