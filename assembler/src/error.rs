use n2t_common::Span;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ERROR (line {}:{}): {message}", span.line, span.col)]
pub struct AsmError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
}

impl AsmError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }

    pub fn unexpected_token(found: impl Into<String>, span: Span) -> Self {
        Self::new(
            ErrorKind::UnexpectedToken,
            format!("Unexpected token: {}", found.into()),
            span,
        )
    }

    pub fn duplicate_label(name: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::DuplicateLabel,
            format!("Label ({}) is defined more than once", name),
            span,
        )
    }

    pub fn unknown_mnemonic(kind: ErrorKind, text: &str, span: Span) -> Self {
        let field = match kind {
            ErrorKind::UnknownDest => "dest",
            ErrorKind::UnknownComp => "comp",
            ErrorKind::UnknownJump => "jump",
            _ => "field",
        };
        Self::new(kind, format!("Unknown {} mnemonic: {}", field, text), span)
    }

    pub fn address_overflow(value: i64, span: Span) -> Self {
        Self::new(
            ErrorKind::AddressOverflow,
            format!("Address {} does not fit in 15 bits", value),
            span,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnterminatedInstruction,
    EmptyLabel,
    InvalidAddress,
    MissingComp,
    UnknownDest,
    UnknownComp,
    UnknownJump,
    UnexpectedToken,
    DuplicateLabel,
    UndefinedSymbol,
    AddressOverflow,
}
