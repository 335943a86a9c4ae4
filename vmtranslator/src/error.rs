use n2t_common::Span;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ERROR (line {}:{}): {message}", span.line, span.col)]
pub struct VmError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
}

impl VmError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }

    pub fn empty_command(span: Span) -> Self {
        Self::new(ErrorKind::EmptyCommand, "empty command", span)
    }

    pub fn unknown_command(mnemonic: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::UnknownCommand,
            format!("unknown command '{mnemonic}'"),
            span,
        )
    }

    pub fn unknown_segment(segment: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::UnknownSegment,
            format!("unknown memory segment '{segment}'"),
            span,
        )
    }

    pub fn missing_operand(command: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::MissingOperand,
            format!("'{command}' is missing an operand"),
            span,
        )
    }

    pub fn invalid_index(text: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::InvalidIndex,
            format!("'{text}' is not a valid non-negative index"),
            span,
        )
    }

    pub fn invalid_pointer_index(text: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::InvalidPointerIndex,
            format!("pointer index must be 0 or 1, found '{text}'"),
            span,
        )
    }

    pub fn invalid_pop_segment(segment: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::InvalidPopSegment,
            format!("'{segment}' is not a valid pop target"),
            span,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyCommand,
    UnknownCommand,
    UnknownSegment,
    MissingOperand,
    InvalidIndex,
    InvalidPointerIndex,
    InvalidPopSegment,
}
