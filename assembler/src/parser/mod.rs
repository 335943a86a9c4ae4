//! # Hack Assembly Parser
//!
//! Groups the token stream line-by-line (split on `Newline`/`Eof`, same
//! shape as the lexer's output grouping) and recognizes each of Hack's
//! three instruction forms: `@value`, `(LABEL)`, and `dest=comp;jump`.
//!
//! Unlike LC-3, which has dozens of instruction shapes warranting a
//! declarative-macro generator, Hack has exactly three — so each gets a
//! short hand-written parse function instead.

pub mod ast;


use crate::error::{AsmError, ErrorKind};
use crate::lexer::token::{Token, TokenKind};
use ast::{AddressOperand, Instruction, Line};
use n2t_common::Span;

pub struct ParseResult {
    pub lines: Vec<Line>,
    pub errors: Vec<AsmError>,
}

#[must_use]
pub fn parse_lines(tokens: &[Token]) -> ParseResult {
    let mut lines = Vec::new();
    let mut errors = Vec::new();
    let mut line_start = 0;
    let mut line_number = 1;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Newline => {
                process_line(&tokens[line_start..i], line_number, &mut lines, &mut errors);
                line_start = i + 1;
                line_number += 1;
            }
            TokenKind::Eof => {
                process_line(&tokens[line_start..i], line_number, &mut lines, &mut errors);
                break;
            }
            _ => {}
        }
    }

    ParseResult { lines, errors }
}

fn process_line(
    tokens: &[Token],
    line_number: usize,
    lines: &mut Vec<Line>,
    errors: &mut Vec<AsmError>,
) {
    if tokens.is_empty() {
        return;
    }

    let span = tokens[0].span;
    match parse_instruction(tokens, span) {
        Ok(instruction) => lines.push(Line {
            instruction,
            line_number,
            span,
        }),
        Err(err) => errors.push(err),
    }
}

fn parse_instruction(tokens: &[Token], span: Span) -> Result<Instruction, AsmError> {
    match &tokens[0].kind {
        TokenKind::At => parse_a_instruction(tokens, span),
        TokenKind::LParen => parse_label_def(tokens, span),
        _ => parse_c_instruction(tokens, span),
    }
}

fn parse_a_instruction(tokens: &[Token], span: Span) -> Result<Instruction, AsmError> {
    if tokens.len() < 2 {
        return Err(AsmError::new(
            ErrorKind::UnterminatedInstruction,
            "@ must be followed by an address or symbol",
            span,
        ));
    }
    let operand = match &tokens[1].kind {
        TokenKind::Word(w) => parse_address_operand(w, tokens[1].span)?,
        _ => {
            return Err(AsmError::unexpected_token(
                token_text(&tokens[1]),
                tokens[1].span,
            ))
        }
    };
    if tokens.len() > 2 {
        return Err(AsmError::unexpected_token(
            token_text(&tokens[2]),
            tokens[2].span,
        ));
    }
    Ok(Instruction::AInstruction(operand))
}

fn parse_address_operand(word: &str, span: Span) -> Result<AddressOperand, AsmError> {
    if word.chars().all(|c| c.is_ascii_digit()) && !word.is_empty() {
        let value: u32 = word
            .parse()
            .map_err(|_| AsmError::new(ErrorKind::InvalidAddress, "invalid address", span))?;
        if value > 0x7FFF {
            return Err(AsmError::address_overflow(value as i64, span));
        }
        Ok(AddressOperand::Numeric(value as u16))
    } else {
        Ok(AddressOperand::Symbol(word.to_string()))
    }
}

fn parse_label_def(tokens: &[Token], span: Span) -> Result<Instruction, AsmError> {
    if tokens.len() < 3 {
        return Err(AsmError::new(
            ErrorKind::EmptyLabel,
            "( must be followed by a symbol and )",
            span,
        ));
    }
    let name = match &tokens[1].kind {
        TokenKind::Word(w) => w.clone(),
        _ => {
            return Err(AsmError::unexpected_token(
                token_text(&tokens[1]),
                tokens[1].span,
            ))
        }
    };
    if tokens[2].kind != TokenKind::RParen {
        return Err(AsmError::unexpected_token(
            token_text(&tokens[2]),
            tokens[2].span,
        ));
    }
    if tokens.len() > 3 {
        return Err(AsmError::unexpected_token(
            token_text(&tokens[3]),
            tokens[3].span,
        ));
    }
    Ok(Instruction::LabelDef(name))
}

/// Splits `[dest=]comp[;jump]` per the four textual cases the spec
/// defines: both separators present, only `=`, only `;`, or neither.
fn parse_c_instruction(tokens: &[Token], span: Span) -> Result<Instruction, AsmError> {
    let eq_pos = tokens.iter().position(|t| t.kind == TokenKind::Equals);
    let semi_pos = tokens.iter().position(|t| t.kind == TokenKind::Semicolon);

    let dest = match eq_pos {
        Some(e) => single_word(&tokens[..e], span)?,
        None => String::new(),
    };

    let comp_start = eq_pos.map(|e| e + 1).unwrap_or(0);
    let comp_end = semi_pos.unwrap_or(tokens.len());
    if comp_start >= comp_end {
        return Err(AsmError::new(ErrorKind::MissingComp, "missing comp field", span));
    }
    let comp = single_word(&tokens[comp_start..comp_end], span)?;

    let jump = match semi_pos {
        Some(s) => single_word(&tokens[s + 1..], span)?,
        None => String::new(),
    };

    Ok(Instruction::CInstruction { dest, comp, jump })
}

fn single_word(tokens: &[Token], span: Span) -> Result<String, AsmError> {
    if tokens.len() != 1 {
        let at = tokens.first().map(|t| t.span).unwrap_or(span);
        return Err(AsmError::unexpected_token(
            tokens
                .first()
                .map(token_text)
                .unwrap_or_else(|| "<nothing>".into()),
            at,
        ));
    }
    match &tokens[0].kind {
        TokenKind::Word(w) => Ok(w.clone()),
        _ => Err(AsmError::unexpected_token(token_text(&tokens[0]), tokens[0].span)),
    }
}

fn token_text(token: &Token) -> String {
    if token.lexeme.is_empty() {
        format!("{:?}", token.kind)
    } else {
        token.lexeme.clone()
    }
}
