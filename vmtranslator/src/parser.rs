//! Turns whitespace-split VM command lines into [`VMCommand`] values.
//!
//! The caller is expected to have already run the command's source line
//! through `n2t_common::clean_lines`, so comments and blank lines are
//! already gone by the time `parse_command` sees anything — it only has
//! to deal with whitespace-splitting and recognizing the nine shapes.

use n2t_common::Span;

use crate::command::{ArithmeticOp, Segment, VMCommand};
use crate::error::VmError;

pub struct ParseResult {
    pub commands: Vec<VMCommand>,
    pub errors: Vec<VmError>,
}

#[must_use]
pub fn parse_lines(lines: &[(usize, String)]) -> ParseResult {
    let mut commands = Vec::new();
    let mut errors = Vec::new();

    for (line_no, text) in lines {
        let span = Span::new(*line_no, 1);
        let words: Vec<&str> = text.split_whitespace().collect();
        match parse_command(&words, span) {
            Ok(command) => commands.push(command),
            Err(err) => errors.push(err),
        }
    }

    ParseResult { commands, errors }
}

pub fn parse_command(words: &[&str], span: Span) -> Result<VMCommand, VmError> {
    let Some(&mnemonic) = words.first() else {
        return Err(VmError::empty_command(span));
    };

    match mnemonic {
        "add" => Ok(VMCommand::Arithmetic(ArithmeticOp::Add)),
        "sub" => Ok(VMCommand::Arithmetic(ArithmeticOp::Sub)),
        "and" => Ok(VMCommand::Arithmetic(ArithmeticOp::And)),
        "or" => Ok(VMCommand::Arithmetic(ArithmeticOp::Or)),
        "not" => Ok(VMCommand::Arithmetic(ArithmeticOp::Not)),
        "neg" => Ok(VMCommand::Arithmetic(ArithmeticOp::Neg)),
        "eq" => Ok(VMCommand::Arithmetic(ArithmeticOp::Eq)),
        "lt" => Ok(VMCommand::Arithmetic(ArithmeticOp::Lt)),
        "gt" => Ok(VMCommand::Arithmetic(ArithmeticOp::Gt)),
        "push" => parse_push_pop(words, span, true),
        "pop" => parse_push_pop(words, span, false),
        "label" => Ok(VMCommand::Label(operand(words, "label", span)?.to_string())),
        "goto" => Ok(VMCommand::Goto(operand(words, "goto", span)?.to_string())),
        "if-goto" => Ok(VMCommand::IfGoto(
            operand(words, "if-goto", span)?.to_string(),
        )),
        "function" => parse_function_or_call(words, span, true),
        "call" => parse_function_or_call(words, span, false),
        "return" => Ok(VMCommand::Return),
        other => Err(VmError::unknown_command(other, span)),
    }
}

fn operand<'a>(words: &[&'a str], command: &str, span: Span) -> Result<&'a str, VmError> {
    words
        .get(1)
        .copied()
        .ok_or_else(|| VmError::missing_operand(command, span))
}

fn parse_index(text: &str, span: Span) -> Result<u16, VmError> {
    text.parse::<u16>()
        .map_err(|_| VmError::invalid_index(text, span))
}

fn parse_segment(text: &str, span: Span) -> Result<Segment, VmError> {
    match text {
        "local" => Ok(Segment::Local),
        "argument" => Ok(Segment::Argument),
        "this" => Ok(Segment::This),
        "that" => Ok(Segment::That),
        "pointer" => Ok(Segment::Pointer),
        "temp" => Ok(Segment::Temp),
        "static" => Ok(Segment::Static),
        "constant" => Ok(Segment::Constant),
        other => Err(VmError::unknown_segment(other, span)),
    }
}

fn parse_push_pop(words: &[&str], span: Span, is_push: bool) -> Result<VMCommand, VmError> {
    let command_name = if is_push { "push" } else { "pop" };
    let segment_text = operand(words, command_name, span)?;
    let index_text = words
        .get(2)
        .copied()
        .ok_or_else(|| VmError::missing_operand(command_name, span))?;

    let segment = parse_segment(segment_text, span)?;
    let index = parse_index(index_text, span)?;

    if segment == Segment::Pointer && index > 1 {
        return Err(VmError::invalid_pointer_index(index_text, span));
    }

    if is_push {
        Ok(VMCommand::Push { segment, index })
    } else if segment == Segment::Constant {
        Err(VmError::invalid_pop_segment(segment_text, span))
    } else {
        Ok(VMCommand::Pop { segment, index })
    }
}

fn parse_function_or_call(words: &[&str], span: Span, is_function: bool) -> Result<VMCommand, VmError> {
    let command_name = if is_function { "function" } else { "call" };
    let name = operand(words, command_name, span)?.to_string();
    let count_text = words
        .get(2)
        .copied()
        .ok_or_else(|| VmError::missing_operand(command_name, span))?;
    let count = parse_index(count_text, span)?;

    if is_function {
        Ok(VMCommand::Function {
            name,
            num_locals: count,
        })
    } else {
        Ok(VMCommand::Call {
            name,
            num_args: count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> Span {
        Span::new(1, 1)
    }

    fn parse(line: &str) -> VMCommand {
        let words: Vec<&str> = line.split_whitespace().collect();
        parse_command(&words, span()).unwrap()
    }

    #[test]
    fn parses_push_constant() {
        assert_eq!(
            parse("push constant 17"),
            VMCommand::Push {
                segment: Segment::Constant,
                index: 17
            }
        );
    }

    #[test]
    fn parses_pop_local() {
        assert_eq!(
            parse("pop local 2"),
            VMCommand::Pop {
                segment: Segment::Local,
                index: 2
            }
        );
    }

    #[test]
    fn parses_arithmetic_with_no_operands() {
        assert_eq!(parse("add"), VMCommand::Arithmetic(ArithmeticOp::Add));
        assert_eq!(parse("eq"), VMCommand::Arithmetic(ArithmeticOp::Eq));
    }

    #[test]
    fn parses_function_and_call() {
        assert_eq!(
            parse("function Main.main 2"),
            VMCommand::Function {
                name: "Main.main".to_string(),
                num_locals: 2
            }
        );
        assert_eq!(
            parse("call Math.multiply 2"),
            VMCommand::Call {
                name: "Math.multiply".to_string(),
                num_args: 2
            }
        );
    }

    #[test]
    fn parses_branching_commands() {
        assert_eq!(parse("label LOOP"), VMCommand::Label("LOOP".to_string()));
        assert_eq!(parse("goto LOOP"), VMCommand::Goto("LOOP".to_string()));
        assert_eq!(
            parse("if-goto LOOP"),
            VMCommand::IfGoto("LOOP".to_string())
        );
    }

    #[test]
    fn rejects_unknown_command() {
        let words = vec!["frobnicate"];
        assert!(parse_command(&words, span()).is_err());
    }

    #[test]
    fn rejects_pointer_index_above_one() {
        let words = vec!["push", "pointer", "2"];
        let err = parse_command(&words, span()).unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::InvalidPointerIndex);
    }

    #[test]
    fn rejects_missing_operand() {
        let words = vec!["push", "constant"];
        assert!(parse_command(&words, span()).is_err());
    }

    #[test]
    fn rejects_pop_constant() {
        let words = vec!["pop", "constant", "0"];
        let err = parse_command(&words, span()).unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::InvalidPopSegment);
    }
}
