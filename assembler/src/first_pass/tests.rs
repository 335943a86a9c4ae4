use crate::first_pass::first_pass;
use crate::lexer::tokenize;
use crate::parser::parse_lines;

fn run_first_pass(input: &str) -> crate::first_pass::FirstPassResult {
    let lexed = tokenize(input);
    let parsed = parse_lines(&lexed.tokens);
    assert!(parsed.errors.is_empty(), "Parser errors: {:?}", parsed.errors);
    first_pass(parsed.lines)
}

#[test]
fn label_resolves_to_following_instruction_address() {
    let result = run_first_pass("@0\n(LOOP)\n@1\nD;JGT\n");
    assert_eq!(result.symbol_table.get("LOOP"), Some(1));
}

#[test]
fn label_at_start_of_program_is_zero() {
    let result = run_first_pass("(START)\n@1\n");
    assert_eq!(result.symbol_table.get("START"), Some(0));
}

#[test]
fn label_definitions_do_not_advance_rom_address() {
    let result = run_first_pass("(A)\n(B)\n@1\n");
    assert_eq!(result.symbol_table.get("A"), Some(0));
    assert_eq!(result.symbol_table.get("B"), Some(0));
}

#[test]
fn duplicate_label_is_an_error() {
    let result = run_first_pass("(LOOP)\n@1\n(LOOP)\n@2\n");
    assert!(result
        .errors
        .iter()
        .any(|e| matches!(e.kind, crate::error::ErrorKind::DuplicateLabel)));
}

#[test]
fn predefined_symbols_are_not_overwritten_by_first_pass() {
    let result = run_first_pass("@SCREEN\n");
    assert_eq!(result.symbol_table.get("SCREEN"), Some(16384));
}
