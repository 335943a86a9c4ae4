use std::fs;

use n2t_assembler::error::ErrorKind;

fn assemble_fixture(name: &str) -> Vec<String> {
    let source = fs::read_to_string(format!("tests/fixtures/{name}"))
        .unwrap_or_else(|_| panic!("failed to read fixture {name}"));
    n2t_assembler::assemble(&source).unwrap_or_else(|errors| panic!("assembly errors: {errors:?}"))
}

#[test]
fn add_program_assembles_without_error() {
    let words = assemble_fixture("add.asm");
    assert_eq!(words.len(), 6);
    assert!(words.iter().all(|w| w.len() == 16));
}

#[test]
fn max_program_resolves_forward_and_backward_labels() {
    let words = assemble_fixture("max.asm");
    assert_eq!(words.len(), 20);
}

#[test]
fn errors_fixture_produces_errors() {
    let source = fs::read_to_string("tests/fixtures/errors.asm").unwrap();
    let errors = n2t_assembler::assemble(&source).unwrap_err();
    assert!(errors
        .iter()
        .any(|e| matches!(e.kind, ErrorKind::DuplicateLabel)));
}

// ── Scenarios drawn directly from the spec ─────────────────────────

#[test]
fn a_instruction_numeric() {
    assert_eq!(
        n2t_assembler::assemble("@16\n").unwrap(),
        vec!["0000000000010000"]
    );
}

#[test]
fn a_instruction_predefined_register() {
    assert_eq!(
        n2t_assembler::assemble("@R2\n").unwrap(),
        vec!["0000000000000010"]
    );
}

#[test]
fn a_instruction_screen() {
    assert_eq!(
        n2t_assembler::assemble("@SCREEN\n").unwrap(),
        vec!["0100000000000000"]
    );
}

#[test]
fn c_instruction_dest_and_comp() {
    assert_eq!(
        n2t_assembler::assemble("D=D+A\n").unwrap(),
        vec!["1110000010010000"]
    );
}

#[test]
fn c_instruction_m_dest() {
    assert_eq!(
        n2t_assembler::assemble("M=M+1\n").unwrap(),
        vec!["1111110111001000"]
    );
}

#[test]
fn c_instruction_comp_and_jump() {
    assert_eq!(
        n2t_assembler::assemble("D;JGT\n").unwrap(),
        vec!["1110001100000001"]
    );
}

#[test]
fn variable_allocation_sequence() {
    let words = n2t_assembler::assemble("@i\n@sum\n@i\n").unwrap();
    assert_eq!(words[0], words[2]);
    assert_ne!(words[0], words[1]);
    assert_eq!(words[0], "0000000000010000");
    assert_eq!(words[1], "0000000000010001");
}

#[test]
fn undefined_variable_name_allocates_rather_than_errors() {
    // Unlike a label reference to a label that's never defined anywhere,
    // an unresolved symbol in an A-instruction is always treated as a new
    // variable — Hack has no separate "undefined symbol" failure mode for
    // A-instructions the way LC-3 does for LD/LDI/LEA labels.
    assert!(n2t_assembler::assemble("@brandNewVariable\n").is_ok());
}
