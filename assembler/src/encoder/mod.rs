//! # Pass 2 — variable resolution and encoding
//!
//! Walks the instruction stream with labels filtered out, resolving each
//! A-instruction's operand (literal, predefined symbol, label, or a
//! freshly allocated variable starting at RAM 16) and encoding every
//! instruction into its 16-character `0`/`1` machine word.
//!
//! The mnemonic tables are `phf::Map`s, grounded in the retrieved
//! `onenewcode-Nand2Tetris/project6/src/code.rs` — a perfect hash
//! computed at compile time costs nothing at lookup and keeps the
//! fixed encoding tables declarative rather than a chain of `match`
//! arms.

use phf::phf_map;

use crate::error::{AsmError, ErrorKind};
use crate::first_pass::FirstPassResult;
use crate::parser::ast::{AddressOperand, Instruction};

static DEST_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "" => "000",
    "M" => "001",
    "D" => "010",
    "MD" => "011",
    "A" => "100",
    "AM" => "101",
    "AD" => "110",
    "AMD" => "111",
};

static COMP_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "0" => "0101010",
    "1" => "0111111",
    "-1" => "0111010",
    "D" => "0001100",
    "A" => "0110000",
    "!D" => "0001101",
    "!A" => "0110001",
    "-D" => "0001111",
    "-A" => "0110011",
    "D+1" => "0011111",
    "A+1" => "0110111",
    "D-1" => "0001110",
    "A-1" => "0110010",
    "D+A" => "0000010",
    "D-A" => "0010011",
    "A-D" => "0000111",
    "D&A" => "0000000",
    "D|A" => "0010101",

    "M" => "1110000",
    "!M" => "1110001",
    "-M" => "1110011",
    "M+1" => "1110111",
    "M-1" => "1110010",
    "D+M" => "1000010",
    "D-M" => "1010011",
    "M-D" => "1000111",
    "D&M" => "1000000",
    "D|M" => "1010101",
};

static JUMP_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "" => "000",
    "JGT" => "001",
    "JEQ" => "010",
    "JGE" => "011",
    "JLT" => "100",
    "JNE" => "101",
    "JLE" => "110",
    "JMP" => "111",
};

pub struct EncodeResult {
    /// One 16-character `0`/`1` line per instruction, in ROM order.
    pub words: Vec<String>,
    pub errors: Vec<AsmError>,
}

#[must_use]
pub fn encode(mut pass1: FirstPassResult) -> EncodeResult {
    let mut words = Vec::new();
    let mut errors = std::mem::take(&mut pass1.errors);

    for line in &pass1.lines {
        match &line.instruction {
            Instruction::LabelDef(_) => {}
            Instruction::AInstruction(operand) => {
                let address = match operand {
                    AddressOperand::Numeric(v) => *v,
                    AddressOperand::Symbol(name) => pass1.symbol_table.resolve_or_allocate(name),
                };
                if address > 0x7FFF {
                    errors.push(AsmError::address_overflow(address as i64, line.span));
                }
                words.push(format!("{:016b}", address & 0x7FFF));
            }
            Instruction::CInstruction { dest, comp, jump } => {
                match encode_c_instruction(dest, comp, jump, &mut errors, line.span) {
                    Some(word) => words.push(word),
                    None => words.push("0".repeat(16)),
                }
            }
        }
    }

    EncodeResult { words, errors }
}

fn encode_c_instruction(
    dest: &str,
    comp: &str,
    jump: &str,
    errors: &mut Vec<AsmError>,
    span: n2t_common::Span,
) -> Option<String> {
    let dest_bits = DEST_MAP.get(dest);
    let comp_bits = COMP_MAP.get(comp);
    let jump_bits = JUMP_MAP.get(jump);

    let mut ok = true;
    if dest_bits.is_none() {
        errors.push(AsmError::unknown_mnemonic(ErrorKind::UnknownDest, dest, span));
        ok = false;
    }
    if comp_bits.is_none() {
        errors.push(AsmError::unknown_mnemonic(ErrorKind::UnknownComp, comp, span));
        ok = false;
    }
    if jump_bits.is_none() {
        errors.push(AsmError::unknown_mnemonic(ErrorKind::UnknownJump, jump, span));
        ok = false;
    }
    if !ok {
        return None;
    }

    Some(format!("111{}{}{}", comp_bits.unwrap(), dest_bits.unwrap(), jump_bits.unwrap()))
}
