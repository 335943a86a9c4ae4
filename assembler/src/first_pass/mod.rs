//! # First Pass — label resolution
//!
//! Walks the parsed instructions in source order, maintaining a ROM
//! address cursor starting at 0. Each A- or C-instruction advances the
//! cursor by one; a label definition records `NAME -> current cursor`
//! and does not advance it. Unlike LC-3 there is no `.ORIG`/`.END`
//! structure to validate — Hack ROM addressing always starts at 0.

pub mod symbol_table;

#[cfg(test)]
mod tests;

use crate::error::AsmError;
use crate::parser::ast::{Instruction, Line};
use symbol_table::SymbolTable;

pub struct FirstPassResult {
    pub symbol_table: SymbolTable,
    pub lines: Vec<Line>,
    pub errors: Vec<AsmError>,
}

#[must_use]
pub fn first_pass(lines: Vec<Line>) -> FirstPassResult {
    let mut symbol_table = SymbolTable::new();
    let mut errors = Vec::new();
    let mut rom_address: u16 = 0;

    for line in &lines {
        match &line.instruction {
            Instruction::LabelDef(name) => {
                if let Some(existing) = symbol_table.insert_label(name, rom_address) {
                    let _ = existing;
                    errors.push(AsmError::duplicate_label(name, line.span));
                }
            }
            Instruction::AInstruction(_) | Instruction::CInstruction { .. } => {
                rom_address = rom_address.saturating_add(1);
            }
        }
    }

    FirstPassResult {
        symbol_table,
        lines,
        errors,
    }
}
