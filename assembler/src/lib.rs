//! # Hack Assembler
//!
//! A two-pass assembler translating Hack assembly into 16-bit machine
//! code words.
//!
//! ## Pipeline
//!
//! 1. **Lexer** — tokenizes comment-stripped source into punctuation and
//!    `Word` tokens.
//! 2. **Parser** — groups tokens per line into `@`/`(...)`/`dest=comp;jump`
//!    instructions.
//! 3. **First pass** — resolves labels against the symbol table.
//! 4. **Encoder** — resolves variables and emits machine code.
//!
//! ## Example
//!
//! ```rust,no_run
//! let source = std::fs::read_to_string("program.asm").unwrap();
//! let words = n2t_assembler::assemble(&source).unwrap();
//! println!("Generated {} words of machine code", words.len());
//! ```

pub mod encoder;
pub mod error;
pub mod first_pass;
pub mod lexer;
pub mod parser;

use error::AsmError;

/// Run the full pipeline over already-read source text.
///
/// Returns one 16-character `0`/`1` line per instruction in ROM order,
/// or every error collected across all four stages.
pub fn assemble(source: &str) -> Result<Vec<String>, Vec<AsmError>> {
    let cleaned = n2t_common::strip_comments(source);

    let lexed = lexer::tokenize(&cleaned);
    let parsed = parser::parse_lines(&lexed.tokens);
    if !parsed.errors.is_empty() {
        return Err(parsed.errors);
    }

    let pass1 = first_pass::first_pass(parsed.lines);
    if !pass1.errors.is_empty() {
        return Err(pass1.errors);
    }

    let encoded = encoder::encode(pass1);
    if !encoded.errors.is_empty() {
        return Err(encoded.errors);
    }

    Ok(encoded.words)
}
