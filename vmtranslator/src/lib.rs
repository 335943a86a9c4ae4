//! # Hack VM Translator
//!
//! Translates Hack VM stack-machine bytecode into Hack assembly.
//!
//! ## Pipeline
//!
//! 1. Strip comments/whitespace (shared `n2t_common` preprocessor).
//! 2. Parse each remaining line into a [`command::VMCommand`].
//! 3. Lower each command through a single [`codegen::CodeGenerator`],
//!    whose comparison-label and call-site counters are program-wide —
//!    they are never reset between files in directory mode.
//!
//! Single-file mode emits no bootstrap prelude; directory mode emits
//! `SP=256` plus `call Sys.init 0` first, then each file's translated
//! commands in lexicographic filename order.

pub mod codegen;
pub mod command;
pub mod error;
pub mod parser;

use codegen::CodeGenerator;
use error::VmError;

/// Translate a single `.vm` file's source text, with no bootstrap
/// prelude. `file_stem` qualifies `static` variable names.
pub fn translate_file(source: &str, file_stem: &str) -> Result<String, Vec<VmError>> {
    let mut generator = CodeGenerator::new();
    generator.set_current_file_stem(file_stem);
    translate_with(&mut generator, source)
}

/// Translate a set of `(file_stem, source)` pairs as one directory-mode
/// program: a bootstrap prelude followed by each file's translation, in
/// the order given. Callers are responsible for sorting `files`
/// lexicographically by filename before calling this (see the binary's
/// `main.rs`), so translation itself stays agnostic of discovery order.
pub fn translate_program(files: &[(String, String)]) -> Result<String, Vec<VmError>> {
    let mut generator = CodeGenerator::new();
    let mut out = generator.bootstrap();

    for (stem, source) in files {
        generator.set_current_file_stem(stem);
        out.push_str(&translate_with(&mut generator, source)?);
    }

    Ok(out)
}

fn translate_with(generator: &mut CodeGenerator, source: &str) -> Result<String, Vec<VmError>> {
    let lines = n2t_common::clean_lines(source);
    let parsed = parser::parse_lines(&lines);
    if !parsed.errors.is_empty() {
        return Err(parsed.errors);
    }

    let mut out = String::new();
    for command in &parsed.commands {
        out.push_str(&generator.translate(command));
    }
    Ok(out)
}
