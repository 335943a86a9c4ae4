//! # Jack Syntax Analyzer
//!
//! Tokenizes and parses Jack source into a labeled parse-tree document.
//!
//! ## Pipeline
//!
//! 1. Strip comments (shared `n2t_common` preprocessor).
//! 2. Tokenize into the five Jack token kinds, escaping XML-sensitive
//!    symbols as they are lexed.
//! 3. Recursive-descent parse into a [`parser::ast::ParseNode`] tree.
//! 4. Serialize the tree to a tag-per-line document.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod writer;

use error::JackError;

/// Run the full pipeline over one file's already-read source text.
pub fn analyze(source: &str) -> Result<String, Vec<JackError>> {
    let cleaned = n2t_common::strip_comments(source);

    let lexed = lexer::tokenize(&cleaned);
    if !lexed.errors.is_empty() {
        return Err(lexed.errors);
    }

    let tree = parser::parse(lexed.tokens).map_err(|err| vec![err])?;
    Ok(writer::write(&tree))
}
