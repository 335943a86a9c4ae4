//! # n2t-common
//!
//! Shared preprocessing and source-position types used by the Assembler,
//! VM Translator and Syntax Analyzer.
//!
//! All three translators share the same comment-stripping lexer; only what
//! they do with the stripped text differs (the Assembler and VM Translator
//! want clean lines, the Syntax Analyzer wants a flat token stream built on
//! top of its own tokenizer).

pub mod preprocess;
pub mod span;

pub use preprocess::{clean_lines, strip_comments};
pub use span::Span;
