use super::token::TokenKind;
use super::tokenize;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).tokens.into_iter().map(|t| t.kind).collect()
}

#[test]
fn tokenizes_a_instruction() {
    assert_eq!(
        kinds("@16\n"),
        vec![
            TokenKind::At,
            TokenKind::Word("16".into()),
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenizes_label_definition() {
    assert_eq!(
        kinds("(LOOP)\n"),
        vec![
            TokenKind::LParen,
            TokenKind::Word("LOOP".into()),
            TokenKind::RParen,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenizes_c_instruction_with_dest_and_jump() {
    assert_eq!(
        kinds("D=D+A;JGT\n"),
        vec![
            TokenKind::Word("D".into()),
            TokenKind::Equals,
            TokenKind::Word("D+A".into()),
            TokenKind::Semicolon,
            TokenKind::Word("JGT".into()),
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comp_only_word_keeps_bang_and_operators_together() {
    assert_eq!(
        kinds("!D\n"),
        vec![
            TokenKind::Word("!D".into()),
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn whitespace_between_tokens_is_insignificant() {
    assert_eq!(kinds("  @1  \n"), kinds("@1\n"));
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn spans_track_line_and_column() {
    let result = tokenize("@1\n@2");
    assert_eq!(result.tokens[0].span.line, 1);
    assert_eq!(result.tokens[0].span.col, 1);
    assert_eq!(result.tokens[3].span.line, 2);
}
