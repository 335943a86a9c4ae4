use super::*;
use crate::lexer;

fn parse_source(source: &str) -> ParseNode {
    let lexed = lexer::tokenize(source);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    parse(lexed.tokens).unwrap()
}

fn assert_non_terminal<'a>(node: &'a ParseNode, name: &str) -> &'a [ParseNode] {
    match node {
        ParseNode::NonTerminal { name: n, children } => {
            assert_eq!(*n, name);
            children
        }
        ParseNode::Leaf(token) => panic!("expected non-terminal {name}, got leaf {:?}", token),
    }
}

#[test]
fn parses_minimal_class() {
    let tree = parse_source("class Main { }");
    let children = assert_non_terminal(&tree, "class");
    assert_eq!(children.len(), 4); // class, Main, {, }
}

#[test]
fn parses_class_var_dec() {
    let tree = parse_source("class Main { field int x; }");
    let children = assert_non_terminal(&tree, "class");
    let class_var_dec = &children[3];
    let fields = assert_non_terminal(class_var_dec, "classVarDec");
    assert_eq!(fields.len(), 4); // field, int, x, ;
}

#[test]
fn parses_let_statement_with_array_access() {
    let tree = parse_source(
        "class Main { function void main() { let x[0] = 1; return; } }",
    );
    let class_children = assert_non_terminal(&tree, "class");
    let subroutine_dec = &class_children[3];
    let sub_children = assert_non_terminal(subroutine_dec, "subroutineDec");
    let body = sub_children.last().unwrap();
    let body_children = assert_non_terminal(body, "subroutineBody");
    let statements = &body_children[1];
    let statement_children = assert_non_terminal(statements, "statements");
    let let_stmt = assert_non_terminal(&statement_children[0], "letStatement");
    // let, x, [, 0, ], =, expression, ;
    assert_eq!(let_stmt.len(), 8);
}

#[test]
fn parses_do_statement_with_method_call() {
    let tree = parse_source(
        "class Main { function void main() { do Output.printInt(1); return; } }",
    );
    let class_children = assert_non_terminal(&tree, "class");
    let subroutine_dec = &class_children[3];
    let sub_children = assert_non_terminal(subroutine_dec, "subroutineDec");
    let body = sub_children.last().unwrap();
    let body_children = assert_non_terminal(body, "subroutineBody");
    let statements = &body_children[1];
    let statement_children = assert_non_terminal(statements, "statements");
    let do_stmt = assert_non_terminal(&statement_children[0], "doStatement");
    // do, Output, ., printInt, (, expressionList, ), ;
    assert_eq!(do_stmt.len(), 8);
}

#[test]
fn parses_binary_expression_with_operator() {
    let tree = parse_source(
        "class Main { function void main() { return 1 + 2; } }",
    );
    let class_children = assert_non_terminal(&tree, "class");
    let subroutine_dec = &class_children[3];
    let sub_children = assert_non_terminal(subroutine_dec, "subroutineDec");
    let body = sub_children.last().unwrap();
    let body_children = assert_non_terminal(body, "subroutineBody");
    let statements = &body_children[1];
    let statement_children = assert_non_terminal(statements, "statements");
    let return_stmt = assert_non_terminal(&statement_children[0], "returnStatement");
    let expr = assert_non_terminal(&return_stmt[1], "expression");
    // term, +, term
    assert_eq!(expr.len(), 3);
}

#[test]
fn unexpected_token_is_reported() {
    let lexed = lexer::tokenize("class 5 { }");
    assert!(parse(lexed.tokens).is_err());
}
