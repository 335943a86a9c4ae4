//! Serializes a [`ParseNode`] tree into the tag-per-line document the
//! Syntax Analyzer emits: every non-terminal opens and closes on its own
//! line, every token is a one-line leaf `<kind> lexeme </kind>`.

use crate::parser::ast::ParseNode;

pub fn write(root: &ParseNode) -> String {
    let mut out = String::new();
    write_node(root, &mut out);
    out
}

fn write_node(node: &ParseNode, out: &mut String) {
    match node {
        ParseNode::Leaf(token) => {
            let tag = token.kind.tag();
            out.push_str(&format!("<{tag}> {} </{tag}>\n", token.lexeme));
        }
        ParseNode::NonTerminal { name, children } => {
            out.push_str(&format!("<{name}>\n"));
            for child in children {
                write_node(child, out);
            }
            out.push_str(&format!("</{name}>\n"));
        }
    }
}
