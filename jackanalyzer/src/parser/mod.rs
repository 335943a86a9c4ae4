//! Recursive-descent parser over the Jack grammar.
//!
//! Each grammar production gets its own `parse_*` method on [`Parser`],
//! mutually recursive over a shared token cursor with one-token
//! lookahead — no backtracking is ever needed because Jack's grammar is
//! LL(1) once `term`/`subroutineCall` peek one symbol ahead of an
//! identifier.

pub mod ast;

#[cfg(test)]
mod tests;

use ast::ParseNode;

use crate::error::JackError;
use crate::token::{Token, TokenKind};

const STATEMENT_KEYWORDS: [&str; 5] = ["let", "if", "while", "do", "return"];
const OPERATORS: [&str; 9] = ["+", "-", "*", "/", "&amp;", "|", "&lt;", "&gt;", "="];
const KEYWORD_CONSTANTS: [&str; 4] = ["true", "false", "null", "this"];

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

#[must_use]
pub fn parse(tokens: Vec<Token>) -> Result<ParseNode, JackError> {
    let mut parser = Parser { tokens, pos: 0 };
    parser.parse_class()
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn leaf(&mut self, expected: &str) -> Result<ParseNode, JackError> {
        let span = self.current_span();
        match self.advance() {
            Some(token) => Ok(ParseNode::Leaf(token)),
            None => Err(JackError::unexpected_eof(expected, span)),
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<ParseNode, JackError> {
        self.expect(TokenKind::Keyword, keyword)
    }

    fn expect_symbol(&mut self, symbol: &str) -> Result<ParseNode, JackError> {
        self.expect(TokenKind::Symbol, symbol)
    }

    fn expect(&mut self, kind: TokenKind, lexeme: &str) -> Result<ParseNode, JackError> {
        let span = self.current_span();
        match self.peek() {
            Some(token) if token.kind == kind && token.lexeme == lexeme => self.leaf(lexeme),
            Some(token) => Err(JackError::unexpected_token(lexeme, &token.lexeme, span)),
            None => Err(JackError::unexpected_eof(lexeme, span)),
        }
    }

    fn expect_identifier(&mut self, what: &str) -> Result<ParseNode, JackError> {
        let span = self.current_span();
        match self.peek() {
            Some(token) if token.kind == TokenKind::Identifier => self.leaf(what),
            Some(token) => Err(JackError::unexpected_token(what, &token.lexeme, span)),
            None => Err(JackError::unexpected_eof(what, span)),
        }
    }

    fn is(&self, lexeme: &str) -> bool {
        self.peek().is_some_and(|t| t.is(lexeme))
    }

    fn is_one_of(&self, lexemes: &[&str]) -> bool {
        self.peek().is_some_and(|t| t.is_one_of(lexemes))
    }

    fn current_span(&self) -> n2t_common::Span {
        self.peek().map(|t| t.span).unwrap_or_default()
    }

    fn parse_class(&mut self) -> Result<ParseNode, JackError> {
        let mut children = vec![
            self.expect_keyword("class")?,
            self.expect_identifier("className")?,
            self.expect_symbol("{")?,
        ];

        while self.is_one_of(&["static", "field"]) {
            children.push(self.parse_class_var_dec()?);
        }
        while !self.is("}") {
            children.push(self.parse_subroutine_dec()?);
        }
        children.push(self.expect_symbol("}")?);

        Ok(ParseNode::non_terminal("class", children))
    }

    fn parse_class_var_dec(&mut self) -> Result<ParseNode, JackError> {
        let kind_keyword = if self.is("static") { "static" } else { "field" };
        let mut children = vec![self.expect_keyword(kind_keyword)?, self.parse_type()?, self.parse_var_name()?];

        while self.is(",") {
            children.push(self.expect_symbol(",")?);
            children.push(self.parse_var_name()?);
        }
        children.push(self.expect_symbol(";")?);

        Ok(ParseNode::non_terminal("classVarDec", children))
    }

    fn parse_type(&mut self) -> Result<ParseNode, JackError> {
        let span = self.current_span();
        match self.peek() {
            Some(t) if t.is_one_of(&["int", "char", "boolean"]) => {
                let kw = t.lexeme.clone();
                self.expect_keyword(&kw)
            }
            Some(t) if t.kind == TokenKind::Identifier => self.leaf("type"),
            Some(t) => Err(JackError::unexpected_token("type", &t.lexeme, span)),
            None => Err(JackError::unexpected_eof("type", span)),
        }
    }

    fn parse_var_name(&mut self) -> Result<ParseNode, JackError> {
        self.expect_identifier("varName")
    }

    fn parse_subroutine_dec(&mut self) -> Result<ParseNode, JackError> {
        let kind_keyword = self
            .peek()
            .map(|t| t.lexeme.clone())
            .ok_or_else(|| JackError::unexpected_eof("subroutineDec", self.current_span()))?;
        let mut children = vec![self.expect_keyword(&kind_keyword)?];

        if self.is("void") {
            children.push(self.expect_keyword("void")?);
        } else {
            children.push(self.parse_type()?);
        }

        children.push(self.expect_identifier("subroutineName")?);
        children.push(self.expect_symbol("(")?);
        children.push(self.parse_parameter_list()?);
        children.push(self.expect_symbol(")")?);
        children.push(self.parse_subroutine_body()?);

        Ok(ParseNode::non_terminal("subroutineDec", children))
    }

    fn parse_parameter_list(&mut self) -> Result<ParseNode, JackError> {
        let mut children = Vec::new();

        if !self.is(")") {
            children.push(self.parse_type()?);
            children.push(self.parse_var_name()?);
            while self.is(",") {
                children.push(self.expect_symbol(",")?);
                children.push(self.parse_type()?);
                children.push(self.parse_var_name()?);
            }
        }

        Ok(ParseNode::non_terminal("parameterList", children))
    }

    fn parse_subroutine_body(&mut self) -> Result<ParseNode, JackError> {
        let mut children = vec![self.expect_symbol("{")?];

        while self.is("var") {
            children.push(self.parse_var_dec()?);
        }
        children.push(self.parse_statements()?);
        children.push(self.expect_symbol("}")?);

        Ok(ParseNode::non_terminal("subroutineBody", children))
    }

    fn parse_var_dec(&mut self) -> Result<ParseNode, JackError> {
        let mut children = vec![self.expect_keyword("var")?, self.parse_type()?, self.parse_var_name()?];

        while self.is(",") {
            children.push(self.expect_symbol(",")?);
            children.push(self.parse_var_name()?);
        }
        children.push(self.expect_symbol(";")?);

        Ok(ParseNode::non_terminal("varDec", children))
    }

    fn parse_statements(&mut self) -> Result<ParseNode, JackError> {
        let mut children = Vec::new();
        while self.is_one_of(&STATEMENT_KEYWORDS) {
            children.push(self.parse_statement()?);
        }
        Ok(ParseNode::non_terminal("statements", children))
    }

    fn parse_statement(&mut self) -> Result<ParseNode, JackError> {
        let span = self.current_span();
        match self.peek() {
            Some(t) if t.is("let") => self.parse_let_statement(),
            Some(t) if t.is("if") => self.parse_if_statement(),
            Some(t) if t.is("while") => self.parse_while_statement(),
            Some(t) if t.is("do") => self.parse_do_statement(),
            Some(t) if t.is("return") => self.parse_return_statement(),
            Some(t) => Err(JackError::unexpected_token("statement", &t.lexeme, span)),
            None => Err(JackError::unexpected_eof("statement", span)),
        }
    }

    fn parse_let_statement(&mut self) -> Result<ParseNode, JackError> {
        let mut children = vec![self.expect_keyword("let")?, self.parse_var_name()?];

        if self.is("[") {
            children.push(self.expect_symbol("[")?);
            children.push(self.parse_expression()?);
            children.push(self.expect_symbol("]")?);
        }

        children.push(self.expect_symbol("=")?);
        children.push(self.parse_expression()?);
        children.push(self.expect_symbol(";")?);

        Ok(ParseNode::non_terminal("letStatement", children))
    }

    fn parse_if_statement(&mut self) -> Result<ParseNode, JackError> {
        let mut children = vec![
            self.expect_keyword("if")?,
            self.expect_symbol("(")?,
            self.parse_expression()?,
            self.expect_symbol(")")?,
            self.expect_symbol("{")?,
            self.parse_statements()?,
            self.expect_symbol("}")?,
        ];

        if self.is("else") {
            children.push(self.expect_keyword("else")?);
            children.push(self.expect_symbol("{")?);
            children.push(self.parse_statements()?);
            children.push(self.expect_symbol("}")?);
        }

        Ok(ParseNode::non_terminal("ifStatement", children))
    }

    fn parse_while_statement(&mut self) -> Result<ParseNode, JackError> {
        let children = vec![
            self.expect_keyword("while")?,
            self.expect_symbol("(")?,
            self.parse_expression()?,
            self.expect_symbol(")")?,
            self.expect_symbol("{")?,
            self.parse_statements()?,
            self.expect_symbol("}")?,
        ];

        Ok(ParseNode::non_terminal("whileStatement", children))
    }

    fn parse_do_statement(&mut self) -> Result<ParseNode, JackError> {
        let mut children = vec![self.expect_keyword("do")?];
        children.extend(self.parse_subroutine_call()?);
        children.push(self.expect_symbol(";")?);

        Ok(ParseNode::non_terminal("doStatement", children))
    }

    fn parse_return_statement(&mut self) -> Result<ParseNode, JackError> {
        let mut children = vec![self.expect_keyword("return")?];

        if !self.is(";") {
            children.push(self.parse_expression()?);
        }
        children.push(self.expect_symbol(";")?);

        Ok(ParseNode::non_terminal("returnStatement", children))
    }

    fn parse_expression(&mut self) -> Result<ParseNode, JackError> {
        let mut children = vec![self.parse_term()?];

        while self.is_one_of(&OPERATORS) {
            let op = self
                .peek()
                .map(|t| t.lexeme.clone())
                .expect("is_one_of already confirmed a token is present");
            children.push(self.expect(TokenKind::Symbol, &op)?);
            children.push(self.parse_term()?);
        }

        Ok(ParseNode::non_terminal("expression", children))
    }

    fn parse_term(&mut self) -> Result<ParseNode, JackError> {
        let span = self.current_span();
        let children = match self.peek() {
            Some(t) if t.kind == TokenKind::IntegerConstant || t.kind == TokenKind::StringConstant => {
                vec![self.leaf("term")?]
            }
            Some(t) if t.is_one_of(&KEYWORD_CONSTANTS) => {
                let kw = t.lexeme.clone();
                vec![self.expect_keyword(&kw)?]
            }
            Some(t) if t.is("(") => {
                vec![
                    self.expect_symbol("(")?,
                    self.parse_expression()?,
                    self.expect_symbol(")")?,
                ]
            }
            Some(t) if t.is_one_of(&["-", "~"]) => {
                let op = t.lexeme.clone();
                vec![self.expect_symbol(&op)?, self.parse_term()?]
            }
            Some(t) if t.kind == TokenKind::Identifier => {
                let next = self.tokens.get(self.pos + 1).cloned();
                if next.as_ref().is_some_and(|n| n.is("[")) {
                    vec![
                        self.leaf("varName")?,
                        self.expect_symbol("[")?,
                        self.parse_expression()?,
                        self.expect_symbol("]")?,
                    ]
                } else if next.as_ref().is_some_and(|n| n.is_one_of(&[".", "("])) {
                    self.parse_subroutine_call()?
                } else {
                    vec![self.leaf("varName")?]
                }
            }
            Some(t) => return Err(JackError::unexpected_token("term", &t.lexeme, span)),
            None => return Err(JackError::unexpected_eof("term", span)),
        };

        Ok(ParseNode::non_terminal("term", children))
    }

    /// Returns a flat list of nodes (not wrapped in its own non-terminal —
    /// `doStatement` and `term` each splice this directly into their own
    /// children, matching the grammar's inline `subroutineCall` reference).
    fn parse_subroutine_call(&mut self) -> Result<Vec<ParseNode>, JackError> {
        let mut nodes = vec![self.expect_identifier("subroutineCall")?];

        if self.is(".") {
            nodes.push(self.expect_symbol(".")?);
            nodes.push(self.expect_identifier("subroutineName")?);
        }

        nodes.push(self.expect_symbol("(")?);
        nodes.push(self.parse_expression_list()?);
        nodes.push(self.expect_symbol(")")?);

        Ok(nodes)
    }

    fn parse_expression_list(&mut self) -> Result<ParseNode, JackError> {
        let mut children = Vec::new();

        if !self.is(")") {
            children.push(self.parse_expression()?);
            while self.is(",") {
                children.push(self.expect_symbol(",")?);
                children.push(self.parse_expression()?);
            }
        }

        Ok(ParseNode::non_terminal("expressionList", children))
    }
}
