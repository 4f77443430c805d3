//! 文の解析

use crate::ast::*;
use crate::lexer::Token;

use super::{ParseResult, Parser};

impl Parser {
    /// 文を解析（内部実装）
    pub(super) fn parse_statement_internal(&mut self) -> ParseResult<Statement> {
        match self.current_token() {
            Some(Token::Var) | Some(Token::Let) | Some(Token::Const) => Ok(
                Statement::VariableDeclaration(self.parse_variable_declaration()?),
            ),
            Some(Token::Function) => Ok(Statement::FunctionDeclaration(
                self.parse_function_declaration()?,
            )),
            Some(Token::Return) => Ok(Statement::Return(self.parse_return_statement()?)),
            Some(Token::If) => Ok(Statement::If(self.parse_if_statement()?)),
            Some(Token::While) => Ok(Statement::While(self.parse_while_statement()?)),
            Some(Token::LeftBrace) => Ok(Statement::Block(self.parse_block()?)),
            Some(Token::Semicolon) => {
                let span: Span = self.current_span().into();
                self.advance();
                Ok(Statement::Empty(EmptyStatement { span }))
            }
            _ => {
                let start = self.current_span().start;
                let expression = self.parse_expression_internal()?;
                self.expect(Token::Semicolon)?;
                let span = self.span_from(start);
                Ok(Statement::Expression(ExpressionStatement {
                    expression,
                    span,
                }))
            }
        }
    }

    /// 変数宣言文を解析
    fn parse_variable_declaration(&mut self) -> ParseResult<VariableDeclaration> {
        let start = self.current_span().start;
        let kind = match self.current_token() {
            Some(Token::Var) => DeclarationKind::Var,
            Some(Token::Let) => DeclarationKind::Let,
            Some(Token::Const) => DeclarationKind::Const,
            _ => return Err(self.expected("declaration keyword".to_string())),
        };
        self.advance();

        let mut declarators = Vec::new();
        loop {
            let decl_start = self.current_span().start;
            let name = self.expect_identifier()?;

            let init = if self.match_token(&Token::Assign) {
                Some(self.parse_assignment_expression()?)
            } else if matches!(kind, DeclarationKind::Const) {
                return Err(self.error("Missing initializer in const declaration".to_string()));
            } else {
                None
            };

            let span = self.span_from(decl_start);
            declarators.push(VariableDeclarator { name, init, span });

            if !self.match_token(&Token::Comma) {
                break;
            }
        }

        self.expect(Token::Semicolon)?;
        let span = self.span_from(start);

        Ok(VariableDeclaration {
            kind,
            declarators,
            span,
        })
    }

    /// 関数宣言を解析
    fn parse_function_declaration(&mut self) -> ParseResult<FunctionDecl> {
        let start = self.current_span().start;
        self.expect(Token::Function)?;
        let name = self.expect_identifier()?;

        self.expect(Token::LeftParen)?;
        let params = self.parse_parameters()?;
        self.expect(Token::RightParen)?;

        let body = self.parse_block()?;
        let span = self.span_from(start);

        Ok(FunctionDecl {
            name,
            params,
            body,
            span,
        })
    }

    /// パラメータリストを解析
    fn parse_parameters(&mut self) -> ParseResult<Vec<Parameter>> {
        let mut params = Vec::new();

        while !self.check(&Token::RightParen) && !self.is_at_end() {
            let start = self.current_span().start;
            let name = self.expect_identifier()?;
            let span = self.span_from(start);
            params.push(Parameter { name, span });

            if !self.check(&Token::RightParen) {
                self.expect(Token::Comma)?;
            }
        }

        Ok(params)
    }

    /// return文を解析
    fn parse_return_statement(&mut self) -> ParseResult<ReturnStatement> {
        let start = self.current_span().start;
        self.expect(Token::Return)?;

        let value = if self.check(&Token::Semicolon) {
            None
        } else {
            Some(self.parse_expression_internal()?)
        };

        self.expect(Token::Semicolon)?;
        let span = self.span_from(start);

        Ok(ReturnStatement { value, span })
    }

    /// if文を解析
    fn parse_if_statement(&mut self) -> ParseResult<IfStatement> {
        let start = self.current_span().start;
        self.expect(Token::If)?;

        self.expect(Token::LeftParen)?;
        let condition = self.parse_expression_internal()?;
        self.expect(Token::RightParen)?;

        let then_branch = Box::new(self.parse_nested_statement()?);

        let else_branch = if self.match_token(&Token::Else) {
            Some(Box::new(self.parse_nested_statement()?))
        } else {
            None
        };

        let span = self.span_from(start);

        Ok(IfStatement {
            condition,
            then_branch,
            else_branch,
            span,
        })
    }

    /// while文を解析
    fn parse_while_statement(&mut self) -> ParseResult<WhileStatement> {
        let start = self.current_span().start;
        self.expect(Token::While)?;

        self.expect(Token::LeftParen)?;
        let condition = self.parse_expression_internal()?;
        self.expect(Token::RightParen)?;

        let body = Box::new(self.parse_nested_statement()?);
        let span = self.span_from(start);

        Ok(WhileStatement {
            condition,
            body,
            span,
        })
    }

    /// 単文位置の文を解析（if/whileの波括弧なし本体）
    ///
    /// JavaScriptでは let/const 宣言を単文位置に置けない。
    fn parse_nested_statement(&mut self) -> ParseResult<Statement> {
        match self.current_token() {
            Some(Token::Let) | Some(Token::Const) => Err(self.error(
                "Lexical declaration cannot appear in a single-statement context".to_string(),
            )),
            _ => self.parse_statement_internal(),
        }
    }

    /// ブロックを解析
    pub(super) fn parse_block(&mut self) -> ParseResult<Block> {
        let start = self.current_span().start;
        self.expect(Token::LeftBrace)?;

        let mut statements = Vec::new();

        while !self.check(&Token::RightBrace) && !self.is_at_end() {
            statements.push(self.parse_statement_internal()?);
        }

        self.expect(Token::RightBrace)?;
        let span = self.span_from(start);

        Ok(Block { statements, span })
    }
}
