//! リテラル式と基本的な式の解析
//!
//! 数値、文字列、真偽値、null、識別子、括弧付き式、
//! 配列・オブジェクトリテラルを解析する。

use crate::ast::*;
use crate::lexer::Token;
use crate::parser::{ParseResult, Parser};

impl Parser {
    /// プライマリ式を解析
    pub(crate) fn parse_primary_expression(&mut self) -> ParseResult<Expression> {
        match self.current_token() {
            Some(Token::Number(value)) => self.parse_number_literal(*value),
            Some(Token::String(value)) => self.parse_string_literal(value.clone()),
            Some(Token::True) => self.parse_boolean_literal(true),
            Some(Token::False) => self.parse_boolean_literal(false),
            Some(Token::Null) => self.parse_null_literal(),
            Some(Token::Identifier(name)) => self.parse_identifier_expression(name.clone()),
            Some(Token::LeftParen) => self.parse_parenthesized_expression(),
            Some(Token::LeftBracket) => self.parse_array_literal(),
            Some(Token::LeftBrace) => self.parse_object_literal(),
            _ => Err(self.error("Expected expression".to_string())),
        }
    }

    /// 数値リテラルを解析
    fn parse_number_literal(&mut self, value: f64) -> ParseResult<Expression> {
        let span = self.current_span();
        self.advance();
        Ok(Expression::Number(NumberLit {
            value,
            span: span.into(),
        }))
    }

    /// 文字列リテラルを解析
    fn parse_string_literal(&mut self, value: String) -> ParseResult<Expression> {
        let span = self.current_span();
        self.advance();
        Ok(Expression::String(StringLit {
            value,
            span: span.into(),
        }))
    }

    /// 真偽値リテラルを解析
    fn parse_boolean_literal(&mut self, value: bool) -> ParseResult<Expression> {
        let span = self.current_span();
        self.advance();
        Ok(Expression::Boolean(BooleanLit {
            value,
            span: span.into(),
        }))
    }

    /// nullリテラルを解析
    fn parse_null_literal(&mut self) -> ParseResult<Expression> {
        let span = self.current_span();
        self.advance();
        Ok(Expression::Null(NullLit { span: span.into() }))
    }

    /// 識別子式を解析
    fn parse_identifier_expression(&mut self, name: String) -> ParseResult<Expression> {
        let span = self.current_span();
        self.advance();
        Ok(Expression::Identifier(Identifier {
            name,
            span: span.into(),
        }))
    }

    /// 括弧付き式を解析
    ///
    /// 括弧はASTに残らない（`(a)` のパターンは `a` と同じ形になる）。
    fn parse_parenthesized_expression(&mut self) -> ParseResult<Expression> {
        self.advance();
        let expr = self.parse_expression_internal()?;
        self.expect(Token::RightParen)?;
        Ok(expr)
    }

    /// 配列リテラルを解析
    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let start = self.current_span().start;
        self.advance();
        let mut elements = Vec::new();

        while !self.check(&Token::RightBracket) && !self.is_at_end() {
            elements.push(self.parse_assignment_expression()?);
            if !self.check(&Token::RightBracket) {
                self.expect(Token::Comma)?;
            }
        }

        self.expect(Token::RightBracket)?;
        let span = self.span_from(start);
        Ok(Expression::Array(ArrayExpr { elements, span }))
    }

    /// オブジェクトリテラルを解析
    fn parse_object_literal(&mut self) -> ParseResult<Expression> {
        let start = self.current_span().start;
        self.advance();
        let mut properties = Vec::new();

        while !self.check(&Token::RightBrace) && !self.is_at_end() {
            let prop_start = self.current_span().start;
            let key = self.parse_property_key()?;
            self.expect(Token::Colon)?;
            let value = self.parse_assignment_expression()?;
            let span = self.span_from(prop_start);
            properties.push(ObjectProperty { key, value, span });

            if !self.check(&Token::RightBrace) {
                self.expect(Token::Comma)?;
            }
        }

        self.expect(Token::RightBrace)?;
        let span = self.span_from(start);
        Ok(Expression::Object(ObjectExpr { properties, span }))
    }

    /// プロパティキーを解析（識別子・文字列・数値）
    fn parse_property_key(&mut self) -> ParseResult<PropertyKey> {
        match self.current_token() {
            Some(Token::String(value)) => {
                let value = value.clone();
                self.advance();
                Ok(PropertyKey::String(value))
            }
            Some(Token::Number(value)) => {
                let value = *value;
                self.advance();
                Ok(PropertyKey::Number(value))
            }
            _ => Ok(PropertyKey::Identifier(self.expect_member_name()?)),
        }
    }
}
