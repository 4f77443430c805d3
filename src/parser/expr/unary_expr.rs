//! 単項演算式の解析
//!
//! 前置演算子（`!` `-` `+` `~` `typeof` `void` `delete` `++` `--`）を解析する。

use crate::ast::*;
use crate::lexer::Token;
use crate::parser::{ParseResult, Parser};

impl Parser {
    /// 単項式を解析
    pub(crate) fn parse_unary_expression(&mut self) -> ParseResult<Expression> {
        let start = self.current_span().start;

        if let Some(token) = self.match_tokens(&[
            Token::Bang,
            Token::Minus,
            Token::Plus,
            Token::Tilde,
            Token::Typeof,
            Token::Void,
            Token::Delete,
            Token::PlusPlus,
            Token::MinusMinus,
        ]) {
            let op = match token {
                Token::Bang => UnaryOp::Not,
                Token::Minus => UnaryOp::Minus,
                Token::Plus => UnaryOp::Plus,
                Token::Tilde => UnaryOp::BitNot,
                Token::Typeof => UnaryOp::Typeof,
                Token::Void => UnaryOp::Void,
                Token::Delete => UnaryOp::Delete,
                Token::PlusPlus => UnaryOp::Increment,
                Token::MinusMinus => UnaryOp::Decrement,
                _ => unreachable!(),
            };
            let expr = self.parse_unary_expression()?;
            let span = Span::new(start, expr.span().end);
            return Ok(Expression::Unary(UnaryExpr {
                op,
                expr: Box::new(expr),
                prefix: true,
                span,
            }));
        }

        self.parse_postfix_expression()
    }
}
