//! 代入式と条件式の解析
//!
//! 式の優先順位の最下段。代入は右結合で、左辺は識別子または
//! メンバアクセスに限られる。

use crate::ast::*;
use crate::lexer::Token;
use crate::parser::{ParseResult, Parser};

impl Parser {
    /// 式を解析（内部実装）
    pub(crate) fn parse_expression_internal(&mut self) -> ParseResult<Expression> {
        self.parse_assignment_expression()
    }

    /// 代入式を解析
    pub(crate) fn parse_assignment_expression(&mut self) -> ParseResult<Expression> {
        let left = self.parse_conditional_expression()?;

        if self.match_token(&Token::Assign) {
            if !matches!(left, Expression::Identifier(_) | Expression::Member(_)) {
                return Err(self.error("Invalid left-hand side in assignment".to_string()));
            }
            let value = self.parse_assignment_expression()?;
            let span = Span::new(left.span().start, value.span().end);
            return Ok(Expression::Assignment(AssignmentExpr {
                target: Box::new(left),
                value: Box::new(value),
                span,
            }));
        }

        Ok(left)
    }

    /// 条件（三項）式を解析
    pub(crate) fn parse_conditional_expression(&mut self) -> ParseResult<Expression> {
        let condition = self.parse_or_expression()?;

        if self.match_token(&Token::Question) {
            let consequent = self.parse_assignment_expression()?;
            self.expect(Token::Colon)?;
            let alternate = self.parse_assignment_expression()?;
            let span = Span::new(condition.span().start, alternate.span().end);
            return Ok(Expression::Conditional(ConditionalExpr {
                condition: Box::new(condition),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
                span,
            }));
        }

        Ok(condition)
    }
}
