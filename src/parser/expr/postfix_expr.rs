//! 後置演算式の解析
//!
//! 後置の `++`/`--`、メンバアクセス、関数呼び出しを解析する。

use crate::ast::*;
use crate::lexer::Token;
use crate::parser::{ParseResult, Parser};

impl Parser {
    /// 後置式を解析
    pub(crate) fn parse_postfix_expression(&mut self) -> ParseResult<Expression> {
        let expr = self.parse_call_member_expression()?;

        // 後置の ++/-- は一度だけ（`x++ ++` は左辺値でないため不正）
        if let Some(token) = self.match_tokens(&[Token::PlusPlus, Token::MinusMinus]) {
            let op = match token {
                Token::PlusPlus => UnaryOp::Increment,
                Token::MinusMinus => UnaryOp::Decrement,
                _ => unreachable!(),
            };
            let span = self.span_from(expr.span().start);
            return Ok(Expression::Unary(UnaryExpr {
                op,
                expr: Box::new(expr),
                prefix: false,
                span,
            }));
        }

        Ok(expr)
    }

    /// メンバアクセスと関数呼び出しの連鎖を解析
    fn parse_call_member_expression(&mut self) -> ParseResult<Expression> {
        let mut expr = self.parse_primary_expression()?;

        loop {
            let start = expr.span().start;

            match self.current_token() {
                Some(Token::LeftBracket) => {
                    self.advance();
                    let property = self.parse_expression_internal()?;
                    self.expect(Token::RightBracket)?;
                    let span = self.span_from(start);
                    expr = Expression::Member(MemberExpr {
                        object: Box::new(expr),
                        property: Box::new(property),
                        computed: true,
                        span,
                    });
                }
                Some(Token::Dot) => {
                    self.advance();
                    let name_span: Span = self.current_span().into();
                    let name = self.expect_member_name()?;
                    let span = self.span_from(start);
                    expr = Expression::Member(MemberExpr {
                        object: Box::new(expr),
                        property: Box::new(Expression::Identifier(Identifier {
                            name,
                            span: name_span,
                        })),
                        computed: false,
                        span,
                    });
                }
                Some(Token::LeftParen) => {
                    self.advance();
                    let args = self.parse_arguments()?;
                    self.expect(Token::RightParen)?;
                    let span = self.span_from(start);
                    expr = Expression::Call(CallExpr {
                        callee: Box::new(expr),
                        args,
                        span,
                    });
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    /// 引数リストを解析
    fn parse_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        let mut args = Vec::new();

        while !self.check(&Token::RightParen) && !self.is_at_end() {
            args.push(self.parse_assignment_expression()?);
            if !self.check(&Token::RightParen) {
                self.expect(Token::Comma)?;
            }
        }

        Ok(args)
    }
}
