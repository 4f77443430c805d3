//! メインパーサー構造とユーティリティ

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::{Token, TokenWithPosition};

use super::{ParseError, ParseResult};

/// JavaScriptサブセットのパーサー
pub struct Parser {
    pub(super) tokens: Vec<TokenWithPosition>,
    pub(super) current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPosition>) -> Self {
        Self { tokens, current: 0 }
    }

    /// 完全なプログラムを解析
    pub fn parse(&mut self) -> ParseResult<Program> {
        let mut body = Vec::new();
        while !self.is_at_end() {
            body.push(self.parse_statement_internal()?);
        }

        let span = if let Some(first) = self.tokens.first() {
            if let Some(last) = self.tokens.last() {
                Span::new(first.span.start, last.span.end)
            } else {
                Span::new(first.span.start, first.span.end)
            }
        } else {
            Span::dummy()
        };

        Ok(Program { body, span })
    }

    /// 単一の完全な式を解析（置換パターンのコンパイル用）
    ///
    /// 式の後に余分なトークンが残っている場合はエラーになる。
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        let expr = self.parse_expression_internal()?;
        if let Some(token) = self.current_token() {
            return Err(self.error(format!("Unexpected token after expression: {}", token)));
        }
        Ok(expr)
    }

    // ==================== ユーティリティメソッド ====================

    /// 現在のトークンを取得
    pub(super) fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.current).map(|t| &t.token)
    }

    /// 現在のトークンを位置情報付きで取得
    pub(super) fn current_token_with_pos(&self) -> Option<&TokenWithPosition> {
        self.tokens.get(self.current)
    }

    /// 現在のスパンを取得（終端では最後のトークンの終了位置）
    pub(super) fn current_span(&self) -> logos::Span {
        self.current_token_with_pos()
            .map(|t| t.span.clone())
            .unwrap_or_else(|| {
                let end = self.tokens.last().map(|t| t.span.end).unwrap_or(0);
                end..end
            })
    }

    /// 開始位置から現在位置までのスパンを作成
    pub(super) fn span_from(&self, start: usize) -> Span {
        let end = if self.current > 0 {
            // 前のトークンの終了位置を使用
            self.tokens
                .get(self.current - 1)
                .map(|t| t.span.end)
                .unwrap_or(start)
        } else {
            self.current_span().end
        };
        Span::new(start, end)
    }

    /// 次のトークンに進む
    pub(super) fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    /// 終端に到達したかチェック
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// 特定のトークンをチェック（進まない）
    pub(super) fn check(&self, token_type: &Token) -> bool {
        if let Some(token) = self.current_token() {
            std::mem::discriminant(token) == std::mem::discriminant(token_type)
        } else {
            false
        }
    }

    /// 特定のトークンにマッチしたら進む
    pub(super) fn match_token(&mut self, token_type: &Token) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// 複数のトークンタイプのいずれかにマッチしたら進む
    pub(super) fn match_tokens(&mut self, token_types: &[Token]) -> Option<Token> {
        for token_type in token_types {
            if self.check(token_type) {
                let token = self.current_token()?.clone();
                self.advance();
                return Some(token);
            }
        }
        None
    }

    /// 特定のトークンを期待
    pub(super) fn expect(&mut self, token_type: Token) -> ParseResult<()> {
        if self.check(&token_type) {
            self.advance();
            Ok(())
        } else {
            Err(self.expected(token_type.to_string()))
        }
    }

    /// 識別子を期待
    pub(super) fn expect_identifier(&mut self) -> ParseResult<String> {
        match self.current_token() {
            Some(Token::Identifier(name)) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.expected("identifier".to_string())),
        }
    }

    /// プロパティ名を期待（予約語もプロパティ名として使える）
    pub(super) fn expect_member_name(&mut self) -> ParseResult<String> {
        let name = match self.current_token() {
            Some(Token::Identifier(name)) => name.clone(),
            Some(token) => match keyword_name(token) {
                Some(name) => name.to_string(),
                None => return Err(self.expected("property name".to_string())),
            },
            None => return Err(self.expected("property name".to_string())),
        };
        self.advance();
        Ok(name)
    }

    /// エラーを作成
    pub(super) fn error(&self, message: String) -> ParseError {
        let span = self.current_span();
        ParserError::SyntaxError {
            message,
            span: span.into(),
        }
    }

    /// 期待したトークンがなかったときのエラーを作成
    pub(super) fn expected(&self, expected: String) -> ParseError {
        let span: Span = self.current_span().into();
        match self.current_token() {
            Some(token) => ParserError::UnexpectedToken {
                expected,
                found: token.to_string(),
                span,
            },
            None => ParserError::UnexpectedEof { expected, span },
        }
    }
}

/// キーワードトークンをプロパティ名として使う場合の綴り
pub(super) fn keyword_name(token: &Token) -> Option<&'static str> {
    match token {
        Token::Var => Some("var"),
        Token::Let => Some("let"),
        Token::Const => Some("const"),
        Token::Function => Some("function"),
        Token::Return => Some("return"),
        Token::If => Some("if"),
        Token::Else => Some("else"),
        Token::While => Some("while"),
        Token::True => Some("true"),
        Token::False => Some("false"),
        Token::Null => Some("null"),
        Token::Typeof => Some("typeof"),
        Token::Instanceof => Some("instanceof"),
        Token::In => Some("in"),
        Token::Void => Some("void"),
        Token::Delete => Some("delete"),
        Token::New => Some("new"),
        _ => None,
    }
}
