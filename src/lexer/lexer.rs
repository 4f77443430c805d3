//! レキサーのメイン実装

use logos::{Lexer as LogosLexer, Logos, Span};

use super::token::Token;

/// 位置情報付きトークン
#[derive(Debug, Clone)]
pub struct TokenWithPosition {
    pub token: Token,
    pub span: Span,
}

/// JavaScriptサブセットのレキサー
pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// 新しいレキサーを作成
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
        }
    }

    /// 次のトークンを取得
    pub fn next_token(&mut self) -> Option<TokenWithPosition> {
        let token = self.inner.next()?;
        let span = self.inner.span();

        match token {
            Ok(token) => Some(TokenWithPosition { token, span }),
            // 未知の文字はエラートークンとして報告する（読み飛ばさない）
            Err(_) => Some(TokenWithPosition {
                token: Token::Error,
                span,
            }),
        }
    }

    /// すべてのトークンを収集
    pub fn collect_tokens(mut self) -> Vec<TokenWithPosition> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

/// ソースコードをトークン化
pub fn tokenize(input: &str) -> Vec<TokenWithPosition> {
    Lexer::new(input).collect_tokens()
}
