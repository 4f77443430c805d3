//! 統一的なエラーハンドリングモジュール
//!
//! このモジュールは、litswap全体で使用される統一的なエラー型と
//! エラー報告システムを提供します。

use crate::ast::Span;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// litswapの統一エラー型
#[derive(Error, Debug, Clone)]
pub enum SwapError {
    /// レキサーエラー
    #[error("字句解析エラー")]
    Lexer(#[from] LexerError),

    /// パーサーエラー
    #[error("構文解析エラー")]
    Parser(#[from] ParserError),

    /// 設定エラー
    #[error("設定エラー")]
    Config(#[from] ConfigError),

    /// パターンエラー
    #[error("パターンエラー")]
    Pattern(#[from] PatternError),

    /// 置換値のシリアライズエラー
    #[error("シリアライズエラー")]
    Serialize(#[from] SerializeError),

    /// ファイルI/Oエラー
    #[error("ファイル操作エラー: {0}")]
    Io(String),

    /// その他のエラー
    #[error("{0}")]
    Other(String),
}

/// レキサーエラーの詳細
#[derive(Error, Debug, Clone)]
pub enum LexerError {
    #[error("認識できないトークン: '{token}'")]
    UnrecognizedToken { token: String, span: Span },
}

/// パーサーエラーの詳細
#[derive(Error, Debug, Clone)]
pub enum ParserError {
    #[error("予期しないトークン: {expected}を期待しましたが、{found}が見つかりました")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("予期しない入力の終了")]
    UnexpectedEof { expected: String, span: Span },

    #[error("構文エラー: {message}")]
    SyntaxError { message: String, span: Span },
}

/// 設定エラーの詳細
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("設定に replacements がありません")]
    MissingReplacements,

    #[error("設定を読み込めません: {message}")]
    InvalidConfig { message: String },
}

/// パターンエラーの詳細
#[derive(Error, Debug, Clone)]
pub enum PatternError {
    #[error("パターン '{pattern}' を式として解析できません: {message}")]
    Syntax { pattern: String, message: String },

    #[error("サポートされていないパターンです: {kind}")]
    UnsupportedPattern { kind: String },

    #[error("パターンの入れ子が深すぎます（上限: {limit}）")]
    BoundsExceeded { limit: usize },
}

/// 置換値のシリアライズエラーの詳細
#[derive(Error, Debug, Clone)]
pub enum SerializeError {
    #[error("サポートされていない値です: {kind}")]
    UnsupportedValue { kind: String },
}

/// エラー情報とソースコードの位置情報を含むエラー
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: SwapError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: SwapError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// codespan-reportingのDiagnosticに変換
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let (message, labels) = match &self.error {
            SwapError::Lexer(e) => match e {
                LexerError::UnrecognizedToken { token, span } => (
                    format!("認識できないトークン: '{}'", token),
                    vec![Label::primary(self.file_id, span.start..span.end)
                        .with_message("ここに不正なトークンがあります")],
                ),
            },
            SwapError::Parser(e) => match e {
                ParserError::UnexpectedToken {
                    expected,
                    found,
                    span,
                } => (
                    format!(
                        "予期しないトークン: {}を期待しましたが、{}が見つかりました",
                        expected, found
                    ),
                    vec![Label::primary(self.file_id, span.start..span.end)],
                ),
                ParserError::UnexpectedEof { expected, span } => (
                    format!("予期しない入力の終了: {}を期待していました", expected),
                    vec![Label::primary(self.file_id, span.start..span.end)],
                ),
                ParserError::SyntaxError { message, span } => (
                    format!("構文エラー: {}", message),
                    vec![Label::primary(self.file_id, span.start..span.end)],
                ),
            },
            SwapError::Config(e) => match e {
                ConfigError::MissingReplacements => (
                    "設定に replacements がありません".to_string(),
                    vec![],
                ),
                ConfigError::InvalidConfig { message } => {
                    (format!("設定を読み込めません: {}", message), vec![])
                }
            },
            // パターンは設定側のテキストなので、ソースファイル上のラベルは付かない
            SwapError::Pattern(e) => match e {
                PatternError::Syntax { pattern, message } => (
                    format!("パターン '{}' を式として解析できません: {}", pattern, message),
                    vec![],
                ),
                PatternError::UnsupportedPattern { kind } => (
                    format!("サポートされていないパターンです: {}", kind),
                    vec![],
                ),
                PatternError::BoundsExceeded { limit } => (
                    format!("パターンの入れ子が深すぎます（上限: {}）", limit),
                    vec![],
                ),
            },
            SwapError::Serialize(e) => match e {
                SerializeError::UnsupportedValue { kind } => {
                    (format!("サポートされていない値です: {}", kind), vec![])
                }
            },
            SwapError::Io(message) => (format!("ファイル操作エラー: {}", message), vec![]),
            SwapError::Other(message) => (message.clone(), vec![]),
        };

        Diagnostic::error().with_message(message).with_labels(labels)
    }
}

/// 複数のエラーを蓄積するためのコレクター
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<DiagnosticError>,
    warnings: Vec<DiagnosticError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// エラーを追加
    pub fn add_error(&mut self, error: SwapError, file_id: usize) {
        self.errors.push(DiagnosticError::new(error, file_id));
    }

    /// 警告を追加（将来の拡張用）
    #[allow(dead_code)]
    pub fn add_warning(&mut self, error: SwapError, file_id: usize) {
        self.warnings.push(DiagnosticError::new(error, file_id));
    }

    /// エラーがあるかどうか
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// エラーの数
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// すべてのエラーを取得
    pub fn errors(&self) -> &[DiagnosticError] {
        &self.errors
    }

    /// すべての警告を取得
    pub fn warnings(&self) -> &[DiagnosticError] {
        &self.warnings
    }

    /// 最初のエラーを取得
    pub fn first_error(&self) -> Option<&DiagnosticError> {
        self.errors.first()
    }
}

/// Result型のエイリアス
pub type SwapResult<T> = Result<T, SwapError>;

impl From<std::io::Error> for SwapError {
    fn from(e: std::io::Error) -> Self {
        SwapError::Io(e.to_string())
    }
}
