//! パーサーモジュール
//!
//! このモジュールはトークンをJavaScriptサブセットの抽象構文木（AST）に
//! 解析する責任を持ちます。再帰下降構文解析を使用し、適切な優先順位処理を
//! 行います。
//!
//! 対象とするサブセットには自動セミコロン挿入（ASI）はなく、文の終端には
//! 明示的なセミコロンが必要です。

mod expr;
mod parser_impl;
mod stmt_parser;

// 公開API
pub use parser_impl::Parser;

// 型エイリアス
use crate::error::ParserError;
pub type ParseError = ParserError;
pub type ParseResult<T> = Result<T, ParseError>;
