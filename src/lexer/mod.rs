//! 字句解析モジュール
//!
//! このモジュールはJavaScriptソースコードをトークン列に変換する責任を持ちます。
//! キーワード、識別子、数値・文字列リテラル、演算子をサポートし、
//! コメントと空白は読み飛ばします。未知の文字はエラートークンとして残し、
//! 後段のパイプラインで診断として報告できるようにします。

mod lexer;
mod literal_parser;
mod token;

// 公開API
pub use lexer::{tokenize, Lexer, TokenWithPosition};
pub use token::Token;
