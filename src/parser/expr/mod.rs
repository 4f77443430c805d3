//! 式の解析モジュール
//!
//! 式の解析を優先順位の段階ごとにサブモジュールへ分割して管理する。

mod assign_expr;
mod binary_expr;
mod literal_expr;
mod postfix_expr;
mod unary_expr;
