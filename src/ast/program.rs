//! プログラム構造

use serde::{Deserialize, Serialize};

use super::{Span, Statement};

/// ASTのルートノード（変換対象のスクリプト全体を表す）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Statement>,
    pub span: Span,
}
