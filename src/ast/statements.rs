//! 文の定義

use serde::{Deserialize, Serialize};

use super::{Expression, Span};

/// 文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Expression(ExpressionStatement),
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(FunctionDecl),
    Return(ReturnStatement),
    If(IfStatement),
    While(WhileStatement),
    Block(Block),
    Empty(EmptyStatement),
}

/// 式文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

/// 変数宣言文（`var a = 1, b;` のように宣言子を複数持てる）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub kind: DeclarationKind,
    pub declarators: Vec<VariableDeclarator>,
    pub span: Span,
}

/// 宣言の種類
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Var => "var",
            DeclarationKind::Let => "let",
            DeclarationKind::Const => "const",
        }
    }
}

/// 変数宣言子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub name: String,
    pub init: Option<Expression>,
    pub span: Span,
}

/// 関数宣言
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Parameter>,
    pub body: Block,
    pub span: Span,
}

/// 関数パラメータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub span: Span,
}

/// return文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub span: Span,
}

/// if文（分岐はブロックに限らず任意の文を取れる）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
    pub span: Span,
}

/// while文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

/// ブロック
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// 空文（セミコロンのみ）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyStatement {
    pub span: Span,
}
