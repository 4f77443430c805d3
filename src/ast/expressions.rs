//! 式の定義

use serde::{Deserialize, Serialize};

use super::Span;

/// 式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Number(NumberLit),
    String(StringLit),
    Boolean(BooleanLit),
    Null(NullLit),
    Identifier(Identifier),
    Member(MemberExpr),
    Call(CallExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Conditional(ConditionalExpr),
    Assignment(AssignmentExpr),
    Array(ArrayExpr),
    Object(ObjectExpr),
}

impl Expression {
    /// ノードのスパンを返す
    pub fn span(&self) -> Span {
        match self {
            Expression::Number(e) => e.span,
            Expression::String(e) => e.span,
            Expression::Boolean(e) => e.span,
            Expression::Null(e) => e.span,
            Expression::Identifier(e) => e.span,
            Expression::Member(e) => e.span,
            Expression::Call(e) => e.span,
            Expression::Unary(e) => e.span,
            Expression::Binary(e) => e.span,
            Expression::Conditional(e) => e.span,
            Expression::Assignment(e) => e.span,
            Expression::Array(e) => e.span,
            Expression::Object(e) => e.span,
        }
    }

    /// ESTree流のノード種別名を返す（診断メッセージ用）
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Number(_) => "NumericLiteral",
            Expression::String(_) => "StringLiteral",
            Expression::Boolean(_) => "BooleanLiteral",
            Expression::Null(_) => "NullLiteral",
            Expression::Identifier(_) => "Identifier",
            Expression::Member(_) => "MemberExpression",
            Expression::Call(_) => "CallExpression",
            Expression::Unary(_) => "UnaryExpression",
            Expression::Binary(_) => "BinaryExpression",
            Expression::Conditional(_) => "ConditionalExpression",
            Expression::Assignment(_) => "AssignmentExpression",
            Expression::Array(_) => "ArrayExpression",
            Expression::Object(_) => "ObjectExpression",
        }
    }
}

/// 数値リテラル（JavaScriptの数値は全てf64）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLit {
    pub value: f64,
    pub span: Span,
}

/// 文字列リテラル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLit {
    pub value: String,
    pub span: Span,
}

/// 真偽値リテラル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLit {
    pub value: bool,
    pub span: Span,
}

/// nullリテラル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullLit {
    pub span: Span,
}

/// 識別子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// メンバアクセス式（`a.b` は computed = false、`a[b]` は computed = true）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberExpr {
    pub object: Box<Expression>,
    pub property: Box<Expression>,
    pub computed: bool,
    pub span: Span,
}

/// 関数呼び出し式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: Box<Expression>,
    pub args: Vec<Expression>,
    pub span: Span,
}

/// 単項演算式（`++`/`--` は prefix フラグで前置・後置を区別する）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub expr: Box<Expression>,
    pub prefix: bool,
    pub span: Span,
}

/// 単項演算子
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UnaryOp {
    Minus,
    Plus,
    Not,
    BitNot,
    Typeof,
    Void,
    Delete,
    Increment,
    Decrement,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Minus => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::Typeof => "typeof",
            UnaryOp::Void => "void",
            UnaryOp::Delete => "delete",
            UnaryOp::Increment => "++",
            UnaryOp::Decrement => "--",
        }
    }

    /// キーワード演算子かどうか（出力時に後続へ空白が要る）
    pub fn is_keyword(&self) -> bool {
        matches!(self, UnaryOp::Typeof | UnaryOp::Void | UnaryOp::Delete)
    }
}

/// 二項演算式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub left: Box<Expression>,
    pub op: BinaryOp,
    pub right: Box<Expression>,
    pub span: Span,
}

/// 二項演算子（論理演算子 `&&`/`||` も含む）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Eq,
    Ne,
    StrictEq,
    StrictNe,
    Lt,
    Gt,
    Le,
    Ge,
    Shl,
    Shr,
    UShr,
    BitAnd,
    BitOr,
    BitXor,
    And,
    Or,
    Instanceof,
    In,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::StrictEq => "===",
            BinaryOp::StrictNe => "!==",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::UShr => ">>>",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Instanceof => "instanceof",
            BinaryOp::In => "in",
        }
    }
}

/// 条件（三項）演算式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpr {
    pub condition: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
    pub span: Span,
}

/// 代入式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentExpr {
    pub target: Box<Expression>,
    pub value: Box<Expression>,
    pub span: Span,
}

/// 配列リテラル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpr {
    pub elements: Vec<Expression>,
    pub span: Span,
}

/// オブジェクトリテラル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectExpr {
    pub properties: Vec<ObjectProperty>,
    pub span: Span,
}

/// オブジェクトのプロパティ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperty {
    pub key: PropertyKey,
    pub value: Expression,
    pub span: Span,
}

/// プロパティキー（`{ a: 1 }` / `{ "a b": 1 }` / `{ 0: 1 }`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyKey {
    Identifier(String),
    String(String),
    Number(f64),
}
