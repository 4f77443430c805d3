//! 置換値からリテラル式ノードへの変換
//!
//! マッチした部分木はここで作られたノードに丸ごと差し替えられる。
//! 生成されるノードはすべてダミー位置を持つ（元ソースに対応する
//! 区間が存在しないため）。

use crate::ast::{
    ArrayExpr, BooleanLit, Expression, NullLit, NumberLit, ObjectExpr, ObjectProperty,
    PropertyKey, Span, StringLit, UnaryExpr, UnaryOp,
};
use crate::error::SerializeError;
use crate::rules::ReplacementValue;

/// 置換値をリテラル式ノードに変換する
pub fn value_to_node(value: &ReplacementValue) -> Result<Expression, SerializeError> {
    match value {
        ReplacementValue::Null => Ok(Expression::Null(NullLit { span: Span::dummy() })),
        ReplacementValue::Boolean(value) => Ok(Expression::Boolean(BooleanLit {
            value: *value,
            span: Span::dummy(),
        })),
        ReplacementValue::Number(value) => {
            if !value.is_finite() {
                // NaN や Infinity はリテラルではなくグローバル識別子なので、
                // 埋め込むとローカル宣言に隠される可能性がある
                return Err(SerializeError::UnsupportedValue {
                    kind: non_finite_name(*value).to_string(),
                });
            }
            Ok(Expression::Number(NumberLit {
                value: *value,
                span: Span::dummy(),
            }))
        }
        ReplacementValue::String(value) => Ok(Expression::String(StringLit {
            value: value.clone(),
            span: Span::dummy(),
        })),
        ReplacementValue::Undefined => Ok(undefined_node()),
        ReplacementValue::List(items) => {
            let elements = items
                .iter()
                .map(value_to_node)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expression::Array(ArrayExpr {
                elements,
                span: Span::dummy(),
            }))
        }
        ReplacementValue::Record(entries) => {
            let mut properties = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                properties.push(ObjectProperty {
                    key: object_key(key),
                    value: value_to_node(value)?,
                    span: Span::dummy(),
                });
            }
            Ok(Expression::Object(ObjectExpr {
                properties,
                span: Span::dummy(),
            }))
        }
    }
}

/// `undefined` の代わりに埋め込む式（`void 0`）
///
/// 裸の `undefined` は予約語ではなく、ローカル宣言に隠される
/// 可能性があるため、スコープに依存しない構文を使う。
fn undefined_node() -> Expression {
    Expression::Unary(UnaryExpr {
        op: UnaryOp::Void,
        expr: Box::new(Expression::Number(NumberLit {
            value: 0.0,
            span: Span::dummy(),
        })),
        prefix: true,
        span: Span::dummy(),
    })
}

/// レコードのキーを出力に適した形に分類する
fn object_key(key: &str) -> PropertyKey {
    if let Some(n) = canonical_index(key) {
        return PropertyKey::Number(n as f64);
    }
    if is_identifier_name(key) {
        return PropertyKey::Identifier(key.to_string());
    }
    PropertyKey::String(key.to_string())
}

/// 正準形の配列添字（"0"、"42" など。"00" や "1e3" は含まない）
fn canonical_index(key: &str) -> Option<u64> {
    let n = key.parse::<u64>().ok()?;
    if n.to_string() == key {
        Some(n)
    } else {
        None
    }
}

fn is_identifier_name(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn non_finite_name(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}
