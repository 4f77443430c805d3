//! パターンマッチングエンジン
//!
//! パターンASTと候補ASTを再帰的に比較して構造的一致を判定する。
//! 識別子は文法上の役割によって扱いが変わる: 参照位置ではスコープの
//! 束縛状態を考慮し、プロパティ名などの名前位置では綴りのみを
//! 比較する。構造の不一致は単なる「マッチしない」であり、エラーに
//! なるのはパターン側がサポート外の形を含む場合と、入れ子が深すぎる
//! 場合だけ。

use crate::ast::Expression;
use crate::error::PatternError;
use crate::scope::ScopeLookup;

/// パターンの入れ子の深さ上限
pub const MAX_MATCH_DEPTH: usize = 256;

/// 識別子の文法上の役割
#[derive(Debug, Clone, Copy, PartialEq)]
enum IdentifierRole {
    /// 式（参照）位置
    Reference,
    /// 名前位置（非computedメンバーのプロパティ名）
    Name,
}

/// パターンと候補のマッチ判定
pub fn matches(
    pattern: &Expression,
    candidate: &Expression,
    scope: &dyn ScopeLookup,
) -> Result<bool, PatternError> {
    matches_with_role(pattern, candidate, scope, IdentifierRole::Reference, 0)
}

fn matches_with_role(
    pattern: &Expression,
    candidate: &Expression,
    scope: &dyn ScopeLookup,
    role: IdentifierRole,
    depth: usize,
) -> Result<bool, PatternError> {
    if depth >= MAX_MATCH_DEPTH {
        return Err(PatternError::BoundsExceeded {
            limit: MAX_MATCH_DEPTH,
        });
    }

    match pattern {
        Expression::Number(pat) => {
            let cand = match candidate {
                Expression::Number(c) => c,
                _ => return Ok(false),
            };
            // 数値としての等価性で比較する（`42` と `42.0` は同じ）
            Ok(pat.value == cand.value)
        }
        Expression::String(pat) => {
            let cand = match candidate {
                Expression::String(c) => c,
                _ => return Ok(false),
            };
            Ok(pat.value == cand.value)
        }
        Expression::Boolean(pat) => {
            let cand = match candidate {
                Expression::Boolean(c) => c,
                _ => return Ok(false),
            };
            Ok(pat.value == cand.value)
        }
        Expression::Null(_) => Ok(matches!(candidate, Expression::Null(_))),
        Expression::Identifier(pat) => {
            let cand = match candidate {
                Expression::Identifier(c) => c,
                _ => return Ok(false),
            };
            if pat.name != cand.name {
                return Ok(false);
            }
            match role {
                // 名前位置では綴りのみを比較する
                IdentifierRole::Name => Ok(true),
                // 参照位置では、候補の位置で名前がローカル宣言に
                // 束縛されていればマッチしない（別物を指している）
                IdentifierRole::Reference => Ok(!scope.is_bound(&pat.name)),
            }
        }
        Expression::Member(pat) => {
            let cand = match candidate {
                Expression::Member(c) => c,
                _ => return Ok(false),
            };
            // `a.b` と `a["b"]` は構文が違うので別物として扱う
            if pat.computed != cand.computed {
                return Ok(false);
            }
            if !matches_with_role(
                &pat.object,
                &cand.object,
                scope,
                IdentifierRole::Reference,
                depth + 1,
            )? {
                return Ok(false);
            }
            let property_role = if pat.computed {
                IdentifierRole::Reference
            } else {
                IdentifierRole::Name
            };
            matches_with_role(&pat.property, &cand.property, scope, property_role, depth + 1)
        }
        Expression::Call(pat) => {
            let cand = match candidate {
                Expression::Call(c) => c,
                _ => return Ok(false),
            };
            if pat.args.len() != cand.args.len() {
                return Ok(false);
            }
            if !matches_with_role(
                &pat.callee,
                &cand.callee,
                scope,
                IdentifierRole::Reference,
                depth + 1,
            )? {
                return Ok(false);
            }
            for (pat_arg, cand_arg) in pat.args.iter().zip(&cand.args) {
                if !matches_with_role(
                    pat_arg,
                    cand_arg,
                    scope,
                    IdentifierRole::Reference,
                    depth + 1,
                )? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Expression::Unary(pat) => {
            let cand = match candidate {
                Expression::Unary(c) => c,
                _ => return Ok(false),
            };
            if pat.op != cand.op || pat.prefix != cand.prefix {
                return Ok(false);
            }
            matches_with_role(
                &pat.expr,
                &cand.expr,
                scope,
                IdentifierRole::Reference,
                depth + 1,
            )
        }
        Expression::Binary(pat) => {
            let cand = match candidate {
                Expression::Binary(c) => c,
                _ => return Ok(false),
            };
            // オペランドの入れ替えは考慮しない（`a + b` と `b + a` は別物）
            if pat.op != cand.op {
                return Ok(false);
            }
            if !matches_with_role(
                &pat.left,
                &cand.left,
                scope,
                IdentifierRole::Reference,
                depth + 1,
            )? {
                return Ok(false);
            }
            matches_with_role(
                &pat.right,
                &cand.right,
                scope,
                IdentifierRole::Reference,
                depth + 1,
            )
        }
        other => Err(PatternError::UnsupportedPattern {
            kind: other.kind_name().to_string(),
        }),
    }
}
