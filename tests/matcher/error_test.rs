//! マッチャーのエラーテスト
//!
//! サポート外のパターン種別と深さ制限の検証。構造の不一致は
//! エラーではなく Ok(false) になることも合わせて確認する。

use super::*;

use litswap::ast::{CallExpr, Span};
use litswap::matcher::MAX_MATCH_DEPTH;

#[test]
fn test_conditional_pattern_is_unsupported() {
    match matches_free("a ? b : c", "x") {
        Err(PatternError::UnsupportedPattern { kind }) => {
            assert_eq!(kind, "ConditionalExpression");
        }
        other => panic!("Expected UnsupportedPattern, got {:?}", other),
    }
}

#[test]
fn test_assignment_pattern_is_unsupported() {
    match matches_free("a = b", "x") {
        Err(PatternError::UnsupportedPattern { kind }) => {
            assert_eq!(kind, "AssignmentExpression");
        }
        other => panic!("Expected UnsupportedPattern, got {:?}", other),
    }
}

#[test]
fn test_array_pattern_is_unsupported() {
    match matches_free("[1, 2]", "x") {
        Err(PatternError::UnsupportedPattern { kind }) => {
            assert_eq!(kind, "ArrayExpression");
        }
        other => panic!("Expected UnsupportedPattern, got {:?}", other),
    }
}

#[test]
fn test_object_pattern_is_unsupported() {
    match matches_free("{ a: 1 }", "x") {
        Err(PatternError::UnsupportedPattern { kind }) => {
            assert_eq!(kind, "ObjectExpression");
        }
        other => panic!("Expected UnsupportedPattern, got {:?}", other),
    }
}

#[test]
fn test_unsupported_subpattern_errors_only_when_reached() {
    // 呼び出し先の名前が違えば三項演算子の引数まで到達しない
    assert!(!matches_free("f(a ? b : c)", "g(x)").unwrap());

    // 到達するとエラーになる
    assert!(matches_free("f(a ? b : c)", "f(x)").is_err());
}

#[test]
fn test_unsupported_candidate_kind_is_not_an_error() {
    // 候補側がサポート外の形でも、パターンが単純なら不一致になるだけ
    assert!(!matches_free("a", "b = c").unwrap());
    assert!(!matches_free("42", "x ? y : z").unwrap());
}

#[test]
fn test_deeply_nested_pattern_exceeds_limit() {
    // 深さ制限を超えるパターンをプログラム的に組み立てる
    let mut pattern = parse_expr("x");
    let mut candidate = parse_expr("x");
    for _ in 0..(MAX_MATCH_DEPTH + 50) {
        pattern = Expression::Call(CallExpr {
            callee: Box::new(parse_expr("f")),
            args: vec![pattern],
            span: Span::dummy(),
        });
        candidate = Expression::Call(CallExpr {
            callee: Box::new(parse_expr("f")),
            args: vec![candidate],
            span: Span::dummy(),
        });
    }

    let scope = litswap::scope::ScopeStack::new();
    match litswap::matcher::matches(&pattern, &candidate, &scope) {
        Err(PatternError::BoundsExceeded { limit }) => {
            assert_eq!(limit, MAX_MATCH_DEPTH);
        }
        other => panic!("Expected BoundsExceeded, got {:?}", other),
    }
}

#[test]
fn test_shallow_nesting_is_fine() {
    let mut pattern = parse_expr("x");
    let mut candidate = parse_expr("x");
    for _ in 0..50 {
        pattern = Expression::Call(CallExpr {
            callee: Box::new(parse_expr("f")),
            args: vec![pattern],
            span: Span::dummy(),
        });
        candidate = Expression::Call(CallExpr {
            callee: Box::new(parse_expr("f")),
            args: vec![candidate],
            span: Span::dummy(),
        });
    }

    let scope = litswap::scope::ScopeStack::new();
    assert!(litswap::matcher::matches(&pattern, &candidate, &scope).unwrap());
}
