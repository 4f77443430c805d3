//! 構造マッチングのテスト
//!
//! リテラルは値で、メンバアクセスは computed フラグ込みで、
//! 呼び出しは引数の数と順序まで含めて比較される。

use super::*;

#[test]
fn test_number_literals_compare_by_value() {
    // 表記が違っても数値として等しければ一致する
    assert!(matches_free("42.0", "42").unwrap());
    assert!(matches_free("0x10", "16").unwrap());
    assert!(!matches_free("42", "43").unwrap());
}

#[test]
fn test_string_literals_compare_by_value() {
    // クォートの種類は区別しない
    assert!(matches_free("\"hi\"", "'hi'").unwrap());
    assert!(!matches_free("\"hi\"", "\"Hi\"").unwrap());
}

#[test]
fn test_boolean_and_null_literals() {
    assert!(matches_free("true", "true").unwrap());
    assert!(!matches_free("true", "false").unwrap());
    assert!(matches_free("null", "null").unwrap());
}

#[test]
fn test_kind_mismatch_is_not_an_error() {
    assert!(!matches_free("42", "\"42\"").unwrap());
    assert!(!matches_free("foo", "42").unwrap());
    assert!(!matches_free("a.b", "f(a)").unwrap());
}

#[test]
fn test_dot_and_bracket_access_are_distinct() {
    // `a.b` と `a["b"]` は computed フラグが異なるので別物
    assert!(!matches_free("a.b", "a[\"b\"]").unwrap());
    assert!(!matches_free("a[\"b\"]", "a.b").unwrap());
}

#[test]
fn test_computed_access_matches_computed() {
    assert!(matches_free("a[\"b\"]", "a['b']").unwrap());
    assert!(matches_free("a[0]", "a[0.0]").unwrap());
    assert!(!matches_free("a[0]", "a[1]").unwrap());
}

#[test]
fn test_call_arity_is_significant() {
    assert!(!matches_free("f(a)", "f(a, b)").unwrap());
    assert!(!matches_free("f(a, b)", "f(a)").unwrap());
    assert!(matches_free("f()", "f()").unwrap());
}

#[test]
fn test_call_argument_order_is_significant() {
    assert!(!matches_free("f(a, b)", "f(b, a)").unwrap());
    assert!(matches_free("f(a, b)", "f(a, b)").unwrap());
}

#[test]
fn test_binary_operands_are_not_commutative() {
    // `a + b` と `b + a` は評価順が違うので同一視しない
    assert!(!matches_free("a + b", "b + a").unwrap());
    assert!(matches_free("a + b", "a + b").unwrap());
}

#[test]
fn test_binary_operator_must_match() {
    assert!(!matches_free("a == b", "a === b").unwrap());
    assert!(!matches_free("a + b", "a - b").unwrap());
}

#[test]
fn test_unary_operator_must_match() {
    assert!(!matches_free("-x", "+x").unwrap());
    assert!(matches_free("-x", "-x").unwrap());
    assert!(matches_free("typeof x", "typeof x").unwrap());
}

#[test]
fn test_prefix_and_postfix_are_distinct() {
    assert!(!matches_free("++x", "x++").unwrap());
    assert!(matches_free("x++", "x++").unwrap());
}

#[test]
fn test_nested_structures() {
    assert!(matches_free("a.b(1 + 2)", "a.b(1 + 2)").unwrap());
    assert!(!matches_free("a.b(1 + 2)", "a.b(1 + 3)").unwrap());
    assert!(matches_free("f(g(x), h.i)", "f(g(x), h.i)").unwrap());
}

#[test]
fn test_parentheses_are_transparent() {
    // 括弧はASTに残らないのでマッチングにも影響しない
    assert!(matches_free("(a)", "a").unwrap());
    assert!(matches_free("a + b", "(a) + (b)").unwrap());
}
