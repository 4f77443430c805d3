//! 設定とエラー伝播のテスト

use super::*;

use litswap::error::{ConfigError, PatternError, SerializeError};
use litswap::rules::{Replacements, ReplacementValue};

#[test]
fn test_missing_replacements_key() {
    match rewrite_result("x = 1;", "{}") {
        Err(SwapError::Config(ConfigError::MissingReplacements)) => {}
        other => panic!("Expected MissingReplacements, got {:?}", other),
    }
}

#[test]
fn test_empty_replacements_is_a_noop() {
    let output = rewrite_result("x = 1;", r#"{ "replacements": {} }"#).unwrap();
    assert_eq!(output.code, "x = 1;\n");
    assert_eq!(output.replaced, 0);
}

#[test]
fn test_invalid_config_json() {
    match rewrite_result("x = 1;", "not json") {
        Err(SwapError::Config(ConfigError::InvalidConfig { .. })) => {}
        other => panic!("Expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_pattern_syntax_errors() {
    // 不完全な式
    match rewrite_result("x = 1;", r#"{ "replacements": { "1 +": 1 } }"#) {
        Err(SwapError::Pattern(PatternError::Syntax { pattern, .. })) => {
            assert_eq!(pattern, "1 +");
        }
        other => panic!("Expected Syntax, got {:?}", other),
    }

    // 式の後に余分なトークン
    assert!(matches!(
        rewrite_result("x = 1;", r#"{ "replacements": { "a b": 1 } }"#),
        Err(SwapError::Pattern(PatternError::Syntax { .. }))
    ));
}

#[test]
fn test_unsupported_pattern_kind_aborts_transform() {
    // 三項演算子はパターンとしてはサポート外。最初のマッチ試行で
    // パターン側のノードに到達した時点でエラーになる
    let result = rewrite_result("x = y;", r#"{ "replacements": { "a ? b : c": 1 } }"#);

    match result {
        Err(SwapError::Pattern(PatternError::UnsupportedPattern { kind })) => {
            assert_eq!(kind, "ConditionalExpression");
        }
        other => panic!("Expected UnsupportedPattern, got {:?}", other),
    }
}

#[test]
fn test_non_finite_value_fails_when_rule_fires() {
    let mut replacements = Replacements::new();
    replacements.insert("v".to_string(), ReplacementValue::Number(f64::NAN));
    let config = litswap::rules::Config {
        replacements: Some(replacements),
    };

    // ルールがマッチしたときに初めてシリアライズエラーが出る
    match litswap::transform_source("x = v;", &config) {
        Err(SwapError::Serialize(SerializeError::UnsupportedValue { kind })) => {
            assert_eq!(kind, "NaN");
        }
        other => panic!("Expected UnsupportedValue, got {:?}", other),
    }

    // マッチしなければエラーにならない
    let output = litswap::transform_source("x = other;", &config).unwrap();
    assert_eq!(output.code, "x = other;\n");
}

#[test]
fn test_source_syntax_error_propagates() {
    let config = r#"{ "replacements": { "a": 1 } }"#;

    assert!(matches!(
        rewrite_result("var = 1;", config),
        Err(SwapError::Parser(_))
    ));
    assert!(matches!(
        rewrite_result("a @ b;", config),
        Err(SwapError::Lexer(_))
    ));
}
