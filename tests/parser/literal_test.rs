//! リテラルのパーサーテスト

use super::*;

#[test]
fn test_number_literals() {
    let cases = [
        ("42", 42.0),
        ("3.14", 3.14),
        ("0", 0.0),
        ("0x1F", 31.0),
        (".5", 0.5),
        ("1e3", 1000.0),
        ("2.5e-2", 0.025),
    ];

    for (source, value) in cases {
        let expr = assert_expr_success(source);
        if let Expression::Number(lit) = expr {
            assert_eq!(lit.value, value, "for {}", source);
        } else {
            panic!("Expected number literal for {}", source);
        }
    }
}

#[test]
fn test_string_literal_quotes() {
    // シングルクォートとダブルクォートは同じ値になる
    for source in ["\"hi\"", "'hi'"] {
        let expr = assert_expr_success(source);
        if let Expression::String(lit) = expr {
            assert_eq!(lit.value, "hi", "for {}", source);
        } else {
            panic!("Expected string literal for {}", source);
        }
    }
}

#[test]
fn test_string_escapes() {
    let cases = [
        ("\"a\\nb\"", "a\nb"),
        ("\"\\x41\"", "A"),
        ("\"\\u0041\"", "A"),
        // 未知のエスケープは文字そのものになる
        ("\"\\q\"", "q"),
    ];

    for (source, value) in cases {
        let expr = assert_expr_success(source);
        if let Expression::String(lit) = expr {
            assert_eq!(lit.value, value, "for {}", source);
        } else {
            panic!("Expected string literal for {}", source);
        }
    }
}

#[test]
fn test_boolean_literals() {
    let expr = assert_expr_success("true");
    assert!(matches!(expr, Expression::Boolean(ref b) if b.value));

    let expr = assert_expr_success("false");
    assert!(matches!(expr, Expression::Boolean(ref b) if !b.value));
}

#[test]
fn test_null_literal() {
    let expr = assert_expr_success("null");
    assert!(matches!(expr, Expression::Null(_)));
}

#[test]
fn test_array_literal() {
    let expr = assert_expr_success("[1, 2, 3]");

    if let Expression::Array(array) = expr {
        assert_eq!(array.elements.len(), 3);
        assert!(matches!(array.elements[0], Expression::Number(ref n) if n.value == 1.0));
    } else {
        panic!("Expected array literal");
    }
}

#[test]
fn test_nested_array() {
    let expr = assert_expr_success("[[1], [2, 3]]");

    if let Expression::Array(array) = expr {
        assert_eq!(array.elements.len(), 2);
        assert!(matches!(array.elements[0], Expression::Array(_)));
    } else {
        panic!("Expected array literal");
    }
}

#[test]
fn test_array_trailing_comma() {
    let expr = assert_expr_success("[1, 2,]");

    if let Expression::Array(array) = expr {
        assert_eq!(array.elements.len(), 2);
    } else {
        panic!("Expected array literal");
    }
}

#[test]
fn test_empty_array() {
    let expr = assert_expr_success("[]");
    assert!(matches!(expr, Expression::Array(ref a) if a.elements.is_empty()));
}

#[test]
fn test_object_literal_key_kinds() {
    // 式の位置では先頭の `{` はオブジェクトリテラル
    let expr = assert_expr_success("{ a: 1, \"b c\": 2, 3: x }");

    if let Expression::Object(object) = expr {
        assert_eq!(object.properties.len(), 3);
        assert_eq!(
            object.properties[0].key,
            PropertyKey::Identifier("a".to_string())
        );
        assert_eq!(
            object.properties[1].key,
            PropertyKey::String("b c".to_string())
        );
        assert_eq!(object.properties[2].key, PropertyKey::Number(3.0));
        assert!(matches!(object.properties[2].value, Expression::Identifier(_)));
    } else {
        panic!("Expected object literal");
    }
}

#[test]
fn test_keyword_property_key() {
    // プロパティキーにはキーワードも使える
    let expr = assert_expr_success("{ if: 1, typeof: 2 }");

    if let Expression::Object(object) = expr {
        assert_eq!(
            object.properties[0].key,
            PropertyKey::Identifier("if".to_string())
        );
        assert_eq!(
            object.properties[1].key,
            PropertyKey::Identifier("typeof".to_string())
        );
    } else {
        panic!("Expected object literal");
    }
}

#[test]
fn test_object_trailing_comma() {
    let expr = assert_expr_success("{ a: 1, }");
    assert!(matches!(expr, Expression::Object(ref o) if o.properties.len() == 1));
}

#[test]
fn test_empty_object() {
    let expr = assert_expr_success("{}");
    assert!(matches!(expr, Expression::Object(ref o) if o.properties.is_empty()));
}

#[test]
fn test_object_value_expression() {
    let expr = assert_expr_success("{ a: b + 1 }");

    if let Expression::Object(object) = expr {
        assert!(matches!(object.properties[0].value, Expression::Binary(_)));
    } else {
        panic!("Expected object literal");
    }
}
