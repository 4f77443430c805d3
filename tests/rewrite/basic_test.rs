//! 置換の基本動作のテスト

use super::*;

#[test]
fn test_multiple_rules_applied() {
    let config = r#"{
        "replacements": {
            "replaceWithTrue": true,
            "replaceWith42": 42,
            "replaceCallExpression(a, b, c)": "replaced call expression"
        }
    }"#;
    let source = "x = replaceWithTrue;\ny = replaceWith42;\nz = replaceCallExpression(a, b, c);";

    let output = rewrite_result(source, config).unwrap();
    assert_eq!(
        output.code,
        "x = true;\ny = 42;\nz = \"replaced call expression\";\n"
    );
    assert_eq!(output.replaced, 3);
}

#[test]
fn test_first_matching_rule_wins() {
    // 同じ式に解析されるパターンが複数あるときは宣言順で最初のものが勝つ
    let config = r#"{ "replacements": { "a + b": 1, "a+b": 2 } }"#;
    assert_eq!(rewrite_js("x = a + b;", config), "x = 1;\n");
}

#[test]
fn test_outer_expression_offered_before_children() {
    // 外側の式が先にマッチすれば内側は見ない
    let config = r#"{ "replacements": { "a + b": 1, "a": 2 } }"#;
    assert_eq!(rewrite_js("x = a + b;", config), "x = 1;\n");
}

#[test]
fn test_replaced_subtree_is_final() {
    let config = r#"{ "replacements": { "a": 1, "1": 2 } }"#;

    // 置換で生成されたリテラルは再マッチの対象にならない
    assert_eq!(rewrite_js("x = a;", config), "x = 1;\n");

    // 元ソース由来のリテラルには普通にマッチする
    assert_eq!(rewrite_js("y = 1;", config), "y = 2;\n");
}

#[test]
fn test_number_pattern_spelling_is_irrelevant() {
    let config = r#"{ "replacements": { "42.0": "n" } }"#;
    assert_eq!(rewrite_js("x = 42;", config), "x = \"n\";\n");
}

#[test]
fn test_nested_expression_replaced() {
    let config = r#"{ "replacements": { "b": 5 } }"#;
    assert_eq!(rewrite_js("x = a + b * c;", config), "x = a + 5 * c;\n");
}

#[test]
fn test_property_name_position_is_not_an_expression() {
    let config = r#"{ "replacements": { "b": 1 } }"#;

    // `a.b` の b は名前であって式ではない
    assert_eq!(rewrite_js("x = a.b;", config), "x = a.b;\n");

    // `a[b]` の b は式なので置換される
    assert_eq!(rewrite_js("x = a[b];", config), "x = a[1];\n");
}

#[test]
fn test_callee_position_is_replaceable() {
    let config = r#"{ "replacements": { "f": "g" } }"#;
    assert_eq!(rewrite_js("f();", config), "\"g\"();\n");
}

#[test]
fn test_increment_operand_is_protected() {
    let config = r#"{ "replacements": { "x": 1 } }"#;

    // `1++` は構文エラーになるので ++ のオペランドは差し替えない
    assert_eq!(rewrite_js("x++;", config), "x++;\n");
    assert_eq!(rewrite_js("--x;", config), "--x;\n");

    // 代入先も同様に保護され、右辺だけが置換される
    assert_eq!(rewrite_js("x = x + 1;", config), "x = 1 + 1;\n");
}

#[test]
fn test_delete_operand_children_still_offered() {
    let config = r#"{ "replacements": { "b": 1 } }"#;

    // delete のオペランド全体は保護されるが、その子は対象になる
    assert_eq!(rewrite_js("delete a[b];", config), "delete a[1];\n");
    assert_eq!(rewrite_js("delete a.b;", config), "delete a.b;\n");
}

#[test]
fn test_condition_and_branch_positions() {
    let config = r#"{ "replacements": { "c": true, "v": 7 } }"#;
    assert_eq!(
        rewrite_js("if (c) { x = v; }", config),
        "if (true) {\n    x = 7;\n}\n"
    );
    assert_eq!(
        rewrite_js("while (c) { f(v); }", config),
        "while (true) {\n    f(7);\n}\n"
    );
}

#[test]
fn test_return_value_and_declaration_init() {
    let config = r#"{ "replacements": { "v": 1 } }"#;
    assert_eq!(
        rewrite_js("function f() { return v; }", config),
        "function f() {\n    return 1;\n}\n"
    );
    assert_eq!(rewrite_js("var x = v;", config), "var x = 1;\n");
}

#[test]
fn test_structured_replacement_values() {
    let config = r#"{
        "replacements": {
            "xs": [1, [true]],
            "o": { "a": 1, "b c": 2 }
        }
    }"#;
    assert_eq!(rewrite_js("p = xs;", config), "p = [1, [true]];\n");
    assert_eq!(rewrite_js("q = o;", config), "q = { a: 1, \"b c\": 2 };\n");
}

#[test]
fn test_no_match_is_a_noop() {
    let config = r#"{ "replacements": { "zzz": 1 } }"#;
    let output = rewrite_result("x = a + b;", config).unwrap();
    assert_eq!(output.code, "x = a + b;\n");
    assert_eq!(output.replaced, 0);
}

#[test]
fn test_replacement_count_accumulates() {
    let config = r#"{ "replacements": { "v": 1 } }"#;
    let output = rewrite_result("x = v; y = v + v;", config).unwrap();
    assert_eq!(output.code, "x = 1;\ny = 1 + 1;\n");
    assert_eq!(output.replaced, 3);
}
