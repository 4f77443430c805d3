//! スコープによるマッチ抑制のテスト
//!
//! ローカル宣言に隠された名前はグローバル参照とは別物なので
//! 置換されない。スコープを抜ければ再び置換の対象になる。

use super::*;

use litswap::rules::{Replacements, ReplacementValue};

#[test]
fn test_function_param_shadows_pattern() {
    let config = r#"{ "replacements": { "replaceWithTrue": true } }"#;
    let source = "function f(replaceWithTrue) { return replaceWithTrue; }\nx = replaceWithTrue;";

    assert_eq!(
        rewrite_js(source, config),
        "function f(replaceWithTrue) {\n    return replaceWithTrue;\n}\nx = true;\n"
    );
}

#[test]
fn test_var_hoisting_shadows_before_declaration() {
    // var は関数スコープの先頭に巻き上がるので、宣言より前の参照も束縛済み
    let config = r#"{ "replacements": { "replaceMe": true } }"#;
    let source = "function f() { x = replaceMe; var replaceMe = 1; }";

    assert_eq!(
        rewrite_js(source, config),
        "function f() {\n    x = replaceMe;\n    var replaceMe = 1;\n}\n"
    );
}

#[test]
fn test_let_shadows_inside_block_only() {
    let config = r#"{ "replacements": { "replaceMe": true } }"#;
    let source = "{ let replaceMe = 1; x = replaceMe; }\ny = replaceMe;";

    assert_eq!(
        rewrite_js(source, config),
        "{\n    let replaceMe = 1;\n    x = replaceMe;\n}\ny = true;\n"
    );
}

#[test]
fn test_shadow_ends_when_block_exits() {
    let config = r#"{ "replacements": { "replaceMe": true } }"#;
    let source = "while (c) { let replaceMe = 1; }\nx = replaceMe;";

    assert_eq!(
        rewrite_js(source, config),
        "while (c) {\n    let replaceMe = 1;\n}\nx = true;\n"
    );
}

#[test]
fn test_nested_function_sees_outer_param() {
    // 内側の関数からも外側のパラメータ束縛は見える
    let config = r#"{ "replacements": { "v": 1 } }"#;
    let source = "function outer(v) { function inner() { return v; } }";

    assert_eq!(
        rewrite_js(source, config),
        "function outer(v) {\n    function inner() {\n        return v;\n    }\n}\n"
    );
}

#[test]
fn test_top_level_var_binds_the_whole_program() {
    let config = r#"{ "replacements": { "replaceMe": true } }"#;

    assert_eq!(
        rewrite_js("x = replaceMe;\nvar replaceMe = 1;", config),
        "x = replaceMe;\nvar replaceMe = 1;\n"
    );
}

#[test]
fn test_function_name_is_a_binding() {
    let config = r#"{ "replacements": { "f": 1 } }"#;

    assert_eq!(
        rewrite_js("function f() {}\nx = f;", config),
        "function f() {}\nx = f;\n"
    );

    // 宣言がなければ普通に置換される
    assert_eq!(rewrite_js("x = f;", config), "x = 1;\n");
}

#[test]
fn test_shadowed_name_in_one_function_free_in_another() {
    let config = r#"{ "replacements": { "v": 7 } }"#;
    let source = "function a(v) { return v; }\nfunction b() { return v; }";

    assert_eq!(
        rewrite_js(source, config),
        "function a(v) {\n    return v;\n}\nfunction b() {\n    return 7;\n}\n"
    );
}

#[test]
fn test_undefined_value_prints_as_void_zero() {
    // Undefined はJSONでは書けないのでAPIから設定を組み立てる
    let mut replacements = Replacements::new();
    replacements.insert("missing".to_string(), ReplacementValue::Undefined);
    let config = litswap::rules::Config {
        replacements: Some(replacements),
    };

    let output = litswap::transform_source("x = missing;", &config).unwrap();
    assert_eq!(output.code, "x = void 0;\n");
    assert_eq!(output.replaced, 1);
}

#[test]
fn test_undefined_value_unaffected_by_local_undefined_binding() {
    // void 0 は名前を参照しないので、ローカルの undefined 束縛があっても安全
    let mut replacements = Replacements::new();
    replacements.insert("missing".to_string(), ReplacementValue::Undefined);
    let config = litswap::rules::Config {
        replacements: Some(replacements),
    };

    let source = "function f() { var undefined = 1; return missing; }";
    let output = litswap::transform_source(source, &config).unwrap();
    assert_eq!(
        output.code,
        "function f() {\n    var undefined = 1;\n    return void 0;\n}\n"
    );
    assert_eq!(output.replaced, 1);
}
