//! 書き換えテストの共通モジュール
//!
//! JSON設定とソース文字列から変換を実行するヘルパー関数を定義する。

use litswap::error::SwapError;
use litswap::rules::Config;
use litswap::transform::{transform_source, TransformOutput};

/// 変換結果をそのまま返すヘルパー関数
pub fn rewrite_result(source: &str, config_json: &str) -> Result<TransformOutput, SwapError> {
    let config = Config::from_json_str(config_json)?;
    transform_source(source, &config)
}

/// 変換後のコードだけを取り出すヘルパー関数
pub fn rewrite_js(source: &str, config_json: &str) -> String {
    rewrite_result(source, config_json)
        .expect("Transformation should succeed")
        .code
}

// サブモジュールの宣言
#[cfg(test)]
mod basic_test;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod scope_test;
