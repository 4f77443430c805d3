//! 設定と置換値の定義

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SwapError, SwapResult};

/// パターン文字列から置換値への対応表
///
/// 挿入順がそのままルールの優先順位になるため、順序を保つ
/// `IndexMap` を使う。
pub type Replacements = IndexMap<String, ReplacementValue>;

/// 置換値
///
/// JSONの値はそのまま対応するバリアントに読み込まれる。`Undefined`
/// だけはJSONでは表現できず、APIからのみ構築できる（JSONの `null`
/// は `Null` になる）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplacementValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    List(Vec<ReplacementValue>),
    Record(IndexMap<String, ReplacementValue>),
    Undefined,
}

/// 変換の設定
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 置換の対応表（省略時はエラーになる）
    #[serde(default)]
    pub replacements: Option<Replacements>,
}

impl Config {
    /// JSON文字列から設定を読み込む
    pub fn from_json_str(json: &str) -> SwapResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            SwapError::Config(ConfigError::InvalidConfig {
                message: e.to_string(),
            })
        })
    }

    /// 設定ファイルを読み込む
    pub fn load(path: &Path) -> SwapResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| SwapError::Io(format!("Failed to read config file: {}", e)))?;
        Self::from_json_str(&json)
    }
}
