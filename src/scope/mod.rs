//! スコープ追跡モジュール
//!
//! パターン中の識別子が候補位置でローカル宣言に束縛されているかを
//! 判定するためのスコープスタックと、JavaScriptの巻き上げ規則に
//! 従った束縛名の収集を提供する。

mod hoist;

pub use hoist::{block_scope_bindings, function_scope_bindings};

use std::collections::HashSet;

/// 識別子の束縛照会
///
/// マッチャはこのトレイト経由でのみスコープ情報に触れる。
pub trait ScopeLookup {
    /// 名前がこの位置で可視な宣言に束縛されているか
    fn is_bound(&self, name: &str) -> bool;
}

/// 走査中のスコープスタック
///
/// 関数・ブロックに入るたびにスコープを積み、出るときに降ろす。
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<HashSet<String>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいスコープに入る
    pub fn enter_scope(&mut self) {
        self.scopes.push(HashSet::new());
    }

    /// 現在のスコープを出る
    pub fn exit_scope(&mut self) {
        self.scopes.pop();
    }

    /// 現在のスコープに名前を宣言する
    pub fn declare(&mut self, name: impl Into<String>) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.into());
        }
    }
}

impl ScopeLookup for ScopeStack {
    fn is_bound(&self, name: &str) -> bool {
        // 内側のスコープから外側へ向かって探す
        self.scopes.iter().rev().any(|scope| scope.contains(name))
    }
}
