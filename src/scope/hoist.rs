//! 巻き上げ規則に従った束縛名の収集
//!
//! `var` 宣言と関数宣言は囲む関数スコープの先頭に巻き上げられる。
//! `let`/`const` は宣言されたブロックに留まる。スコープに入る時点で
//! そのスコープに属する束縛をすべて集めておくことで、宣言より前の
//! 位置でも束縛済みとして扱える。

use crate::ast::{Block, DeclarationKind, Parameter, Statement};

/// 関数スコープ（またはプログラム全体）に入るときの束縛一覧
///
/// パラメータ、本体直下の `let`/`const`、そして入れ子のブロックから
/// 巻き上げられてくる `var` と関数宣言の名前を含む。
pub fn function_scope_bindings(params: &[Parameter], statements: &[Statement]) -> Vec<String> {
    let mut names: Vec<String> = params.iter().map(|p| p.name.clone()).collect();
    for stmt in statements {
        if let Statement::VariableDeclaration(decl) = stmt {
            if matches!(decl.kind, DeclarationKind::Let | DeclarationKind::Const) {
                for declarator in &decl.declarators {
                    names.push(declarator.name.clone());
                }
            }
        }
    }
    collect_hoisted(statements, &mut names);
    names
}

/// ブロックスコープに入るときの束縛一覧
///
/// ブロック直下の `let`/`const` と関数宣言の名前のみ。`var` は
/// ブロックを透過して関数スコープ側で収集済み。
pub fn block_scope_bindings(statements: &[Statement]) -> Vec<String> {
    let mut names = Vec::new();
    for stmt in statements {
        match stmt {
            Statement::VariableDeclaration(decl) => {
                if matches!(decl.kind, DeclarationKind::Let | DeclarationKind::Const) {
                    for declarator in &decl.declarators {
                        names.push(declarator.name.clone());
                    }
                }
            }
            Statement::FunctionDeclaration(decl) => names.push(decl.name.clone()),
            _ => {}
        }
    }
    names
}

/// `var` と関数宣言を集める
///
/// ブロック・if・while の中へは降りるが、入れ子の関数本体には
/// 降りない（そこで宣言された名前は内側の関数スコープに属する）。
fn collect_hoisted(statements: &[Statement], names: &mut Vec<String>) {
    for stmt in statements {
        match stmt {
            Statement::VariableDeclaration(decl) => {
                if matches!(decl.kind, DeclarationKind::Var) {
                    for declarator in &decl.declarators {
                        names.push(declarator.name.clone());
                    }
                }
            }
            Statement::FunctionDeclaration(decl) => {
                names.push(decl.name.clone());
            }
            Statement::If(stmt) => {
                collect_hoisted_from(&stmt.then_branch, names);
                if let Some(else_branch) = &stmt.else_branch {
                    collect_hoisted_from(else_branch, names);
                }
            }
            Statement::While(stmt) => {
                collect_hoisted_from(&stmt.body, names);
            }
            Statement::Block(block) => {
                collect_hoisted_block(block, names);
            }
            _ => {}
        }
    }
}

fn collect_hoisted_from(stmt: &Statement, names: &mut Vec<String>) {
    collect_hoisted(std::slice::from_ref(stmt), names);
}

fn collect_hoisted_block(block: &Block, names: &mut Vec<String>) {
    collect_hoisted(&block.statements, names);
}
