//! AST書き換えウォーカー
//!
//! プログラムを文単位で走査し、式の位置ごとにルール集合を試す。
//! マッチした式は置換値から作ったリテラルノードに丸ごと差し替え、
//! その部分木の走査はそこで打ち切る（置換結果は再マッチの対象に
//! ならない）。スコープスタックは関数・ブロックの出入りに合わせて
//! 更新され、マッチャの束縛判定に使われる。

use crate::ast::{Block, Expression, Program, Statement, UnaryOp};
use crate::error::SwapResult;
use crate::rules::RuleSet;
use crate::scope::{block_scope_bindings, function_scope_bindings, ScopeStack};
use crate::serialize::value_to_node;

/// プログラム全体を書き換え、置換した箇所の数を返す
pub fn rewrite_program(program: &mut Program, rules: &RuleSet) -> SwapResult<usize> {
    let mut rewriter = Rewriter::new(rules);
    rewriter.run(program)?;
    Ok(rewriter.replaced)
}

struct Rewriter<'a> {
    rules: &'a RuleSet,
    scope: ScopeStack,
    replaced: usize,
}

impl<'a> Rewriter<'a> {
    fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            scope: ScopeStack::new(),
            replaced: 0,
        }
    }

    fn run(&mut self, program: &mut Program) -> SwapResult<()> {
        self.scope.enter_scope();
        for name in function_scope_bindings(&[], &program.body) {
            self.scope.declare(name);
        }
        for stmt in &mut program.body {
            self.rewrite_statement(stmt)?;
        }
        self.scope.exit_scope();
        Ok(())
    }

    fn rewrite_statement(&mut self, stmt: &mut Statement) -> SwapResult<()> {
        match stmt {
            Statement::Expression(stmt) => self.rewrite_expression(&mut stmt.expression),
            Statement::VariableDeclaration(decl) => {
                // 宣言される名前は識別子であって式ではないので、
                // 初期化式だけが置換の対象になる
                for declarator in &mut decl.declarators {
                    if let Some(init) = &mut declarator.init {
                        self.rewrite_expression(init)?;
                    }
                }
                Ok(())
            }
            Statement::FunctionDeclaration(decl) => {
                self.scope.enter_scope();
                for name in function_scope_bindings(&decl.params, &decl.body.statements) {
                    self.scope.declare(name);
                }
                for stmt in &mut decl.body.statements {
                    self.rewrite_statement(stmt)?;
                }
                self.scope.exit_scope();
                Ok(())
            }
            Statement::Return(stmt) => {
                if let Some(value) = &mut stmt.value {
                    self.rewrite_expression(value)?;
                }
                Ok(())
            }
            Statement::If(stmt) => {
                self.rewrite_expression(&mut stmt.condition)?;
                self.rewrite_statement(&mut stmt.then_branch)?;
                if let Some(else_branch) = &mut stmt.else_branch {
                    self.rewrite_statement(else_branch)?;
                }
                Ok(())
            }
            Statement::While(stmt) => {
                self.rewrite_expression(&mut stmt.condition)?;
                self.rewrite_statement(&mut stmt.body)
            }
            Statement::Block(block) => self.rewrite_block(block),
            Statement::Empty(_) => Ok(()),
        }
    }

    fn rewrite_block(&mut self, block: &mut Block) -> SwapResult<()> {
        self.scope.enter_scope();
        for name in block_scope_bindings(&block.statements) {
            self.scope.declare(name);
        }
        for stmt in &mut block.statements {
            self.rewrite_statement(stmt)?;
        }
        self.scope.exit_scope();
        Ok(())
    }

    /// 式を書き換える
    ///
    /// まずこの式自身にルールを試し、マッチすれば差し替えて終了する。
    /// マッチしなければ子の式へ降りる。
    fn rewrite_expression(&mut self, expr: &mut Expression) -> SwapResult<()> {
        if let Some(rule) = self.rules.first_match(expr, &self.scope)? {
            *expr = value_to_node(&rule.value)?;
            self.replaced += 1;
            return Ok(());
        }
        self.rewrite_children(expr)
    }

    fn rewrite_children(&mut self, expr: &mut Expression) -> SwapResult<()> {
        match expr {
            Expression::Number(_)
            | Expression::String(_)
            | Expression::Boolean(_)
            | Expression::Null(_)
            | Expression::Identifier(_) => Ok(()),
            Expression::Member(member) => {
                self.rewrite_expression(&mut member.object)?;
                // 非computedのプロパティ名は式ではない
                if member.computed {
                    self.rewrite_expression(&mut member.property)?;
                }
                Ok(())
            }
            Expression::Call(call) => {
                self.rewrite_expression(&mut call.callee)?;
                for arg in &mut call.args {
                    self.rewrite_expression(arg)?;
                }
                Ok(())
            }
            Expression::Unary(unary) => {
                if needs_reference_operand(unary.op) {
                    // ++/--/delete のオペランドは参照でなければならず、
                    // リテラルへの差し替えは構文を壊す
                    self.rewrite_children(&mut unary.expr)
                } else {
                    self.rewrite_expression(&mut unary.expr)
                }
            }
            Expression::Binary(binary) => {
                self.rewrite_expression(&mut binary.left)?;
                self.rewrite_expression(&mut binary.right)
            }
            Expression::Conditional(cond) => {
                self.rewrite_expression(&mut cond.condition)?;
                self.rewrite_expression(&mut cond.consequent)?;
                self.rewrite_expression(&mut cond.alternate)
            }
            Expression::Assignment(assign) => {
                // 代入先は参照位置なので差し替えない
                self.rewrite_children(&mut assign.target)?;
                self.rewrite_expression(&mut assign.value)
            }
            Expression::Array(array) => {
                for element in &mut array.elements {
                    self.rewrite_expression(element)?;
                }
                Ok(())
            }
            Expression::Object(object) => {
                for property in &mut object.properties {
                    self.rewrite_expression(&mut property.value)?;
                }
                Ok(())
            }
        }
    }
}

fn needs_reference_operand(op: UnaryOp) -> bool {
    matches!(
        op,
        UnaryOp::Increment | UnaryOp::Decrement | UnaryOp::Delete
    )
}
