//! ASTからソーステキストへの出力
//!
//! 優先順位に基づいて必要な箇所だけ括弧を補い、再解析したときに
//! 同じ形のASTに戻るテキストを生成する。元ソースの空白やコメントは
//! 保持しない。

use crate::ast::{
    Block, Expression, IfStatement, Program, PropertyKey, Statement, UnaryExpr, UnaryOp,
};

const ASSIGN_PREC: u8 = 1;
const CONDITIONAL_PREC: u8 = 2;
const OR_PREC: u8 = 3;
const AND_PREC: u8 = 4;
const BIT_OR_PREC: u8 = 5;
const BIT_XOR_PREC: u8 = 6;
const BIT_AND_PREC: u8 = 7;
const EQUALITY_PREC: u8 = 8;
const RELATIONAL_PREC: u8 = 9;
const SHIFT_PREC: u8 = 10;
const ADDITIVE_PREC: u8 = 11;
const MULTIPLICATIVE_PREC: u8 = 12;
const UNARY_PREC: u8 = 14;
const POSTFIX_PREC: u8 = 15;
const MEMBER_PREC: u8 = 17;
const PRIMARY_PREC: u8 = 18;

/// プログラム全体をソーステキストに出力する
pub fn print_program(program: &Program) -> String {
    let mut printer = Printer::new();
    for stmt in &program.body {
        printer.write_statement(stmt);
    }
    printer.out
}

struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str("    ");
        }
    }

    fn write_statement(&mut self, stmt: &Statement) {
        self.write_indent();
        self.write_statement_body(stmt);
        self.out.push('\n');
    }

    fn write_statement_body(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Expression(stmt) => {
                if leading_brace(&stmt.expression) {
                    // 文頭の `{` はブロックとして読まれてしまう
                    self.out.push('(');
                    self.write_expression(&stmt.expression, 0);
                    self.out.push(')');
                } else {
                    self.write_expression(&stmt.expression, 0);
                }
                self.out.push(';');
            }
            Statement::VariableDeclaration(decl) => {
                self.out.push_str(decl.kind.as_str());
                self.out.push(' ');
                for (i, declarator) in decl.declarators.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.out.push_str(&declarator.name);
                    if let Some(init) = &declarator.init {
                        self.out.push_str(" = ");
                        self.write_expression(init, ASSIGN_PREC);
                    }
                }
                self.out.push(';');
            }
            Statement::FunctionDeclaration(decl) => {
                self.out.push_str("function ");
                self.out.push_str(&decl.name);
                self.out.push('(');
                for (i, param) in decl.params.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.out.push_str(&param.name);
                }
                self.out.push_str(") ");
                self.write_block(&decl.body);
            }
            Statement::Return(stmt) => {
                self.out.push_str("return");
                if let Some(value) = &stmt.value {
                    self.out.push(' ');
                    self.write_expression(value, 0);
                }
                self.out.push(';');
            }
            Statement::If(stmt) => self.write_if(stmt),
            Statement::While(stmt) => {
                self.out.push_str("while (");
                self.write_expression(&stmt.condition, 0);
                self.out.push_str(") ");
                self.write_branch(&stmt.body);
            }
            Statement::Block(block) => self.write_block(block),
            Statement::Empty(_) => self.out.push(';'),
        }
    }

    fn write_if(&mut self, stmt: &IfStatement) {
        self.out.push_str("if (");
        self.write_expression(&stmt.condition, 0);
        self.out.push_str(") ");
        self.write_branch(&stmt.then_branch);
        if let Some(else_branch) = &stmt.else_branch {
            self.out.push_str(" else ");
            if let Statement::If(nested) = else_branch.as_ref() {
                // else if チェーンは同じ行に畳む
                self.write_if(nested);
            } else {
                self.write_branch(else_branch);
            }
        }
    }

    /// if/while の枝。ブロックはそのまま、単文は同じ行に続ける。
    fn write_branch(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Block(block) => self.write_block(block),
            other => self.write_statement_body(other),
        }
    }

    fn write_block(&mut self, block: &Block) {
        if block.statements.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push_str("{\n");
        self.indent += 1;
        for stmt in &block.statements {
            self.write_statement(stmt);
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push('}');
    }

    /// 式を出力する。優先順位が `min_prec` を下回るときは括弧で包む。
    fn write_expression(&mut self, expr: &Expression, min_prec: u8) {
        if expression_prec(expr) < min_prec {
            self.out.push('(');
            self.write_expression_body(expr);
            self.out.push(')');
        } else {
            self.write_expression_body(expr);
        }
    }

    fn write_expression_body(&mut self, expr: &Expression) {
        match expr {
            Expression::Number(lit) => self.out.push_str(&format_number(lit.value)),
            Expression::String(lit) => self.out.push_str(&quote_string(&lit.value)),
            Expression::Boolean(lit) => {
                self.out.push_str(if lit.value { "true" } else { "false" })
            }
            Expression::Null(_) => self.out.push_str("null"),
            Expression::Identifier(ident) => self.out.push_str(&ident.name),
            Expression::Member(member) => {
                // `42.x` は小数点として読まれるため数値リテラルには括弧が要る
                let object_min = if matches!(member.object.as_ref(), Expression::Number(_)) {
                    PRIMARY_PREC + 1
                } else {
                    MEMBER_PREC
                };
                self.write_expression(&member.object, object_min);
                if member.computed {
                    self.out.push('[');
                    self.write_expression(&member.property, ASSIGN_PREC);
                    self.out.push(']');
                } else {
                    self.out.push('.');
                    self.write_expression(&member.property, 0);
                }
            }
            Expression::Call(call) => {
                self.write_expression(&call.callee, MEMBER_PREC);
                self.out.push('(');
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.write_expression(arg, ASSIGN_PREC);
                }
                self.out.push(')');
            }
            Expression::Unary(unary) => {
                if unary.prefix {
                    self.out.push_str(unary.op.as_str());
                    if unary.op.is_keyword() {
                        self.out.push(' ');
                    }
                    self.write_expression(&unary.expr, prefix_operand_min(unary));
                } else {
                    self.write_expression(&unary.expr, POSTFIX_PREC);
                    self.out.push_str(unary.op.as_str());
                }
            }
            Expression::Binary(binary) => {
                let prec = binary_prec(binary.op);
                self.write_expression(&binary.left, prec);
                self.out.push(' ');
                self.out.push_str(binary.op.as_str());
                self.out.push(' ');
                self.write_expression(&binary.right, prec + 1);
            }
            Expression::Conditional(cond) => {
                self.write_expression(&cond.condition, CONDITIONAL_PREC + 1);
                self.out.push_str(" ? ");
                self.write_expression(&cond.consequent, ASSIGN_PREC);
                self.out.push_str(" : ");
                self.write_expression(&cond.alternate, ASSIGN_PREC);
            }
            Expression::Assignment(assign) => {
                self.write_expression(&assign.target, ASSIGN_PREC + 1);
                self.out.push_str(" = ");
                self.write_expression(&assign.value, ASSIGN_PREC);
            }
            Expression::Array(array) => {
                self.out.push('[');
                for (i, element) in array.elements.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.write_expression(element, ASSIGN_PREC);
                }
                self.out.push(']');
            }
            Expression::Object(object) => {
                if object.properties.is_empty() {
                    self.out.push_str("{}");
                    return;
                }
                self.out.push_str("{ ");
                for (i, property) in object.properties.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.write_property_key(&property.key);
                    self.out.push_str(": ");
                    self.write_expression(&property.value, ASSIGN_PREC);
                }
                self.out.push_str(" }");
            }
        }
    }

    fn write_property_key(&mut self, key: &PropertyKey) {
        match key {
            PropertyKey::Identifier(name) => self.out.push_str(name),
            PropertyKey::String(value) => self.out.push_str(&quote_string(value)),
            PropertyKey::Number(value) => self.out.push_str(&format_number(*value)),
        }
    }
}

fn expression_prec(expr: &Expression) -> u8 {
    match expr {
        Expression::Number(_)
        | Expression::String(_)
        | Expression::Boolean(_)
        | Expression::Null(_)
        | Expression::Identifier(_)
        | Expression::Array(_)
        | Expression::Object(_) => PRIMARY_PREC,
        Expression::Member(_) | Expression::Call(_) => MEMBER_PREC,
        Expression::Unary(unary) => {
            if unary.prefix {
                UNARY_PREC
            } else {
                POSTFIX_PREC
            }
        }
        Expression::Binary(binary) => binary_prec(binary.op),
        Expression::Conditional(_) => CONDITIONAL_PREC,
        Expression::Assignment(_) => ASSIGN_PREC,
    }
}

fn binary_prec(op: crate::ast::BinaryOp) -> u8 {
    use crate::ast::BinaryOp::*;
    match op {
        Or => OR_PREC,
        And => AND_PREC,
        BitOr => BIT_OR_PREC,
        BitXor => BIT_XOR_PREC,
        BitAnd => BIT_AND_PREC,
        Eq | Ne | StrictEq | StrictNe => EQUALITY_PREC,
        Lt | Gt | Le | Ge | Instanceof | In => RELATIONAL_PREC,
        Shl | Shr | UShr => SHIFT_PREC,
        Add | Subtract => ADDITIVE_PREC,
        Multiply | Divide | Modulo => MULTIPLICATIVE_PREC,
    }
}

/// 前置演算子のオペランドに要求する優先順位
///
/// `-` の直後に `-` で始まるオペランドが来ると `--` に読まれて
/// しまうため、符号が衝突する場合は括弧を強制する。
fn prefix_operand_min(unary: &UnaryExpr) -> u8 {
    let clash = match (unary.op, unary.expr.as_ref()) {
        (UnaryOp::Minus, Expression::Unary(inner)) => {
            inner.prefix && matches!(inner.op, UnaryOp::Minus | UnaryOp::Decrement)
        }
        (UnaryOp::Plus, Expression::Unary(inner)) => {
            inner.prefix && matches!(inner.op, UnaryOp::Plus | UnaryOp::Increment)
        }
        (UnaryOp::Minus | UnaryOp::Plus, Expression::Number(lit)) => lit.value < 0.0,
        _ => false,
    };
    if clash {
        UNARY_PREC + 1
    } else {
        UNARY_PREC
    }
}

/// 文頭に来たとき `{` で始まってしまう式か
fn leading_brace(expr: &Expression) -> bool {
    match expr {
        Expression::Object(_) => true,
        Expression::Member(member) => leading_brace(&member.object),
        Expression::Call(call) => leading_brace(&call.callee),
        Expression::Binary(binary) => leading_brace(&binary.left),
        Expression::Conditional(cond) => leading_brace(&cond.condition),
        Expression::Assignment(assign) => leading_brace(&assign.target),
        Expression::Unary(unary) if !unary.prefix => leading_brace(&unary.expr),
        _ => false,
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // -0 も "0" として出す
        return "0".to_string();
    }
    format!("{}", value)
}

fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
