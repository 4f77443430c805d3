//! 置換ルールの構築と適用
//!
//! 設定のパターン文字列はここで一度だけ式として解析され、挿入順を
//! 保ったルール列になる。マッチは先頭から順に試され、最初に一致した
//! ルールが採用される。

mod value;

pub use value::{Config, Replacements, ReplacementValue};

use crate::ast::Expression;
use crate::error::{ConfigError, PatternError, SwapResult};
use crate::lexer::{self, Token};
use crate::matcher;
use crate::parser::Parser;
use crate::scope::ScopeLookup;

/// 単一の置換ルール
#[derive(Debug, Clone)]
pub struct Rule {
    /// 元のパターン文字列
    pub source: String,
    /// 解析済みのパターンAST
    pub pattern: Expression,
    /// 置換値
    pub value: ReplacementValue,
}

/// 順序付きのルール集合
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// 設定からルール集合を構築する
    pub fn from_config(config: &Config) -> SwapResult<Self> {
        let replacements = config
            .replacements
            .as_ref()
            .ok_or(ConfigError::MissingReplacements)?;
        Ok(Self::compile(replacements)?)
    }

    /// 対応表をルール列にコンパイルする
    pub fn compile(replacements: &Replacements) -> Result<Self, PatternError> {
        let mut rules = Vec::with_capacity(replacements.len());
        for (source, value) in replacements {
            let pattern = parse_pattern(source)?;
            rules.push(Rule {
                source: source.clone(),
                pattern,
                value: value.clone(),
            });
        }
        Ok(Self { rules })
    }

    /// 最初に一致するルールを返す
    ///
    /// 重なり合うパターンの優先順位は特異度ではなく宣言順で決まる。
    pub fn first_match(
        &self,
        candidate: &Expression,
        scope: &dyn ScopeLookup,
    ) -> Result<Option<&Rule>, PatternError> {
        for rule in &self.rules {
            if matcher::matches(&rule.pattern, candidate, scope)? {
                return Ok(Some(rule));
            }
        }
        Ok(None)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// パターン文字列を単一の式として解析する
fn parse_pattern(source: &str) -> Result<Expression, PatternError> {
    let tokens = lexer::tokenize(source);
    if let Some(bad) = tokens.iter().find(|t| matches!(t.token, Token::Error)) {
        return Err(PatternError::Syntax {
            pattern: source.to_string(),
            message: format!(
                "unrecognized token at {}..{}",
                bad.span.start, bad.span.end
            ),
        });
    }
    let mut parser = Parser::new(tokens);
    parser.parse_expression().map_err(|e| PatternError::Syntax {
        pattern: source.to_string(),
        message: e.to_string(),
    })
}
