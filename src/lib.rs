//! Pattern-based literal substitution for JavaScript sources.
//!
//! This library parses a JavaScript subset, matches configured expression
//! patterns against the AST, and swaps each matching expression for a
//! literal value.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod printer;
pub mod rewrite;
pub mod rules;
pub mod scope;
pub mod serialize;
pub mod transform;

// Re-export commonly used types
pub use ast::{Expression, Program, Statement};
pub use error::{ErrorCollector, SwapError, SwapResult};
pub use lexer::{Lexer, Token, TokenWithPosition};
pub use matcher::matches;
pub use parser::{ParseError, ParseResult, Parser};
pub use printer::print_program;
pub use rewrite::rewrite_program;
pub use rules::{Config, Replacements, ReplacementValue, Rule, RuleSet};
pub use scope::{ScopeLookup, ScopeStack};
pub use serialize::value_to_node;
pub use transform::{transform_source, TransformOutput, TransformPipeline, TransformState};
