//! 変換パイプライン
//!
//! ソースの読み込みから字句解析・構文解析・書き換え・出力までを
//! まとめて管理し、途中のエラーを蓄積しながら処理を進める。

use crate::ast::Program;
use crate::error::{ErrorCollector, LexerError, SwapError, SwapResult};
use crate::lexer::{self, Lexer, Token, TokenWithPosition};
use crate::parser::Parser;
use crate::printer::print_program;
use crate::rewrite::rewrite_program;
use crate::rules::{Config, RuleSet};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use std::fs;
use std::path::Path;

/// 変換状態を管理する構造体
pub struct TransformState {
    pub source_file: String,
    pub source: String,
    pub files: SimpleFiles<String, String>,
    pub file_id: usize,
    pub error_collector: ErrorCollector,
}

impl TransformState {
    /// ファイルから変換状態を作成
    pub fn new<P: AsRef<Path>>(source_file: P) -> SwapResult<Self> {
        let source_file_str = source_file.as_ref().display().to_string();
        let source = fs::read_to_string(source_file.as_ref())
            .map_err(|e| SwapError::Io(format!("Failed to read source file: {}", e)))?;
        Ok(Self::from_parts(source_file_str, source))
    }

    /// 文字列から変換状態を作成（テスト用）
    pub fn new_from_string(filename: &str, source: String) -> Self {
        Self::from_parts(filename.to_string(), source)
    }

    fn from_parts(source_file: String, source: String) -> Self {
        let mut files = SimpleFiles::new();
        let file_id = files.add(source_file.clone(), source.clone());
        Self {
            source_file,
            source,
            files,
            file_id,
            error_collector: ErrorCollector::new(),
        }
    }

    /// エラーを追加
    pub fn add_error(&mut self, error: SwapError) {
        self.error_collector.add_error(error, self.file_id);
    }

    /// 診断情報を報告
    pub fn report_diagnostics(&self) -> SwapResult<()> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();

        for error in self.error_collector.errors() {
            let diagnostic = error.to_diagnostic();
            codespan_reporting::term::emit(&mut writer.lock(), &config, &self.files, &diagnostic)
                .map_err(|e| SwapError::Io(format!("Failed to emit diagnostic: {}", e)))?;
        }

        for warning in self.error_collector.warnings() {
            let diagnostic = warning.to_diagnostic();
            codespan_reporting::term::emit(&mut writer.lock(), &config, &self.files, &diagnostic)
                .map_err(|e| SwapError::Io(format!("Failed to emit diagnostic: {}", e)))?;
        }

        Ok(())
    }

    /// エラーがあるかチェック
    pub fn has_errors(&self) -> bool {
        self.error_collector.has_errors()
    }

    /// エラー数を取得
    pub fn error_count(&self) -> usize {
        self.error_collector.error_count()
    }
}

/// 変換の結果
#[derive(Debug, Clone)]
pub struct TransformOutput {
    /// 書き換え後のソーステキスト
    pub code: String,
    /// 置換した箇所の数
    pub replaced: usize,
}

/// 変換パイプライン
pub struct TransformPipeline {
    state: TransformState,
    rules: RuleSet,
    verbose: bool,
}

impl TransformPipeline {
    /// 新しい変換パイプラインを作成
    pub fn new(state: TransformState, config: &Config, verbose: bool) -> SwapResult<Self> {
        let rules = RuleSet::from_config(config)?;
        Ok(Self {
            state,
            rules,
            verbose,
        })
    }

    /// 変換状態への参照を取得
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// コンパイル済みのルール集合への参照を取得
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// 字句解析を実行
    pub fn tokenize(&mut self) -> Vec<TokenWithPosition> {
        if self.verbose {
            println!("ステップ: 字句解析を開始");
        }

        let lexer = Lexer::new(&self.state.source);
        let tokens = lexer.collect_tokens();

        for token in &tokens {
            if matches!(token.token, Token::Error) {
                let text = self
                    .state
                    .source
                    .get(token.span.clone())
                    .unwrap_or("")
                    .to_string();
                self.state
                    .add_error(SwapError::Lexer(LexerError::UnrecognizedToken {
                        token: text,
                        span: token.span.clone().into(),
                    }));
            }
        }

        tokens
    }

    /// 構文解析を実行
    pub fn parse(&mut self, tokens: Vec<TokenWithPosition>) -> Option<Program> {
        if self.verbose {
            println!("ステップ: 構文解析を開始");
        }

        let mut parser = Parser::new(tokens);
        match parser.parse() {
            Ok(program) => Some(program),
            Err(e) => {
                self.state.add_error(SwapError::Parser(e));
                None
            }
        }
    }

    /// 書き換えを実行
    pub fn rewrite(&mut self, program: &mut Program) -> Option<usize> {
        if self.verbose {
            println!("ステップ: 書き換えを開始（ルール数: {}）", self.rules.len());
        }

        match rewrite_program(program, &self.rules) {
            Ok(replaced) => Some(replaced),
            Err(e) => {
                self.state.add_error(e);
                None
            }
        }
    }

    /// エラーレポートを出力
    pub fn report_errors(&self) -> SwapResult<()> {
        self.state.report_diagnostics()?;

        if self.state.has_errors() {
            eprintln!(
                "\n変換エラー: {} 個のエラーが見つかりました",
                self.state.error_count()
            );
        }

        Ok(())
    }

    /// パイプライン全体を実行
    ///
    /// エラーがあった場合は診断として報告し、`Ok(None)` を返す。
    pub fn run(&mut self) -> SwapResult<Option<TransformOutput>> {
        let tokens = self.tokenize();

        // トークンエラーがあってもパースは続行（より多くのエラーを検出するため）
        let ast = self.parse(tokens);

        let mut result = None;
        if let Some(mut program) = ast {
            if !self.state.has_errors() {
                if let Some(replaced) = self.rewrite(&mut program) {
                    if self.verbose {
                        println!("ステップ: 出力を生成");
                    }
                    result = Some(TransformOutput {
                        code: print_program(&program),
                        replaced,
                    });
                }
            }
        }

        self.report_errors()?;

        if self.state.has_errors() {
            return Ok(None);
        }

        Ok(result)
    }
}

/// ソース文字列を設定に従って変換する
///
/// 診断の出力は行わず、最初に起きたエラーをそのまま返す。
pub fn transform_source(source: &str, config: &Config) -> SwapResult<TransformOutput> {
    let rules = RuleSet::from_config(config)?;

    let tokens = lexer::tokenize(source);
    if let Some(bad) = tokens.iter().find(|t| matches!(t.token, Token::Error)) {
        let text = source.get(bad.span.clone()).unwrap_or("").to_string();
        return Err(LexerError::UnrecognizedToken {
            token: text,
            span: bad.span.clone().into(),
        }
        .into());
    }

    let mut parser = Parser::new(tokens);
    let mut program = parser.parse()?;

    let replaced = rewrite_program(&mut program, &rules)?;

    Ok(TransformOutput {
        code: print_program(&program),
        replaced,
    })
}
