use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use litswap::rules::{Config, Replacements};
use litswap::transform::{TransformPipeline, TransformState};

#[derive(Parser)]
#[command(name = "litswap")]
#[command(
    author,
    version,
    about = "Pattern-based literal substitution for JavaScript sources",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a JavaScript source file
    Transform {
        /// The source file to transform
        input: PathBuf,

        /// Replacement configuration file (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Dump tokens to stdout
        #[arg(long)]
        dump_tokens: bool,

        /// Dump the AST to stdout before rewriting
        #[arg(long)]
        dump_ast: bool,
    },

    /// Check a source file and configuration for errors without transforming
    Check {
        /// The source file to check
        input: PathBuf,

        /// Replacement configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Transform {
            input,
            config,
            output,
            dump_tokens,
            dump_ast,
        } => transform(input, config, output, dump_tokens, dump_ast, cli.verbose),
        Commands::Check { input, config } => check(input, config),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn transform(
    input: PathBuf,
    config_path: PathBuf,
    output: Option<PathBuf>,
    dump_tokens: bool,
    dump_ast: bool,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("{}: Transforming {:?}", "info".blue().bold(), input);
    }

    let config = Config::load(&config_path)?;
    let state = TransformState::new(&input)?;
    let mut pipeline = TransformPipeline::new(state, &config, verbose)?;

    // 1. Tokenize
    let tokens = pipeline.tokenize();

    if dump_tokens {
        println!("{}", "=== Tokens ===".blue().bold());
        for (i, token) in tokens.iter().enumerate() {
            println!("{:4}: {:?} @ {:?}", i, token.token, token.span);
        }
        println!();
    }

    // 2. Parse
    let ast = pipeline.parse(tokens);

    if dump_ast {
        if let Some(program) = &ast {
            println!("{}", "=== AST ===".blue().bold());
            println!("{}", serde_json::to_string_pretty(program)?);
            println!();
        }
    }

    // 3. Rewrite and print
    let mut result = None;
    if let Some(mut program) = ast {
        if !pipeline.state().has_errors() {
            if let Some(replaced) = pipeline.rewrite(&mut program) {
                result = Some((litswap::print_program(&program), replaced));
            }
        }
    }

    pipeline.report_errors()?;
    if pipeline.state().has_errors() {
        anyhow::bail!("Transformation failed");
    }

    let (code, replaced) = match result {
        Some(result) => result,
        None => anyhow::bail!("Transformation failed"),
    };

    match output {
        Some(path) => {
            fs::write(&path, &code)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            println!(
                "{}: Wrote {:?} ({} replacements)",
                "success".green().bold(),
                path,
                replaced
            );
        }
        None => {
            print!("{}", code);
            if verbose {
                eprintln!("{}: {} replacements", "info".blue().bold(), replaced);
            }
        }
    }

    Ok(())
}

fn check(input: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    log::info!("Checking {:?}", input);

    // Without a configuration, only the source file is checked
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config {
            replacements: Some(Replacements::new()),
        },
    };

    let state = TransformState::new(&input)?;
    let mut pipeline = TransformPipeline::new(state, &config, false)?;
    if config_path.is_some() {
        log::debug!("Compiled {} replacement rules", pipeline.rules().len());
    }

    log::debug!("Starting lexical analysis");
    let tokens = pipeline.tokenize();

    log::debug!("Starting parsing");
    pipeline.parse(tokens);

    pipeline.report_errors()?;
    if pipeline.state().has_errors() {
        anyhow::bail!("Check failed");
    }

    println!("{}: No errors found", "success".green().bold());
    Ok(())
}
