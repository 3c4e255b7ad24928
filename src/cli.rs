//! Command-line interface for gui-exception.
//!
//! `analyze` reads a stack trace from a file or stdin and prints where each
//! frame points; `config-path` prints the default config file location.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gui_exception_analyzers::StackTraceAnalyzer;
use gui_exception_config::{Config, LogLevel};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::debug;
use crate::report::{self, ReportFormat, ReportOptions};

/// gui-exception - Extract source locations from test-failure stack traces
#[derive(Parser, Debug)]
#[command(name = "gui-exception")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Diagnostic log level on stderr (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", global = true, value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a stack trace and print the source location of each frame
    Analyze(AnalyzeArgs),
    /// Print the default config file path
    ConfigPath,
}

/// Arguments of `gui-exception analyze`
#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Trace file to read (stdin when absent or `-`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Only report frames that have both a path and a line number
    #[arg(long)]
    pub navigable_only: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::from_name(value).ok_or_else(|| {
        let names: Vec<_> = LogLevel::all()
            .iter()
            .map(|l| l.display_name().to_lowercase())
            .collect();
        format!("unknown log level {value:?} (expected one of {})", names.join(", "))
    })
}

/// Run the parsed command, writing the report to stdout.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze(args) => {
            let mut stdout = io::stdout().lock();
            analyze(&args, &mut stdout)?;
            stdout.flush()?;
            Ok(())
        }
        Commands::ConfigPath => {
            println!("{}", Config::config_path().display());
            Ok(())
        }
    }
}

/// Load config, analyze the input named by `args`, and write the report to `out`.
pub fn analyze(args: &AnalyzeArgs, out: &mut impl Write) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    debug::apply_config_level(config.log_level);

    let analyzer =
        StackTraceAnalyzer::from_config(&config).context("invalid analyzer configuration")?;
    let trace = read_input(args.file.as_deref())?;
    let analyzed = analyzer.analyze(&trace);
    log::info!(
        "{} of {} lines parsed",
        analyzed.parsed_count(),
        analyzed.len()
    );

    let options = ReportOptions {
        format: args.format,
        navigable_only: args.navigable_only,
    };
    let rendered = report::render(&analyzed, &options).context("failed to render report")?;
    out.write_all(rendered.as_bytes())
        .context("failed to write report")?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Config::load().context("failed to load config"),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
