use anyhow::{Context, Result};
use clap::Parser;
use parity_matrix::{check, CheckConfig, MatrixError, ValidationReport};
use serde_json::json;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "matrix-check",
    about = "Validate a parity matrix document and its remediation schedule",
    version
)]
struct Cli {
    /// TOML file overriding the document path, statuses or schedule heading.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    document: Option<String>,

    /// Directory relative document paths resolve against. Defaults to the
    /// current directory.
    #[arg(long)]
    root: Option<PathBuf>,

    #[arg(long)]
    exampleconfig: bool,

    #[arg(long)]
    json: bool,

    #[arg(short = 'v', long)]
    verbose: bool,

    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Off
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(err) = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("matrix-check logger init error: {err}");
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    if cli.exampleconfig {
        println!("{}", CheckConfig::example_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = match cli.config.as_deref() {
        Some(path) => CheckConfig::load_from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CheckConfig::default(),
    };
    if let Some(document) = cli.document {
        config.document_path = document;
    }
    log::debug!("effective config: {config:?}");

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };

    let report = match check(&config, &root) {
        Ok(report) => report,
        Err(err @ MatrixError::MissingDocument(_)) => {
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err).context("failed to read matrix document"),
    };

    if cli.json {
        print_json(&config.resolve_document(&root), &report)?;
    } else {
        print_text(&report, cli.quiet);
    }

    Ok(if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_text(report: &ValidationReport, quiet: bool) {
    for err in &report.errors {
        eprintln!("{err}");
    }
    if report.is_ok() && !quiet {
        println!("{}", report.summary());
    }
}

fn print_json(document: &Path, report: &ValidationReport) -> Result<()> {
    let errors = report
        .errors
        .iter()
        .map(|err| json!({ "kind": err.kind(), "message": err.to_string() }))
        .collect::<Vec<_>>();
    let body = json!({
        "ok": report.is_ok(),
        "document": document.display().to_string(),
        "entries": report.entries,
        "schedule_items": report.schedule_items,
        "errors": errors,
    });
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
