//! classmodel - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use classmodel::util::check::{check_paths, CheckOptions};
use classmodel::util::config::{load_config, Config};
use classmodel::util::logger::{self, LogLevel};
use classmodel::{format, Frontend, FrontendError, NAME, VERSION};
use owo_colors::OwoColorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

/// Parse, format and validate class-model notation files
#[derive(Parser, Debug)]
#[command(name = "classmodel")]
#[command(version = VERSION)]
#[command(about = "Parse, format and validate class-model notation files", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file to use instead of the default lookup
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse and validate files or directories
    Check {
        /// Files or directories to check
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a file in canonical form
    Format {
        /// Source file to format
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Only verify that the file is already canonical
        #[arg(short, long, conflicts_with = "write")]
        check: bool,

        /// Rewrite the file in place
        #[arg(short, long)]
        write: bool,
    },

    /// Print the declaration tree as JSON
    Dump {
        /// Source file to dump
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print version information
    Version,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        config.logging.level
    };
    logger::init_with_level(level);

    let frontend = Frontend::with_config(&config.parser);
    match args.command {
        Commands::Check { paths, json } => run_check(&frontend, &config, &paths, json),
        Commands::Format { file, check, write } => {
            run_format(&frontend, &config, &file, check, write)
        }
        Commands::Dump { file } => run_dump(&frontend, &config, &file),
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_check(
    frontend: &Frontend,
    config: &Config,
    paths: &[PathBuf],
    json: bool,
) -> Result<ExitCode> {
    let options = CheckOptions {
        extension: config.check.extension.clone(),
        colors: config.diagnostics.colors,
    };
    let report = check_paths(frontend, paths, &options)?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text(options.colors));
    }
    info!("Checked {} files", report.files.len());
    Ok(exit_code(report.is_success()))
}

fn run_format(
    frontend: &Frontend,
    config: &Config,
    file: &Path,
    check: bool,
    write: bool,
) -> Result<ExitCode> {
    let source = read_source(file)?;
    let document = match frontend.parse(&source) {
        Ok(document) => document,
        Err(err) => return Ok(report_error(config, file, &err)),
    };
    let canonical = format(&document);

    if check {
        let canonical_form = canonical == source;
        if !canonical_form {
            eprintln!("{} is not in canonical form", file.display());
        }
        return Ok(exit_code(canonical_form));
    }

    if write {
        if canonical != source {
            fs::write(file, &canonical)
                .with_context(|| format!("Failed to write file {}", file.display()))?;
            info!("Formatted {}", file.display());
        }
    } else {
        print!("{}", canonical);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_dump(
    frontend: &Frontend,
    config: &Config,
    file: &Path,
) -> Result<ExitCode> {
    let source = read_source(file)?;
    match frontend.parse(&source) {
        Ok(document) => {
            let json =
                serde_json::to_string_pretty(&document).context("Failed to serialize document")?;
            println!("{}", json);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(report_error(config, file, &err)),
    }
}

fn read_source(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("Failed to read file {}", file.display()))
}

fn report_error(
    config: &Config,
    file: &Path,
    err: &FrontendError,
) -> ExitCode {
    let header = format!("error[{}]: {}", err.stage(), file.display());
    if config.diagnostics.colors {
        eprintln!("{}", header.red().bold());
    } else {
        eprintln!("{}", header);
    }
    eprintln!("{}", err);
    ExitCode::FAILURE
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
