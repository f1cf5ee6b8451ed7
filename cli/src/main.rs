mod error;
mod output;

use std::io::Write;

use argmap_core::{ArgumentMap, classify};
use clap::{Args, Parser, Subcommand};

use crate::error::{CliError, Result};
use crate::output::{OutputFormat, TokenReport, format_map, format_tokens};

#[derive(Debug, Parser)]
#[command(name = "argmap", version)]
#[command(about = "Show how raw arguments split into flags and values")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse tokens and print the flag to value mapping.
    Parse(ParseArgs),
    /// Print whether each token is a flag, a value, or blank.
    Classify(ClassifyArgs),
    /// Print the value of a single flag.
    Get(GetArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Raw tokens to parse (pass after `--`).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct ClassifyArgs {
    /// Output format.
    #[arg(long, default_value = "table")]
    format: OutputFormat,
    /// Raw tokens to classify (pass after `--`).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct GetArgs {
    /// Flag to look up, including its dashes (e.g. `-out`).
    #[arg(value_name = "FLAG", allow_hyphen_values = true)]
    flag: String,
    /// Printed when the flag is missing or has no value.
    #[arg(long, allow_hyphen_values = true)]
    default: Option<String>,
    /// Treat the value as a filesystem path.
    #[arg(long)]
    path: bool,
    /// Raw tokens to parse (pass after `--`).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Classify(args) => run_classify(args),
        Command::Get(args) => run_get(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_parse(args: ParseArgs) -> Result<()> {
    let map = ArgumentMap::from_args(&args.tokens);
    emit(&format_map(&map, args.format)?)
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    let reports = args
        .tokens
        .iter()
        .map(|token| TokenReport {
            token,
            kind: classify(token),
        })
        .collect::<Vec<_>>();
    emit(&format_tokens(&reports, args.format)?)
}

fn run_get(args: GetArgs) -> Result<()> {
    let map = ArgumentMap::from_args(&args.tokens);

    let value = if args.path {
        let path = match &args.default {
            Some(default) => Some(map.get_path_or(&args.flag, default)),
            None => map.get_path(&args.flag),
        };
        path.map(|path| path.display().to_string())
    } else {
        match &args.default {
            Some(default) => Some(map.get_string_or(&args.flag, default).to_string()),
            None => map.get_string(&args.flag).map(String::from),
        }
    };

    match value {
        Some(value) => emit(&format!("{value}\n")),
        None => Err(CliError::MissingValue(args.flag)),
    }
}

fn emit(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
