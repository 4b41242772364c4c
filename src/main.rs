use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use jskinds::{analyze_source, display_error, get_line_at_position, Symbol, SymbolModel};

#[derive(Parser, Debug)]
#[command(name = "jskinds")]
#[command(about = "Infers the set of value kinds each variable of a script can hold")]
struct Cli {
    /// Script to analyze
    file: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct SymbolReport<'a> {
    line: Option<usize>,
    #[serde(flatten)]
    symbol: &'a Symbol,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: failed to read {}: {}", cli.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().to_string());

    let model = match analyze_source(&source, file_name) {
        Ok(model) => model,
        Err(error) => {
            display_error(&error, &source, &cli.file);
            return ExitCode::FAILURE;
        }
    };
    debug!(symbols = model.symbols().len(), "analysis finished");

    match cli.format {
        Format::Text => print_text(&model, &source),
        Format::Json => {
            let reports: Vec<SymbolReport> = model
                .symbols()
                .iter()
                .map(|symbol| SymbolReport {
                    line: line_of(&source, symbol),
                    symbol,
                })
                .collect();

            match serde_json::to_string_pretty(&reports) {
                Ok(json) => println!("{}", json),
                Err(err) => {
                    eprintln!("Error: failed to serialize symbols: {}", err);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn line_of(source: &str, symbol: &Symbol) -> Option<usize> {
    get_line_at_position(source, symbol.declaration()).map(|(line, _, _)| line)
}

fn print_text(model: &SymbolModel, source: &str) {
    for symbol in model.symbols() {
        let line = line_of(source, symbol).map_or_else(|| String::from("?"), |line| line.to_string());
        println!("{}:{} {} {}", line, symbol.name(), symbol.kind(), symbol.types());
    }
}
