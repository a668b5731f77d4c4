use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

mod core;
mod formatters;
mod parser;

use crate::core::{DependencyGraphExtractor, FileSystemLocator};
use crate::formatters::{JsonFormatter, TextFormatter};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "selfdeps",
    version = "0.1.0",
    author = "selfdeps developers",
    about = "Static self-attribute dependency extraction for Python compute classes"
)]
struct Cli {
    /// File or directory to search for class definitions
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Comma-separated list of class names to analyze
    #[arg(
        short,
        long = "class",
        value_name = "NAMES",
        value_delimiter = ',',
        required = true
    )]
    classes: Vec<String>,

    /// Output file path (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format: text, json
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        classes,
        output,
        format,
    } = cli;

    let class_names: Vec<String> = classes
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    eprintln!("selfdeps - method dependency extraction");
    eprintln!("Input: {}", input.display());
    eprintln!("Classes: {:?}", class_names);
    eprintln!("Format: {}", format.as_str());

    let start_time = Instant::now();

    let extractor = DependencyGraphExtractor::new(FileSystemLocator::new(&input));
    let results = extractor.extract_many(&class_names);

    let mut rendered = String::new();
    for (class_name, result) in results {
        let graph =
            result.with_context(|| format!("failed to analyze class `{}`", class_name))?;

        let section = match format {
            OutputFormat::Text => TextFormatter::new().format_graph(&class_name, &graph),
            OutputFormat::Json => {
                let mut doc = JsonFormatter::new().format_graph(&class_name, &graph)?;
                doc.push('\n');
                doc
            }
        };
        rendered.push_str(&section);
    }

    match &output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Output written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    eprintln!(
        "Analysis completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
