//! recase - Command-line case folding for JSON/YAML string sequences
//!
//! Reads an ordered sequence of strings encoded as JSON or YAML, maps every
//! element to uppercase or lowercase, and writes the sequence back out as
//! JSON or YAML. `-` selects stdin for input and stdout for output.

use clap::{Parser, ValueEnum};
use recase_core::{
    execute_transform, Format, RecaseError, Sink, Source, TransformRequest, Transformation,
};
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recase")]
#[command(about = "Uppercase or lowercase every element of a JSON/YAML string sequence")]
#[command(version)]
struct Cli {
    /// File to read from, or '-' for stdin
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// File to write to, or '-' for stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Input format; derived from the input filename when omitted
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<FormatArg>,

    /// Output format; derived from the output filename, then the input
    /// format, when omitted
    #[arg(short = 'F', long = "output_format", value_enum)]
    output_format: Option<FormatArg>,

    /// Uppercase every element (the default)
    #[arg(short = 'u', long = "upper", conflicts_with = "lower")]
    upper: bool,

    /// Lowercase every element
    #[arg(short = 'l', long = "lower")]
    lower: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Format {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Yaml => Format::Yaml,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RecaseError> {
    let (input_path, input_stream) = split_input_arg(cli.input);
    let (output_path, output_stream) = split_output_arg(cli.output);

    let transformation = if cli.lower {
        Transformation::Decapitalise
    } else {
        Transformation::Capitalise
    };

    let request = TransformRequest {
        source: Source::resolve(input_path, input_stream)?,
        input_format: cli.format.map(Format::from),
        output_format: cli.output_format.map(Format::from),
        transformation,
        sink: Sink::resolve(output_path, output_stream)?,
    };

    let summary = execute_transform(request)?;
    eprintln!(
        "Transformed {} elements with {} ({} -> {})",
        summary.elements,
        transformation.name(),
        summary.input_format,
        summary.output_format
    );
    Ok(())
}

/// Split `-i <path|->` into the path/stream pair the pipeline resolves.
fn split_input_arg(arg: Option<String>) -> (Option<PathBuf>, Option<Box<dyn Read>>) {
    match arg.as_deref() {
        Some("-") => (None, Some(Box::new(std::io::stdin()))),
        Some(path) => (Some(PathBuf::from(path)), None),
        None => (None, None),
    }
}

/// Split `-o <path|->` into the path/stream pair the pipeline resolves.
fn split_output_arg(arg: Option<String>) -> (Option<PathBuf>, Option<Box<dyn Write>>) {
    match arg.as_deref() {
        Some("-") => (None, Some(Box::new(std::io::stdout()))),
        Some(path) => (Some(PathBuf::from(path)), None),
        None => (None, None),
    }
}
