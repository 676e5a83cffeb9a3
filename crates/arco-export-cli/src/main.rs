mod logging;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use arco_core::Model;
use arco_export::{ExportError, ExportOptions, ModelExporter, DEFAULT_MAX_LINE_LENGTH};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "arco-export",
    author,
    version,
    about = "Write an Arco JSON model as LP or MPS text"
)]
struct Cli {
    /// JSON model to export
    #[arg(long)]
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum)]
    format: Format,

    /// Use fixed-column MPS when every name fits 8 characters
    #[arg(long)]
    fixed: bool,

    /// Replace declared names with synthetic V/C names
    #[arg(long)]
    obfuscate: bool,

    /// Also list variables that appear in no objective or constraint (LP)
    #[arg(long)]
    show_unused: bool,

    /// Wrap threshold for LP lines
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    max_line_length: usize,

    /// Warn about every name the formats cannot represent
    #[arg(long)]
    log_invalid_names: bool,

    /// Destination file; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Lp,
    Mps,
}

impl Cli {
    fn options(&self) -> ExportOptions {
        ExportOptions::new()
            .with_show_unused_variables(self.show_unused)
            .with_max_line_length(self.max_line_length)
            .with_log_invalid_names(self.log_invalid_names)
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init()?;
    if cli.max_line_length == 0 {
        return Err(boxed_input_error("max-line-length must be greater than zero"));
    }

    let model = load_model(&cli.input)?;
    let text = render(&model, &cli)?;
    match &cli.output {
        Some(path) => std::fs::write(path, &text)?,
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }

    tracing::info!(
        component = "cli",
        operation = "export",
        status = "success",
        input = %cli.input.display(),
        format = ?cli.format,
        bytes = text.len(),
        "Wrote model"
    );
    Ok(())
}

fn load_model(path: &Path) -> Result<Model, Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(path)?);
    let model: Model = serde_json::from_reader(reader)?;
    tracing::debug!(
        component = "cli",
        operation = "load_model",
        status = "success",
        variables = model.num_variables(),
        constraints = model.num_constraints(),
        coefficients = model.num_coefficients(),
        "Loaded model"
    );
    Ok(model)
}

fn render(model: &Model, cli: &Cli) -> Result<String, ExportError> {
    let exporter = ModelExporter::with_options(model, cli.options());
    match cli.format {
        Format::Lp => {
            if cli.fixed {
                tracing::warn!(
                    component = "cli",
                    operation = "export",
                    status = "ignored",
                    "--fixed only applies to MPS output"
                );
            }
            exporter.export_as_lp(cli.obfuscate)
        }
        Format::Mps => exporter.export_as_mps(cli.fixed, cli.obfuscate),
    }
}

fn boxed_input_error(message: &str) -> Box<dyn std::error::Error> {
    Box::new(io::Error::new(io::ErrorKind::InvalidInput, message.to_string()))
}
