use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use budgeter::error::{BudgeterError, Result};
use budgeter::exporter::BareWriter;
use budgeter::importer::read_all;
use budgeter::settings::load_settings;

use crate::cli::resolve_format;

/// Convert `file` in full or not at all: a bad row aborts before anything is
/// written.
pub fn run(file: &str, format: Option<&str>, output: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let format = resolve_format(format, &settings)?;
    let input_path = PathBuf::from(file);

    let reader = BufReader::new(File::open(&input_path)?);
    let mut decoder = format.decoder(reader);
    let transactions = read_all(decoder.as_mut()).map_err(|partial| BudgeterError::Import {
        format: format.key(),
        path: file.to_string(),
        source: Box::new(partial.into_error()),
    })?;

    let output_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output(&input_path, &settings.output_prefix));
    let out = BufWriter::new(File::create(&output_path)?);
    BareWriter::new(out).write_all(&transactions)?;

    tracing::info!(%format, count = transactions.len(), "converted {}", input_path.display());
    println!(
        "Converted {} transactions to {}",
        transactions.len(),
        output_path.display()
    );
    Ok(())
}

fn default_output(input: &Path, prefix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "transactions.csv".to_string());
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(format!("{prefix}{name}"))
}
