use std::fs::File;
use std::io::BufReader;

use comfy_table::{Cell, CellAlignment, Table};

use budgeter::error::{BudgeterError, Result};
use budgeter::fmt::money;
use budgeter::importer::transactions;
use budgeter::models::Transaction;
use budgeter::money::Cents;
use budgeter::settings::load_settings;

use crate::cli::resolve_format;

pub fn run(file: &str, format: Option<&str>, limit: Option<usize>) -> Result<()> {
    let format = resolve_format(format, &load_settings())?;
    let mut decoder = format.decoder(BufReader::new(File::open(file)?));

    let rows: Vec<Transaction> = transactions(decoder.as_mut())
        .take(limit.unwrap_or(usize::MAX))
        .collect::<Result<_>>()
        .map_err(|e| BudgeterError::Import {
            format: format.key(),
            path: file.to_string(),
            source: Box::new(e),
        })?;

    let mut table = Table::new();
    table.set_header(vec!["Date", "Entity", "Amount", "Note"]);
    for tx in &rows {
        table.add_row(vec![
            Cell::new(tx.date_string()),
            Cell::new(&tx.entity),
            Cell::new(money(tx.amount)).set_alignment(CellAlignment::Right),
            Cell::new(&tx.note),
        ]);
    }
    let total: Cents = rows.iter().map(|tx| tx.amount).sum();

    println!("{} ({} transactions)\n{table}", format.name(), rows.len());
    println!("Total: {}", money(total));
    Ok(())
}
