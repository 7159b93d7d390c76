use comfy_table::{Cell, Table};

use budgeter::error::Result;
use budgeter::importer::ALL_FORMATS;

pub fn list() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Key", "Name", "Columns", "Header Rows"]);
    for f in ALL_FORMATS {
        table.add_row(vec![
            Cell::new(f.key()),
            Cell::new(f.name()),
            Cell::new(f.columns()),
            Cell::new(f.header_rows()),
        ]);
    }
    println!("Formats\n{table}");
    Ok(())
}
