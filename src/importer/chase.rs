use std::io::Read;

use csv::StringRecord;

use super::{Format, RowDecoder, RowSource};
use crate::date::Date;
use crate::error::Result;
use crate::models::Transaction;
use crate::money::Cents;

pub(super) const COLUMNS: usize = 7;

// Transaction Date,Post Date,Description,Category,Type,Amount,Memo
const DATE: usize = 1;
const DESCRIPTION: usize = 2;
const AMOUNT: usize = 5;
const MEMO: usize = 6;

/// Chase card activity export. Amounts keep Chase's sign.
pub struct ChaseReader<R> {
    rows: RowSource<R>,
}

impl<R: Read> ChaseReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            rows: RowSource::new(reader, Format::Chase),
        }
    }
}

impl<R: Read> RowDecoder for ChaseReader<R> {
    fn format(&self) -> Format {
        Format::Chase
    }

    fn read_one(&mut self) -> Result<Option<Transaction>> {
        match self.rows.next_row()? {
            Some(record) => decode(&record).map(Some),
            None => Ok(None),
        }
    }
}

fn decode(record: &StringRecord) -> Result<Transaction> {
    let date = Date::parse(&record[DATE])?;
    let amount = Cents::parse(&record[AMOUNT])?;
    Ok(Transaction::new(date, &record[DESCRIPTION], amount, &record[MEMO]))
}
