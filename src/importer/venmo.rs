use std::io::Read;

use chrono::NaiveDateTime;
use csv::StringRecord;

use super::{Format, RowDecoder, RowSource};
use crate::date::{canonical, Date};
use crate::error::{BudgeterError, Result};
use crate::models::Transaction;
use crate::money::Cents;

pub(super) const COLUMNS: usize = 22;
/// Statement title, "Account Activity", column header, beginning balance.
pub(super) const HEADER_ROWS: usize = 4;

// ,ID,Datetime,Type,Status,Note,From,To,Amount (total),Amount (tip),
// Amount (tax),Amount (fee),...
const DATETIME: usize = 2;
const TYPE: usize = 3;
const NOTE: usize = 5;
const FROM: usize = 6;
const TO: usize = 7;
const AMOUNT: usize = 8;
const FEE: usize = 11;

/// The trailing balance/disclaimer row leaves these leading columns empty.
const FOOTER_KEY_COLUMNS: usize = 14;

const ENTITY: &str = "Venmo";
const TRANSFER: &str = "Transfer";
const DATETIME_LAYOUT: &str = "YYYY-MM-DDTHH:MM:SS";

/// Venmo account statement export.
pub struct VenmoReader<R> {
    rows: RowSource<R>,
    done: bool,
}

impl<R: Read> VenmoReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            rows: RowSource::new(reader, Format::Venmo),
            done: false,
        }
    }
}

impl<R: Read> RowDecoder for VenmoReader<R> {
    fn format(&self) -> Format {
        Format::Venmo
    }

    fn read_one(&mut self) -> Result<Option<Transaction>> {
        if self.done {
            return Ok(None);
        }
        let Some(record) = self.rows.next_raw()? else {
            self.done = true;
            return Ok(None);
        };
        if is_footer(&record) {
            tracing::debug!("venmo statement footer reached");
            self.done = true;
            return Ok(None);
        }
        self.rows.check(&record)?;
        decode(&record).map(Some)
    }
}

fn is_footer(record: &StringRecord) -> bool {
    record.len() >= FOOTER_KEY_COLUMNS
        && record.iter().take(FOOTER_KEY_COLUMNS).all(|f| f.is_empty())
}

fn decode(record: &StringRecord) -> Result<Transaction> {
    let date = Date::parse(&to_canonical(&record[DATETIME])?)?;

    let total = parse_amount(&record[AMOUNT])?;
    let fee = parse_amount(&record[FEE])?;
    let amount = total
        .checked_sub(fee)
        .ok_or_else(|| BudgeterError::MalformedCurrency {
            input: record[AMOUNT].to_string(),
        })?;

    let kind = &record[TYPE];
    let note = if kind.contains(TRANSFER) {
        if fee.is_zero() {
            kind.to_string()
        } else {
            format!("{kind} (fee: {fee})")
        }
    } else {
        let (from, to) = (&record[FROM], &record[TO]);
        if !from.is_empty() && !to.is_empty() {
            format!("{} (from {from} to {to})", &record[NOTE])
        } else {
            record[NOTE].to_string()
        }
    };

    Ok(Transaction::new(date, ENTITY, amount, note))
}

/// Venmo writes amounts like `- $5.00`; whitespace is removed before parsing.
/// An empty field is zero.
fn parse_amount(raw: &str) -> Result<Cents> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Ok(Cents::ZERO);
    }
    Cents::parse(&compact)
}

/// `2021-07-08T14:03:11` -> `7/8/2021`
fn to_canonical(raw: &str) -> Result<String> {
    let malformed = || BudgeterError::MalformedDate {
        input: raw.to_string(),
        layout: DATETIME_LAYOUT,
    };
    if raw.len() != DATETIME_LAYOUT.len() {
        return Err(malformed());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| canonical(dt.date()))
        .map_err(|_| malformed())
}
