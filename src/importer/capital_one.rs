use std::io::Read;

use chrono::NaiveDate;
use csv::StringRecord;

use super::{Format, RowDecoder, RowSource};
use crate::date::{canonical, Date};
use crate::error::{BudgeterError, Result};
use crate::models::Transaction;
use crate::money::Cents;

pub(super) const COLUMNS: usize = 7;

// Transaction Date,Posted Date,Card No.,Description,Category,Debit,Credit
const DATE: usize = 1;
const DESCRIPTION: usize = 3;
const DEBIT: usize = 5;
const CREDIT: usize = 6;

const DATE_LAYOUT: &str = "YYYY-MM-DD";

/// Capital One card export. Debits are negated, credits kept as-is.
pub struct CapitalOneReader<R> {
    rows: RowSource<R>,
}

impl<R: Read> CapitalOneReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            rows: RowSource::new(reader, Format::CapitalOne),
        }
    }
}

impl<R: Read> RowDecoder for CapitalOneReader<R> {
    fn format(&self) -> Format {
        Format::CapitalOne
    }

    fn read_one(&mut self) -> Result<Option<Transaction>> {
        match self.rows.next_row()? {
            Some(record) => decode(&record).map(Some),
            None => Ok(None),
        }
    }
}

fn decode(record: &StringRecord) -> Result<Transaction> {
    let date = Date::parse(&to_canonical(&record[DATE])?)?;
    let amount = if !record[DEBIT].is_empty() {
        -Cents::parse(&record[DEBIT])?
    } else {
        Cents::parse(&record[CREDIT])?
    };
    Ok(Transaction::new(date, &record[DESCRIPTION], amount, ""))
}

/// `2021-07-08` -> `7/8/2021`
fn to_canonical(raw: &str) -> Result<String> {
    let malformed = || BudgeterError::MalformedDate {
        input: raw.to_string(),
        layout: DATE_LAYOUT,
    };
    // %Y alone accepts any number of year digits
    if raw.len() != DATE_LAYOUT.len() {
        return Err(malformed());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(canonical)
        .map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::read_all;

    const HEADER: &str = "Transaction Date,Posted Date,Card No.,Description,Category,Debit,Credit\n";

    #[test]
    fn test_debit_is_negated() {
        let content = format!("{HEADER}2021-07-07,2021-07-08,1234,GROCERY OUTLET,Merchandise,42.10,\n");
        let mut reader = CapitalOneReader::new(content.as_bytes());
        let tx = reader.read_one().unwrap().unwrap();
        assert_eq!(tx.amount.value(), -4210);
        assert_eq!(tx.entity, "GROCERY OUTLET");
        assert_eq!(tx.note, "");
        assert_eq!(tx.date, Date::parse("7/8/2021").unwrap());
    }

    #[test]
    fn test_credit_kept_as_is() {
        let content = format!(
            "{HEADER}\
2021-07-07,2021-07-08,1234,GROCERY OUTLET,Merchandise,42.10,
2021-07-10,2021-07-11,1234,CAPITAL ONE AUTOPAY PYMT,Payment/Credit,,\"1,042.10\"
"
        );
        let mut reader = CapitalOneReader::new(content.as_bytes());
        let txs = read_all(&mut reader).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[1].amount.value(), 104210);
        assert_eq!(txs[1].date_string(), "7/11/2021");
    }

    #[test]
    fn test_malformed_credit_is_reported() {
        let content = format!("{HEADER}2021-07-10,2021-07-11,1234,PAYMENT,Payment/Credit,,ten\n");
        let mut reader = CapitalOneReader::new(content.as_bytes());
        assert!(matches!(
            reader.read_one(),
            Err(BudgeterError::MalformedCurrency { ref input }) if input == "ten"
        ));
    }

    #[test]
    fn test_native_date_layout_required() {
        let content = format!("{HEADER}7/7/2021,7/8/2021,1234,GROCERY OUTLET,Merchandise,42.10,\n");
        let mut reader = CapitalOneReader::new(content.as_bytes());
        let err = reader.read_one().unwrap_err();
        assert!(err.to_string().contains(DATE_LAYOUT));
    }

    #[test]
    fn test_translation_matches_canonical_path() {
        assert_eq!(to_canonical("2021-07-08").unwrap(), "7/8/2021");
        assert_eq!(to_canonical("1999-12-31").unwrap(), "12/31/1999");
        assert_eq!(to_canonical("0999-06-01").unwrap(), "6/1/0999");
    }

    #[test]
    fn test_five_digit_year_names_raw_field() {
        let content = format!("{HEADER}12021-01-01,12021-01-01,1234,GROCERY OUTLET,Merchandise,42.10,\n");
        let mut reader = CapitalOneReader::new(content.as_bytes());
        let err = reader.read_one().unwrap_err();
        assert!(matches!(
            err,
            BudgeterError::MalformedDate { ref input, layout } if input == "12021-01-01" && layout == DATE_LAYOUT
        ));
    }
}
