use std::io::Read;

use csv::StringRecord;

use super::{Format, RowDecoder, RowSource};
use crate::date::Date;
use crate::error::Result;
use crate::models::Transaction;
use crate::money::Cents;

pub(super) const COLUMNS: usize = 4;

/// Reads the budgeter's own export: `Date, Entity, Amount, Note`, no header.
pub struct BareReader<R> {
    rows: RowSource<R>,
}

impl<R: Read> BareReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            rows: RowSource::new(reader, Format::Bare),
        }
    }
}

impl<R: Read> RowDecoder for BareReader<R> {
    fn format(&self) -> Format {
        Format::Bare
    }

    fn read_one(&mut self) -> Result<Option<Transaction>> {
        match self.rows.next_row()? {
            Some(record) => decode(&record).map(Some),
            None => Ok(None),
        }
    }
}

fn decode(record: &StringRecord) -> Result<Transaction> {
    let date = Date::parse(&record[0])?;
    let amount = Cents::parse(&record[2])?;
    Ok(Transaction::new(date, &record[1], amount, &record[3]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BudgeterError;
    use crate::exporter::BareWriter;

    #[test]
    fn test_round_trip_through_writer() {
        let tx = Transaction::new(
            Date::parse("7/8/2021").unwrap(),
            "Apossumtheosis",
            Cents::parse("4000").unwrap(),
            "it has begun.",
        );
        let mut buf = Vec::new();
        BareWriter::new(&mut buf).write_all(std::slice::from_ref(&tx)).unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "7/8/2021,Apossumtheosis,$4000.00,it has begun.\n");

        let mut reader = BareReader::new(buf.as_slice());
        assert_eq!(reader.read_one().unwrap(), Some(tx));
        assert_eq!(reader.read_one().unwrap(), None);
    }

    #[test]
    fn test_negative_and_pre_epoch() {
        let mut reader = BareReader::new("12/31/1969,Apossumtheosis,-$4000.00,it has begun.\n".as_bytes());
        let tx = reader.read_one().unwrap().unwrap();
        assert_eq!(tx.amount.value(), -400000);
        assert_eq!(tx.date_string(), "12/31/1969");
        assert_eq!(tx.id, None);
    }

    #[test]
    fn test_rejects_three_columns() {
        let mut reader = BareReader::new("7/8/2021,Apossumtheosis,$4000.00\n".as_bytes());
        let err = reader.read_one().unwrap_err();
        assert!(matches!(
            err,
            BudgeterError::MalformedRow { format: "bare", expected: 4, ref row }
                if row == "7/8/2021,Apossumtheosis,$4000.00"
        ));
        let msg = err.to_string();
        assert!(msg.contains("4 columns"));
        assert!(msg.contains("bare"));
    }

    #[test]
    fn test_rejects_five_columns() {
        let mut reader = BareReader::new("7/8/2021,A,$1.00,note,extra\n".as_bytes());
        assert!(matches!(
            reader.read_one(),
            Err(BudgeterError::MalformedRow { expected: 4, .. })
        ));
    }

    #[test]
    fn test_bad_date_is_fatal() {
        let mut reader = BareReader::new("2021-07-08,A,$1.00,\n".as_bytes());
        assert!(matches!(
            reader.read_one(),
            Err(BudgeterError::MalformedDate { ref input, .. }) if input == "2021-07-08"
        ));
    }
}
