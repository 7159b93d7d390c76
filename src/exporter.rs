use std::io::Write;

use crate::error::Result;
use crate::models::Transaction;

/// Writes transactions in the bare `Date, Entity, Amount, Note` layout read
/// back by [`crate::importer::BareReader`].
pub struct BareWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> BareWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_delimiter(writer, b',')
    }

    pub fn with_delimiter(writer: W, delimiter: u8) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .delimiter(delimiter)
            .from_writer(writer);
        Self { writer }
    }

    /// Buffer one row. Call [`BareWriter::flush`] when done.
    pub fn write(&mut self, tx: &Transaction) -> Result<()> {
        self.writer.write_record(tx.to_bare_row())?;
        Ok(())
    }

    pub fn write_all(&mut self, txs: &[Transaction]) -> Result<()> {
        for tx in txs {
            self.write(tx)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;
    use crate::importer::{read_all, BareReader};
    use crate::money::Cents;

    fn apossum(secs: i64, amount: &str) -> Transaction {
        Transaction::new(
            Date::from_unix(secs).unwrap(),
            "Apossumtheosis",
            Cents::parse(amount).unwrap(),
            "it has begun.",
        )
    }

    fn written(txs: &[Transaction]) -> String {
        let mut buf = Vec::new();
        BareWriter::new(&mut buf).write_all(txs).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_single_transaction() {
        assert_eq!(
            written(&[apossum(-1, "4000")]),
            "12/31/1969,Apossumtheosis,$4000.00,it has begun.\n"
        );
    }

    #[test]
    fn test_single_negative_transaction() {
        assert_eq!(
            written(&[apossum(-1, "-4000")]),
            "12/31/1969,Apossumtheosis,-$4000.00,it has begun.\n"
        );
    }

    #[test]
    fn test_duplicate_modern_transactions() {
        let tx = apossum(1625784806, "$4,000.00");
        assert_eq!(
            written(&[tx.clone(), tx]),
            "7/8/2021,Apossumtheosis,$4000.00,it has begun.\n\
             7/8/2021,Apossumtheosis,$4000.00,it has begun.\n"
        );
    }

    #[test]
    fn test_fields_with_delimiter_are_quoted_and_read_back() {
        let tx = Transaction::new(
            Date::parse("1/2/2022").unwrap(),
            "Smith, Jones & Co",
            Cents::parse("-12.5").unwrap(),
            "said \"thanks\"",
        );
        let text = written(std::slice::from_ref(&tx));
        assert_eq!(text, "1/2/2022,\"Smith, Jones & Co\",-$12.50,\"said \"\"thanks\"\"\"\n");
        let back = read_all(&mut BareReader::new(text.as_bytes())).unwrap();
        assert_eq!(back, vec![tx]);
    }

    #[test]
    fn test_early_year_reads_back() {
        let tx = Transaction::new(Date::parse("6/1/0999").unwrap(), "x", Cents::ZERO, "");
        let text = written(std::slice::from_ref(&tx));
        assert_eq!(text, "6/1/0999,x,$0.00,\n");
        let back = read_all(&mut BareReader::new(text.as_bytes())).unwrap();
        assert_eq!(back, vec![tx]);
    }
}
