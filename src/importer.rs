mod bare;
mod capital_one;
mod chase;
mod venmo;

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use csv::StringRecord;
use thiserror::Error;

use crate::error::{BudgeterError, Result};
use crate::models::Transaction;

pub use bare::BareReader;
pub use capital_one::CapitalOneReader;
pub use chase::ChaseReader;
pub use venmo::VenmoReader;

// ---------------------------------------------------------------------------
// Row decoders
// ---------------------------------------------------------------------------

/// Decodes one source row at a time into a [`Transaction`].
///
/// `Ok(None)` means the input is exhausted; it is never reported as an error.
/// Once a decoder has returned `Ok(None)` it keeps doing so.
pub trait RowDecoder {
    fn format(&self) -> Format;

    fn read_one(&mut self) -> Result<Option<Transaction>>;
}

// ---------------------------------------------------------------------------
// Format kinds — selected by key, dispatched through `RowDecoder`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Bare,
    Chase,
    CapitalOne,
    Venmo,
}

impl Format {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Bare => "bare",
            Self::Chase => "chase",
            Self::CapitalOne => "capitalone",
            Self::Venmo => "venmo",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bare => "Budgeter CSV (Date, Entity, Amount, Note)",
            Self::Chase => "Chase",
            Self::CapitalOne => "Capital One",
            Self::Venmo => "Venmo",
        }
    }

    /// Number of columns every data row must have.
    pub fn columns(&self) -> usize {
        match self {
            Self::Bare => bare::COLUMNS,
            Self::Chase => chase::COLUMNS,
            Self::CapitalOne => capital_one::COLUMNS,
            Self::Venmo => venmo::COLUMNS,
        }
    }

    /// Number of leading rows discarded before the first data row.
    pub fn header_rows(&self) -> usize {
        match self {
            Self::Bare => 0,
            Self::Chase | Self::CapitalOne => 1,
            Self::Venmo => venmo::HEADER_ROWS,
        }
    }

    pub fn decoder<'a, R: Read + 'a>(&self, reader: R) -> Box<dyn RowDecoder + 'a> {
        match self {
            Self::Bare => Box::new(BareReader::new(reader)),
            Self::Chase => Box::new(ChaseReader::new(reader)),
            Self::CapitalOne => Box::new(CapitalOneReader::new(reader)),
            Self::Venmo => Box::new(VenmoReader::new(reader)),
        }
    }
}

pub const ALL_FORMATS: &[Format] = &[
    Format::Bare,
    Format::Chase,
    Format::CapitalOne,
    Format::Venmo,
];

pub fn get_by_key(key: &str) -> Option<Format> {
    ALL_FORMATS.iter().find(|f| f.key() == key).copied()
}

impl FromStr for Format {
    type Err = BudgeterError;

    fn from_str(s: &str) -> Result<Self> {
        get_by_key(s).ok_or_else(|| BudgeterError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// RowSource — the delimited reader each decoder owns
// ---------------------------------------------------------------------------

pub struct RowSource<R> {
    reader: csv::Reader<R>,
    format: Format,
    delimiter: u8,
    pending_header: usize,
}

impl<R: Read> RowSource<R> {
    pub fn new(reader: R, format: Format) -> Self {
        Self::with_delimiter(reader, format, b',')
    }

    pub fn with_delimiter(reader: R, format: Format, delimiter: u8) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(reader);
        Self {
            reader,
            format,
            delimiter,
            pending_header: format.header_rows(),
        }
    }

    /// Next row without a column-count check. Header rows are discarded on
    /// the first call; input ending inside the header is treated as empty.
    pub fn next_raw(&mut self) -> Result<Option<StringRecord>> {
        let mut record = StringRecord::new();
        while self.pending_header > 0 {
            if !self.reader.read_record(&mut record)? {
                self.pending_header = 0;
                return Ok(None);
            }
            self.pending_header -= 1;
            tracing::debug!(format = %self.format, "skipped header row");
        }
        if self.reader.read_record(&mut record)? {
            Ok(Some(record))
        } else {
            Ok(None)
        }
    }

    /// Reject rows whose width differs from the format's column count.
    pub fn check(&self, record: &StringRecord) -> Result<()> {
        let expected = self.format.columns();
        if record.len() == expected {
            return Ok(());
        }
        let delimiter = char::from(self.delimiter).to_string();
        Err(BudgeterError::MalformedRow {
            format: self.format.key(),
            expected,
            row: record.iter().collect::<Vec<_>>().join(&delimiter),
        })
    }

    pub fn next_row(&mut self) -> Result<Option<StringRecord>> {
        match self.next_raw()? {
            Some(record) => {
                self.check(&record)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }
}

// ---------------------------------------------------------------------------
// Bulk reading
// ---------------------------------------------------------------------------

/// A bulk read that stopped on a decoding error.
///
/// Holds the transactions decoded before the failing row so the caller can
/// decide whether to keep them.
#[derive(Debug, Error)]
#[error("{source} ({} transactions decoded before the failure)", .decoded.len())]
pub struct PartialRead {
    decoded: Vec<Transaction>,
    source: BudgeterError,
}

impl PartialRead {
    pub fn decoded(&self) -> &[Transaction] {
        &self.decoded
    }

    pub fn error(&self) -> &BudgeterError {
        &self.source
    }

    /// Drop the decoded prefix and keep only the error.
    pub fn into_error(self) -> BudgeterError {
        self.source
    }

    pub fn into_parts(self) -> (Vec<Transaction>, BudgeterError) {
        (self.decoded, self.source)
    }
}

impl From<PartialRead> for BudgeterError {
    fn from(partial: PartialRead) -> Self {
        partial.into_error()
    }
}

/// Iterator over a decoder's transactions. Fuses after the end of input or
/// the first error.
pub struct Transactions<'a, D: ?Sized> {
    decoder: &'a mut D,
    done: bool,
}

impl<D: RowDecoder + ?Sized> Iterator for Transactions<'_, D> {
    type Item = Result<Transaction>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.decoder.read_one() {
            Ok(Some(tx)) => Some(Ok(tx)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

pub fn transactions<D: RowDecoder + ?Sized>(decoder: &mut D) -> Transactions<'_, D> {
    Transactions {
        decoder,
        done: false,
    }
}

/// Decode every row in source order.
pub fn read_all<D: RowDecoder + ?Sized>(
    decoder: &mut D,
) -> std::result::Result<Vec<Transaction>, PartialRead> {
    let format = decoder.format();
    let mut decoded = Vec::new();
    for result in transactions(decoder) {
        match result {
            Ok(tx) => decoded.push(tx),
            Err(source) => {
                tracing::warn!(%format, decoded = decoded.len(), "bulk read aborted: {source}");
                return Err(PartialRead { decoded, source });
            }
        }
    }
    tracing::debug!(%format, count = decoded.len(), "bulk read complete");
    Ok(decoded)
}
