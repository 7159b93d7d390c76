use thiserror::Error;

#[derive(Error, Debug)]
pub enum BudgeterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("transaction: currency \"{input}\" must be provided in [$]X.XX format (\",\" is allowed)")]
    MalformedCurrency { input: String },

    #[error("transaction: date \"{input}\" must be provided in {layout} format")]
    MalformedDate { input: String, layout: &'static str },

    #[error("transaction: CSV row \"{row}\" must have {expected} columns in the {format} format")]
    MalformedRow {
        format: &'static str,
        expected: usize,
        row: String,
    },

    #[error("could not read transactions from {format} formatted file {path}: {source}")]
    Import {
        format: &'static str,
        path: String,
        #[source]
        source: Box<BudgeterError>,
    },

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl From<serde_json::Error> for BudgeterError {
    fn from(e: serde_json::Error) -> Self {
        BudgeterError::Settings(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BudgeterError>;
