//! Ledger transactions and the CSV formats they are imported from.
//!
//! [`importer`] turns bank and payment-provider exports into canonical
//! [`models::Transaction`]s; [`exporter`] writes them back out in the bare
//! format the importer reads.

pub mod date;
pub mod error;
pub mod exporter;
pub mod fmt;
pub mod importer;
pub mod models;
pub mod money;
pub mod settings;
