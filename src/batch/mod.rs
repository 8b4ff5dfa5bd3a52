//! Batch table augmentation module
//!
//! Takes an uploaded CSV of product rows and derives, per row, the days to
//! expiry, the dynamic price, a shelf-placement suggestion with confidence,
//! and the waste comparison figures. Aggregates feed the summary report.
//!
//! Failure policy: a row whose expiry date cannot be parsed degrades in
//! place (its derived columns stay empty); anything structural — missing
//! column, unreadable file, a demand label outside the vocabulary — fails
//! the whole batch with a single error. There is no partial-success mode.

mod augment;
mod reader;
mod report;

pub use augment::{augment, AugmentedRow, BatchReport, BatchSummary};
pub use reader::read_products;
pub use report::{format_summary_table, format_waste_chart, write_augmented_csv};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Whole-batch failure
#[derive(Debug, Error)]
pub enum BatchError {
    /// CSV structure or I/O problem (missing column, bad field, unreadable file)
    #[error("Failed to process batch file: {0}")]
    Csv(#[from] csv::Error),
    /// Filesystem problem while writing the augmented output
    #[error("Failed to write batch output: {0}")]
    Io(#[from] std::io::Error),
    /// A row carried a demand label outside the fixed vocabulary
    #[error("Row {row}: unknown demand level '{label}'")]
    UnknownDemand { row: usize, label: String },
    /// A row failed price validation
    #[error("Row {row}: {source}")]
    Pricing {
        row: usize,
        source: crate::pricing::PricingError,
    },
}

/// One raw row of the uploaded table.
///
/// `Expiry_Date` stays a string here: date parsing is a per-row concern with
/// its own degradation policy, not a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Expiry_Date")]
    pub expiry_date: String,
    #[serde(rename = "Inventory")]
    pub inventory: u32,
    #[serde(rename = "Demand")]
    pub demand: String,
    #[serde(rename = "Base_Price")]
    pub base_price: Decimal,
}
