//! CSV ingestion for the batch path

use super::{BatchError, ProductRecord};
use std::path::Path;

/// Read every product row from a CSV file.
///
/// Headers are required and must include Product, Expiry_Date, Inventory,
/// Demand and Base_Price. Any structural problem — a missing column, a
/// non-numeric inventory or price — aborts the whole read.
pub fn read_products(path: impl AsRef<Path>) -> Result<Vec<ProductRecord>, BatchError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: ProductRecord = result?;
        records.push(record);
    }

    tracing::debug!(rows = records.len(), path = %path.as_ref().display(), "read batch input");
    Ok(records)
}
