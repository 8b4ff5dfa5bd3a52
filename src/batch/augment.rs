//! Row-wise derivation of pricing and suggestion columns

use super::{BatchError, ProductRecord};
use crate::model::{Features, SuggestionModel};
use crate::pricing::{compute_price, DemandLevel, EXPIRY_WINDOW_DAYS};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One fully augmented output row.
///
/// Scratch values (factor multipliers, integer codes) never appear here;
/// only the presentation columns are materialized. A row whose expiry date
/// failed to parse keeps its raw columns and leaves every date-derived
/// field empty.
#[derive(Debug, Clone, Serialize)]
pub struct AugmentedRow {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Expiry_Date")]
    pub expiry_date: String,
    #[serde(rename = "Inventory")]
    pub inventory: u32,
    #[serde(rename = "Demand")]
    pub demand: DemandLevel,
    #[serde(rename = "Base_Price")]
    pub base_price: Decimal,
    #[serde(rename = "Days_Left")]
    pub days_left: Option<i64>,
    #[serde(rename = "Dynamic_Price")]
    pub dynamic_price: Option<Decimal>,
    #[serde(rename = "AI_Suggestion")]
    pub suggestion: Option<crate::model::Suggestion>,
    #[serde(rename = "Confidence")]
    pub confidence: Option<String>,
    #[serde(rename = "Waste_If_Not_Sold")]
    pub waste_if_not_sold: Decimal,
    #[serde(rename = "Waste_With_Dynamic")]
    pub waste_with_dynamic: Option<Decimal>,
    #[serde(rename = "Waste_Reduced")]
    pub waste_reduced: Option<Decimal>,
}

/// Aggregate figures over one batch
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub total_rows: usize,
    /// Rows with an unparseable expiry date
    pub degraded_rows: usize,
    /// Rows within the expiry discount window (days_left ≤ 2)
    pub expiring_soon: usize,
    pub put_even: usize,
    pub put_low: usize,
    pub dont_put: usize,
    pub waste_if_not_sold_total: Decimal,
    pub waste_with_dynamic_total: Decimal,
    pub waste_reduced_total: Decimal,
}

/// Augmented rows plus their aggregates
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub rows: Vec<AugmentedRow>,
    pub summary: BatchSummary,
}

/// Derive every output column for a batch of product rows.
///
/// Row-by-row this is exactly the single-entry computation; there is no
/// cross-row interaction. `as_of` is the reference date for all day
/// arithmetic — nothing here reads a clock.
pub fn augment(
    records: &[ProductRecord],
    as_of: NaiveDate,
    model: &dyn SuggestionModel,
    date_format: &str,
) -> Result<BatchReport, BatchError> {
    let mut rows = Vec::with_capacity(records.len());
    let mut summary = BatchSummary {
        total_rows: records.len(),
        ..BatchSummary::default()
    };

    for (idx, record) in records.iter().enumerate() {
        let row_no = idx + 1;

        let demand: DemandLevel =
            record
                .demand
                .parse()
                .map_err(|_| BatchError::UnknownDemand {
                    row: row_no,
                    label: record.demand.clone(),
                })?;

        // Unparseable dates degrade the row instead of failing the batch
        let days_left = NaiveDate::parse_from_str(&record.expiry_date, date_format)
            .ok()
            .map(|expiry| expiry.signed_duration_since(as_of).num_days());

        let inventory_dec = Decimal::from(record.inventory);
        let waste_if_not_sold = inventory_dec * record.base_price;
        summary.waste_if_not_sold_total += waste_if_not_sold;

        let mut row = AugmentedRow {
            product: record.product.clone(),
            expiry_date: record.expiry_date.clone(),
            inventory: record.inventory,
            demand,
            base_price: record.base_price,
            days_left,
            dynamic_price: None,
            suggestion: None,
            confidence: None,
            waste_if_not_sold,
            waste_with_dynamic: None,
            waste_reduced: None,
        };

        if let Some(days) = days_left {
            if days <= EXPIRY_WINDOW_DAYS {
                summary.expiring_soon += 1;
            }

            let price = compute_price(record.base_price, demand, record.inventory, days)
                .map_err(|source| BatchError::Pricing {
                    row: row_no,
                    source,
                })?;

            let features =
                Features::from_observation(record.base_price, record.inventory, demand, days);
            let prediction = model.predict(&features);

            let waste_with_dynamic = inventory_dec * price;
            row.dynamic_price = Some(price);
            row.suggestion = Some(prediction.suggestion);
            row.confidence = Some(format!("{:.2}%", prediction.confidence * 100.0));
            row.waste_with_dynamic = Some(waste_with_dynamic);
            row.waste_reduced = Some(waste_if_not_sold - waste_with_dynamic);

            match prediction.suggestion {
                crate::model::Suggestion::PutEven => summary.put_even += 1,
                crate::model::Suggestion::PutLow => summary.put_low += 1,
                crate::model::Suggestion::DontPut => summary.dont_put += 1,
            }
            summary.waste_with_dynamic_total += waste_with_dynamic;
            summary.waste_reduced_total += waste_if_not_sold - waste_with_dynamic;
        } else {
            summary.degraded_rows += 1;
            tracing::warn!(row = row_no, product = %record.product, raw = %record.expiry_date,
                "unparseable expiry date, leaving derived columns empty");
        }

        rows.push(row);
    }

    Ok(BatchReport { rows, summary })
}
