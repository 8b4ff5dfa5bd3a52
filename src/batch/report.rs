//! Batch report rendering and output writing

use super::{AugmentedRow, BatchError, BatchSummary};
use std::path::Path;

const CHART_WIDTH: usize = 40;

/// Write the augmented table to a CSV file
pub fn write_augmented_csv(
    path: impl AsRef<Path>,
    rows: &[AugmentedRow],
) -> Result<(), BatchError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    tracing::info!(rows = rows.len(), path = %path.as_ref().display(), "wrote augmented table");
    Ok(())
}

/// Format summary aggregates as a table for CLI output
pub fn format_summary_table(summary: &BatchSummary, currency: &str) -> String {
    format!(
        r#"
══════════════════════════════════════════════════════
               BATCH PRICING REPORT
══════════════════════════════════════════════════════

ROWS
───────────────────────────────────────────────────────
Processed:        {}
Degraded:         {}
Expiring Soon:    {}  (within 2 days)

SUGGESTIONS
───────────────────────────────────────────────────────
Put-Even:         {}
Put-Low:          {}
Don't Put:        {}

WASTE
───────────────────────────────────────────────────────
If Not Sold:      {currency}{:.2}
With Dynamic:     {currency}{:.2}
Reduced:          {currency}{:.2}
══════════════════════════════════════════════════════
"#,
        summary.total_rows,
        summary.degraded_rows,
        summary.expiring_soon,
        summary.put_even,
        summary.put_low,
        summary.dont_put,
        summary.waste_if_not_sold_total,
        summary.waste_with_dynamic_total,
        summary.waste_reduced_total,
    )
}

/// Render the per-product waste comparison as a grouped text bar chart.
///
/// Two bars per product: waste at the base price versus waste at the
/// dynamic price. Rows without a dynamic price (degraded dates) are skipped.
pub fn format_waste_chart(rows: &[AugmentedRow], currency: &str) -> String {
    let priced: Vec<&AugmentedRow> = rows
        .iter()
        .filter(|r| r.waste_with_dynamic.is_some())
        .collect();
    if priced.is_empty() {
        return String::new();
    }

    let max_waste = priced
        .iter()
        .map(|r| r.waste_if_not_sold)
        .max()
        .unwrap_or_default();
    let max_f: f64 = max_waste.try_into().unwrap_or(0.0);

    let name_width = priced
        .iter()
        .map(|r| r.product.len())
        .max()
        .unwrap_or(0)
        .max(8);

    let mut out = String::from("Waste Comparison (Actual vs. Reduced)\n");
    for row in priced {
        let actual: f64 = row.waste_if_not_sold.try_into().unwrap_or(0.0);
        let reduced: f64 = row
            .waste_with_dynamic
            .unwrap_or_default()
            .try_into()
            .unwrap_or(0.0);

        out.push_str(&format!(
            "{:name_width$}  actual   {} {currency}{:.2}\n",
            row.product,
            bar(actual, max_f),
            row.waste_if_not_sold,
        ));
        out.push_str(&format!(
            "{:name_width$}  dynamic  {} {currency}{:.2}\n",
            "",
            bar(reduced, max_f),
            row.waste_with_dynamic.unwrap_or_default(),
        ));
    }
    out
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * CHART_WIDTH as f64).round() as usize;
    "█".repeat(len.min(CHART_WIDTH))
}
