//! Integration tests for the batch path

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use shelf_pricer::batch::{augment, read_products, BatchError};
use shelf_pricer::config::ModelConfig;
use shelf_pricer::model::SuggestionForest;
use shelf_pricer::pricing::{compute_price, DemandLevel};
use std::io::Write;

const DATE_FORMAT: &str = "%d-%m-%Y";

fn csv_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 25).unwrap()
}

#[test]
fn test_one_row_batch_matches_single_entry() {
    let file = csv_file(
        "Product,Expiry_Date,Inventory,Demand,Base_Price\n\
         Milk,26-06-2025,30,High,50\n",
    );
    let records = read_products(file.path()).unwrap();
    let forest = SuggestionForest::fit(&ModelConfig::default());
    let report = augment(&records, as_of(), &forest, DATE_FORMAT).unwrap();

    let single = compute_price(dec!(50), DemandLevel::High, 30, 1).unwrap();
    assert_eq!(report.rows[0].dynamic_price, Some(single));
}

#[test]
fn test_full_batch_flow() {
    let file = csv_file(
        "Product,Expiry_Date,Inventory,Demand,Base_Price\n\
         Milk,26-06-2025,30,High,50\n\
         Bread,28-06-2025,12,Medium,35\n\
         Yogurt,garbled,8,Low,25\n",
    );
    let records = read_products(file.path()).unwrap();
    let forest = SuggestionForest::fit(&ModelConfig::default());
    let report = augment(&records, as_of(), &forest, DATE_FORMAT).unwrap();

    assert_eq!(report.summary.total_rows, 3);
    assert_eq!(report.summary.degraded_rows, 1);
    // Milk expires in 1 day; Bread in 3; Yogurt is unknown
    assert_eq!(report.summary.expiring_soon, 1);

    // Every priced row carries a suggestion and a confidence string
    for row in report.rows.iter().filter(|r| r.dynamic_price.is_some()) {
        assert!(row.suggestion.is_some());
        let confidence = row.confidence.as_deref().unwrap();
        assert!(confidence.ends_with('%'));
    }
    assert!(report.rows[2].suggestion.is_none());
}

#[test]
fn test_unknown_demand_label_is_batch_fatal() {
    let file = csv_file(
        "Product,Expiry_Date,Inventory,Demand,Base_Price\n\
         Milk,26-06-2025,30,Extreme,50\n",
    );
    let records = read_products(file.path()).unwrap();
    let forest = SuggestionForest::fit(&ModelConfig::default());
    let result = augment(&records, as_of(), &forest, DATE_FORMAT);
    assert!(matches!(
        result,
        Err(BatchError::UnknownDemand { row: 1, .. })
    ));
}

#[test]
fn test_missing_column_is_batch_fatal() {
    let file = csv_file(
        "Product,Inventory,Demand,Base_Price\n\
         Milk,30,High,50\n",
    );
    assert!(read_products(file.path()).is_err());
}

#[test]
fn test_waste_totals_accumulate() {
    let file = csv_file(
        "Product,Expiry_Date,Inventory,Demand,Base_Price\n\
         Milk,26-06-2025,30,High,50\n\
         Bread,26-06-2025,10,Medium,30\n",
    );
    let records = read_products(file.path()).unwrap();
    let forest = SuggestionForest::fit(&ModelConfig::default());
    let report = augment(&records, as_of(), &forest, DATE_FORMAT).unwrap();

    // 30×50 + 10×30
    assert_eq!(report.summary.waste_if_not_sold_total, dec!(1800));
    assert_eq!(
        report.summary.waste_reduced_total,
        report.summary.waste_if_not_sold_total - report.summary.waste_with_dynamic_total
    );
}
