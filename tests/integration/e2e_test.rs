//! End-to-end integration tests

use chrono::NaiveDate;
use shelf_pricer::batch::{augment, read_products, write_augmented_csv};
use shelf_pricer::config::Config;
use shelf_pricer::model::SuggestionForest;
use std::io::Write;

#[test]
fn test_bundled_example_config_loads() {
    let toml = include_str!("../../config.toml.example");
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.model.trees, 100);
    assert_eq!(config.batch.date_format, "%d-%m-%Y");
    assert_eq!(config.pricing.currency, "₹");
}

#[test]
fn test_csv_in_csv_out() {
    let config = Config::default();
    let as_of = NaiveDate::from_ymd_opt(2025, 6, 25).unwrap();

    let mut input = tempfile::NamedTempFile::new().unwrap();
    input
        .write_all(
            b"Product,Expiry_Date,Inventory,Demand,Base_Price\n\
              Milk,26-06-2025,30,High,50\n\
              Paneer,27-06-2025,25,Low,90\n",
        )
        .unwrap();

    let records = read_products(input.path()).unwrap();
    let forest = SuggestionForest::fit(&config.model);
    let report = augment(&records, as_of, &forest, &config.batch.date_format).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("priced_products.csv");
    write_augmented_csv(&out_path, &report.rows).unwrap();

    let written = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = written.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("Product,Expiry_Date,Inventory,Demand,Base_Price"));
    assert!(header.ends_with("Waste_Reduced"));
    assert_eq!(lines.count(), 2);

    // Both rows within the expiry window
    assert_eq!(report.summary.expiring_soon, 2);
}
