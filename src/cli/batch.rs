//! Batch command implementation

use crate::batch::{self, BatchReport};
use crate::config::Config;
use crate::model::SuggestionModel;
use chrono::{NaiveDate, Utc};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input CSV file (columns: Product, Expiry_Date, Inventory, Demand, Base_Price)
    #[arg(long)]
    pub input: PathBuf,

    /// Reference date for the days-to-expiry computation (defaults to today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Output directory for the augmented CSV (defaults to the configured directory)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Output format: table or json
    #[arg(long, default_value = "table")]
    pub format: String,
}

impl BatchArgs {
    pub fn execute(&self, config: &Config, model: &dyn SuggestionModel) -> anyhow::Result<()> {
        let as_of = self.as_of.unwrap_or_else(|| Utc::now().date_naive());
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| config.batch.output_dir.clone());

        tracing::info!(input = %self.input.display(), %as_of, "processing batch");

        let records = batch::read_products(&self.input)?;
        let report = batch::augment(&records, as_of, model, &config.batch.date_format)?;

        std::fs::create_dir_all(&output_dir)?;
        let output_path = output_dir.join("priced_products.csv");
        batch::write_augmented_csv(&output_path, &report.rows)?;

        self.render(&report, config)?;

        if report.summary.dont_put > 0 {
            tracing::warn!(
                count = report.summary.dont_put,
                "items marked Don't Put - consider donation or clearance sale"
            );
        }

        println!("Augmented table written to {}", output_path.display());
        Ok(())
    }

    fn render(&self, report: &BatchReport, config: &Config) -> anyhow::Result<()> {
        match self.format.as_str() {
            "json" => {
                println!("{}", serde_json::to_string_pretty(&report.summary)?);
            }
            _ => {
                println!(
                    "{}",
                    batch::format_summary_table(&report.summary, &config.pricing.currency)
                );
                let chart = batch::format_waste_chart(&report.rows, &config.pricing.currency);
                if !chart.is_empty() {
                    println!("{chart}");
                }
            }
        }
        Ok(())
    }
}
