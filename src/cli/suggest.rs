//! Suggest command implementation

use crate::config::Config;
use crate::model::{Features, SuggestionModel};
use crate::pricing::{self, DemandLevel, ProductObservation};
use chrono::{NaiveDate, Utc};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Product name
    #[arg(long, default_value = "Milk")]
    pub product: String,

    /// Expiry date (YYYY-MM-DD)
    #[arg(long)]
    pub expiry: NaiveDate,

    /// Inventory level
    #[arg(long)]
    pub inventory: u32,

    /// Demand level
    #[arg(long, value_enum)]
    pub demand: DemandLevel,

    /// Base price
    #[arg(long)]
    pub base_price: Decimal,

    /// Reference date for the days-to-expiry computation (defaults to today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

impl SuggestArgs {
    pub fn execute(&self, config: &Config, model: &dyn SuggestionModel) -> anyhow::Result<()> {
        let as_of = self.as_of.unwrap_or_else(|| Utc::now().date_naive());

        pricing::check_limits(self.base_price, self.inventory, &config.pricing)?;

        let observation = ProductObservation {
            product: self.product.clone(),
            base_price: self.base_price,
            inventory: self.inventory,
            demand: self.demand,
            expiry: self.expiry,
        };
        let days_left = observation.days_left(as_of);

        let features =
            Features::from_observation(self.base_price, self.inventory, self.demand, days_left);
        let prediction = model.predict(&features);

        tracing::debug!(days_left, suggestion = %prediction.suggestion, "classified single entry");
        println!(
            "Suggestion for {}: {} (Confidence: {:.2}%)",
            observation.product,
            prediction.suggestion,
            prediction.confidence * 100.0
        );
        Ok(())
    }
}
