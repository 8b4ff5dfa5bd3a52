//! Price command implementation

use crate::config::Config;
use crate::pricing::{self, DemandLevel, ProductObservation};
use chrono::{NaiveDate, Utc};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct PriceArgs {
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

impl PriceArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
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

        let price = pricing::compute_price(
            self.base_price,
            self.demand,
            self.inventory,
            days_left,
        )?;

        tracing::debug!(days_left, %price, "priced single entry");
        println!(
            "Dynamic Price for {}: {}{}",
            observation.product, config.pricing.currency, price
        );
        Ok(())
    }
}
