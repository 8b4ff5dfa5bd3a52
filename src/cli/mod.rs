//! CLI interface for shelf-pricer
//!
//! Provides subcommands for:
//! - `price`: Compute the dynamic price for one product entry
//! - `suggest`: Classify one product entry into a shelf-placement suggestion
//! - `batch`: Augment a CSV of products with prices and suggestions
//! - `config`: Show the resolved configuration

mod batch;
mod price;
mod suggest;

pub use batch::BatchArgs;
pub use price::PriceArgs;
pub use suggest::SuggestArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shelf-pricer")]
#[command(about = "Dynamic pricing and shelf-placement suggestions for perishable stock")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the dynamic price for a single product
    Price(PriceArgs),
    /// Get a shelf-placement suggestion for a single product
    Suggest(SuggestArgs),
    /// Price and classify every row of a CSV file
    Batch(BatchArgs),
    /// Show the resolved configuration
    Config,
}
