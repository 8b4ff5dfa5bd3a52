//! Configuration types for shelf-pricer

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Bounds and display settings for the single-entry pricing path
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Upper bound for an accepted base price
    #[serde(default = "default_max_base_price")]
    pub max_base_price: Decimal,

    /// Upper bound for an accepted inventory level
    #[serde(default = "default_max_inventory")]
    pub max_inventory: u32,

    /// Currency symbol used when formatting prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_max_base_price() -> Decimal {
    Decimal::new(1000, 0)
}
fn default_max_inventory() -> u32 {
    1000
}
fn default_currency() -> String {
    "₹".to_string()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            max_base_price: Decimal::new(1000, 0),
            max_inventory: 1000,
            currency: "₹".to_string(),
        }
    }
}

/// Suggestion forest configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Number of trees in the ensemble
    #[serde(default = "default_trees")]
    pub trees: usize,

    /// RNG seed for bootstrap and feature sampling
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Minimum rows required to attempt a split
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
}

fn default_trees() -> usize {
    100
}
fn default_seed() -> u64 {
    42
}
fn default_min_samples_split() -> usize {
    2
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            trees: 100,
            seed: 42,
            min_samples_split: 2,
        }
    }
}

/// Batch ingestion configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// chrono format string for the Expiry_Date column
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Directory for augmented output files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_date_format() -> String {
    "%d-%m-%Y".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            date_format: "%d-%m-%Y".to_string(),
            output_dir: PathBuf::from("./output"),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
