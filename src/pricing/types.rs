//! Pricing types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Pricing errors
#[derive(Debug, Error)]
pub enum PricingError {
    /// Base price must be strictly positive
    #[error("Base price must be positive, got {0}")]
    NonPositiveBasePrice(Decimal),
    /// Base price exceeds the configured bound
    #[error("Base price {0} exceeds the configured maximum of {1}")]
    BasePriceTooLarge(Decimal, Decimal),
    /// Inventory level exceeds the configured bound
    #[error("Inventory level {0} exceeds the configured maximum of {1}")]
    InventoryTooLarge(u32, u32),
    /// Demand label not in the fixed Low/Medium/High vocabulary
    #[error("Unknown demand level: {0}")]
    UnknownDemand(String),
}

/// Demand level for a product, driving a fixed price multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

impl DemandLevel {
    /// Fixed integer code used as a classifier feature.
    ///
    /// The table is frozen at definition time (alphabetical over the label
    /// strings) and shared by fit and predict by construction.
    pub fn code(&self) -> u8 {
        match self {
            DemandLevel::High => 0,
            DemandLevel::Low => 1,
            DemandLevel::Medium => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DemandLevel::Low => "Low",
            DemandLevel::Medium => "Medium",
            DemandLevel::High => "High",
        }
    }
}

impl fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DemandLevel {
    type Err = PricingError;

    /// Exact-match parse; anything outside the fixed vocabulary is an error
    /// rather than a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(DemandLevel::Low),
            "Medium" => Ok(DemandLevel::Medium),
            "High" => Ok(DemandLevel::High),
            other => Err(PricingError::UnknownDemand(other.to_string())),
        }
    }
}

/// A single product observation, as entered on the single-entry path.
///
/// Transient: exists for the duration of one computation, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductObservation {
    /// Free-text product name
    pub product: String,
    /// Undiscounted shelf price
    pub base_price: Decimal,
    /// On-hand stock
    pub inventory: u32,
    /// Demand level
    pub demand: DemandLevel,
    /// Expiry date printed on the item
    pub expiry: NaiveDate,
}

impl ProductObservation {
    /// Whole days between the reference date and expiry.
    ///
    /// Negative for already-expired items. The reference date is always an
    /// explicit input so the computation stays deterministic under test.
    pub fn days_left(&self, as_of: NaiveDate) -> i64 {
        self.expiry.signed_duration_since(as_of).num_days()
    }
}
