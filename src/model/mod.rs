//! Suggestion model module
//!
//! A toy shelf-placement classifier: a small bagged-tree ensemble fit once
//! per process over a fixed 8-row training table, then queried for
//! single-row and batch inference. The fitted artifact is immutable and
//! `Send + Sync`, so it can be shared freely once constructed.

mod forest;
mod training;

pub use forest::SuggestionForest;
pub use training::{training_set, TrainingRow};

use crate::pricing::DemandLevel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of classifier input features
pub const NUM_FEATURES: usize = 4;

/// Number of suggestion classes
pub const NUM_CLASSES: usize = 3;

/// Shelf-placement suggestion labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suggestion {
    /// Keep the item on the shelf at even footing
    #[serde(rename = "Put-Even")]
    PutEven,
    /// Shelve at a low/clearance position
    #[serde(rename = "Put-Low")]
    PutLow,
    /// Do not shelve; consider donation or clearance
    #[serde(rename = "Don't Put")]
    DontPut,
}

impl Suggestion {
    /// Fixed class codes, frozen at definition time (alphabetical over the
    /// label strings, matching the historical encoding).
    pub fn code(&self) -> usize {
        match self {
            Suggestion::DontPut => 0,
            Suggestion::PutEven => 1,
            Suggestion::PutLow => 2,
        }
    }

    pub fn from_code(code: usize) -> Option<Suggestion> {
        match code {
            0 => Some(Suggestion::DontPut),
            1 => Some(Suggestion::PutEven),
            2 => Some(Suggestion::PutLow),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Suggestion::PutEven => "Put-Even",
            Suggestion::PutLow => "Put-Low",
            Suggestion::DontPut => "Don't Put",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifier feature vector for one product observation
#[derive(Debug, Clone, Copy)]
pub struct Features {
    pub base_price: f64,
    pub inventory: f64,
    pub demand_code: f64,
    pub days_left: f64,
}

impl Features {
    /// Build the feature vector from domain values.
    ///
    /// Prices are carried as `Decimal` everywhere else; the classifier works
    /// in f64 feature space, so the conversion is confined to this seam.
    pub fn from_observation(
        base_price: Decimal,
        inventory: u32,
        demand: DemandLevel,
        days_left: i64,
    ) -> Self {
        Self {
            base_price: f64::try_from(base_price).unwrap_or(0.0),
            inventory: inventory as f64,
            demand_code: demand.code() as f64,
            days_left: days_left as f64,
        }
    }

    pub fn as_array(&self) -> [f64; NUM_FEATURES] {
        [
            self.base_price,
            self.inventory,
            self.demand_code,
            self.days_left,
        ]
    }
}

/// A single inference result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Argmax class
    pub suggestion: Suggestion,
    /// Probability mass on the argmax class (uncalibrated)
    pub confidence: f64,
}

/// Trait for suggestion model implementations
pub trait SuggestionModel: Send + Sync {
    /// Classify one observation
    fn predict(&self, features: &Features) -> Prediction;
}
