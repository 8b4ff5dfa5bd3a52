//! Fixed training table for the suggestion forest
//!
//! Eight hand-labeled examples, frozen in source. The model is never
//! retrained from user data; this table is the entire ground truth.

use super::{Features, Suggestion};
use crate::pricing::DemandLevel;
use rust_decimal::Decimal;

/// One labeled training example
#[derive(Debug, Clone, Copy)]
pub struct TrainingRow {
    pub features: Features,
    pub label: Suggestion,
}

/// The hard-coded 8-row training set:
/// (base price, inventory, demand, days left) → suggestion.
pub fn training_set() -> Vec<TrainingRow> {
    const ROWS: [(i64, u32, DemandLevel, i64, Suggestion); 8] = [
        (50, 10, DemandLevel::High, 5, Suggestion::PutEven),
        (40, 25, DemandLevel::Low, 1, Suggestion::DontPut),
        (30, 5, DemandLevel::Low, 0, Suggestion::DontPut),
        (20, 50, DemandLevel::Medium, 3, Suggestion::PutLow),
        (60, 30, DemandLevel::High, 10, Suggestion::PutEven),
        (80, 60, DemandLevel::Medium, 2, Suggestion::PutLow),
        (45, 10, DemandLevel::Low, 1, Suggestion::DontPut),
        (70, 15, DemandLevel::High, 6, Suggestion::PutEven),
    ];

    ROWS.iter()
        .map(|&(price, inventory, demand, days_left, label)| TrainingRow {
            features: Features::from_observation(
                Decimal::from(price),
                inventory,
                demand,
                days_left,
            ),
            label,
        })
        .collect()
}
