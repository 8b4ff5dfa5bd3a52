//! The three discount factor tables
//!
//! Each factor is an independent lookup; the dynamic price is their product
//! applied to the base price. The tables are fixed — no interpolation, no
//! runtime fitting.

use super::DemandLevel;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Items this close to expiry (in days) receive the expiry discount
pub const EXPIRY_WINDOW_DAYS: i64 = 2;

/// Inventory strictly above this level receives the overstock discount
pub const INVENTORY_THRESHOLD: u32 = 20;

/// Demand multiplier: Low 0.9, Medium 1.0, High 1.1
pub fn demand_factor(demand: DemandLevel) -> Decimal {
    match demand {
        DemandLevel::Low => dec!(0.9),
        DemandLevel::Medium => dec!(1.0),
        DemandLevel::High => dec!(1.1),
    }
}

/// Expiry multiplier: 0.95 within two days of expiry, 1.0 otherwise.
///
/// Negative `days_left` (already expired) also falls inside the window and
/// receives the discount. The upstream business rule never special-cased
/// expired stock, so neither do we.
pub fn expiry_factor(days_left: i64) -> Decimal {
    if days_left <= EXPIRY_WINDOW_DAYS {
        dec!(0.95)
    } else {
        dec!(1.0)
    }
}

/// Inventory multiplier: 0.9 when overstocked (> 20 units), 1.0 otherwise
pub fn inventory_factor(inventory: u32) -> Decimal {
    if inventory > INVENTORY_THRESHOLD {
        dec!(0.9)
    } else {
        dec!(1.0)
    }
}
