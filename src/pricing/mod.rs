//! Dynamic pricing module
//!
//! Computes a discounted shelf price for perishable stock from three fixed
//! multiplier tables (demand, time to expiry, inventory level).

mod factors;
mod types;

pub use factors::{
    demand_factor, expiry_factor, inventory_factor, EXPIRY_WINDOW_DAYS, INVENTORY_THRESHOLD,
};
pub use types::{DemandLevel, PricingError, ProductObservation};

use crate::config::PricingConfig;
use rust_decimal::{Decimal, RoundingStrategy};

/// Compute the dynamic price for one product.
///
/// Pure function: `base_price × demand_factor × expiry_factor ×
/// inventory_factor`, rounded to 2 decimal places with a
/// round-half-away-from-zero tie-break (so 47.025 → 47.03). All arithmetic
/// is exact `Decimal` math.
///
/// The result always lies in `[base_price × 0.7695, base_price × 1.1]`
/// before rounding, since each factor table is bounded.
pub fn compute_price(
    base_price: Decimal,
    demand: DemandLevel,
    inventory: u32,
    days_left: i64,
) -> Result<Decimal, PricingError> {
    if base_price <= Decimal::ZERO {
        return Err(PricingError::NonPositiveBasePrice(base_price));
    }

    let raw =
        base_price * demand_factor(demand) * expiry_factor(days_left) * inventory_factor(inventory);

    Ok(raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Validate an entry against the configured bounds before pricing it.
///
/// `compute_price` itself only rejects non-positive base prices; the wider
/// entry bounds (price and inventory caps) live in configuration and are
/// enforced at the boundary of the single-entry path.
pub fn check_limits(
    base_price: Decimal,
    inventory: u32,
    config: &PricingConfig,
) -> Result<(), PricingError> {
    if base_price <= Decimal::ZERO {
        return Err(PricingError::NonPositiveBasePrice(base_price));
    }
    if base_price > config.max_base_price {
        return Err(PricingError::BasePriceTooLarge(
            base_price,
            config.max_base_price,
        ));
    }
    if inventory > config.max_inventory {
        return Err(PricingError::InventoryTooLarge(
            inventory,
            config.max_inventory,
        ));
    }
    Ok(())
}
